//! Schema model types.
//!
//! This module contains the tree produced by parsing a Ginco source file.
//! Every node owns its children outright; there are no back references.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text (DSL)          YAML meta file
//!     ↓ scanner + parser         ↓ serde
//! Schema (these types) ←─────────┘
//!     ↓ serialize
//! YAML / JSON
//! ```
//!
//! # Organization
//!
//! - [`file`] - Root structures: [`File`], [`Package`]
//! - [`model`] - Models and their members: [`Model`], [`Field`], [`TypeRef`],
//!   [`Trait`], [`Ownership`], [`Cardinality`]
//! - [`enumeration`] - [`Enum`] declarations

pub mod enumeration;
pub mod file;
pub mod model;

pub use enumeration::*;
pub use file::*;
pub use model::*;
