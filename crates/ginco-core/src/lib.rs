//! Ginco Core Types
//!
//! This crate provides the schema model shared by every stage of the Ginco
//! toolchain. It includes:
//!
//! - **Schema**: the typed tree produced by the parser ([`schema`] module)
//!
//! The types derive [`serde::Serialize`] and [`serde::Deserialize`], so the
//! same tree doubles as the YAML/JSON interchange format.

pub mod schema;
