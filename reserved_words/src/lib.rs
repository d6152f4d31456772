//! Reserved Words - per-engine reserved identifier tables for genguard
//!
//! This crate provides the built-in reserved word lists, the per-category
//! tables built from them, and the validator that checks proposed names.

pub mod database;
pub mod errors;
pub mod keywords;
pub mod table;
pub mod validation;

pub use database::{DatabaseType, NameCategory, UnknownDatabaseType};
pub use errors::ReservedNameError;
pub use table::{ReservedWordTable, ReservedWords};
pub use validation::{ReservedNameValidator, ValidationRequest};
