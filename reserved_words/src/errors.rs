//! Error types for reserved name validation

use crate::database::NameCategory;
use thiserror::Error;

/// A proposed identifier collides with a word reserved by the target engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("The name '{name}' is a reserved keyword for {category} names on {database_type}")]
pub struct ReservedNameError {
    pub name: String,
    pub category: NameCategory,
    pub database_type: String,
}

impl ReservedNameError {
    pub fn new(
        name: impl Into<String>,
        category: NameCategory,
        database_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            database_type: database_type.into(),
        }
    }
}
