//! Convenience re-exports for common genguard usage
//!
//! # Example
//!
//! ```rust
//! use genguard::prelude::*;
//!
//! let guard = GenGuard::default();
//! let request = ValidationRequest::new("Job").database_type("sql");
//! assert!(guard.check_reserved_class_name(Some(&request)).is_ok());
//! ```

// Core genguard components
pub use crate::core::GenGuard;
pub use crate::errors::GenGuardError;
pub use crate::migration::{
    format_migration_timestamp, parse_migration_timestamp, MigrationClock, TimestampRequest,
};
pub use crate::project::Project;

// Re-export centralized config
pub use config::{ConfigError, GuardConfig, ProjectConfig, ValidationConfig};

// Reserved name validation
pub use reserved_words::{
    DatabaseType, NameCategory, ReservedNameError, ReservedNameValidator, ReservedWordTable,
    ReservedWords, ValidationRequest,
};
