//! # genguard
//!
//! Guard rails for code generators: checks proposed class, table and field
//! names against each database engine's reserved words, formats sortable
//! migration timestamps, and probes the state of a generated project.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use genguard::prelude::*;
//!
//! fn main() -> Result<(), GenGuardError> {
//!     let guard = GenGuard::from_env()?;
//!
//!     if !guard.is_project_initialized() {
//!         println!("Run the generator's init step first");
//!         return Ok(());
//!     }
//!
//!     guard.check_reserved_class_name(Some(
//!         &ValidationRequest::new("Job").database_type("sql").should_throw(true),
//!     ))?;
//!
//!     let entities = guard.load_persisted_entities(&["Job", "Employee"])?;
//!     for (name, definition) in &entities {
//!         guard.check_entity(name, definition, Some("sql"))?;
//!     }
//!
//!     let mut clock = guard.migration_clock()?;
//!     for name in entities.keys() {
//!         println!("{}_added_entity_{}.xml", clock.next_timestamp(), name);
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod migration;
pub mod prelude;
pub mod project;

// Re-export the main public types for convenience
pub use crate::core::GenGuard;
pub use errors::GenGuardError;
pub use migration::{
    format_migration_timestamp, parse_migration_timestamp, MigrationClock, TimestampRequest,
};
pub use project::Project;

// Re-export centralized config
pub use config::{GuardConfig, ProjectConfig, ValidationConfig};

// Re-export internal crates used in the public API
pub use config;
pub use reserved_words;
