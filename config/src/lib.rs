//! # Configuration Management for genguard
//!
//! This crate provides the configuration structures shared by the genguard
//! components: where the generated project lives and how strict reserved-name
//! validation should be.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{GuardConfig, ProjectConfig, ValidationConfig};
//!
//! let config = GuardConfig {
//!     project: ProjectConfig::new("./my-app"),
//!     validation: ValidationConfig::new(true, Some("sql".to_string())),
//! };
//! assert_eq!(config.project.marker_file, ".yo-rc.json");
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [project]
//! root = "."
//! marker_file = ".yo-rc.json"
//! entities_dir = ".jhipster"
//! last_timestamp_key = "lastMigrationTimestamp"
//!
//! [validation]
//! throw_on_reserved = true
//! default_database_type = "sql"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::GuardConfig;
//!
//! // Load from genguard.toml (or the path in GENGUARD_CONFIG)
//! let config = GuardConfig::load()?;
//!
//! // Or load from custom path
//! let config = GuardConfig::from_file("config/generator.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./genguard.toml";
const CONFIG_PATH_ENV: &str = "GENGUARD_CONFIG";

pub const DEFAULT_MARKER_FILE: &str = ".yo-rc.json";
pub const DEFAULT_ENTITIES_DIR: &str = ".jhipster";
pub const DEFAULT_LAST_TIMESTAMP_KEY: &str = "lastMigrationTimestamp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete guard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuardConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Location and layout of the generated project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub root: PathBuf,
    pub marker_file: String,
    pub entities_dir: String,
    pub last_timestamp_key: String,
}

/// Reserved-name validation policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Policy used when a request does not say whether a collision should fail
    pub throw_on_reserved: bool,
    /// Database type assumed when a request names none
    pub default_database_type: Option<String>,
}

impl GuardConfig {
    /// Load configuration from the TOML file named in the environment (or `.env`)
    /// or from the default path
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate()? {
            Some(path) => Self::from_file(path),
            None => Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH
            ))),
        }
    }

    /// Like [`GuardConfig::load`], but falls back to defaults when no file is configured
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::locate()? {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn locate() -> Result<Option<PathBuf>, ConfigError> {
        // A missing .env file is fine, a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        match env::var(CONFIG_PATH_ENV) {
            Ok(path) => Ok(Some(PathBuf::from(path))),
            Err(env::VarError::NotPresent) => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                Ok(default_path.exists().then(|| default_path.to_path_buf()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Project validations
        if self.project.root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "Project root cannot be empty".to_string(),
            ));
        }
        validate_file_name("marker_file", &self.project.marker_file)?;
        validate_file_name("entities_dir", &self.project.entities_dir)?;
        if self.project.last_timestamp_key.is_empty() {
            return Err(ConfigError::Invalid(
                "Project last_timestamp_key cannot be empty".to_string(),
            ));
        }

        // Validation policy
        if let Some(database_type) = &self.validation.default_database_type {
            if database_type.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "Validation default_database_type cannot be blank".to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn validate_file_name(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Invalid(format!(
            "Project {} cannot be empty",
            key
        )));
    }
    if value.contains('/') || value.contains('\\') {
        return Err(ConfigError::Invalid(format!(
            "Project {} must be a plain file name, got '{}'",
            key, value
        )));
    }
    Ok(())
}

impl ProjectConfig {
    /// Create a project configuration rooted at `root` with the default layout
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Full path of the marker file
    pub fn marker_path(&self) -> PathBuf {
        self.root.join(&self.marker_file)
    }

    /// Full path of the directory holding persisted entity definitions
    pub fn entities_path(&self) -> PathBuf {
        self.root.join(&self.entities_dir)
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            marker_file: DEFAULT_MARKER_FILE.to_string(),
            entities_dir: DEFAULT_ENTITIES_DIR.to_string(),
            last_timestamp_key: DEFAULT_LAST_TIMESTAMP_KEY.to_string(),
        }
    }
}

impl ValidationConfig {
    /// Create a new validation configuration
    pub fn new(throw_on_reserved: bool, default_database_type: Option<String>) -> Self {
        Self {
            throw_on_reserved,
            default_database_type,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            throw_on_reserved: true,
            default_database_type: None,
        }
    }
}
