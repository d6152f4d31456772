//! Generated project state
//!
//! Read-only probes of a project directory: whether a generator already
//! initialized it, which entity definitions it persisted, and the newest
//! migration timestamp it recorded.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Utc};
use config::ProjectConfig;
use serde_json::Value;

use crate::errors::GenGuardError;
use crate::migration::{format_migration_timestamp, parse_migration_timestamp, TimestampRequest};

/// A project directory laid out according to [`ProjectConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    config: ProjectConfig,
}

impl Project {
    pub fn new(config: ProjectConfig) -> Self {
        Self { config }
    }

    /// Project rooted at `root` with the default layout
    pub fn at<P: AsRef<Path>>(root: P) -> Self {
        Self::new(ProjectConfig::new(root.as_ref()))
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Whether the marker file exists in the project root
    pub fn is_initialized(&self) -> bool {
        self.config.marker_path().exists()
    }

    /// Load the persisted definition of each named entity.
    ///
    /// Entities without a definition file are left out of the result.
    pub fn load_persisted_entities<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<BTreeMap<String, Value>, GenGuardError> {
        if names.is_empty() {
            return Err(GenGuardError::InvalidArgument(
                "Entity names are required to load persisted definitions".to_string(),
            ));
        }

        let dir = self.config.entities_path();
        let mut entities = BTreeMap::new();

        for name in names {
            let name = name.as_ref();
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(GenGuardError::InvalidArgument(format!(
                    "'{}' is not a valid entity name",
                    name
                )));
            }

            let path = dir.join(format!("{}.json", name));
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    crate::debug_log!("No persisted definition for entity {}", name);
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            let definition = serde_json::from_str(&content)
                .map_err(|source| GenGuardError::InvalidEntityFile { path, source })?;
            entities.insert(name.to_string(), definition);
        }

        Ok(entities)
    }

    /// Newest migration timestamp recorded in the marker file, if any.
    ///
    /// The value is looked up under the configured key at the top level of the
    /// marker file or one object below it. It may be a 14 digit token or a
    /// number of milliseconds since the Unix epoch. An empty marker file records
    /// nothing.
    pub fn last_migration_timestamp(&self) -> Result<Option<String>, GenGuardError> {
        let content = match fs::read_to_string(self.config.marker_path()) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(None);
        }
        let marker: Value = serde_json::from_str(&content)?;
        let key = self.config.last_timestamp_key.as_str();

        let recorded = marker.get(key).or_else(|| {
            marker
                .as_object()
                .and_then(|object| object.values().find_map(|nested| nested.get(key)))
        });

        Ok(recorded.and_then(timestamp_token))
    }
}

fn timestamp_token(value: &Value) -> Option<String> {
    match value {
        Value::String(token) => parse_migration_timestamp(token).map(|_| token.clone()),
        Value::Number(millis) => millis
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|date| format_migration_timestamp(&TimestampRequest::at(date))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_timestamp_token_from_string() {
        assert_eq!(
            timestamp_token(&json!("20200101101010")),
            Some("20200101101010".to_string())
        );
        assert_eq!(timestamp_token(&json!("not a date")), None);
    }

    #[test]
    fn test_timestamp_token_from_millis() {
        // 2020-01-01T00:00:00Z
        assert_eq!(
            timestamp_token(&json!(1_577_836_800_000_i64)),
            Some("20200101000000".to_string())
        );
        assert_eq!(timestamp_token(&json!(true)), None);
    }
}
