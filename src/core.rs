//! Core genguard functionality
//!
//! This module contains the main GenGuard struct, which ties the loaded
//! configuration, the shared reserved word registry and the project probes
//! together for a generator run.

use std::collections::BTreeMap;
use std::sync::Arc;

use config::GuardConfig;
use reserved_words::{ReservedNameValidator, ReservedWords, ValidationRequest};
use serde_json::Value;

use crate::errors::GenGuardError;
use crate::migration::{format_migration_timestamp, MigrationClock, TimestampRequest};
use crate::project::Project;

/// Entry point of the guard rails for one generator run
#[derive(Debug, Clone)]
pub struct GenGuard {
    config: GuardConfig,
    validator: ReservedNameValidator,
    project: Project,
}

impl GenGuard {
    /// Create a GenGuard using the built-in reserved word tables
    pub fn new(config: GuardConfig) -> Self {
        Self::with_reserved_words(config, Arc::new(ReservedWords::builtin()))
    }

    /// Create a GenGuard sharing an existing reserved word registry
    pub fn with_reserved_words(config: GuardConfig, words: Arc<ReservedWords>) -> Self {
        let validator = ReservedNameValidator::new(words)
            .with_throw_by_default(config.validation.throw_on_reserved)
            .with_default_database_type(config.validation.default_database_type.clone());
        let project = Project::new(config.project.clone());

        crate::debug_log!(
            "GenGuard ready for {} (throw on reserved: {})",
            config.project.root.display(),
            config.validation.throw_on_reserved
        );

        Self {
            config,
            validator,
            project,
        }
    }

    /// Create a GenGuard from `genguard.toml` or `GENGUARD_CONFIG`, with defaults
    /// when neither is present
    pub fn from_env() -> Result<Self, GenGuardError> {
        Ok(Self::new(GuardConfig::load_or_default()?))
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn validator(&self) -> &ReservedNameValidator {
        &self.validator
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn check_reserved_class_name(
        &self,
        request: Option<&ValidationRequest>,
    ) -> Result<(), GenGuardError> {
        Ok(self.validator.check_reserved_class_name(request)?)
    }

    pub fn check_reserved_table_name(
        &self,
        request: Option<&ValidationRequest>,
    ) -> Result<(), GenGuardError> {
        Ok(self.validator.check_reserved_table_name(request)?)
    }

    pub fn check_reserved_field_name(
        &self,
        request: Option<&ValidationRequest>,
    ) -> Result<(), GenGuardError> {
        Ok(self.validator.check_reserved_field_name(request)?)
    }

    pub fn format_migration_timestamp(&self, request: &TimestampRequest) -> String {
        format_migration_timestamp(request)
    }

    /// A clock starting now, or just after the newest timestamp the project recorded
    pub fn migration_clock(&self) -> Result<MigrationClock, GenGuardError> {
        let clock = MigrationClock::now();
        Ok(match self.project.last_migration_timestamp()? {
            Some(last) => clock.after(&last),
            None => clock,
        })
    }

    pub fn is_project_initialized(&self) -> bool {
        self.project.is_initialized()
    }

    pub fn load_persisted_entities<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<BTreeMap<String, Value>, GenGuardError> {
        self.project.load_persisted_entities(names)
    }

    /// Check an entity definition before generating code from it.
    ///
    /// The entity name is checked as a class name, `entityTableName` (or the
    /// snake_case entity name) as a table name and every `fields[].fieldName`
    /// as a field name. The first strict collision is returned.
    pub fn check_entity(
        &self,
        name: &str,
        definition: &Value,
        database_type_name: Option<&str>,
    ) -> Result<(), GenGuardError> {
        let request = |name: &str| {
            let request = ValidationRequest::new(name);
            match database_type_name {
                Some(database_type) => request.database_type(database_type),
                None => request,
            }
        };

        self.check_reserved_class_name(Some(&request(name)))?;

        let table_name = definition
            .get("entityTableName")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| snake_case(name));
        self.check_reserved_table_name(Some(&request(&table_name)))?;

        let field_names = definition
            .get("fields")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|field| field.get("fieldName").and_then(Value::as_str));
        for field_name in field_names {
            self.check_reserved_field_name(Some(&request(field_name)))?;
        }

        Ok(())
    }
}

impl Default for GenGuard {
    fn default() -> Self {
        Self::new(GuardConfig::default())
    }
}

/// Lower snake_case of a class name; a run of capitals is one word
fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut snake = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                snake.push('_');
            }
        }
        snake.push(c.to_ascii_lowercase());
    }
    snake
}

#[cfg(test)]
mod tests {
    use super::*;
    use reserved_words::{NameCategory, ReservedNameError};
    use serde_json::json;

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("JobHistory"), "job_history");
        assert_eq!(snake_case("job"), "job");
        assert_eq!(snake_case("Order"), "order");
        assert_eq!(snake_case("ABCEntity"), "abc_entity");
        assert_eq!(snake_case("HTTPServerLog"), "http_server_log");
        assert_eq!(snake_case("UserDTO"), "user_dto");
        assert_eq!(snake_case("Report2024Summary"), "report2024_summary");
    }

    #[test]
    fn test_config_policy_reaches_validator() {
        let mut config = GuardConfig::default();
        config.validation.throw_on_reserved = false;
        config.validation.default_database_type = Some("sql".to_string());
        let guard = GenGuard::new(config);

        // Reserved, but lenient by configuration
        let request = ValidationRequest::new("Class");
        assert!(guard.check_reserved_class_name(Some(&request)).is_ok());

        // A request can still opt in to strict mode
        let request = request.should_throw(true);
        assert!(guard.check_reserved_class_name(Some(&request)).is_err());
    }

    #[test]
    fn test_check_entity_uses_table_name_fallback() {
        let guard = GenGuard::default();
        let err = guard
            .check_entity("Order", &json!({ "fields": [] }), Some("sql"))
            .unwrap_err();

        match err {
            GenGuardError::ReservedName(err) => {
                assert_eq!(err, ReservedNameError::new("order", NameCategory::Table, "sql"));
            }
            other => panic!("Expected ReservedName error, got {:?}", other),
        }

        let definition = json!({ "entityTableName": "purchase_order", "fields": [] });
        assert!(guard.check_entity("Order", &definition, Some("sql")).is_ok());
    }

    #[test]
    fn test_check_entity_fields() {
        let guard = GenGuard::default();
        let definition = json!({
            "fields": [
                { "fieldName": "title", "fieldType": "String" },
                { "fieldName": "abstract", "fieldType": "String" }
            ]
        });

        let err = guard.check_entity("Article", &definition, Some("sql")).unwrap_err();
        assert!(matches!(
            err,
            GenGuardError::ReservedName(ReservedNameError { ref name, category: NameCategory::Field, .. })
                if name == "abstract"
        ));

        // Without a database type nothing applies
        assert!(guard.check_entity("Article", &definition, None).is_ok());
    }
}
