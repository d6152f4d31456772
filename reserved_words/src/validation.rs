//! Validation module
//!
//! This module checks proposed class, table and field names against the
//! reserved word tables before any code is generated from them.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::database::NameCategory;
use crate::errors::ReservedNameError;
use crate::table::ReservedWords;

/// A name to check. Every field may be left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    /// Identifier to check; absent or empty means there is nothing to validate
    pub name: Option<String>,
    /// Target engine; absent or unknown means no table applies
    pub database_type_name: Option<String>,
    /// Whether a collision is an error; absent falls back to the validator policy
    pub should_throw: Option<bool>,
}

impl ValidationRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn database_type(mut self, database_type_name: impl Into<String>) -> Self {
        self.database_type_name = Some(database_type_name.into());
        self
    }

    pub fn should_throw(mut self, should_throw: bool) -> Self {
        self.should_throw = Some(should_throw);
        self
    }
}

/// Checks names against a shared, read-only [`ReservedWords`] registry
#[derive(Debug, Clone)]
pub struct ReservedNameValidator {
    words: Arc<ReservedWords>,
    throw_by_default: bool,
    default_database_type: Option<String>,
}

impl ReservedNameValidator {
    /// Create a validator that fails on collisions unless a request says otherwise
    pub fn new(words: Arc<ReservedWords>) -> Self {
        Self {
            words,
            throw_by_default: true,
            default_database_type: None,
        }
    }

    /// Policy applied to requests that leave `should_throw` out
    pub fn with_throw_by_default(mut self, throw_by_default: bool) -> Self {
        self.throw_by_default = throw_by_default;
        self
    }

    /// Database type applied to requests that leave `database_type_name` out
    pub fn with_default_database_type(mut self, database_type_name: Option<String>) -> Self {
        self.default_database_type = database_type_name;
        self
    }

    pub fn reserved_words(&self) -> &Arc<ReservedWords> {
        &self.words
    }

    pub fn check_reserved_class_name(
        &self,
        request: Option<&ValidationRequest>,
    ) -> Result<(), ReservedNameError> {
        self.check(NameCategory::Class, request)
    }

    pub fn check_reserved_table_name(
        &self,
        request: Option<&ValidationRequest>,
    ) -> Result<(), ReservedNameError> {
        self.check(NameCategory::Table, request)
    }

    pub fn check_reserved_field_name(
        &self,
        request: Option<&ValidationRequest>,
    ) -> Result<(), ReservedNameError> {
        self.check(NameCategory::Field, request)
    }

    /// Check `request` against the table of `category`.
    ///
    /// A collision is returned as an error in strict mode and logged as a
    /// warning otherwise.
    pub fn check(
        &self,
        category: NameCategory,
        request: Option<&ValidationRequest>,
    ) -> Result<(), ReservedNameError> {
        let Some(request) = request else {
            return Ok(());
        };
        let name = match request.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Ok(()),
        };
        let Some(database_type) = request
            .database_type_name
            .as_deref()
            .or(self.default_database_type.as_deref())
        else {
            return Ok(());
        };

        if !self.words.is_reserved(category, name, database_type) {
            return Ok(());
        }

        if request.should_throw.unwrap_or(self.throw_by_default) {
            return Err(ReservedNameError::new(name, category, database_type));
        }

        tracing::warn!(
            identifier = name,
            category = %category,
            database_type,
            "The name '{}' is a reserved keyword for {} names on {}",
            name,
            category,
            database_type
        );
        Ok(())
    }
}

impl Default for ReservedNameValidator {
    fn default() -> Self {
        Self::new(Arc::new(ReservedWords::builtin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn validator() -> ReservedNameValidator {
        ReservedNameValidator::default()
    }

    fn strict(name: &str) -> ValidationRequest {
        ValidationRequest::new(name)
            .database_type("sql")
            .should_throw(true)
    }

    fn lenient(name: &str) -> ValidationRequest {
        ValidationRequest::new(name)
            .database_type("sql")
            .should_throw(false)
    }

    #[rstest]
    #[case(NameCategory::Class)]
    #[case(NameCategory::Table)]
    #[case(NameCategory::Field)]
    fn test_missing_request_passes(#[case] category: NameCategory) {
        assert!(validator().check(category, None).is_ok());
        assert!(validator()
            .check(category, Some(&ValidationRequest::default()))
            .is_ok());
        assert!(validator().check(category, Some(&strict(""))).is_ok());
    }

    #[test]
    fn test_class_names() {
        let validator = validator();
        assert!(validator.check_reserved_class_name(Some(&strict("Job"))).is_ok());

        let err = validator
            .check_reserved_class_name(Some(&strict("Class")))
            .unwrap_err();
        assert_eq!(err, ReservedNameError::new("Class", NameCategory::Class, "sql"));

        assert!(validator.check_reserved_class_name(Some(&lenient("Class"))).is_ok());
    }

    #[test]
    fn test_table_names() {
        let validator = validator();
        assert!(validator.check_reserved_table_name(Some(&strict("Job"))).is_ok());
        assert!(validator.check_reserved_table_name(Some(&strict("ANALYZE"))).is_err());
        assert!(validator.check_reserved_table_name(Some(&lenient("ANALYZE"))).is_ok());
    }

    #[test]
    fn test_field_names() {
        let validator = validator();
        assert!(validator.check_reserved_field_name(Some(&strict("name"))).is_ok());
        assert!(validator.check_reserved_field_name(Some(&strict("ANALYZE"))).is_ok());
        assert!(validator.check_reserved_field_name(Some(&strict("continue"))).is_err());
        assert!(validator.check_reserved_field_name(Some(&lenient("continue"))).is_ok());
    }

    #[rstest]
    #[case("class")]
    #[case("Class")]
    #[case("CLASS")]
    #[case("cLaSs")]
    fn test_case_insensitive(#[case] name: &str) {
        assert!(validator()
            .check_reserved_class_name(Some(&strict(name)))
            .is_err());
    }

    #[test]
    fn test_missing_database_type_passes() {
        let request = ValidationRequest::new("Class").should_throw(true);
        assert!(validator().check_reserved_class_name(Some(&request)).is_ok());

        let request = ValidationRequest::new("Class")
            .database_type("unknown")
            .should_throw(true);
        assert!(validator().check_reserved_class_name(Some(&request)).is_ok());
    }

    #[test]
    fn test_default_policy_applies_to_unset_should_throw() {
        let request = ValidationRequest::new("select").database_type("mysql");

        assert!(validator().check_reserved_table_name(Some(&request)).is_err());
        assert!(validator()
            .with_throw_by_default(false)
            .check_reserved_table_name(Some(&request))
            .is_ok());
    }

    #[test]
    fn test_default_database_type() {
        let request = ValidationRequest::new("select").should_throw(true);
        let validator = validator().with_default_database_type(Some("postgresql".to_string()));

        let err = validator.check_reserved_table_name(Some(&request)).unwrap_err();
        assert_eq!(err.database_type, "postgresql");

        // An explicit type wins over the default
        let request = request.database_type("mongodb");
        assert!(validator.check_reserved_table_name(Some(&request)).is_ok());
    }

    #[test]
    fn test_error_message_names_engine() {
        let err = validator()
            .check_reserved_field_name(Some(&strict("continue")))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "The name 'continue' is a reserved keyword for field names on sql"
        );
    }

    #[test]
    fn test_request_from_json() {
        let request: ValidationRequest = serde_json::from_str(
            r#"{"name": "Class", "databaseTypeName": "sql", "shouldThrow": false}"#,
        )
        .unwrap();
        assert_eq!(request, lenient("Class"));

        let empty: ValidationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ValidationRequest::default());
    }
}
