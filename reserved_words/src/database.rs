//! Database engines and name categories
//!
//! This module provides the identifiers the reserved word tables are keyed by.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target database engine of the generated application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    /// Any relational engine; the union of the relational lists applies
    Sql,
    Mysql,
    Mariadb,
    Postgresql,
    Oracle,
    Mssql,
    Cassandra,
    Couchbase,
    Mongodb,
}

impl DatabaseType {
    pub const ALL: [DatabaseType; 9] = [
        DatabaseType::Sql,
        DatabaseType::Mysql,
        DatabaseType::Mariadb,
        DatabaseType::Postgresql,
        DatabaseType::Oracle,
        DatabaseType::Mssql,
        DatabaseType::Cassandra,
        DatabaseType::Couchbase,
        DatabaseType::Mongodb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::Sql => "sql",
            DatabaseType::Mysql => "mysql",
            DatabaseType::Mariadb => "mariadb",
            DatabaseType::Postgresql => "postgresql",
            DatabaseType::Oracle => "oracle",
            DatabaseType::Mssql => "mssql",
            DatabaseType::Cassandra => "cassandra",
            DatabaseType::Couchbase => "couchbase",
            DatabaseType::Mongodb => "mongodb",
        }
    }

    /// Parse a database type name, ignoring case and surrounding whitespace.
    /// Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|database_type| database_type.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown database type name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown database type: {0}")]
pub struct UnknownDatabaseType(pub String);

impl FromStr for DatabaseType {
    type Err = UnknownDatabaseType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownDatabaseType(s.to_string()))
    }
}

/// Kind of identifier being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameCategory {
    Class,
    Table,
    Field,
}

impl NameCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameCategory::Class => "class",
            NameCategory::Table => "table",
            NameCategory::Field => "field",
        }
    }
}

impl fmt::Display for NameCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(DatabaseType::from_name("sql"), Some(DatabaseType::Sql));
        assert_eq!(DatabaseType::from_name("SQL"), Some(DatabaseType::Sql));
        assert_eq!(
            DatabaseType::from_name(" PostgreSQL "),
            Some(DatabaseType::Postgresql)
        );
        assert_eq!(DatabaseType::from_name("no"), None);
        assert_eq!(DatabaseType::from_name(""), None);
    }

    #[test]
    fn test_round_trip_through_display() {
        for database_type in DatabaseType::ALL {
            let parsed: DatabaseType = database_type.to_string().parse().unwrap();
            assert_eq!(parsed, database_type);
        }
        assert!("neo4j".parse::<DatabaseType>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DatabaseType::Mongodb).unwrap();
        assert_eq!(json, "\"mongodb\"");
        let category: NameCategory = serde_json::from_str("\"table\"").unwrap();
        assert_eq!(category, NameCategory::Table);
    }
}
