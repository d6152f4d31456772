//! Reserved word tables
//!
//! A [`ReservedWordTable`] maps each database type to the upper-cased words
//! reserved for one [`NameCategory`]. [`ReservedWords`] groups the three
//! category tables. Both are built once and then only read, so they are shared
//! behind an `Arc` by every validator.

use std::collections::{HashMap, HashSet};

use crate::database::{DatabaseType, NameCategory};
use crate::keywords;

/// Reserved words of a single category, per database type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedWordTable {
    category: NameCategory,
    words: HashMap<DatabaseType, HashSet<String>>,
}

impl ReservedWordTable {
    /// Create an empty table: every name passes for every database type
    pub fn new(category: NameCategory) -> Self {
        Self {
            category,
            words: HashMap::new(),
        }
    }

    /// Register words for a database type, merging with any already present
    pub fn with_words<I, S>(mut self, database_type: DatabaseType, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .entry(database_type)
            .or_default()
            .extend(words.into_iter().map(|word| normalize(word.as_ref())));
        self
    }

    /// Register the same word lists for several database types
    fn with_lists(mut self, database_types: &[DatabaseType], lists: &[&[&str]]) -> Self {
        for database_type in database_types {
            for list in lists {
                self = self.with_words(*database_type, list.iter());
            }
        }
        self
    }

    pub fn category(&self) -> NameCategory {
        self.category
    }

    /// Words reserved for `database_type`, if that type is registered
    pub fn words_for(&self, database_type: DatabaseType) -> Option<&HashSet<String>> {
        self.words.get(&database_type)
    }

    /// Database types this table restricts
    pub fn database_types(&self) -> impl Iterator<Item = DatabaseType> + '_ {
        self.words.keys().copied()
    }

    /// Case-insensitive membership test. Unregistered database types reserve nothing.
    pub fn contains(&self, database_type: DatabaseType, name: &str) -> bool {
        self.words_for(database_type)
            .is_some_and(|words| words.contains(&normalize(name)))
    }
}

/// The class, table and field tables used by the validators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedWords {
    class: ReservedWordTable,
    table: ReservedWordTable,
    field: ReservedWordTable,
}

impl ReservedWords {
    /// Assemble a registry from custom tables.
    ///
    /// Tables are slotted by their own category; passing two tables of the same
    /// category keeps the last one and leaves the missing category empty.
    pub fn new(tables: impl IntoIterator<Item = ReservedWordTable>) -> Self {
        let mut registry = Self::empty();
        for table in tables {
            match table.category {
                NameCategory::Class => registry.class = table,
                NameCategory::Table => registry.table = table,
                NameCategory::Field => registry.field = table,
            }
        }
        registry
    }

    /// A registry in which nothing is reserved
    pub fn empty() -> Self {
        Self {
            class: ReservedWordTable::new(NameCategory::Class),
            table: ReservedWordTable::new(NameCategory::Table),
            field: ReservedWordTable::new(NameCategory::Field),
        }
    }

    /// The built-in tables.
    ///
    /// Class names must not clash with the generated server and client code,
    /// whatever the engine. Table names are checked against the engine itself,
    /// `sql` meaning every supported relational engine. Field names only become
    /// members of generated classes, so only language keywords apply.
    pub fn builtin() -> Self {
        use DatabaseType::*;

        let application = [keywords::JHIPSTER, keywords::JAVA, keywords::TYPESCRIPT];
        let languages = [keywords::JAVA, keywords::TYPESCRIPT];

        let class = ReservedWordTable::new(NameCategory::Class)
            .with_lists(&DatabaseType::ALL, &application);

        let table = ReservedWordTable::new(NameCategory::Table)
            .with_lists(
                &[Sql],
                &[
                    keywords::MYSQL,
                    keywords::POSTGRESQL,
                    keywords::ORACLE,
                    keywords::MSSQL,
                ],
            )
            .with_lists(&[Mysql, Mariadb], &[keywords::MYSQL])
            .with_lists(&[Postgresql], &[keywords::POSTGRESQL])
            .with_lists(&[Oracle], &[keywords::ORACLE])
            .with_lists(&[Mssql], &[keywords::MSSQL])
            .with_lists(&[Cassandra], &[keywords::CASSANDRA])
            .with_lists(&[Couchbase], &[keywords::COUCHBASE]);

        let field = ReservedWordTable::new(NameCategory::Field)
            .with_lists(&DatabaseType::ALL, &languages);

        #[cfg(feature = "debug-logging")]
        tracing::debug!(
            "Built reserved word tables for {} class, {} table and {} field database types",
            class.words.len(),
            table.words.len(),
            field.words.len()
        );

        Self {
            class,
            table,
            field,
        }
    }

    pub fn table(&self, category: NameCategory) -> &ReservedWordTable {
        match category {
            NameCategory::Class => &self.class,
            NameCategory::Table => &self.table,
            NameCategory::Field => &self.field,
        }
    }

    /// Whether `name` is reserved in `category` for the named database type.
    /// Unknown database type names reserve nothing.
    pub fn is_reserved(&self, category: NameCategory, name: &str, database_type_name: &str) -> bool {
        DatabaseType::from_name(database_type_name)
            .is_some_and(|database_type| self.table(category).contains(database_type, name))
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(word: &str) -> String {
    word.to_ascii_uppercase()
}
