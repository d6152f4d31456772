//! Built-in reserved word lists
//!
//! Every list is stored upper-cased. Application lists (generated server and
//! client code) feed the class and field categories, engine lists feed the
//! table category.

mod nosql;
mod sql;

pub use nosql::{CASSANDRA, COUCHBASE};
pub use sql::{MSSQL, MYSQL, ORACLE, POSTGRESQL};

/// Names of classes the generated application already defines
pub const JHIPSTER: &[&str] = &[
    "ACCOUNT", "ACCOUNTRESOURCE", "ACTIVATE", "ADMIN", "APPLICATION", "AUDITEVENT", "AUDITS",
    "AUTHORITY", "AUTHORITYREPOSITORY", "CONFIGURATION", "CONSTANTS", "DATABASECONFIGURATION",
    "DOCS", "ENTITYAUDITEVENT", "ERROR", "GATEWAY", "HEALTH", "HOME", "LOGGINGCONFIGURATION",
    "LOGIN", "LOGOUT", "LOGS", "MAILSERVICE", "METRICS", "PASSWORD", "PERSISTENTAUDITEVENT",
    "PERSISTENTTOKEN", "PROFILE", "REGISTER", "SECURITYCONFIGURATION", "SECURITYUTILS",
    "SESSIONS", "SETTINGS", "TRACKER", "USER", "USERDTO", "USERMAPPER", "USERREPOSITORY",
    "USERRESOURCE", "USERSERVICE", "WEBCONFIGURER",
];

/// Java language keywords and literals
pub const JAVA: &[&str] = &[
    "ABSTRACT", "ASSERT", "BOOLEAN", "BREAK", "BYTE", "CASE", "CATCH", "CHAR", "CLASS", "CONST",
    "CONTINUE", "DEFAULT", "DO", "DOUBLE", "ELSE", "ENUM", "EXTENDS", "FALSE", "FINAL",
    "FINALLY", "FLOAT", "FOR", "GOTO", "IF", "IMPLEMENTS", "IMPORT", "INSTANCEOF", "INT",
    "INTERFACE", "LONG", "NATIVE", "NEW", "NULL", "PACKAGE", "PRIVATE", "PROTECTED", "PUBLIC",
    "RETURN", "SHORT", "STATIC", "STRICTFP", "SUPER", "SWITCH", "SYNCHRONIZED", "THIS", "THROW",
    "THROWS", "TRANSIENT", "TRUE", "TRY", "VOID", "VOLATILE", "WHILE",
];

/// TypeScript keywords and globals that break generated client code
pub const TYPESCRIPT: &[&str] = &[
    "ARGUMENTS", "AWAIT", "BREAK", "CASE", "CATCH", "CLASS", "CONST", "CONSTRUCTOR", "CONTINUE",
    "DEBUGGER", "DEFAULT", "DELETE", "DO", "ELSE", "ENUM", "EVAL", "EXPORT", "EXTENDS", "FALSE",
    "FINALLY", "FOR", "FUNCTION", "IF", "IMPLEMENTS", "IMPORT", "IN", "INSTANCEOF", "INTERFACE",
    "LET", "NEW", "NULL", "PACKAGE", "PRIVATE", "PROTECTED", "PROTOTYPE", "PUBLIC", "RETURN",
    "STATIC", "SUPER", "SWITCH", "THIS", "THROW", "TRUE", "TRY", "TYPEOF", "UNDEFINED", "VAR",
    "VOID", "WHILE", "WITH", "YIELD",
];
