//! SQL dialect definitions.
//!
//! Each dialect is a static [`DialectRules`] record holding only what it
//! changes in the shared `CREATE TABLE` template:
//!
//! | Dialect    | Preamble                   | Foreign keys            | Table close       |
//! |------------|----------------------------|-------------------------|-------------------|
//! | SQLite     | `PRAGMA foreign_keys = ON;`| table clause            | `);`              |
//! | PostgreSQL |                            | named table clause      | `);`              |
//! | MySQL      |                            | named table clause      | `) ENGINE=InnoDB;`|
//! | SQL Server |                            | inline on the column    | `);`              |
//!
//! [`Dialect`] selects a record through [`Dialect::rules`].

pub mod helpers;
mod mysql;
mod postgres;
mod sqlite;
mod tsql;

use crate::model::DataType;

/// Where foreign-key constraints are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKeyStyle {
    /// `FOREIGN KEY (col) REFERENCES "T"(id)` after the column list.
    TableClause,
    /// `CONSTRAINT FK_col FOREIGN KEY (col) REFERENCES "T"(id)` after the column list.
    NamedTableClause,
    /// `col INT FOREIGN KEY REFERENCES "T"(id)` on the column itself.
    Inline,
}

/// The per-dialect deltas of the shared `CREATE TABLE` template.
#[derive(Debug)]
pub struct DialectRules {
    /// Dialect name for display/logging.
    pub name: &'static str,
    /// Statement emitted before any table; empty for none.
    pub preamble: &'static str,
    /// Appended after the closing parenthesis, before the `;`.
    pub table_suffix: &'static str,
    pub foreign_keys: ForeignKeyStyle,
    pub quote_identifier: fn(&str) -> String,
    /// Data type signature templates offered for this dialect.
    pub type_templates: &'static [&'static str],
}

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    Sqlite,
    Postgres,
    MySql,
    TSql,
}

impl Dialect {
    pub const ALL: [Dialect; 4] = [
        Dialect::Sqlite,
        Dialect::Postgres,
        Dialect::MySql,
        Dialect::TSql,
    ];

    /// Get the dialect rules.
    pub fn rules(&self) -> &'static DialectRules {
        match self {
            Dialect::Sqlite => &sqlite::RULES,
            Dialect::Postgres => &postgres::RULES,
            Dialect::MySql => &mysql::RULES,
            Dialect::TSql => &tsql::RULES,
        }
    }

    pub fn name(&self) -> &'static str {
        self.rules().name
    }

    /// Quote a table name.
    pub fn quote_identifier(&self, ident: &str) -> String {
        (self.rules().quote_identifier)(ident)
    }

    pub fn preamble(&self) -> &'static str {
        self.rules().preamble
    }

    pub fn table_suffix(&self) -> &'static str {
        self.rules().table_suffix
    }

    pub fn foreign_keys(&self) -> ForeignKeyStyle {
        self.rules().foreign_keys
    }

    /// The dialect's data type templates, sorted by signature and parsed.
    pub fn type_templates(&self) -> Vec<DataType> {
        let mut signatures = self.rules().type_templates.to_vec();
        signatures.sort_unstable();
        signatures.into_iter().map(DataType::parse).collect()
    }

    /// Parse a dialect name (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sqlite" | "sqlite3" => Some(Dialect::Sqlite),
            "postgres" | "postgresql" | "pg" => Some(Dialect::Postgres),
            "mysql" | "mariadb" => Some(Dialect::MySql),
            "tsql" | "mssql" | "sqlserver" => Some(Dialect::TSql),
            _ => None,
        }
    }

    /// Recognize a dialect from an ODBC driver description,
    /// e.g. `ODBC Driver 18 for SQL Server`.
    pub fn from_driver_name(driver: &str) -> Option<Self> {
        let driver = driver.to_lowercase();
        if driver.contains("sqlite") {
            Some(Dialect::Sqlite)
        } else if driver.contains("postgresql") || driver.contains("psqlodbc") {
            Some(Dialect::Postgres)
        } else if driver.contains("mysql") || driver.contains("mariadb") {
            Some(Dialect::MySql)
        } else if driver.contains("sql server") {
            Some(Dialect::TSql)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
