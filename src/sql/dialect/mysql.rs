//! MySQL dialect.
//!
//! MySQL differences from ANSI:
//! - Backtick identifier quoting (double quotes are string literals unless
//!   `ANSI_QUOTES` is set), also for the table named in `REFERENCES`, where
//!   the other dialects write `"Table"(col)`
//! - Foreign keys as named table clauses
//! - Tables are created with an explicit storage engine, since only InnoDB
//!   enforces foreign keys

use super::helpers;
use super::{DialectRules, ForeignKeyStyle};

pub(super) static RULES: DialectRules = DialectRules {
    name: "mysql",
    preamble: "",
    table_suffix: " ENGINE=InnoDB",
    foreign_keys: ForeignKeyStyle::NamedTableClause,
    quote_identifier: helpers::quote_backtick,
    type_templates: &[
        "TINYINT",
        "SMALLINT",
        "MEDIUMINT",
        "INT",
        "INTEGER",
        "BIGINT",
        "BIT",
        "BOOL",
        "FLOAT",
        "DOUBLE",
        "DOUBLE PRECISION",
        "REAL",
        "DECIMAL(m, d)",
        "DEC(m, d)",
        "NUMERIC(m, d)",
        "DATE",
        "DATETIME",
        "TIMESTAMP(n)",
        "TIME",
        "YEAR(n)",
        "CHAR(m)",
        "VARCHAR(m)",
        "TINYBLOB",
        "TINYTEXT",
        "BLOB",
        "TEXT",
        "MEDIUMBLOB",
        "MEDIUMTEXT",
        "LONGBLOB",
        "LONGTEXT",
        "JSON",
    ],
};
