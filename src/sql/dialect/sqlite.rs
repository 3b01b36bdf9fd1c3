//! SQLite dialect.
//!
//! - Foreign keys are only enforced after `PRAGMA foreign_keys = ON`
//! - Foreign keys as separate, unnamed table clauses
//! - Type names are affinities; anything is accepted

use super::helpers;
use super::{DialectRules, ForeignKeyStyle};

pub(super) static RULES: DialectRules = DialectRules {
    name: "sqlite",
    preamble: "PRAGMA foreign_keys = ON;",
    table_suffix: "",
    foreign_keys: ForeignKeyStyle::TableClause,
    quote_identifier: helpers::quote_double,
    type_templates: &[
        "INT",
        "INTEGER",
        "TINYINT",
        "SMALLINT",
        "MEDIUMINT",
        "BIGINT",
        "UNSIGNED BIG INT",
        "INT2",
        "INT8",
        "CHARACTER(n)",
        "VARCHAR(n)",
        "VARYING CHARACTER(n)",
        "NCHAR(n)",
        "NATIVE CHARACTER(n)",
        "NVARCHAR(n)",
        "TEXT",
        "CLOB",
        "BLOB",
        "REAL",
        "DOUBLE",
        "DOUBLE PRECISION",
        "FLOAT",
        "NUMERIC",
        "DECIMAL(p, s)",
        "BOOLEAN",
        "DATE",
        "DATETIME",
    ],
};
