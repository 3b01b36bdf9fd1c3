//! T-SQL (SQL Server) dialect.
//!
//! - Foreign keys inline on the referencing column
//!   (`col INT FOREIGN KEY REFERENCES "T"(id)`)
//! - Double-quoted identifiers (valid with `QUOTED_IDENTIFIER ON`, the default)

use super::helpers;
use super::{DialectRules, ForeignKeyStyle};

pub(super) static RULES: DialectRules = DialectRules {
    name: "tsql",
    preamble: "",
    table_suffix: "",
    foreign_keys: ForeignKeyStyle::Inline,
    quote_identifier: helpers::quote_double,
    type_templates: &[
        "BIGINT",
        "INT",
        "SMALLINT",
        "TINYINT",
        "BIT",
        "DECIMAL(p,s)",
        "NUMERIC(p,s)",
        "MONEY",
        "SMALLMONEY",
        "FLOAT(n)",
        "REAL",
        "DATE",
        "TIME(p)",
        "DATETIME2(p)",
        "DATETIMEOFFSET(p)",
        "DATETIME",
        "SMALLDATETIME",
        "CHAR(n)",
        "VARCHAR(n)",
        "NTEXT",
        "TEXT",
        "IMAGE",
        "BINARY(n)",
        "VARBINARY(n)",
        "GEOGRAPHY",
        "GEOMETRY",
        "JSON",
        "VECTOR(d)",
        "ROWVERSION",
        "SQL_VARIANT",
        "UNIQUEIDENTIFIER",
        "XML",
    ],
};
