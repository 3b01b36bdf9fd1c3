//! Test utilities for SQL emission validation.
//!
//! Parses emitted SQL with sqlparser-rs to check it is syntactically valid.
//! SQLite's `PRAGMA` preamble and T-SQL's inline `FOREIGN KEY REFERENCES`
//! are outside what sqlparser accepts, so only `CREATE TABLE` statements
//! of the other dialects are worth feeding through here.

use sqlparser::dialect::{MsSqlDialect, MySqlDialect, PostgreSqlDialect, SQLiteDialect};
use sqlparser::parser::Parser;

use super::dialect::Dialect;

/// Validates that a SQL string is syntactically valid for the given dialect.
pub fn validate_sql(sql: &str, dialect: Dialect) -> Result<(), String> {
    let parser_dialect: Box<dyn sqlparser::dialect::Dialect> = match dialect {
        Dialect::Sqlite => Box::new(SQLiteDialect {}),
        Dialect::Postgres => Box::new(PostgreSqlDialect {}),
        Dialect::MySql => Box::new(MySqlDialect {}),
        Dialect::TSql => Box::new(MsSqlDialect {}),
    };

    Parser::parse_sql(&*parser_dialect, sql)
        .map(|_| ())
        .map_err(|e| format!("Invalid SQL for {:?}: {}\nSQL: {}", dialect, e, sql))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, Design, Relation, RelationKind, Table};
    use crate::sql::emit_sql;

    #[test]
    fn test_validate_invalid_sql() {
        let result = validate_sql("CREAT TABLE x (id INT)", Dialect::Postgres);
        assert!(result.is_err());
    }

    #[test]
    fn test_emitted_tables_parse() {
        let mut design = Design::default();
        design.tables.push(Table::new("Author").with_id("au"));
        design.tables.push(Table::new("Book").with_id("bo"));
        design.tables.push(Table::new("Tag").with_id("tg"));
        design
            .columns
            .push(Column::new("au", "id", "INT").with_id("au_id").primary_key());
        design
            .columns
            .push(Column::new("bo", "id", "INT").with_id("bo_id").primary_key());
        design
            .columns
            .push(Column::new("bo", "title", "VARCHAR(200)"));
        design
            .columns
            .push(Column::new("bo", "author_id", "INT").with_id("bo_au").foreign_key());
        design.columns.push(Column::new("tg", "book_id", "INT").primary_key());
        design.columns.push(Column::new("tg", "label", "VARCHAR(20)").primary_key());
        design.relations.push(Relation::between(
            RelationKind::OneToMany,
            "au",
            "au_id",
            "bo",
            "bo_au",
        ));

        for dialect in [Dialect::Sqlite, Dialect::Postgres, Dialect::MySql] {
            for statement in emit_sql(&design, dialect) {
                if statement.label == "Preamble" {
                    continue;
                }
                validate_sql(&statement.sql, dialect).unwrap();
            }
        }
    }
}
