//! `CREATE TABLE` statements.
//!
//! A small builder rendered through the shared template:
//!
//! ```text
//! CREATE TABLE <quoted name> (
//!   <column>,
//!   <constraint>
//! )<dialect suffix>;
//! ```
//!
//! Only the table name is quoted; column names are emitted as written.

use super::dialect::Dialect;

/// CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "DDL statements have no effect until converted to SQL with to_sql()"]
pub struct CreateTable {
    pub name: String,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<TableConstraint>,
}

impl CreateTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// Add a column definition.
    pub fn column(mut self, col: ColumnDef) -> Self {
        self.columns.push(col);
        self
    }

    /// Add a table constraint.
    pub fn constraint(mut self, constraint: TableConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Convert to SQL for the given dialect.
    pub fn to_sql(&self, dialect: Dialect) -> String {
        let definitions: Vec<String> = self
            .columns
            .iter()
            .map(|c| format!("  {}", c.to_sql(dialect)))
            .chain(
                self.constraints
                    .iter()
                    .map(|c| format!("  {}", c.to_sql(dialect))),
            )
            .collect();

        format!(
            "CREATE TABLE {} (\n{}\n){};",
            dialect.quote_identifier(&self.name),
            definitions.join(",\n"),
            dialect.table_suffix()
        )
    }
}

/// Target of a foreign key: a table and one of its columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyRef {
    pub table: String,
    pub column: String,
}

impl ForeignKeyRef {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
        }
    }

    fn to_sql(&self, dialect: Dialect) -> String {
        format!(
            "REFERENCES {}({})",
            dialect.quote_identifier(&self.table),
            self.column
        )
    }
}

/// Column definition for CREATE TABLE.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: String,
    pub primary_key: bool,
    /// Inline foreign key, rendered after the type.
    pub references: Option<ForeignKeyRef>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            primary_key: false,
            references: None,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn references(mut self, target: ForeignKeyRef) -> Self {
        self.references = Some(target);
        self
    }

    pub fn to_sql(&self, dialect: Dialect) -> String {
        let mut sql = format!("{} {}", self.name, self.data_type);
        if self.primary_key {
            sql.push_str(" PRIMARY KEY");
        }
        if let Some(target) = &self.references {
            sql.push_str(" FOREIGN KEY ");
            sql.push_str(&target.to_sql(dialect));
        }
        sql
    }
}

/// Table-level constraints.
#[derive(Debug, Clone, PartialEq)]
pub enum TableConstraint {
    PrimaryKey {
        columns: Vec<String>,
    },
    ForeignKey {
        name: Option<String>,
        column: String,
        references: ForeignKeyRef,
    },
}

impl TableConstraint {
    /// Create a PRIMARY KEY constraint.
    pub fn primary_key(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        TableConstraint::PrimaryKey {
            columns: columns.into_iter().map(|c| c.into()).collect(),
        }
    }

    /// Create an unnamed FOREIGN KEY constraint.
    pub fn foreign_key(column: impl Into<String>, references: ForeignKeyRef) -> Self {
        TableConstraint::ForeignKey {
            name: None,
            column: column.into(),
            references,
        }
    }

    /// Create a FOREIGN KEY constraint named `FK_<column>`.
    pub fn named_foreign_key(column: impl Into<String>, references: ForeignKeyRef) -> Self {
        let column = column.into();
        TableConstraint::ForeignKey {
            name: Some(format!("FK_{}", column)),
            column,
            references,
        }
    }

    pub fn to_sql(&self, dialect: Dialect) -> String {
        match self {
            TableConstraint::PrimaryKey { columns } => {
                format!("PRIMARY KEY ({})", columns.join(", "))
            }
            TableConstraint::ForeignKey {
                name,
                column,
                references,
            } => {
                let fk = format!("FOREIGN KEY ({}) {}", column, references.to_sql(dialect));
                match name {
                    Some(name) => format!("CONSTRAINT {} {}", name, fk),
                    None => fk,
                }
            }
        }
    }
}
