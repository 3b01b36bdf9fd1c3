//! SQL emission for a normalized design.
//!
//! One statement per table, in design order, preceded by the dialect
//! preamble. Foreign keys come from relations whose target is the table
//! being emitted; the relation's source is the referenced key.

use tracing::debug;

use super::ddl::{ColumnDef, CreateTable, ForeignKeyRef, TableConstraint};
use super::dialect::{Dialect, ForeignKeyStyle};
use crate::model::{Column, Design, Relation, Table};

/// One emitted statement with a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// `Preamble` or `Table <name>`.
    pub label: String,
    pub sql: String,
}

/// Renders a normalized design as `CREATE TABLE` statements.
#[derive(Debug, Clone, Copy)]
pub struct SqlEmitter<'a> {
    design: &'a Design,
    dialect: Dialect,
}

impl<'a> SqlEmitter<'a> {
    pub fn new(design: &'a Design, dialect: Dialect) -> Self {
        Self { design, dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn emit_preamble(&self) -> String {
        self.dialect.preamble().to_string()
    }

    pub fn emit_create_table(&self, table: &Table) -> String {
        self.create_table(table).to_sql(self.dialect)
    }

    /// Build the DDL for one table.
    ///
    /// Tables with more than one primary-key column get a single
    /// table-level `PRIMARY KEY (..)` instead of per-column markers.
    pub fn create_table(&self, table: &Table) -> CreateTable {
        let columns: Vec<&Column> = self.design.columns_of(&table.id).collect();
        let primary_keys: Vec<&str> = columns
            .iter()
            .filter(|c| c.is_primary_key)
            .map(|c| c.name.as_str())
            .collect();
        let composite = primary_keys.len() > 1;
        let style = self.dialect.foreign_keys();

        let mut ddl = CreateTable::new(table.name.as_str());
        for column in &columns {
            let mut def = ColumnDef::new(column.name.as_str(), column.data_type.as_str());
            if column.is_primary_key && !composite {
                def = def.primary_key();
            }
            if style == ForeignKeyStyle::Inline {
                let target = self
                    .design
                    .relations_to(&table.id)
                    .find(|r| r.target_column_id.as_deref() == Some(column.id.as_str()))
                    .and_then(|r| self.referenced_key(r));
                if let Some(target) = target {
                    def = def.references(target);
                }
            }
            ddl = ddl.column(def);
        }

        if composite {
            ddl = ddl.constraint(TableConstraint::primary_key(primary_keys));
        }

        if style != ForeignKeyStyle::Inline {
            for relation in self.design.relations_to(&table.id) {
                let Some(column) = columns
                    .iter()
                    .find(|c| relation.target_column_id.as_deref() == Some(c.id.as_str()))
                else {
                    continue;
                };
                let Some(target) = self.referenced_key(relation) else {
                    continue;
                };
                let constraint = match style {
                    ForeignKeyStyle::NamedTableClause => {
                        TableConstraint::named_foreign_key(column.name.as_str(), target)
                    }
                    _ => TableConstraint::foreign_key(column.name.as_str(), target),
                };
                ddl = ddl.constraint(constraint);
            }
        }

        ddl
    }

    /// The source table and column of a relation, if both resolve.
    fn referenced_key(&self, relation: &Relation) -> Option<ForeignKeyRef> {
        let table = self.design.table(&relation.source_table_id)?;
        let column = self.design.column(relation.source_column_id.as_deref()?)?;
        Some(ForeignKeyRef::new(table.name.as_str(), column.name.as_str()))
    }

    /// Preamble followed by every table; empty statements are dropped.
    pub fn emit_all(&self) -> Vec<Statement> {
        let preamble = Statement {
            label: "Preamble".to_string(),
            sql: self.emit_preamble(),
        };
        let tables = self.design.tables.iter().map(|t| Statement {
            label: format!("Table {}", t.name),
            sql: self.emit_create_table(t),
        });

        let statements: Vec<Statement> = std::iter::once(preamble)
            .chain(tables)
            .filter(|s| !s.sql.is_empty())
            .collect();
        debug!(
            dialect = %self.dialect,
            statements = statements.len(),
            "sql emitted"
        );
        statements
    }
}

/// Emit the SQL statements for a normalized design.
pub fn emit_sql(design: &Design, dialect: Dialect) -> Vec<Statement> {
    SqlEmitter::new(design, dialect).emit_all()
}
