//! Editable design state.
//!
//! A [`DesignSession`] owns the tables, columns and relations being edited.
//! Every edge goes through the validation gates, and deletions cascade so
//! the session never holds a column or relation pointing at a removed
//! entity. Compilation works on the snapshot returned by
//! [`DesignSession::design`].

use tracing::debug;

use crate::model::{Column, Design, InheritanceKind, Relation, RelationKind, Table};
use crate::validation::{check_data_edge, check_inheritance_edge, EdgeRejection};

/// Error type for session edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Id already in use: {0}")]
    DuplicateId(String),

    #[error("Relation already exists")]
    DuplicateRelation,

    #[error("Relation rejected: {0}")]
    Rejected(#[from] EdgeRejection),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// The design currently being edited.
#[derive(Debug, Clone, Default)]
pub struct DesignSession {
    design: Design,
}

impl DesignSession {
    pub fn new(inheritance_kind: InheritanceKind) -> Self {
        Self {
            design: Design::new(inheritance_kind),
        }
    }

    /// Replace the whole session state, e.g. after loading a file.
    ///
    /// The design is taken as is; run [`crate::validation::validate_design`]
    /// first if it comes from an untrusted source.
    pub fn load(&mut self, design: Design) {
        debug!(
            tables = design.tables.len(),
            columns = design.columns.len(),
            relations = design.relations.len(),
            "design loaded into session"
        );
        self.design = design;
    }

    /// Snapshot of the current state for compilation or saving.
    pub fn design(&self) -> Design {
        self.design.clone()
    }

    pub fn as_design(&self) -> &Design {
        &self.design
    }

    pub fn tables(&self) -> &[Table] {
        &self.design.tables
    }

    pub fn columns(&self) -> &[Column] {
        &self.design.columns
    }

    pub fn relations(&self) -> &[Relation] {
        &self.design.relations
    }

    pub fn inheritance_kind(&self) -> InheritanceKind {
        self.design.inheritance_kind
    }

    pub fn set_inheritance_kind(&mut self, kind: InheritanceKind) {
        self.design.inheritance_kind = kind;
    }

    pub fn clear(&mut self) {
        let kind = self.design.inheritance_kind;
        self.design = Design::new(kind);
    }

    // =========================================================================
    // Tables
    // =========================================================================

    /// Add a table, returning its id.
    pub fn add_table(&mut self, table: Table) -> SessionResult<String> {
        if self.design.table(&table.id).is_some() {
            return Err(SessionError::DuplicateId(table.id));
        }
        let id = table.id.clone();
        self.design.tables.push(table);
        Ok(id)
    }

    /// Replace the table with the same id.
    pub fn update_table(&mut self, table: Table) -> SessionResult<()> {
        let slot = self
            .design
            .tables
            .iter_mut()
            .find(|t| t.id == table.id)
            .ok_or_else(|| SessionError::TableNotFound(table.id.clone()))?;
        *slot = table;
        Ok(())
    }

    /// Remove a table with its columns and every relation touching either.
    pub fn remove_table(&mut self, table_id: &str) -> SessionResult<Table> {
        let index = self
            .design
            .tables
            .iter()
            .position(|t| t.id == table_id)
            .ok_or_else(|| SessionError::TableNotFound(table_id.to_string()))?;
        let table = self.design.tables.remove(index);

        let before = (self.design.columns.len(), self.design.relations.len());
        self.design.columns.retain(|c| c.table_id != table_id);
        self.design.relations.retain(|r| !r.touches_table(table_id));
        debug!(
            table = %table.name,
            columns = before.0 - self.design.columns.len(),
            relations = before.1 - self.design.relations.len(),
            "table removed"
        );

        Ok(table)
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Add a column to an existing table, returning its id.
    pub fn add_column(&mut self, column: Column) -> SessionResult<String> {
        if self.design.table(&column.table_id).is_none() {
            return Err(SessionError::TableNotFound(column.table_id));
        }
        if self.design.column(&column.id).is_some() {
            return Err(SessionError::DuplicateId(column.id));
        }
        let id = column.id.clone();
        self.design.columns.push(column);
        Ok(id)
    }

    /// Replace the column with the same id.
    pub fn update_column(&mut self, column: Column) -> SessionResult<()> {
        if self.design.table(&column.table_id).is_none() {
            return Err(SessionError::TableNotFound(column.table_id));
        }
        let slot = self
            .design
            .columns
            .iter_mut()
            .find(|c| c.id == column.id)
            .ok_or_else(|| SessionError::ColumnNotFound(column.id.clone()))?;
        *slot = column;
        Ok(())
    }

    /// Remove a column and every relation referencing it.
    pub fn remove_column(&mut self, column_id: &str) -> SessionResult<Column> {
        let index = self
            .design
            .columns
            .iter()
            .position(|c| c.id == column_id)
            .ok_or_else(|| SessionError::ColumnNotFound(column_id.to_string()))?;
        let column = self.design.columns.remove(index);
        self.design.relations.retain(|r| !r.touches_column(column_id));
        Ok(column)
    }

    // =========================================================================
    // Relations
    // =========================================================================

    /// Declare that `child` inherits from `parent`.
    pub fn connect_tables(&mut self, child_id: &str, parent_id: &str) -> SessionResult<()> {
        check_inheritance_edge(&self.design, child_id, parent_id)?;
        self.design
            .relations
            .push(Relation::inherits(child_id, parent_id));
        Ok(())
    }

    /// Connect a primary key to a key column of another table.
    pub fn connect_columns(
        &mut self,
        source_column_id: &str,
        target_column_id: &str,
        kind: RelationKind,
    ) -> SessionResult<()> {
        let source_table_id = self.table_of(source_column_id)?;
        let target_table_id = self.table_of(target_column_id)?;
        check_data_edge(
            &self.design,
            &source_table_id,
            source_column_id,
            &target_table_id,
            target_column_id,
            kind,
        )?;
        if self.column_relation(source_column_id, target_column_id).is_some() {
            return Err(SessionError::DuplicateRelation);
        }

        self.design.relations.push(Relation::between(
            kind,
            source_table_id,
            source_column_id,
            target_table_id,
            target_column_id,
        ));
        Ok(())
    }

    /// Change the kind of an existing column relation.
    pub fn set_relation_kind(
        &mut self,
        source_column_id: &str,
        target_column_id: &str,
        kind: RelationKind,
    ) -> SessionResult<()> {
        if kind == RelationKind::InheritsFrom {
            return Err(EdgeRejection::InheritanceOnColumns.into());
        }
        let relation = self
            .design
            .relations
            .iter_mut()
            .find(|r| is_column_relation(r, source_column_id, target_column_id))
            .ok_or_else(|| SessionError::ColumnNotFound(target_column_id.to_string()))?;
        relation.kind = kind;
        Ok(())
    }

    /// The relation connecting two columns, if any.
    pub fn column_relation(&self, source_column_id: &str, target_column_id: &str) -> Option<&Relation> {
        self.design
            .relations
            .iter()
            .find(|r| is_column_relation(r, source_column_id, target_column_id))
    }

    /// Remove the inheritance edge between two tables. Returns whether one existed.
    pub fn disconnect_tables(&mut self, child_id: &str, parent_id: &str) -> bool {
        let index = self.design.relations.iter().position(|r| {
            r.is_inheritance() && r.source_table_id == child_id && r.target_table_id == parent_id
        });
        index.map(|i| self.design.relations.remove(i)).is_some()
    }

    /// Remove the relation between two columns. Returns whether one existed.
    pub fn disconnect_columns(&mut self, source_column_id: &str, target_column_id: &str) -> bool {
        let index = self
            .design
            .relations
            .iter()
            .position(|r| is_column_relation(r, source_column_id, target_column_id));
        index.map(|i| self.design.relations.remove(i)).is_some()
    }

    fn table_of(&self, column_id: &str) -> SessionResult<String> {
        self.design
            .column(column_id)
            .map(|c| c.table_id.clone())
            .ok_or_else(|| SessionError::ColumnNotFound(column_id.to_string()))
    }
}

fn is_column_relation(relation: &Relation, source_column_id: &str, target_column_id: &str) -> bool {
    relation.source_column_id.as_deref() == Some(source_column_id)
        && relation.target_column_id.as_deref() == Some(target_column_id)
}
