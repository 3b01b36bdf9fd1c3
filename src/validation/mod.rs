//! Relationship validation.
//!
//! Edge gates are pure queries over the current design: they decide whether
//! a proposed edge may be added and never mutate anything. The `can_add_*`
//! functions are the boolean form used by editors; the `check_*` functions
//! return the reason for a rejection.
//!
//! The gates keep the inheritance graph a forest of single-parent chains,
//! which is the precondition [`crate::mir::normalize`] relies on.

mod design;

pub use design::{validate_design, DesignIssue};

use std::collections::HashSet;

use tracing::warn;

use crate::model::{Design, RelationKind};

/// Why a proposed edge was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EdgeRejection {
    #[error("A table cannot inherit from itself")]
    SelfInheritance,

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Table '{0}' already inherits from another table")]
    MultipleInheritance(String),

    #[error("Inheritance from '{parent}' would close a cycle through '{child}'")]
    InheritanceCycle { child: String, parent: String },

    #[error("A data relation cannot connect a table to itself")]
    SameTable,

    #[error("A data relation cannot connect a column to itself")]
    SameColumn,

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Connection must originate from a primary key column, '{0}' is not one")]
    SourceNotPrimaryKey(String),

    #[error("Connection must target a primary or foreign key column, '{0}' is neither")]
    TargetNotKey(String),

    #[error("Inheritance cannot be declared between columns")]
    InheritanceOnColumns,
}

/// Check whether `source` may start inheriting from `target`.
pub fn check_inheritance_edge(
    design: &Design,
    source_table_id: &str,
    target_table_id: &str,
) -> Result<(), EdgeRejection> {
    if source_table_id == target_table_id {
        return Err(EdgeRejection::SelfInheritance);
    }

    let source = design
        .table(source_table_id)
        .ok_or_else(|| EdgeRejection::UnknownTable(source_table_id.to_string()))?;
    let target = design
        .table(target_table_id)
        .ok_or_else(|| EdgeRejection::UnknownTable(target_table_id.to_string()))?;

    if design.parent_of(source_table_id).is_some() {
        return Err(EdgeRejection::MultipleInheritance(source.name.clone()));
    }

    // Walk the ancestor chain of the new parent. The visited set stops the
    // walk on designs that were already cyclic when they reached us.
    let cycle = || EdgeRejection::InheritanceCycle {
        child: source.name.clone(),
        parent: target.name.clone(),
    };
    let mut visited = HashSet::new();
    let mut current = Some(target_table_id);
    while let Some(table_id) = current {
        if table_id == source_table_id || !visited.insert(table_id) {
            return Err(cycle());
        }
        current = design.parent_of(table_id);
    }

    Ok(())
}

/// Check whether a column-level data relation may be added.
pub fn check_data_edge(
    design: &Design,
    source_table_id: &str,
    source_column_id: &str,
    target_table_id: &str,
    target_column_id: &str,
    kind: RelationKind,
) -> Result<(), EdgeRejection> {
    if source_table_id == target_table_id {
        return Err(EdgeRejection::SameTable);
    }
    if source_column_id == target_column_id {
        return Err(EdgeRejection::SameColumn);
    }

    let source = design
        .column(source_column_id)
        .ok_or_else(|| EdgeRejection::UnknownColumn(source_column_id.to_string()))?;
    let target = design
        .column(target_column_id)
        .ok_or_else(|| EdgeRejection::UnknownColumn(target_column_id.to_string()))?;

    if !source.is_primary_key {
        return Err(EdgeRejection::SourceNotPrimaryKey(source.name.clone()));
    }
    if !target.is_primary_key && !target.is_foreign_key {
        return Err(EdgeRejection::TargetNotKey(target.name.clone()));
    }
    if kind == RelationKind::InheritsFrom {
        return Err(EdgeRejection::InheritanceOnColumns);
    }

    Ok(())
}

/// Whether `source` may inherit from `target`.
pub fn can_add_inheritance(design: &Design, source_table_id: &str, target_table_id: &str) -> bool {
    match check_inheritance_edge(design, source_table_id, target_table_id) {
        Ok(()) => true,
        Err(rejection) => {
            warn!(%rejection, source_table_id, target_table_id, "inheritance edge rejected");
            false
        }
    }
}

/// Whether a column-level data relation may be added.
pub fn can_add_data_relation(
    design: &Design,
    source_table_id: &str,
    source_column_id: &str,
    target_table_id: &str,
    target_column_id: &str,
    kind: RelationKind,
) -> bool {
    match check_data_edge(
        design,
        source_table_id,
        source_column_id,
        target_table_id,
        target_column_id,
        kind,
    ) {
        Ok(()) => true,
        Err(rejection) => {
            warn!(%rejection, source_column_id, target_column_id, "data edge rejected");
            false
        }
    }
}
