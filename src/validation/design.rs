//! Whole-design structural checks.
//!
//! Edge gates only protect designs built through them. Designs loaded from
//! disk can carry anything, so this pass reports every structural problem
//! at once instead of stopping at the first.

use std::collections::HashSet;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::model::Design;

/// A structural problem in a design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignIssue {
    /// Tables whose inheritance edges form a cycle.
    InheritanceCycle { tables: Vec<String> },
    /// A table with more than one parent.
    MultipleInheritance { table: String, parents: Vec<String> },
    /// A column whose owning table does not exist.
    OrphanColumn { column: String, table_id: String },
    /// A relation endpoint that does not resolve.
    DanglingRelation { relation: String, missing: String },
}

impl std::fmt::Display for DesignIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignIssue::InheritanceCycle { tables } => {
                write!(f, "Inheritance cycle: {}", tables.join(" -> "))
            }
            DesignIssue::MultipleInheritance { table, parents } => {
                write!(
                    f,
                    "Table '{}' inherits from several tables: {}",
                    table,
                    parents.join(", ")
                )
            }
            DesignIssue::OrphanColumn { column, table_id } => {
                write!(f, "Column '{}' belongs to unknown table '{}'", column, table_id)
            }
            DesignIssue::DanglingRelation { relation, missing } => {
                write!(f, "Relation {} references unknown {}", relation, missing)
            }
        }
    }
}

/// Collect every structural issue in a design.
pub fn validate_design(design: &Design) -> Vec<DesignIssue> {
    let mut issues = Vec::new();

    validate_inheritance(design, &mut issues);
    validate_columns(design, &mut issues);
    validate_relations(design, &mut issues);

    issues
}

fn validate_inheritance(design: &Design, issues: &mut Vec<DesignIssue>) {
    let mut graph: DiGraph<&str, ()> = DiGraph::new();
    let nodes: Vec<NodeIndex> = design
        .tables
        .iter()
        .map(|t| graph.add_node(t.name.as_str()))
        .collect();
    let index_of = |id: &str| {
        design
            .tables
            .iter()
            .position(|t| t.id == id)
            .map(|i| nodes[i])
    };

    for (i, table) in design.tables.iter().enumerate() {
        let parents: Vec<&str> = design
            .relations_from(&table.id)
            .filter(|r| r.is_inheritance())
            .map(|r| r.target_table_id.as_str())
            .collect();

        if parents.len() > 1 {
            issues.push(DesignIssue::MultipleInheritance {
                table: table.name.clone(),
                parents: parents
                    .iter()
                    .map(|id| design.table(id).map_or(id.to_string(), |t| t.name.clone()))
                    .collect(),
            });
        }

        for parent in parents {
            if let Some(parent_idx) = index_of(parent) {
                graph.add_edge(nodes[i], parent_idx, ());
            }
        }
    }

    for scc in tarjan_scc(&graph) {
        let is_cycle = scc.len() > 1 || graph.edges_connecting(scc[0], scc[0]).next().is_some();
        if is_cycle {
            issues.push(DesignIssue::InheritanceCycle {
                tables: scc.iter().map(|idx| graph[*idx].to_string()).collect(),
            });
        }
    }
}

fn validate_columns(design: &Design, issues: &mut Vec<DesignIssue>) {
    let table_ids: HashSet<&str> = design.tables.iter().map(|t| t.id.as_str()).collect();
    for column in &design.columns {
        if !table_ids.contains(column.table_id.as_str()) {
            issues.push(DesignIssue::OrphanColumn {
                column: column.name.clone(),
                table_id: column.table_id.clone(),
            });
        }
    }
}

fn validate_relations(design: &Design, issues: &mut Vec<DesignIssue>) {
    for relation in &design.relations {
        let label = format!(
            "{} {} -> {}",
            relation.kind, relation.source_table_id, relation.target_table_id
        );

        for table_id in [&relation.source_table_id, &relation.target_table_id] {
            if design.table(table_id).is_none() {
                issues.push(DesignIssue::DanglingRelation {
                    relation: label.clone(),
                    missing: format!("table '{}'", table_id),
                });
            }
        }

        if relation.is_inheritance() {
            continue;
        }

        let endpoints = [
            (&relation.source_column_id, &relation.source_table_id),
            (&relation.target_column_id, &relation.target_table_id),
        ];
        for (column_id, table_id) in endpoints {
            match column_id.as_deref().map(|id| (id, design.column(id))) {
                None => issues.push(DesignIssue::DanglingRelation {
                    relation: label.clone(),
                    missing: "column (none given)".to_string(),
                }),
                Some((id, None)) => issues.push(DesignIssue::DanglingRelation {
                    relation: label.clone(),
                    missing: format!("column '{}'", id),
                }),
                Some((id, Some(column))) if &column.table_id != table_id => {
                    issues.push(DesignIssue::DanglingRelation {
                        relation: label.clone(),
                        missing: format!("column '{}' on table '{}'", id, table_id),
                    })
                }
                Some(_) => {}
            }
        }
    }
}
