//! The three inheritance mappings.
//!
//! Each transform rewrites the MIR in place. `InheritsFrom` edges are left
//! for the caller to drop.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::InheritanceMap;
use crate::model::{Column, Design, Relation, RelationKind};

/// Merge every hierarchy into its root table.
///
/// Columns of descendants move to the root, relation endpoints on
/// descendants are redirected to the root, and each merged root gains an
/// integer `<Root>_TYPE` discriminator.
pub(super) fn merge_single_table(design: &mut Design, map: &InheritanceMap) {
    // descendant id -> root id
    let mut absorbed: HashMap<String, String> = HashMap::new();
    let mut roots: Vec<String> = Vec::new();
    for table in &design.tables {
        let root = map.root_of(&table.id);
        if root == table.id {
            continue;
        }
        if !roots.iter().any(|r| r == root) {
            roots.push(root.to_string());
        }
        absorbed.insert(table.id.clone(), root.to_string());
    }

    if absorbed.is_empty() {
        return;
    }

    for column in &mut design.columns {
        if let Some(root) = absorbed.get(&column.table_id) {
            column.table_id = root.clone();
        }
    }

    for relation in &mut design.relations {
        if let Some(root) = absorbed.get(&relation.source_table_id) {
            relation.source_table_id = root.clone();
        }
        if let Some(root) = absorbed.get(&relation.target_table_id) {
            relation.target_table_id = root.clone();
        }
    }

    for root_id in &roots {
        let Some(root) = design.table(root_id) else {
            continue;
        };
        let discriminator =
            Column::new(root_id.as_str(), format!("{}_TYPE", root.name), "INT").not_null();
        design.columns.push(discriminator);
    }

    design.tables.retain(|t| !absorbed.contains_key(&t.id));

    debug!(
        merged = absorbed.len(),
        roots = roots.len(),
        "single-table inheritance applied"
    );
}

/// Give every descendant a shared key column pointing at its root.
///
/// The new column mirrors the root's first primary key and is itself a
/// unique primary and foreign key. Hierarchies whose root has no primary
/// key are skipped.
pub(super) fn link_class_tables(design: &mut Design, map: &InheritanceMap) {
    let mut new_columns = Vec::new();
    let mut new_relations = Vec::new();

    for table in &design.tables {
        let root_id = map.root_of(&table.id);
        if root_id == table.id {
            continue;
        }
        let Some(root) = design.table(root_id) else {
            continue;
        };
        let Some(root_pk) = design.primary_key_of(root_id) else {
            warn!(
                root = %root.name,
                table = %table.name,
                "root table has no primary key, skipping class-table link"
            );
            continue;
        };

        let link = Column::new(table.id.as_str(), root_pk.name.as_str(), root_pk.data_type.as_str())
            .primary_key()
            .foreign_key()
            .unique();
        new_relations.push(Relation::between(
            RelationKind::OneToOne,
            root_id,
            root_pk.id.as_str(),
            table.id.as_str(),
            link.id.as_str(),
        ));
        new_columns.push(link);
    }

    debug!(links = new_columns.len(), "class-table inheritance applied");
    design.columns.extend(new_columns);
    design.relations.extend(new_relations);
}

/// Copy every ancestor's columns down into each descendant, then drop
/// abstract tables.
///
/// Ancestors are completed before their descendants, so a table receives
/// inherited columns from the whole chain exactly once.
pub(super) fn flatten_concrete_tables(design: &mut Design, map: &InheritanceMap) {
    let table_ids: Vec<String> = design.tables.iter().map(|t| t.id.clone()).collect();
    let mut done: HashSet<String> = HashSet::new();
    let mut copied = 0usize;

    for table_id in &table_ids {
        // Pending ancestors, nearest first. The map is acyclic by
        // construction, the visited check keeps the walk bounded anyway.
        let mut pending = Vec::new();
        let mut current = table_id.as_str();
        while !done.contains(current) && !pending.contains(&current) {
            pending.push(current);
            let base = map.base_of(current);
            if base == current {
                break;
            }
            current = base;
        }

        for &id in pending.iter().rev() {
            let base = map.base_of(id);
            if base != id {
                let inherited: Vec<Column> = design
                    .columns_of(base)
                    .map(|c| c.copy_to(id))
                    .collect();
                copied += inherited.len();
                design.columns.extend(inherited);
            }
            done.insert(id.to_string());
        }
    }

    let dropped: HashSet<String> = design
        .tables
        .iter()
        .filter(|t| t.is_abstract)
        .map(|t| t.id.clone())
        .collect();
    design.tables.retain(|t| !t.is_abstract);
    design.columns.retain(|c| !dropped.contains(&c.table_id));

    debug!(
        copied,
        dropped = dropped.len(),
        "concrete-table inheritance applied"
    );
}
