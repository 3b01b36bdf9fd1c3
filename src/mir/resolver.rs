//! Inheritance resolution: direct parent and root of every table.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use super::{NormalizeError, NormalizeResult};
use crate::model::Design;

/// Base and root maps for one normalization pass.
///
/// Tables without a parent map to themselves in both maps. Ids that are not
/// tables of the design resolve to themselves as well.
#[derive(Debug, Clone, Default)]
pub struct InheritanceMap {
    base: HashMap<String, String>,
    root: HashMap<String, String>,
}

impl InheritanceMap {
    /// Build the maps from the design's `InheritsFrom` edges.
    ///
    /// Only a table's first inheritance edge counts. An edge pointing at an
    /// unknown table is ignored and the table treated as a root.
    pub fn build(design: &Design) -> NormalizeResult<Self> {
        let mut base = HashMap::with_capacity(design.tables.len());
        for table in &design.tables {
            let parent = match design.parent_of(&table.id) {
                Some(parent) if design.table(parent).is_some() => parent,
                Some(parent) => {
                    warn!(
                        table = %table.name,
                        parent,
                        "table inherits from an unknown table, treating it as a root"
                    );
                    table.id.as_str()
                }
                None => table.id.as_str(),
            };
            base.insert(table.id.clone(), parent.to_string());
        }

        let mut map = Self {
            base,
            root: HashMap::with_capacity(design.tables.len()),
        };
        for table in &design.tables {
            map.resolve_root(design, &table.id)?;
        }
        Ok(map)
    }

    /// Walk up from `start` until a cached root or a self-mapped table,
    /// then cache the answer for every table on the way.
    fn resolve_root(&mut self, design: &Design, start: &str) -> NormalizeResult<()> {
        let mut chain: Vec<String> = Vec::new();
        let mut visited = HashSet::new();
        let mut current = start.to_string();

        let root = loop {
            if let Some(root) = self.root.get(&current) {
                break root.clone();
            }
            if !visited.insert(current.clone()) {
                let from = chain.iter().position(|id| *id == current).unwrap_or(0);
                let tables = chain[from..]
                    .iter()
                    .chain(std::iter::once(&current))
                    .map(|id| design.table(id).map_or(id.clone(), |t| t.name.clone()))
                    .collect();
                return Err(NormalizeError::InheritanceCycle { tables });
            }
            chain.push(current.clone());

            let parent = self.base_of(&current).to_string();
            if parent == current {
                break current;
            }
            current = parent;
        };

        for id in chain {
            self.root.insert(id, root.clone());
        }
        Ok(())
    }

    /// Direct parent of a table, or the table itself.
    pub fn base_of<'a>(&'a self, table_id: &'a str) -> &'a str {
        self.base.get(table_id).map_or(table_id, String::as_str)
    }

    /// Topmost ancestor of a table, or the table itself.
    pub fn root_of<'a>(&'a self, table_id: &'a str) -> &'a str {
        self.root.get(table_id).map_or(table_id, String::as_str)
    }

    pub fn is_root(&self, table_id: &str) -> bool {
        self.root_of(table_id) == table_id
    }
}
