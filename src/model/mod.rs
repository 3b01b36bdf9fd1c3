//! Entity graph: the design being compiled.
//!
//! A [`Design`] is a flat aggregate of tables, columns and relations.
//! Ownership is by id: columns name their table, relations name their
//! endpoint tables and columns. Nothing here enforces graph legality;
//! that is the job of [`crate::validation`].

pub mod column;
pub mod id;
pub mod relation;
pub mod table;
pub mod types;

pub use column::Column;
pub use id::{new_id, NIL_ID};
pub use relation::{Relation, RelationKind};
pub use table::{Position, Table};
pub use types::DataType;

use serde::Serialize;

/// How inheritance hierarchies are mapped onto physical tables.
///
/// Applied uniformly to every hierarchy in a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum InheritanceKind {
    /// Merge every hierarchy into its root table plus a discriminator column.
    #[default]
    SingleTable,
    /// Keep every table; link each descendant to its root by a shared key.
    ClassTable,
    /// Push ancestor columns down into descendants; drop abstract tables.
    ConcreteTable,
}

impl InheritanceKind {
    /// Parse an inheritance kind.
    ///
    /// Accepts the variant name (`ClassTable`) and the snake/kebab forms
    /// used on the command line and in config files (`class_table`, `class-table`).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "singletable" | "single_table" | "single" => Some(Self::SingleTable),
            "classtable" | "class_table" | "class" => Some(Self::ClassTable),
            "concretetable" | "concrete_table" | "concrete" => Some(Self::ConcreteTable),
            _ => None,
        }
    }

    /// Position-based lookup, for designs saved with numeric enum values.
    pub fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Self::SingleTable),
            1 => Some(Self::ClassTable),
            2 => Some(Self::ConcreteTable),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleTable => "SingleTable",
            Self::ClassTable => "ClassTable",
            Self::ConcreteTable => "ConcreteTable",
        }
    }
}

impl std::fmt::Display for InheritanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The aggregate root: everything a compilation pass consumes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Design {
    pub tables: Vec<Table>,
    pub columns: Vec<Column>,
    pub relations: Vec<Relation>,
    pub inheritance_kind: InheritanceKind,
}

impl Design {
    /// Create an empty design.
    pub fn new(inheritance_kind: InheritanceKind) -> Self {
        Self {
            inheritance_kind,
            ..Default::default()
        }
    }

    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// First table with the given display name.
    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Columns owned by a table, in design order.
    pub fn columns_of<'a>(&'a self, table_id: &'a str) -> impl Iterator<Item = &'a Column> + 'a {
        self.columns.iter().filter(move |c| c.table_id == table_id)
    }

    /// Column of a table by name.
    pub fn column_by_name(&self, table_id: &str, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.table_id == table_id && c.name == name)
    }

    /// First primary-key column of a table.
    pub fn primary_key_of(&self, table_id: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.table_id == table_id && c.is_primary_key)
    }

    pub fn relations_from<'a>(
        &'a self,
        table_id: &'a str,
    ) -> impl Iterator<Item = &'a Relation> + 'a {
        self.relations
            .iter()
            .filter(move |r| r.source_table_id == table_id)
    }

    pub fn relations_to<'a>(&'a self, table_id: &'a str) -> impl Iterator<Item = &'a Relation> + 'a {
        self.relations
            .iter()
            .filter(move |r| r.target_table_id == table_id)
    }

    /// Direct parent of a table: the target of its first outgoing inheritance edge.
    pub fn parent_of(&self, table_id: &str) -> Option<&str> {
        self.relations
            .iter()
            .find(|r| r.source_table_id == table_id && r.is_inheritance())
            .map(|r| r.target_table_id.as_str())
    }

    /// Number of relations of a kind.
    pub fn count_relations(&self, kind: RelationKind) -> usize {
        self.relations.iter().filter(|r| r.kind == kind).count()
    }
}
