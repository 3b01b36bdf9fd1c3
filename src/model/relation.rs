// src/model/relation.rs
use serde::Serialize;

/// Kind of a relation between two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RelationKind {
    #[default]
    OneToOne,
    OneToMany,
    ManyToMany,
    /// Table-level edge: the source table inherits from the target table.
    InheritsFrom,
}

impl RelationKind {
    /// Parse a relation kind by its variant name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "OneToOne" => Some(Self::OneToOne),
            "OneToMany" => Some(Self::OneToMany),
            "ManyToMany" => Some(Self::ManyToMany),
            "InheritsFrom" => Some(Self::InheritsFrom),
            _ => None,
        }
    }

    /// Position-based lookup, for designs saved with numeric enum values.
    pub fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Self::OneToOne),
            1 => Some(Self::OneToMany),
            2 => Some(Self::ManyToMany),
            3 => Some(Self::InheritsFrom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneToOne => "OneToOne",
            Self::OneToMany => "OneToMany",
            Self::ManyToMany => "ManyToMany",
            Self::InheritsFrom => "InheritsFrom",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relation between two tables.
///
/// Relations have no synthetic id; the endpoint tuple is the identity.
/// Inheritance edges carry no column ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relation {
    pub source_table_id: String,
    pub source_column_id: Option<String>,
    pub target_table_id: String,
    pub target_column_id: Option<String>,
    pub kind: RelationKind,
}

impl Relation {
    /// `child` inherits from `parent`.
    pub fn inherits(child: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            source_table_id: child.into(),
            source_column_id: None,
            target_table_id: parent.into(),
            target_column_id: None,
            kind: RelationKind::InheritsFrom,
        }
    }

    /// Column-to-column data relation.
    pub fn between(
        kind: RelationKind,
        source_table_id: impl Into<String>,
        source_column_id: impl Into<String>,
        target_table_id: impl Into<String>,
        target_column_id: impl Into<String>,
    ) -> Self {
        Self {
            source_table_id: source_table_id.into(),
            source_column_id: Some(source_column_id.into()),
            target_table_id: target_table_id.into(),
            target_column_id: Some(target_column_id.into()),
            kind,
        }
    }

    pub fn is_inheritance(&self) -> bool {
        self.kind == RelationKind::InheritsFrom
    }

    /// Whether either endpoint sits on the given table.
    pub fn touches_table(&self, table_id: &str) -> bool {
        self.source_table_id == table_id || self.target_table_id == table_id
    }

    /// Whether either endpoint sits on the given column.
    pub fn touches_column(&self, column_id: &str) -> bool {
        self.source_column_id.as_deref() == Some(column_id)
            || self.target_column_id.as_deref() == Some(column_id)
    }
}
