// src/model/table.rs
use super::id::new_id;

/// Position of a table on the design canvas.
///
/// Carried through compilation untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between two positions.
    pub fn midpoint(&self, other: &Position) -> Position {
        Position {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// A table in the entity graph.
///
/// Columns are not stored here; they point back at the table through
/// [`Column::table_id`](super::Column::table_id).
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub position: Position,
    /// Only meaningful under concrete-table inheritance, where abstract
    /// tables are dropped after their columns were pushed down.
    pub is_abstract: bool,
    /// Cosmetic display color.
    pub color: Option<String>,
}

impl Table {
    /// Create a table with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            position: Position::default(),
            is_abstract: false,
            color: None,
        }
    }

    /// Replace the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Place the table on the canvas.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    /// Mark the table abstract.
    pub fn abstract_table(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
