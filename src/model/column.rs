// src/model/column.rs
use super::id::new_id;
use super::types::DataType;

/// A column, owned by reference through `table_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: String,
    pub table_id: String,
    pub name: String,
    /// Type signature text, e.g. `DECIMAL(10, 2)`.
    pub data_type: String,
    pub is_primary_key: bool,
    pub is_foreign_key: bool,
    pub is_nullable: bool,
    pub is_unique: bool,
    pub default_value: Option<String>,
}

impl Column {
    /// Create a nullable, non-key column with a freshly generated id.
    pub fn new(
        table_id: impl Into<String>,
        name: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            table_id: table_id.into(),
            name: name.into(),
            data_type: data_type.into(),
            is_primary_key: false,
            is_foreign_key: false,
            is_nullable: true,
            is_unique: false,
            default_value: None,
        }
    }

    /// Replace the generated id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Mark as primary key. Primary keys are never nullable.
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self.is_nullable = false;
        self
    }

    pub fn foreign_key(mut self) -> Self {
        self.is_foreign_key = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Parsed form of the type signature.
    pub fn signature(&self) -> DataType {
        DataType::parse(&self.data_type)
    }

    /// Copy this column onto another table under a new id.
    pub fn copy_to(&self, table_id: &str) -> Column {
        Column {
            id: new_id(),
            table_id: table_id.to_string(),
            ..self.clone()
        }
    }
}
