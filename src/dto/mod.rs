//! Transfer objects for persisting designs as JSON.
//!
//! The wire shape is flat: every record carries scalar fields only and
//! refers to other records by id. Field names are camelCase and optional
//! fields are omitted when absent.
//!
//! Reading is lenient. Missing arrays are empty, missing ids become the nil
//! UUID, missing flags are `false`, and an unknown or missing `kind` /
//! `tableInheritanceKind` falls back to `OneToOne` / `SingleTable`. Enum
//! values may also be given as their numeric position.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::{
    Column, Design, InheritanceKind, Position, Relation, RelationKind, Table, NIL_ID,
};

/// Error type for design files.
#[derive(Debug, thiserror::Error)]
pub enum DesignFileError {
    #[error("Failed to read design file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write design file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid design JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DesignFileResult<T> = Result<T, DesignFileError>;

/// A whole design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignDto {
    #[serde(default)]
    pub tables: Vec<TableDto>,
    #[serde(default)]
    pub columns: Vec<ColumnDto>,
    #[serde(default)]
    pub relations: Vec<RelationDto>,
    #[serde(default, deserialize_with = "lenient_inheritance_kind")]
    pub table_inheritance_kind: InheritanceKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDto {
    #[serde(default = "nil_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pos_x: f64,
    #[serde(default)]
    pub pos_y: f64,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDto {
    #[serde(default = "nil_id")]
    pub id: String,
    #[serde(default = "nil_id")]
    pub table_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub data_type: String,
    #[serde(default)]
    pub is_primary_key: bool,
    #[serde(default)]
    pub is_foreign_key: bool,
    #[serde(default)]
    pub is_nullable: bool,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationDto {
    #[serde(default = "nil_id")]
    pub source_table_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_column_id: Option<String>,
    #[serde(default = "nil_id")]
    pub target_table_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_column_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_relation_kind")]
    pub kind: RelationKind,
}

fn nil_id() -> String {
    NIL_ID.to_string()
}

fn lenient_inheritance_kind<'de, D>(deserializer: D) -> Result<InheritanceKind, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let kind = match &value {
        Value::String(s) => InheritanceKind::from_str(s),
        Value::Number(n) => n.as_u64().and_then(InheritanceKind::from_index),
        _ => None,
    };
    Ok(kind.unwrap_or_default())
}

fn lenient_relation_kind<'de, D>(deserializer: D) -> Result<RelationKind, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let kind = match &value {
        Value::String(s) => RelationKind::from_str(s),
        Value::Number(n) => n.as_u64().and_then(RelationKind::from_index),
        _ => None,
    };
    Ok(kind.unwrap_or_default())
}

impl From<&Table> for TableDto {
    fn from(table: &Table) -> Self {
        Self {
            id: table.id.clone(),
            name: table.name.clone(),
            pos_x: table.position.x,
            pos_y: table.position.y,
            is_abstract: table.is_abstract,
            color: table.color.clone(),
        }
    }
}

impl From<TableDto> for Table {
    fn from(dto: TableDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            position: Position::new(dto.pos_x, dto.pos_y),
            is_abstract: dto.is_abstract,
            color: dto.color,
        }
    }
}

impl From<&Column> for ColumnDto {
    fn from(column: &Column) -> Self {
        Self {
            id: column.id.clone(),
            table_id: column.table_id.clone(),
            name: column.name.clone(),
            data_type: column.data_type.clone(),
            is_primary_key: column.is_primary_key,
            is_foreign_key: column.is_foreign_key,
            is_nullable: column.is_nullable,
            is_unique: column.is_unique,
            default_value: column.default_value.clone(),
        }
    }
}

impl From<ColumnDto> for Column {
    fn from(dto: ColumnDto) -> Self {
        Self {
            id: dto.id,
            table_id: dto.table_id,
            name: dto.name,
            data_type: dto.data_type,
            is_primary_key: dto.is_primary_key,
            is_foreign_key: dto.is_foreign_key,
            is_nullable: dto.is_nullable,
            is_unique: dto.is_unique,
            default_value: dto.default_value,
        }
    }
}

impl From<&Relation> for RelationDto {
    fn from(relation: &Relation) -> Self {
        Self {
            source_table_id: relation.source_table_id.clone(),
            source_column_id: relation.source_column_id.clone(),
            target_table_id: relation.target_table_id.clone(),
            target_column_id: relation.target_column_id.clone(),
            kind: relation.kind,
        }
    }
}

impl From<RelationDto> for Relation {
    fn from(dto: RelationDto) -> Self {
        Self {
            source_table_id: dto.source_table_id,
            source_column_id: dto.source_column_id,
            target_table_id: dto.target_table_id,
            target_column_id: dto.target_column_id,
            kind: dto.kind,
        }
    }
}

impl From<&Design> for DesignDto {
    fn from(design: &Design) -> Self {
        Self {
            tables: design.tables.iter().map(TableDto::from).collect(),
            columns: design.columns.iter().map(ColumnDto::from).collect(),
            relations: design.relations.iter().map(RelationDto::from).collect(),
            table_inheritance_kind: design.inheritance_kind,
        }
    }
}

impl From<DesignDto> for Design {
    fn from(dto: DesignDto) -> Self {
        Self {
            tables: dto.tables.into_iter().map(Table::from).collect(),
            columns: dto.columns.into_iter().map(Column::from).collect(),
            relations: dto.relations.into_iter().map(Relation::from).collect(),
            inheritance_kind: dto.table_inheritance_kind,
        }
    }
}

impl Design {
    /// Serialize as compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&DesignDto::from(self))
    }

    /// Serialize as indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&DesignDto::from(self))
    }

    pub fn from_json(json: &str) -> serde_json::Result<Design> {
        serde_json::from_str::<DesignDto>(json).map(Design::from)
    }
}

/// Load a design from a JSON file.
pub fn load_design(path: impl AsRef<Path>) -> DesignFileResult<Design> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DesignFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Design::from_json(&content)?)
}

/// Save a design as pretty-printed JSON.
pub fn save_design(path: impl AsRef<Path>, design: &Design) -> DesignFileResult<()> {
    let path = path.as_ref();
    let json = design.to_json_pretty()?;
    fs::write(path, json).map_err(|source| DesignFileError::Write {
        path: path.to_path_buf(),
        source,
    })
}
