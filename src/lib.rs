//! # SchemaForge
//!
//! A schema design engine that compiles entity-relationship designs to
//! multi-dialect SQL.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Design (Entity Graph)                    │
//! │   (tables, columns, relations, inheritance kind)         │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [validation gates every edge]
//! ┌─────────────────────────────────────────────────────────┐
//! │                Normalizer (mir)                          │
//! │   inheritance mapping + many-to-many junction tables     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [sql emitter + dialect rules]
//! ┌─────────────────────────────────────────────────────────┐
//! │            CREATE TABLE statements                       │
//! │   (SQLite, PostgreSQL, MySQL, SQL Server)                │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod compile;
pub mod config;
pub mod dto;
pub mod mir;
pub mod model;
pub mod session;
pub mod sql;
pub mod validation;

// Re-export SQL submodules at crate level
pub use sql::ddl;
pub use sql::dialect;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::compile::{compile, CompileOptions, CompileOutput};
    pub use crate::dialect::Dialect;
    pub use crate::mir::normalize;
    pub use crate::model::{
        Column, DataType, Design, InheritanceKind, Relation, RelationKind, Table,
    };
    pub use crate::session::DesignSession;
    pub use crate::sql::{emit_sql, Statement};
    pub use crate::validation::{can_add_data_relation, can_add_inheritance};
}

// Also export at crate root for convenience
pub use dialect::Dialect;
pub use model::{Design, InheritanceKind};
