//! SQL generation.
//!
//! - [`dialect`] - per-dialect rules for the shared `CREATE TABLE` template
//! - [`ddl`] - `CREATE TABLE` builder
//! - [`emitter`] - renders a normalized design as ordered statements

pub mod ddl;
pub mod dialect;
pub mod emitter;

#[cfg(test)]
pub mod test_utils;

pub use ddl::{ColumnDef, CreateTable, ForeignKeyRef, TableConstraint};
pub use dialect::{Dialect, DialectRules, ForeignKeyStyle};
pub use emitter::{emit_sql, SqlEmitter, Statement};
