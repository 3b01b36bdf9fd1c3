//! End-to-end compilation from a design to SQL.
//!
//! ```text
//! Design → Normalize (MIR) → Emit → ordered statements
//! ```
//!
//! # Example
//!
//! ```ignore
//! use schemaforge::compile::{compile_file, CompileOptions};
//! use schemaforge::sql::Dialect;
//!
//! let options = CompileOptions::default().with_dialect(Dialect::Postgres);
//! let output = compile_file("shop.json", &options)?;
//! println!("{}", output.to_script("\n\n"));
//! ```

use std::path::Path;

use tracing::debug;

use crate::dto::{self, DesignFileError};
use crate::mir::{self, NormalizeError};
use crate::model::{Design, InheritanceKind};
use crate::sql::{emit_sql, Dialect, Statement};

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur during compilation.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Normalization error: {0}")]
    NormalizeError(#[from] NormalizeError),

    #[error("Design file error: {0}")]
    DesignFileError(#[from] DesignFileError),
}

pub type CompileResult<T> = Result<T, CompileError>;

// ============================================================================
// Options
// ============================================================================

/// Options for compilation.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// SQL dialect to generate.
    pub dialect: Dialect,

    /// Inheritance mapping to use instead of the design's own.
    pub inheritance: Option<InheritanceKind>,
}

impl CompileOptions {
    /// Set the SQL dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Override the design's inheritance mapping.
    pub fn with_inheritance(mut self, kind: InheritanceKind) -> Self {
        self.inheritance = Some(kind);
        self
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Result of compiling a design to SQL.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    /// Statements in emission order.
    pub statements: Vec<Statement>,

    /// The normalized design the statements were emitted from.
    pub mir: Design,

    /// The dialect used for generation.
    pub dialect: Dialect,
}

impl CompileOutput {
    /// All statements joined into one script.
    pub fn to_script(&self, separator: &str) -> String {
        self.statements
            .iter()
            .map(|s| s.sql.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Like [`CompileOutput::to_script`], with a `-- <label>` line above each statement.
    pub fn to_annotated_script(&self, separator: &str) -> String {
        self.statements
            .iter()
            .map(|s| format!("-- {}\n{}", s.label, s.sql))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

// ============================================================================
// Compilation Functions
// ============================================================================

/// Normalize a design and emit its SQL.
pub fn compile(design: &Design, options: &CompileOptions) -> CompileResult<CompileOutput> {
    let mir = match options.inheritance {
        Some(kind) if kind != design.inheritance_kind => {
            debug!(from = %design.inheritance_kind, to = %kind, "inheritance kind overridden");
            let mut design = design.clone();
            design.inheritance_kind = kind;
            mir::normalize(&design)?
        }
        _ => mir::normalize(design)?,
    };

    let statements = emit_sql(&mir, options.dialect);
    Ok(CompileOutput {
        statements,
        mir,
        dialect: options.dialect,
    })
}

/// Load a design file and compile it.
pub fn compile_file(path: impl AsRef<Path>, options: &CompileOptions) -> CompileResult<CompileOutput> {
    let design = dto::load_design(path)?;
    compile(&design, options)
}
