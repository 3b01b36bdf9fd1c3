//! Schema normalizer.
//!
//! Rewrites a design into its mid-level representation (MIR): a design
//! whose relations are all plain one-to-one or one-to-many and which maps
//! directly onto physical tables.
//!
//! Steps, in order:
//! 1. resolve every table's direct parent and root ([`InheritanceMap`])
//! 2. apply the design's [`InheritanceKind`] transform
//! 3. drop the remaining `InheritsFrom` edges
//! 4. expand `ManyToMany` relations into junction tables
//!
//! The input design is never modified.

mod inheritance;
mod junction;
mod resolver;

pub use resolver::InheritanceMap;

use tracing::debug;

use crate::model::{Design, InheritanceKind, RelationKind};

/// Errors that abort normalization.
///
/// Structural gaps (a root without a primary key, a dangling many-to-many
/// endpoint) are logged and skipped; only a broken precondition ends here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("Inheritance cycle detected: {}", tables.join(" -> "))]
    InheritanceCycle { tables: Vec<String> },
}

pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Normalize a design into its MIR form.
pub fn normalize(design: &Design) -> NormalizeResult<Design> {
    let map = InheritanceMap::build(design)?;
    let mut mir = design.clone();

    match design.inheritance_kind {
        InheritanceKind::SingleTable => inheritance::merge_single_table(&mut mir, &map),
        InheritanceKind::ClassTable => inheritance::link_class_tables(&mut mir, &map),
        InheritanceKind::ConcreteTable => inheritance::flatten_concrete_tables(&mut mir, &map),
    }

    let before = mir.relations.len();
    mir.relations.retain(|r| r.kind != RelationKind::InheritsFrom);
    debug!(
        dropped = before - mir.relations.len(),
        "inheritance edges removed"
    );

    junction::expand_many_to_many(&mut mir);

    Ok(mir)
}
