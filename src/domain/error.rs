//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::arena::VampireId;

/// Genealogy errors represent violated preconditions of tree operations.
///
/// Empty outcomes (no vampire with that name, a leaf without descendants)
/// are not errors; they come back as `None` or `0`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenealogyError {
    #[error("unknown vampire: {0:?}")]
    UnknownVampire(VampireId),

    #[error("vampire already has a creator: {name}")]
    AlreadyHasCreator { name: String, creator: VampireId },

    #[error("attaching {child} under {parent} would create a cycle")]
    CycleDetected { parent: String, child: String },

    #[error("no common ancestor: {0} and {1} belong to different lineages")]
    DisjointLineages(String, String),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for genealogy operations.
pub type GenealogyResult<T> = Result<T, GenealogyError>;
