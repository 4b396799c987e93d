//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Structural invariant violations reported by `AvlTree::verify`.
/// Any of these indicates a defect in the tree implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("order violation: {value:?} is not strictly between {lower:?} and {upper:?}")]
    OrderViolation {
        value: String,
        lower: Option<String>,
        upper: Option<String>,
    },

    #[error("unbalanced node {value:?}: balance factor {factor}")]
    Unbalanced { value: String, factor: isize },

    #[error("stale height at {value:?}: cached {cached}, actual {actual}")]
    HeightMismatch {
        value: String,
        cached: usize,
        actual: usize,
    },

    #[error("node count mismatch: tracked {tracked}, found {found}")]
    CountMismatch { tracked: usize, found: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
