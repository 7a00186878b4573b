//! Error types for the projection lifecycle.

use thiserror::Error;

/// Errors surfaced by [`crate::SparseRandomProjection`].
///
/// `NotFitted` is a caller-usage error: the fit/transform protocol was
/// invoked out of order. `InvalidInput` is raised eagerly at the `fit` or
/// `transform` boundary so that degenerate shapes fail with a named cause
/// instead of an obscure downstream dimension mismatch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    /// `transform` was called before any successful `fit`.
    #[error("`fit()` has not been called on SparseRandomProjection yet")]
    NotFitted,

    /// A shape or configuration parameter is outside the valid domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
