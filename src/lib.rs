//! # sparseproj
//!
//! Sparse random projection for high-dimensional embeddings, used as a
//! preprocessing stage ahead of nearest-neighbour scoring in anomaly
//! detection pipelines.
//!
//! The projector follows the Achlioptas/Li construction: a projection matrix
//! whose entries are overwhelmingly zero, with the surviving entries drawn
//! from {-1, +1} and rescaled so that pairwise distances are preserved within
//! a `(1 ± eps)` factor per the **Johnson–Lindenstrauss lemma**. The target
//! dimension is derived automatically from the sample count and the requested
//! distortion tolerance, so callers only pick `eps`.
//!
//! The API is a two-phase fit/transform lifecycle:
//!
//! 1. [`SparseRandomProjection::fit`] reads the embedding shape, computes the
//!    safe output dimension and materialises the projection matrix;
//! 2. [`SparseRandomProjection::transform`] multiplies batches against the
//!    stored matrix, yielding `(n_samples, n_components)` outputs.
//!
//! # Examples
//!
//! ```
//! use smartcore::linalg::basic::arrays::{Array, Array2};
//! use smartcore::linalg::basic::matrix::DenseMatrix;
//! use sparseproj::SparseRandomProjection;
//!
//! let embedding = DenseMatrix::from_iterator(
//!     (0..200).map(|i| (i % 13) as f64 * 0.1),
//!     20, 10, 0,
//! );
//!
//! let mut model = SparseRandomProjection::new(0.5).with_random_state(42);
//! model.fit(&embedding).unwrap();
//!
//! let projected = model.transform(&embedding).unwrap();
//! assert_eq!(projected.shape().0, 20);
//! ```
//!
//! Calling [`SparseRandomProjection::transform`] before `fit` is a
//! representable, checkable state and fails with
//! [`ProjectionError::NotFitted`] rather than panicking.

pub mod error;
pub mod estimation;
pub mod matrix;
pub mod projection;

#[cfg(test)]
mod tests;

pub use crate::error::ProjectionError;
pub use crate::projection::SparseRandomProjection;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialise the `env_logger` backend once. Demos and benches call this;
/// library code only ever logs through the `log` facade.
pub fn init() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env().init();
    });
}
