//! Fit/transform lifecycle of the sparse random projector.
//!
//! `SparseRandomProjection` is a two-state object: it starts `Unfitted`, and
//! the only transition is a successful [`SparseRandomProjection::fit`], which
//! derives the target dimension from the embedding's sample count via the
//! Johnson–Lindenstrauss bound and materialises the projection matrix.
//! Refitting replaces the matrix wholesale; there is no reset.
//!
//! [`SparseRandomProjection::transform`] multiplies an embedding batch
//! against the transpose of the stored matrix. It never mutates its input or
//! the fitted state, so a fitted projector can serve any number of batches.
//!
//! # Examples
//!
//! Fit on an embedding batch and project it, matching the documented
//! `(1000, 5)` → `(1000, 5920)` sizing at `eps = 0.1`:
//!
//! ```
//! use smartcore::linalg::basic::arrays::{Array, Array2};
//! use smartcore::linalg::basic::matrix::DenseMatrix;
//! use sparseproj::SparseRandomProjection;
//!
//! let embedding = DenseMatrix::from_iterator(
//!     (0..5000).map(|i| (i % 97) as f64 * 0.01),
//!     1000, 5, 0,
//! );
//!
//! let mut model = SparseRandomProjection::new(0.1).with_random_state(7);
//! let projected = model.fit(&embedding).unwrap().transform(&embedding).unwrap();
//!
//! assert_eq!(projected.shape(), (1000, 5920));
//! ```

use log::{debug, info};
use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::ProjectionError;
use crate::estimation::johnson_lindenstrauss_min_dim;
use crate::matrix::{auto_density, generate_components};

/// Tagged fit state: "not fitted" is representable, not an absence convention.
#[derive(Clone, Debug)]
enum FitState {
    Unfitted,
    Fitted {
        n_components: usize,
        components: DenseMatrix<f64>,
    },
}

/// Sparse random projector with a fit/transform lifecycle.
///
/// Configuration is fixed at construction: `eps` bounds the pairwise-distance
/// distortion and drives the automatic output dimension; `random_state`
/// makes matrix synthesis reproducible when set. Both are read-only after
/// construction.
///
/// The projection matrix is owned exclusively by one instance, does not exist
/// before `fit`, and is immutable between fits. The instance is meant for
/// single-owner, fit-then-transform use within one pipeline stage; it carries
/// no internal locking.
#[derive(Clone, Debug)]
pub struct SparseRandomProjection {
    eps: f64,
    random_state: Option<u64>,
    state: FitState,
}

impl Default for SparseRandomProjection {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl SparseRandomProjection {
    /// Create an unfitted projector with the given distortion tolerance.
    ///
    /// `eps` must lie in `(0, 1)`; it is validated at `fit` time so that
    /// construction stays infallible.
    pub fn new(eps: f64) -> Self {
        debug!("Creating SparseRandomProjection with eps={}", eps);
        Self {
            eps,
            random_state: None,
            state: FitState::Unfitted,
        }
    }

    /// Seed matrix synthesis for reproducible fits.
    pub fn with_random_state(mut self, seed: u64) -> Self {
        info!("Setting random state: {}", seed);
        self.random_state = Some(seed);
        self
    }

    /// The configured distortion tolerance.
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Target dimension of the current fit, if any.
    pub fn n_components(&self) -> Option<usize> {
        match &self.state {
            FitState::Unfitted => None,
            FitState::Fitted { n_components, .. } => Some(*n_components),
        }
    }

    /// The fitted projection matrix of shape `(n_components, n_features)`,
    /// if any.
    pub fn components(&self) -> Option<&DenseMatrix<f64>> {
        match &self.state {
            FitState::Unfitted => None,
            FitState::Fitted { components, .. } => Some(components),
        }
    }

    /// Derive the target dimension from the embedding and materialise the
    /// projection matrix.
    ///
    /// Reads `(n_samples, n_features)` from the embedding's shape, computes
    /// `n_components` via the Johnson–Lindenstrauss bound at the configured
    /// `eps`, and synthesizes the matrix at density `1/sqrt(n_features)`.
    /// Any previously fitted matrix is discarded. Returns `&mut self` for
    /// chaining:
    ///
    /// ```ignore
    /// let projected = model.fit(&embedding)?.transform(&embedding)?;
    /// ```
    ///
    /// # Errors
    ///
    /// [`ProjectionError::InvalidInput`] when the embedding has zero rows or
    /// columns, when `eps` is outside `(0, 1)`, or when the derived
    /// `n_components` is 0 (`n_samples == 1`): a zero-dimensional target
    /// space is useless to the nearest-neighbour stage downstream, so the
    /// degenerate bound fails fast here.
    pub fn fit(
        &mut self,
        embedding: &DenseMatrix<f64>,
    ) -> Result<&mut Self, ProjectionError> {
        let (n_samples, n_features) = embedding.shape();

        if !(self.eps > 0.0 && self.eps < 1.0) {
            return Err(ProjectionError::InvalidInput(format!(
                "eps must be in (0, 1), got {}",
                self.eps
            )));
        }
        if n_samples == 0 || n_features == 0 {
            return Err(ProjectionError::InvalidInput(format!(
                "embedding must be non-empty, got shape ({}, {})",
                n_samples, n_features
            )));
        }

        let n_components = johnson_lindenstrauss_min_dim(n_samples, self.eps);
        if n_components == 0 {
            return Err(ProjectionError::InvalidInput(format!(
                "JL bound is degenerate for n_samples={} at eps={}; \
                 at least 2 samples are required",
                n_samples, self.eps
            )));
        }

        info!(
            "Fitting projector: ({}, {}) -> {} components at eps={}",
            n_samples, n_features, n_components, self.eps
        );

        let density = auto_density(n_features);
        let base_seed = self.random_state.unwrap_or_else(rand::random);
        let components = generate_components(n_components, n_features, density, base_seed);

        self.state = FitState::Fitted {
            n_components,
            components,
        };

        Ok(self)
    }

    /// Project an embedding batch into the fitted space.
    ///
    /// Computes `embedding × componentsᵀ`, yielding a matrix of shape
    /// `(n_samples, n_components)`. Neither the input nor the fitted state
    /// is mutated.
    ///
    /// # Errors
    ///
    /// [`ProjectionError::NotFitted`] when no `fit` has succeeded yet, and
    /// [`ProjectionError::InvalidInput`] when the batch's feature count does
    /// not match the fitted matrix's column count.
    pub fn transform(
        &self,
        embedding: &DenseMatrix<f64>,
    ) -> Result<DenseMatrix<f64>, ProjectionError> {
        let (n_components, components) = match &self.state {
            FitState::Unfitted => return Err(ProjectionError::NotFitted),
            FitState::Fitted {
                n_components,
                components,
            } => (*n_components, components),
        };

        let (n_samples, n_features) = embedding.shape();
        let fitted_features = components.shape().1;
        if n_features != fitted_features {
            return Err(ProjectionError::InvalidInput(format!(
                "embedding has {} features but the projector was fitted on {}",
                n_features, fitted_features
            )));
        }

        debug!(
            "Transforming ({}, {}) -> ({}, {})",
            n_samples, n_features, n_samples, n_components
        );

        let transposed = components.transpose();
        Ok(embedding.matmul(&transposed))
    }
}
