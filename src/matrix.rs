//! Random projection-matrix synthesis.
//!
//! Implements the Achlioptas/Li sparse construction
//! (<https://web.stanford.edu/~hastie/Papers/Ping/KDD06_rp.pdf>): per row,
//! a Binomial draw fixes the nonzero count, distinct column indices are
//! sampled uniformly without replacement, and each selected entry gets a
//! sign drawn from {-1, +1} with equal probability. The matrix is logically
//! sparse but stored dense, since the downstream matmul backend has no
//! reliable sparse representation.
//!
//! Every draw runs off explicit ChaCha8 streams derived from one base seed,
//! so a fixed seed reproduces the matrix bit-for-bit. Row `i` owns the stream
//! seeded `base_seed + i`, which keeps the rayon row loop deterministic
//! regardless of scheduling order.

use log::{debug, trace};
use rand::seq::index::sample;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Bernoulli, Binomial, Distribution};
use rayon::prelude::*;
use smartcore::linalg::basic::arrays::Array2;
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Expected fraction of nonzero entries per row: `1 / sqrt(n_features)`.
///
/// Fixed heuristic, not configurable. Equals 1 only when `n_features == 1`,
/// which routes construction through the fully-dense branch.
pub fn auto_density(n_features: usize) -> f64 {
    1.0 / (n_features as f64).sqrt()
}

/// Generate a random projection matrix of shape `(n_components, n_features)`.
///
/// With `density == 1` every entry is an equiprobable ±1 scaled by
/// `1/sqrt(n_components)`. With `density < 1` each row gets
/// `Binomial(n_features, density)` nonzero columns, sampled without
/// replacement and signed ±1, and the whole matrix carries the scale
/// `sqrt(1/density) / sqrt(n_components)`.
///
/// `density` must lie in `(0, 1]` and both dimensions must be positive;
/// the fit path validates this before calling in.
pub fn generate_components(
    n_components: usize,
    n_features: usize,
    density: f64,
    base_seed: u64,
) -> DenseMatrix<f64> {
    debug!(
        "Generating projection matrix: {}x{}, density={:.4}, seed={}",
        n_components, n_features, density, base_seed
    );

    let sign = Bernoulli::new(0.5).unwrap();

    if density == 1.0 {
        // Totally dense: skip index generation entirely.
        let scale = 1.0 / (n_components as f64).sqrt();
        let mut rng = ChaCha8Rng::seed_from_u64(base_seed);
        let flat: Vec<f64> = (0..n_components * n_features)
            .map(|_| if sign.sample(&mut rng) { scale } else { -scale })
            .collect();
        return DenseMatrix::from_iterator(flat.into_iter(), n_components, n_features, 0);
    }

    let binomial = Binomial::new(n_features as u64, density).unwrap();
    let scale = (1.0 / density).sqrt() / (n_components as f64).sqrt();

    let rows: Vec<Vec<f64>> = (0..n_components)
        .into_par_iter()
        .map(|i| {
            let mut rng = ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(i as u64));

            let nnz = binomial.sample(&mut rng) as usize;
            trace!("Row {}: {} nonzero columns", i, nnz);

            let mut row = vec![0.0; n_features];
            for c in sample(&mut rng, n_features, nnz) {
                row[c] = if sign.sample(&mut rng) { scale } else { -scale };
            }
            row
        })
        .collect();

    let mut flat = Vec::with_capacity(n_components * n_features);
    for row in rows {
        flat.extend(row);
    }

    DenseMatrix::from_iterator(flat.into_iter(), n_components, n_features, 0)
}
