//! End-to-end demo: fit a sparse random projector on a (1000, 5) embedding
//! batch at eps = 0.1 and project it down to the JL-safe dimension.
//!
//! Run with `RUST_LOG=debug cargo run --example project_embeddings` to see
//! the derived parameters.

use rand::prelude::*;
use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;
use sparseproj::{ProjectionError, SparseRandomProjection};

fn main() -> Result<(), ProjectionError> {
    sparseproj::init();

    let (n_samples, n_features) = (1000, 5);
    let mut rng = StdRng::seed_from_u64(7);
    let embedding = DenseMatrix::from_iterator(
        (0..n_samples * n_features).map(|_| rng.random::<f64>()),
        n_samples,
        n_features,
        0,
    );

    let mut model = SparseRandomProjection::new(0.1).with_random_state(42);
    let projected = model.fit(&embedding)?.transform(&embedding)?;

    println!(
        "projected {:?} -> {:?} (eps = {})",
        embedding.shape(),
        projected.shape(),
        model.eps()
    );

    Ok(())
}
