//! Johnson–Lindenstrauss minimum-dimension estimation.
//!
//! The JL lemma guarantees that a random linear projection into
//! `O(log n / eps²)` dimensions preserves pairwise distances among `n` points
//! within relative error `eps`, with high probability. This module computes
//! the standard lower bound used to auto-size the projection matrix: the
//! caller supplies only the sample count and the distortion tolerance, and
//! the projector takes the result as its row count.
//!
//! Note the logarithmic dependence on `n`: the bound grows with the number of
//! points being compared, not with the original feature dimension.

use log::debug;

/// Find a safe number of components to randomly project to.
///
/// Computes `4 * ln(n_samples) / (eps²/2 - eps³/3)`, truncated toward zero.
/// Pure function of its two scalars; no randomness involved.
///
/// `n_samples` must be at least 1. `n_samples == 1` gives `ln(1) == 0` and
/// therefore a degenerate bound of 0; callers that cannot use a
/// zero-dimensional target space must reject it (the fit path does).
///
/// # Examples
///
/// ```
/// use sparseproj::estimation::johnson_lindenstrauss_min_dim;
///
/// assert_eq!(johnson_lindenstrauss_min_dim(1000, 0.1), 5920);
/// assert_eq!(johnson_lindenstrauss_min_dim(1, 0.1), 0);
/// ```
pub fn johnson_lindenstrauss_min_dim(n_samples: usize, eps: f64) -> usize {
    let denominator = eps.powi(2) / 2.0 - eps.powi(3) / 3.0;
    let min_dim = (4.0 * (n_samples as f64).ln() / denominator) as usize;

    debug!(
        "JL minimum dimension for n_samples={}, eps={}: {}",
        n_samples, eps, min_dim
    );

    min_dim
}
