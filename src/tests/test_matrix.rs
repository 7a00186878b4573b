use approx::relative_eq;
use smartcore::linalg::basic::arrays::Array;

use crate::matrix::{auto_density, generate_components};

fn collect_entries(m: &smartcore::linalg::basic::matrix::DenseMatrix<f64>) -> Vec<f64> {
    let (rows, cols) = m.shape();
    let mut out = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            out.push(*m.get((i, j)));
        }
    }
    out
}

// ============================================================================
// auto_density Tests
// ============================================================================

#[test]
fn test_auto_density_heuristic() {
    assert!(relative_eq!(auto_density(1), 1.0));
    assert!(relative_eq!(auto_density(100), 0.1));
    assert!(relative_eq!(auto_density(10_000), 0.01));
}

// ============================================================================
// generate_components Tests
// ============================================================================

#[test]
fn test_matrix_shape() {
    let m = generate_components(50, 100, auto_density(100), 42);
    assert_eq!(m.shape(), (50, 100));
}

#[test]
fn test_dense_branch_all_entries_signed() {
    // n_features == 1 means density == 1: no index sampling, every entry
    // is ±1/sqrt(n_components).
    let m = generate_components(16, 1, 1.0, 42);
    let scale = 0.25;

    for v in collect_entries(&m) {
        assert!(
            v == scale || v == -scale,
            "dense branch entry {} is not ±{}",
            v,
            scale
        );
    }
}

#[test]
fn test_dense_branch_has_both_signs() {
    let m = generate_components(64, 1, 1.0, 42);
    let entries = collect_entries(&m);

    assert!(entries.iter().any(|&v| v > 0.0));
    assert!(entries.iter().any(|&v| v < 0.0));
}

#[test]
fn test_sparse_branch_nonzero_magnitudes() {
    let density = auto_density(100);
    let m = generate_components(200, 100, density, 7);
    let scale = (1.0 / density).sqrt() / (200f64).sqrt();

    for v in collect_entries(&m) {
        assert!(
            v == 0.0 || relative_eq!(v.abs(), scale, epsilon = 1e-12),
            "nonzero entry {} does not match ±{}",
            v,
            scale
        );
    }
}

#[test]
fn test_sparse_branch_nonzero_fraction_near_density() {
    // density = 1/sqrt(100) = 0.1; over 400 rows the observed nonzero
    // fraction concentrates tightly around it.
    let density = auto_density(100);
    let m = generate_components(400, 100, density, 99);

    let entries = collect_entries(&m);
    let nnz = entries.iter().filter(|&&v| v != 0.0).count();
    let fraction = nnz as f64 / entries.len() as f64;

    assert!(
        (fraction - density).abs() < 0.03,
        "observed nonzero fraction {} too far from density {}",
        fraction,
        density
    );
}

#[test]
fn test_sparse_branch_mostly_zero() {
    let density = auto_density(10_000);
    let m = generate_components(20, 10_000, density, 3);

    let entries = collect_entries(&m);
    let nnz = entries.iter().filter(|&&v| v != 0.0).count();

    // Expected ~1% nonzero at density 0.01.
    assert!(nnz < entries.len() / 20);
    assert!(nnz > 0);
}

#[test]
fn test_same_seed_bit_identical() {
    let density = auto_density(64);
    let a = generate_components(100, 64, density, 1234);
    let b = generate_components(100, 64, density, 1234);

    assert_eq!(collect_entries(&a), collect_entries(&b));
}

#[test]
fn test_different_seeds_differ() {
    let density = auto_density(64);
    let a = generate_components(100, 64, density, 1);
    let b = generate_components(100, 64, density, 2);

    assert_ne!(collect_entries(&a), collect_entries(&b));
}

#[test]
fn test_dense_branch_same_seed_bit_identical() {
    let a = generate_components(32, 1, 1.0, 77);
    let b = generate_components(32, 1, 1.0, 77);

    assert_eq!(collect_entries(&a), collect_entries(&b));
}
