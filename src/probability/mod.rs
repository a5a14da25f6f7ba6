//! # Sampling Probabilities
//!
//! Derives the categorical distributions used to sample rows and columns of a
//! matrix, weighted by their squared magnitudes. Rows and columns carrying
//! more of the matrix energy are drawn more often.

use ndarray::{Array1, ArrayView2, Axis};

/// Computes the row and column sampling distributions of `m`.
///
/// Every entry is squared, the squares are summed along each row and along
/// each column, and both sums are divided by the grand total of squared
/// entries. The two returned vectors are proper probability distributions
/// over the rows and, independently, over the columns of `m`.
///
/// # Parameters
/// - `m`: Input matrix (never mutated)
///
/// # Returns
/// `(row_probs, col_probs)` of lengths `m.nrows()` and `m.ncols()`, each
/// summing to 1 within floating tolerance.
///
/// An all-zero matrix makes the denominator zero and yields NaN entries.
/// This is not trapped here; callers must pass a matrix with at least one
/// non-zero entry.
pub fn probabilities(m: ArrayView2<f64>) -> (Array1<f64>, Array1<f64>) {
    let squared = m.mapv(|v| v * v);
    let row_sum = squared.sum_axis(Axis(1));
    let col_sum = squared.sum_axis(Axis(0));
    let denom = row_sum.sum();
    (row_sum / denom, col_sum / denom)
}
