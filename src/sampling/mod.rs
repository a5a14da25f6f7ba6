//! Row/column sampling with replacement, with unbiasedness scaling.

use anyhow::{bail, Context};
use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use crate::utils::Direction;

/// Samples `r` rows or columns of `m` with replacement according to `probs`.
///
/// Drawn indices may repeat; a high-probability row or column is expected to
/// show up more than once. Each selected row or column is divided by
/// `sqrt(probs[idx] * r)` so that the selection stays an unbiased estimator
/// of the corresponding Gram matrix. The raw indices are returned in draw
/// order alongside the scaled selection.
///
/// A probs vector that is not a usable weight vector (NaN entries from a
/// degenerate matrix, a zero total, negative weights) is rejected by the
/// sampling distribution itself; that failure propagates unchanged.
pub fn select_part<R: Rng + ?Sized>(
    m: ArrayView2<f64>,
    r: usize,
    probs: ArrayView1<f64>,
    direction: Direction,
    rng: &mut R,
) -> anyhow::Result<(Array2<f64>, Vec<usize>)> {
    let size = match direction {
        Direction::ROW => m.nrows(),
        Direction::COLUMN => m.ncols(),
    };
    if probs.len() != size {
        bail!(
            "Length of probs ({}) does not match the {:?} count ({})",
            probs.len(),
            direction,
            size
        );
    }

    let dist = WeightedIndex::new(probs.iter().cloned())
        .context("sampling probabilities are not a usable weight vector")?;
    let idx: Vec<usize> = (0..r).map(|_| dist.sample(rng)).collect();
    let selected = scaled_take(m, &idx, probs, direction);
    Ok((selected, idx))
}

/// Extracts the rows or columns of `m` at `idx`, dividing each by
/// `sqrt(probs[idx] * idx.len())`.
///
/// Split out of [`select_part`] so that a fixed index list can be exercised
/// without going through the random draw.
pub fn scaled_take(
    m: ArrayView2<f64>,
    idx: &[usize],
    probs: ArrayView1<f64>,
    direction: Direction,
) -> Array2<f64> {
    let r = idx.len();
    match direction {
        Direction::ROW => {
            let mut out = Array2::zeros((r, m.ncols()));
            for (k, &i) in idx.iter().enumerate() {
                let scale = (probs[i] * r as f64).sqrt();
                out.row_mut(k).assign(&m.row(i).mapv(|v| v / scale));
            }
            out
        }
        Direction::COLUMN => {
            let mut out = Array2::zeros((m.nrows(), r));
            for (k, &j) in idx.iter().enumerate() {
                let scale = (probs[j] * r as f64).sqrt();
                out.column_mut(k).assign(&m.column(j).mapv(|v| v / scale));
            }
            out
        }
    }
}

/// Samples `r` scaled columns of `m`; the C half of a CUR decomposition.
pub fn select_c<R: Rng + ?Sized>(
    m: ArrayView2<f64>,
    r: usize,
    probs: ArrayView1<f64>,
    rng: &mut R,
) -> anyhow::Result<(Array2<f64>, Vec<usize>)> {
    select_part(m, r, probs, Direction::COLUMN, rng)
}

/// Samples `r` scaled rows of `m`; the R half of a CUR decomposition.
pub fn select_r<R: Rng + ?Sized>(
    m: ArrayView2<f64>,
    r: usize,
    probs: ArrayView1<f64>,
    rng: &mut R,
) -> anyhow::Result<(Array2<f64>, Vec<usize>)> {
    select_part(m, r, probs, Direction::ROW, rng)
}
