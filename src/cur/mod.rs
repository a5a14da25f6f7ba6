//! CUR decomposition: approximates a matrix by actual sampled columns (C)
//! and rows (R), bridged by a small dense matrix (U).

use std::sync::Arc;

use anyhow::Result;
use log::debug;
use ndarray::{Array2, ArrayView2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::pinv::make_u_with;
use crate::probability::probabilities;
use crate::sampling::{select_c, select_r};
use crate::svd::{NalgebraSvd, SvdImplementation};

/// The three factors of a CUR decomposition, `C * U * R ≈ M`, together with
/// the raw column and row indices the sampler drew.
pub struct CurDecomposition {
    pub c: Array2<f64>,
    pub u: Array2<f64>,
    pub r: Array2<f64>,
    pub col_indices: Vec<usize>,
    pub row_indices: Vec<usize>,
}

impl CurDecomposition {
    /// Multiplies the factors back together: `C * U * R`.
    pub fn reconstruct(&self) -> Array2<f64> {
        self.c.dot(&self.u).dot(&self.r)
    }

    /// Relative Frobenius error `||M - C*U*R|| / ||M||` against the original.
    pub fn relative_error(&self, original: ArrayView2<f64>) -> f64 {
        let reconstructed = self.reconstruct();

        let mut error_sq = 0.0;
        let mut norm_sq = 0.0;
        for (orig, recon) in original.iter().zip(reconstructed.iter()) {
            let diff = orig - recon;
            error_sq += diff * diff;
            norm_sq += orig * orig;
        }
        (error_sq / norm_sq).sqrt()
    }
}

pub struct CurBuilder<S: SvdImplementation> {
    rank: Option<usize>,
    seed: Option<u64>,
    svd_implementation: Arc<S>,
}

impl<S: SvdImplementation> CurBuilder<S> {
    pub fn new(svd_implementation: S) -> Self {
        CurBuilder {
            rank: None,
            seed: None,
            svd_implementation: Arc::new(svd_implementation),
        }
    }

    /// Number of columns and of rows to sample. Defaults to min(m, n).
    pub fn rank(mut self, rank: usize) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Seed for reproducible sampling. Unseeded runs draw from the thread
    /// RNG.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Cur<S> {
        Cur {
            rank: self.rank,
            seed: self.seed,
            svd_implementation: self.svd_implementation,
        }
    }
}

pub struct Cur<S: SvdImplementation> {
    rank: Option<usize>,
    seed: Option<u64>,
    svd_implementation: Arc<S>,
}

impl<S: SvdImplementation> Cur<S> {
    pub fn decompose(&self, m: ArrayView2<f64>) -> Result<CurDecomposition> {
        match self.seed {
            Some(seed) => self.decompose_with_rng(m, &mut ChaCha8Rng::seed_from_u64(seed)),
            None => self.decompose_with_rng(m, &mut rand::rng()),
        }
    }

    /// Runs the full pipeline with a caller-provided RNG: estimate the
    /// row/column distributions, sample C and R independently, then bridge
    /// them with U built from the sampled intersection.
    ///
    /// The column draw and the row draw are separate; they are not expected
    /// to pick matching indices.
    pub fn decompose_with_rng<R: Rng>(
        &self,
        m: ArrayView2<f64>,
        rng: &mut R,
    ) -> Result<CurDecomposition> {
        let rank = self.rank.unwrap_or_else(|| m.nrows().min(m.ncols()));

        let (row_probs, col_probs) = probabilities(m);
        let (c, col_indices) = select_c(m, rank, col_probs.view(), rng)?;
        let (r, row_indices) = select_r(m, rank, row_probs.view(), rng)?;
        debug!(
            "CUR rank {}: sampled columns {:?}, rows {:?}",
            rank, col_indices, row_indices
        );
        let u = make_u_with(m, &col_indices, &row_indices, self.svd_implementation.as_ref());

        Ok(CurDecomposition {
            c,
            u,
            r,
            col_indices,
            row_indices,
        })
    }
}

/// Decomposes `m` into C (m×rank), U (rank×rank), R (rank×n) with the
/// default SVD backend and the thread RNG.
pub fn cur_decomposition(m: ArrayView2<f64>, rank: usize) -> Result<CurDecomposition> {
    CurBuilder::new(NalgebraSvd).rank(rank).build().decompose(m)
}
