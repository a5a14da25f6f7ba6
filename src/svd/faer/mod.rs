use faer_ext::*;
use ndarray::{Array1, Array2, ArrayView2};

use crate::svd::SvdImplementation;

/// SVD backend based on faer's dense solver.
pub struct FaerSvd;

impl SvdImplementation for FaerSvd {
    fn compute(&self, matrix: ArrayView2<f64>) -> (Array2<f64>, Array1<f64>, Array2<f64>) {
        let faer_mat = matrix.into_faer();
        let svd = faer_mat.svd();
        let u = svd.u().into_ndarray().to_owned();
        let s: Array1<f64> = Array1::from_iter(svd.s_diagonal().iter().cloned());
        let vt = svd.v().into_ndarray().t().to_owned();

        (u, s, vt)
    }
}
