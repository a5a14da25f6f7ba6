use ndarray::{Array1, Array2, ArrayView2};
use nshare::{IntoNalgebra, IntoNdarray2};

#[cfg(feature = "faer")]
pub mod faer;

/// Backend seam for the dense singular value decomposition.
pub trait SvdImplementation: Send + Sync {
    /// Factors `matrix` into `(U, S, Vt)` with the singular values sorted in
    /// decreasing order.
    fn compute(&self, matrix: ArrayView2<f64>) -> (Array2<f64>, Array1<f64>, Array2<f64>);
}

/// Default backend based on nalgebra's dense SVD.
pub struct NalgebraSvd;

impl SvdImplementation for NalgebraSvd {
    fn compute(&self, matrix: ArrayView2<f64>) -> (Array2<f64>, Array1<f64>, Array2<f64>) {
        let matrix = matrix.into_nalgebra().clone_owned();
        let svd = nalgebra::linalg::SVD::new(matrix, true, true);

        let u = svd.u.unwrap().into_ndarray2();
        let s = Array1::from(svd.singular_values.as_slice().to_vec());
        let vt = svd.v_t.unwrap().into_ndarray2();
        (u, s, vt)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn test_simple_svd() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let (u, s, vt) = NalgebraSvd.compute(a.view());

        // Check dimensions
        assert_eq!(u.shape(), &[2, 2]);
        assert_eq!(s.len(), 2);
        assert_eq!(vt.shape(), &[2, 2]);

        // Check singular values (pre-computed)
        assert_abs_diff_eq!(s[0], 5.4649857, epsilon = 1e-6);
        assert_abs_diff_eq!(s[1], 0.3659662, epsilon = 1e-6);

        // Check reconstruction
        let s_diag = ndarray::Array2::from_diag(&s);
        let reconstructed = u.dot(&s_diag).dot(&vt);

        for i in 0..2 {
            for j in 0..2 {
                assert_abs_diff_eq!(reconstructed[[i, j]], a[[i, j]], epsilon = 1e-6);
            }
        }
    }
}
