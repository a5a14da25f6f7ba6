//! Intersection submatrix and the bridge matrix built from its SVD.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::svd::{NalgebraSvd, SvdImplementation};

/// Builds the intersection submatrix W from the raw, unscaled matrix.
///
/// Rows are taken at `row_indices` first, then columns at `col_indices`.
/// The scaling applied during sampling never enters W.
pub fn select_w(m: ArrayView2<f64>, col_indices: &[usize], row_indices: &[usize]) -> Array2<f64> {
    let mut w = Array2::zeros((row_indices.len(), col_indices.len()));
    for (a, &i) in row_indices.iter().enumerate() {
        for (b, &j) in col_indices.iter().enumerate() {
            w[[a, b]] = m[[i, j]];
        }
    }
    w
}

/// Elementwise Moore-Penrose style inverse of a singular value vector: zero
/// singular values stay zero instead of dividing.
pub fn pseudo_inverse(sigma: ArrayView1<f64>) -> Array1<f64> {
    sigma.mapv(|s| if s == 0.0 { 0.0 } else { 1.0 / s })
}

/// Builds U from the sampled intersection of `m`, using the default SVD
/// backend.
pub fn make_u(m: ArrayView2<f64>, col_indices: &[usize], row_indices: &[usize]) -> Array2<f64> {
    make_u_with(m, col_indices, row_indices, &NalgebraSvd)
}

/// Builds `U = Y * diag(pinv(sigma)^2) * X^T` where `W = X * diag(sigma) * Y^T`.
///
/// The pseudo-inverse is squared because C and R each already carry one
/// factor of W's structure through the sampling scaling. A rank-deficient W
/// has its dead directions zeroed rather than failing.
pub fn make_u_with<S: SvdImplementation>(
    m: ArrayView2<f64>,
    col_indices: &[usize],
    row_indices: &[usize],
    svd: &S,
) -> Array2<f64> {
    let w = select_w(m, col_indices, row_indices);
    let (x, sigma, yt) = svd.compute(w.view());
    let inv = pseudo_inverse(sigma.view());
    let inv_sq = Array2::from_diag(&inv.mapv(|v| v * v));
    yt.t().dot(&inv_sq).dot(&x.t())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};

    fn demo_matrix() -> Array2<f64> {
        array![
            [1.0, 1.0, 1.0, 0.0, 0.0],
            [3.0, 3.0, 3.0, 0.0, 0.0],
            [4.0, 4.0, 4.0, 0.0, 0.0],
            [5.0, 5.0, 5.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 4.0, 4.0],
            [0.0, 0.0, 0.0, 5.0, 5.0],
            [0.0, 0.0, 0.0, 2.0, 2.0]
        ]
    }

    #[test]
    fn test_select_w() {
        let m = demo_matrix();
        let w = select_w(m.view(), &[2, 4], &[5, 3]);
        assert_eq!(w.shape(), &[2, 2]);
        assert_eq!(w, array![[0.0, 5.0], [5.0, 0.0]]);
    }

    #[test]
    fn test_select_w_with_repeated_indices() {
        let m = demo_matrix();
        let w = select_w(m.view(), &[0, 0, 3], &[3, 3, 5]);
        assert_eq!(
            w,
            array![[5.0, 5.0, 0.0], [5.0, 5.0, 0.0], [0.0, 0.0, 5.0]]
        );
    }

    #[test]
    fn test_pseudo_inverse() {
        let inv = pseudo_inverse(array![5.0, 5.0].view());
        assert_abs_diff_eq!(inv[0], 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[1], 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_pseudo_inverse_with_zero() {
        let inv = pseudo_inverse(array![5.0, 0.0, 5.0].view());
        assert_abs_diff_eq!(inv[0], 0.2, epsilon = 1e-12);
        assert_eq!(inv[1], 0.0);
        assert_abs_diff_eq!(inv[2], 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_make_u() {
        let m = demo_matrix();
        let u = make_u(m.view(), &[2, 4], &[5, 3]);
        let gold = array![[0.0, 1.0 / 25.0], [1.0 / 25.0, 0.0]];

        assert_eq!(u.shape(), &[2, 2]);
        for i in 0..2 {
            for j in 0..2 {
                assert_abs_diff_eq!(u[[i, j]], gold[[i, j]], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_make_u_rank_deficient_is_finite() {
        // Repeated sampling makes W singular; the pseudo-inverse policy must
        // keep U finite instead of dividing by zero.
        let m = demo_matrix();
        let u = make_u(m.view(), &[0, 0], &[3, 3]);
        assert_eq!(u.shape(), &[2, 2]);
        assert!(u.iter().all(|v| v.is_finite()));
    }
}
