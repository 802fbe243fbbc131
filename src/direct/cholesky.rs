//! Cholesky factorization for symmetric positive-definite matrices
//!
//! Splits an SPD `A` into a lower-triangular `L` with `A = LLᵀ`. Square
//! roots follow the principal branch, so the factorization also covers
//! complex symmetric inputs whose radicands keep a positive real part.
//! Only the lower triangle of `a` is read.

use crate::dense::DenseMatrix;
use crate::direct::{SolveError, check_square, pivot_tol};
use crate::traits::ComplexField;
use num_traits::{Float, FromPrimitive};

/// Compute the Cholesky factor of a symmetric positive-definite matrix.
///
/// Diagonal: `l[k][k] = sqrt(a[k][k] - Σ_{s<k} l[k][s]²)`; below it,
/// `l[i][k] = (a[i][k] - Σ_{s<k} l[i][s]·l[k][s]) / l[k][k]`.
///
/// Fails with [`SolveError::NotPositiveDefinite`] when a radicand's real
/// part drops below tolerance, and [`SolveError::SingularMatrix`] when a
/// diagonal factor vanishes.
pub fn cholesky_factorize<T: ComplexField>(
    a: &DenseMatrix<T>,
) -> Result<DenseMatrix<T>, SolveError> {
    let n = check_square(a)?;
    let tiny = pivot_tol::<T>();
    let npd_tol = T::Real::from_f64(1e-12).unwrap();

    let mut l = DenseMatrix::zeros(n, n);

    for k in 0..n {
        let mut sum = a[(k, k)];
        for s in 0..k {
            let lks = l[(k, s)];
            sum -= lks * lks;
        }

        if sum.re() < -npd_tol {
            return Err(SolveError::NotPositiveDefinite);
        }
        let diag = sum.sqrt();
        // a real radicand within tolerance of zero square-roots to NaN or to
        // a vanishing factor; neither can divide the column below
        let mag = diag.norm();
        if mag.is_nan() || mag < tiny {
            return Err(SolveError::SingularMatrix);
        }
        l[(k, k)] = diag;
        let diag_inv = diag.inv();

        for i in (k + 1)..n {
            let mut sum = a[(i, k)];
            for s in 0..k {
                sum -= l[(i, s)] * l[(k, s)];
            }
            l[(i, k)] = sum * diag_inv;
        }
    }

    Ok(l)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use num_complex::Complex64;

    #[test]
    fn test_known_factor() {
        let a = DenseMatrix::from_dense(&array![
            [4.0_f64, 12.0, -16.0],
            [12.0, 37.0, -43.0],
            [-16.0, -43.0, 98.0],
        ]);
        let l = cholesky_factorize(&a).unwrap();

        let expected = [
            [2.0, 0.0, 0.0],
            [6.0, 1.0, 0.0],
            [-8.0, 5.0, 3.0],
        ];
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(l.get(i, j).unwrap(), expected[i][j], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_reconstruction() {
        let a = DenseMatrix::from_dense(&array![
            [6.0_f64, 2.0, 1.0],
            [2.0, 5.0, 2.0],
            [1.0, 2.0, 4.0],
        ]);
        let l = cholesky_factorize(&a).unwrap();
        let back = l.matmul(&l.transpose()).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(
                    back.get(i, j).unwrap(),
                    a.get(i, j).unwrap(),
                    epsilon = 1e-10
                );
            }
        }
    }

    #[test]
    fn test_factor_is_lower_triangular() {
        let a = DenseMatrix::from_dense(&array![[9.0_f64, 3.0], [3.0, 5.0]]);
        let l = cholesky_factorize(&a).unwrap();
        assert_relative_eq!(l.get(0, 1).unwrap(), 0.0);
        assert_relative_eq!(l.get(0, 0).unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(l.get(1, 0).unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(l.get(1, 1).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_not_positive_definite() {
        // eigenvalues 3 and -1
        let a = DenseMatrix::from_dense(&array![[1.0_f64, 2.0], [2.0, 1.0]]);
        assert!(matches!(
            cholesky_factorize(&a),
            Err(SolveError::NotPositiveDefinite)
        ));
    }

    #[test]
    fn test_semidefinite_is_singular() {
        // rank one, the second radicand collapses to zero
        let a = DenseMatrix::from_dense(&array![[1.0_f64, 1.0], [1.0, 1.0]]);
        assert!(matches!(
            cholesky_factorize(&a),
            Err(SolveError::SingularMatrix)
        ));
    }

    #[test]
    fn test_complex_symmetric_reconstruction() {
        // radicands keep positive real part, principal branch applies
        let a = DenseMatrix::from_dense(&array![
            [Complex64::new(4.0, 2.0), Complex64::new(1.0, 0.5)],
            [Complex64::new(1.0, 0.5), Complex64::new(3.0, -1.0)],
        ]);
        let l = cholesky_factorize(&a).unwrap();
        let back = l.matmul(&l.transpose()).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                let got = back.get(i, j).unwrap();
                let want = a.get(i, j).unwrap();
                assert_relative_eq!(got.re, want.re, epsilon = 1e-12);
                assert_relative_eq!(got.im, want.im, epsilon = 1e-12);
            }
        }
    }
}
