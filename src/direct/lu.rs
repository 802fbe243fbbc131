//! Doolittle LU factorization and triangular substitution
//!
//! [`lu_factorize`] splits a square matrix into a unit-lower-triangular `L`
//! and an upper-triangular `U` with `A = LU`. The factors are consumed by
//! [`forward_substitute`] and [`back_substitute`] to solve `Ax = b` as
//! `Lz = b` then `Ux = z`, and can be reused across right-hand sides, either
//! through [`LuFactors::solve`] or by reducing each new `b` in place with
//! [`update_rhs`].

use crate::dense::DenseMatrix;
use crate::direct::{SolveError, check_len, check_square, pivot_tol};
use crate::traits::ComplexField;
use ndarray::Array1;
use num_traits::Zero;

/// Doolittle factors: unit-lower-triangular `l` and upper-triangular `u`
#[derive(Debug, Clone)]
pub struct LuFactors<T: ComplexField> {
    pub l: DenseMatrix<T>,
    pub u: DenseMatrix<T>,
}

impl<T: ComplexField> LuFactors<T> {
    /// Matrix order
    pub fn n(&self) -> usize {
        self.l.num_rows()
    }

    /// Solve `Ax = b` using the precomputed factors.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>, SolveError> {
        let z = forward_substitute(&self.l, b)?;
        back_substitute(&self.u, &z)
    }
}

/// Compute the Doolittle LU factorization of a square matrix.
///
/// `u[k][j] = a[k][j] - Σ_{s<k} l[k][s]·u[s][j]` for `j ≥ k`, then
/// `l[i][k] = (a[i][k] - Σ_{s<k} l[i][s]·u[s][k]) / u[k][k]` for `i > k`.
/// Fails with [`SolveError::SingularMatrix`] when a `u[k][k]` vanishes.
pub fn lu_factorize<T: ComplexField>(a: &DenseMatrix<T>) -> Result<LuFactors<T>, SolveError> {
    let n = check_square(a)?;
    let tiny = pivot_tol::<T>();

    let mut l = DenseMatrix::identity(n);
    let mut u = DenseMatrix::zeros(n, n);

    for k in 0..n {
        for j in k..n {
            let mut sum = a[(k, j)];
            for s in 0..k {
                sum -= l[(k, s)] * u[(s, j)];
            }
            u[(k, j)] = sum;
        }

        let pivot = u[(k, k)];
        if pivot.norm() < tiny {
            return Err(SolveError::SingularMatrix);
        }
        let pivot_inv = pivot.inv();

        for i in (k + 1)..n {
            let mut sum = a[(i, k)];
            for s in 0..k {
                sum -= l[(i, s)] * u[(s, k)];
            }
            l[(i, k)] = sum * pivot_inv;
        }
    }

    Ok(LuFactors { l, u })
}

/// Solve `Lz = b` for a unit-lower-triangular `l`.
///
/// The unit diagonal needs no division, so this cannot fail on a pivot;
/// only dimensions are checked.
pub fn forward_substitute<T: ComplexField>(
    l: &DenseMatrix<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, SolveError> {
    let n = check_square(l)?;
    check_len(n, b)?;

    let mut z = Array1::from_elem(n, T::zero());
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[(i, j)] * z[j];
        }
        z[i] = sum;
    }
    Ok(z)
}

/// Solve `Ux = z` for an upper-triangular `u`, last unknown first.
///
/// Fails with [`SolveError::SingularMatrix`] when a diagonal entry vanishes.
pub fn back_substitute<T: ComplexField>(
    u: &DenseMatrix<T>,
    z: &Array1<T>,
) -> Result<Array1<T>, SolveError> {
    let n = check_square(u)?;
    check_len(n, z)?;
    let tiny = pivot_tol::<T>();

    let mut x = Array1::from_elem(n, T::zero());
    for i in (0..n).rev() {
        let mut sum = z[i];
        for j in (i + 1)..n {
            sum -= u[(i, j)] * x[j];
        }
        let diag = u[(i, i)];
        if diag.norm() < tiny {
            return Err(SolveError::SingularMatrix);
        }
        x[i] = sum * diag.inv();
    }
    Ok(x)
}

/// Reduce a right-hand side in place against the multipliers stored below
/// the diagonal of `a`, mirroring the forward-elimination sweep without
/// touching `a`. Used to reuse one factorization across several right-hand
/// sides.
pub fn update_rhs<T: ComplexField>(
    a: &DenseMatrix<T>,
    b: &mut Array1<T>,
) -> Result<(), SolveError> {
    let n = check_square(a)?;
    check_len(n, b)?;

    for k in 0..n {
        for i in (k + 1)..n {
            let bk = b[k];
            b[i] -= a[(i, k)] * bk;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direct::solve_naive;
    use approx::assert_relative_eq;
    use ndarray::array;
    use num_complex::Complex64;

    fn assert_matrix_eq(a: &DenseMatrix<f64>, b: &DenseMatrix<f64>, eps: f64) {
        assert_eq!(a.num_rows(), b.num_rows());
        assert_eq!(a.num_cols(), b.num_cols());
        for i in 0..a.num_rows() {
            for j in 0..a.num_cols() {
                assert_relative_eq!(a.get(i, j).unwrap(), b.get(i, j).unwrap(), epsilon = eps);
            }
        }
    }

    #[test]
    fn test_factorize_small_known() {
        let a = DenseMatrix::from_dense(&array![[2.0_f64, 3.0], [4.0, 7.0]]);
        let LuFactors { l, u } = lu_factorize(&a).unwrap();

        assert_relative_eq!(l.get(0, 0).unwrap(), 1.0);
        assert_relative_eq!(l.get(1, 0).unwrap(), 2.0);
        assert_relative_eq!(l.get(1, 1).unwrap(), 1.0);
        assert_relative_eq!(l.get(0, 1).unwrap(), 0.0);

        assert_relative_eq!(u.get(0, 0).unwrap(), 2.0);
        assert_relative_eq!(u.get(0, 1).unwrap(), 3.0);
        assert_relative_eq!(u.get(1, 1).unwrap(), 1.0);
        assert_relative_eq!(u.get(1, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_factors_reconstruct_input() {
        let a = DenseMatrix::from_dense(&array![
            [6.0_f64, -2.0, 2.0, 4.0],
            [12.0, -8.0, 6.0, 10.0],
            [3.0, -13.0, 9.0, 3.0],
            [-6.0, 4.0, 1.0, -18.0],
        ]);
        let factors = lu_factorize(&a).unwrap();
        let lu = factors.l.matmul(&factors.u).unwrap();
        assert_matrix_eq(&lu, &a, 1e-9);
    }

    #[test]
    fn test_factor_shape() {
        let a = DenseMatrix::from_dense(&array![
            [4.0_f64, 1.0, 0.0],
            [1.0, 3.0, 1.0],
            [0.0, 1.0, 2.0],
        ]);
        let LuFactors { l, u } = lu_factorize(&a).unwrap();
        for i in 0..3 {
            assert_relative_eq!(l.get(i, i).unwrap(), 1.0);
            for j in (i + 1)..3 {
                assert_relative_eq!(l.get(i, j).unwrap(), 0.0);
                assert_relative_eq!(u.get(j, i).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn test_substitution_solves_system() {
        let a = DenseMatrix::from_dense(&array![
            [6.0_f64, -2.0, 2.0, 4.0],
            [12.0, -8.0, 6.0, 10.0],
            [3.0, -13.0, 9.0, 3.0],
            [-6.0, 4.0, 1.0, -18.0],
        ]);
        let b = array![16.0_f64, 26.0, -19.0, -34.0];

        let factors = lu_factorize(&a).unwrap();
        let z = forward_substitute(&factors.l, &b).unwrap();
        let x = back_substitute(&factors.u, &z).unwrap();

        let expected = [3.0, 1.0, -2.0, 1.0];
        for i in 0..4 {
            assert_relative_eq!(x[i], expected[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_factors_reused_across_rhs() {
        let a = DenseMatrix::from_dense(&array![
            [4.0_f64, 1.0, 0.0],
            [1.0, 3.0, 1.0],
            [0.0, 1.0, 2.0],
        ]);
        let factors = lu_factorize(&a).unwrap();

        for b in [array![1.0_f64, 2.0, 3.0], array![4.0_f64, 5.0, 6.0]] {
            let x = factors.solve(&b).unwrap();
            let ax = a.matvec(&x);
            for i in 0..3 {
                assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_update_rhs_matches_forward_substitution() {
        let a = DenseMatrix::from_dense(&array![
            [6.0_f64, -2.0, 2.0, 4.0],
            [12.0, -8.0, 6.0, 10.0],
            [3.0, -13.0, 9.0, 3.0],
            [-6.0, 4.0, 1.0, -18.0],
        ]);
        let b = array![16.0_f64, 26.0, -19.0, -34.0];

        let factors = lu_factorize(&a).unwrap();
        let z = forward_substitute(&factors.l, &b).unwrap();

        let mut b_inplace = b.clone();
        update_rhs(&factors.l, &mut b_inplace).unwrap();
        for i in 0..4 {
            assert_relative_eq!(b_inplace[i], z[i], epsilon = 1e-12);
        }

        // the reduced RHS back-substitutes to the same solution
        let x = back_substitute(&factors.u, &b_inplace).unwrap();
        let x_ref = solve_naive(a, b).unwrap();
        for i in 0..4 {
            assert_relative_eq!(x[i], x_ref[i], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_singular_pivot() {
        // leading minor vanishes at k = 1
        let a = DenseMatrix::from_dense(&array![[1.0_f64, 2.0], [2.0, 4.0]]);
        assert!(matches!(
            lu_factorize(&a),
            Err(SolveError::SingularMatrix)
        ));
    }

    #[test]
    fn test_back_substitute_singular_diagonal() {
        let u = DenseMatrix::from_dense(&array![[1.0_f64, 1.0], [0.0, 0.0]]);
        let z = array![1.0_f64, 0.0];
        assert!(matches!(
            back_substitute(&u, &z),
            Err(SolveError::SingularMatrix)
        ));
    }

    #[test]
    fn test_non_square_rejected() {
        let a: DenseMatrix<f64> = DenseMatrix::zeros(2, 3);
        assert!(matches!(
            lu_factorize(&a),
            Err(SolveError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_factorize_complex() {
        let a = DenseMatrix::from_dense(&array![
            [Complex64::new(2.0, 1.0), Complex64::new(1.0, -1.0)],
            [Complex64::new(0.0, 2.0), Complex64::new(3.0, 0.0)],
        ]);
        let factors = lu_factorize(&a).unwrap();
        let lu = factors.l.matmul(&factors.u).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                let got = lu.get(i, j).unwrap();
                let want = a.get(i, j).unwrap();
                assert_relative_eq!(got.re, want.re, epsilon = 1e-12);
                assert_relative_eq!(got.im, want.im, epsilon = 1e-12);
            }
        }
    }
}
