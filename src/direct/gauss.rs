//! Dense Gaussian elimination
//!
//! Two variants over the same contract: [`solve_naive`] eliminates in natural
//! row order and is adequate for well-scaled systems; [`solve_scaled_pivot`]
//! ranks pivot candidates by magnitude relative to a per-row scale and is the
//! stable choice when row magnitudes differ.
//!
//! Both consume `a` and `b`: the matrix is overwritten with elimination
//! intermediates (multipliers land in the zeroed positions) and the
//! right-hand side is reduced in place.

use crate::dense::DenseMatrix;
use crate::direct::{SolveError, check_len, check_square, pivot_tol};
use crate::traits::ComplexField;
use ndarray::Array1;
use num_traits::{Float, FromPrimitive, ToPrimitive, Zero};

/// Solve `Ax = b` by unpivoted Gaussian elimination.
///
/// Fails with [`SolveError::SingularMatrix`] when a pivot `a[k][k]` vanishes;
/// no NaN or Inf is ever propagated into the solution. O(n³).
pub fn solve_naive<T: ComplexField>(
    mut a: DenseMatrix<T>,
    mut b: Array1<T>,
) -> Result<Array1<T>, SolveError> {
    let n = check_square(&a)?;
    check_len(n, &b)?;
    let tiny = pivot_tol::<T>();

    // forward elimination, multipliers kept in the zeroed positions
    for k in 0..n {
        let pivot = a[(k, k)];
        if pivot.norm() < tiny {
            return Err(SolveError::SingularMatrix);
        }
        let pivot_inv = pivot.inv();
        for i in (k + 1)..n {
            let mult = a[(i, k)] * pivot_inv;
            a[(i, k)] = mult;
            for j in (k + 1)..n {
                let update = mult * a[(k, j)];
                a[(i, j)] -= update;
            }
            let bk = b[k];
            b[i] -= mult * bk;
        }
    }

    // back substitution on the upper-triangular remainder
    let mut x = Array1::from_elem(n, T::zero());
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum -= a[(i, j)] * x[j];
        }
        x[i] = sum * a[(i, i)].inv();
    }
    Ok(x)
}

/// Solve `Ax = b` by Gaussian elimination with scaled partial pivoting.
///
/// The pivot at step `k` is the remaining row maximizing
/// `|a[row][k]| / scale[row]`, where `scale[row]` is the largest absolute
/// real part in the row; the first row reaching the maximum wins. Rows are
/// never moved, all access goes through the pivot order.
///
/// Fails with [`SolveError::SingularMatrix`] when every remaining candidate
/// ratio is zero, or at setup when a row's scale is zero.
pub fn solve_scaled_pivot<T: ComplexField>(
    mut a: DenseMatrix<T>,
    mut b: Array1<T>,
) -> Result<Array1<T>, SolveError> {
    let n = check_square(&a)?;
    check_len(n, &b)?;
    let tiny = pivot_tol::<T>();
    let ill_conditioned = T::Real::from_f64(1e-12).unwrap();

    // per-row scale: largest |re| of the row's entries
    let mut scale = Vec::with_capacity(n);
    for i in 0..n {
        let mut s = T::Real::zero();
        for j in 0..n {
            let r = a[(i, j)].re().abs();
            if r > s {
                s = r;
            }
        }
        if s < tiny {
            return Err(SolveError::SingularMatrix);
        }
        scale.push(s);
    }

    let mut order: Vec<usize> = (0..n).collect();
    for k in 0..n {
        // rank remaining candidates; the first maximum wins
        let mut rmax = T::Real::zero();
        let mut index = k;
        for (i, &row) in order.iter().enumerate().skip(k) {
            let ratio = a[(row, k)].norm() / scale[row];
            if ratio > rmax {
                rmax = ratio;
                index = i;
            }
        }
        if rmax < tiny {
            return Err(SolveError::SingularMatrix);
        }
        if rmax < ill_conditioned {
            log::warn!(
                "scaled pivot ratio {:.3e} at step {}, system is ill-conditioned",
                rmax.to_f64().unwrap_or(0.0),
                k
            );
        }
        order.swap(k, index);

        let pk = order[k];
        let pivot = a[(pk, k)];
        let pivot_inv = pivot.inv();
        for i in (k + 1)..n {
            let row = order[i];
            let mult = a[(row, k)] * pivot_inv;
            a[(row, k)] = mult;
            for j in (k + 1)..n {
                let update = mult * a[(pk, j)];
                a[(row, j)] -= update;
            }
            let bk = b[pk];
            b[row] -= mult * bk;
        }
    }

    // permuted back substitution recovers x in natural variable order
    let mut x = Array1::from_elem(n, T::zero());
    for i in (0..n).rev() {
        let row = order[i];
        let mut sum = b[row];
        for j in (i + 1)..n {
            sum -= a[(row, j)] * x[j];
        }
        let diag = a[(row, i)];
        if diag.norm() < tiny {
            return Err(SolveError::SingularMatrix);
        }
        x[i] = sum * diag.inv();
    }
    Ok(x)
}
