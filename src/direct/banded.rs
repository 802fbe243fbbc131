//! Banded elimination for tridiagonal and pentadiagonal systems
//!
//! Systems with a known fixed bandwidth bypass the dense engine: one forward
//! sweep folds the sub-diagonals into the main diagonal and the right-hand
//! side, and a descending sweep reads the solution back, O(n) in total.
//!
//! Diagonals are passed as length-n vectors. Sub-diagonals are indexed by
//! column (`lower[j]` holds `A[j+1][j]`), super-diagonals by row
//! (`upper[i]` holds `A[i][i+1]`); slots outside the band are ignored.
//! Inputs are consumed: the main diagonal, the first super-diagonals and `b`
//! serve as elimination scratch.

use crate::direct::{SolveError, check_len, pivot_tol};
use crate::traits::ComplexField;
use ndarray::Array1;
use num_traits::Zero;

/// Solve a tridiagonal system by the Thomas algorithm.
///
/// `lower[j]` holds `A[j+1][j]`, `diag[i]` holds `A[i][i]`, `upper[i]` holds
/// `A[i][i+1]`. No pivoting is performed; a vanishing diagonal pivot fails
/// with [`SolveError::SingularMatrix`]. O(n).
pub fn solve_tridiagonal<T: ComplexField>(
    lower: Array1<T>,
    mut diag: Array1<T>,
    upper: Array1<T>,
    mut b: Array1<T>,
) -> Result<Array1<T>, SolveError> {
    let n = diag.len();
    check_len(n, &lower)?;
    check_len(n, &upper)?;
    check_len(n, &b)?;
    if n == 0 {
        return Ok(Array1::from_elem(0, T::zero()));
    }
    let tiny = pivot_tol::<T>();

    // forward sweep folds the sub-diagonal into diag and b
    for i in 1..n {
        let prev = diag[i - 1];
        if prev.norm() < tiny {
            return Err(SolveError::SingularMatrix);
        }
        let mult = lower[i - 1] * prev.inv();
        let u_prev = upper[i - 1];
        diag[i] -= mult * u_prev;
        let b_prev = b[i - 1];
        b[i] -= mult * b_prev;
    }

    let last = diag[n - 1];
    if last.norm() < tiny {
        return Err(SolveError::SingularMatrix);
    }

    // descending sweep, row n-1 first, down to row 0 inclusive
    let mut x = Array1::from_elem(n, T::zero());
    x[n - 1] = b[n - 1] * last.inv();
    for i in (0..n - 1).rev() {
        x[i] = (b[i] - upper[i] * x[i + 1]) * diag[i].inv();
    }
    Ok(x)
}

/// Solve a pentadiagonal system by banded Gaussian elimination.
///
/// `sub2[j]` holds `A[j+2][j]`, `sub1[j]` holds `A[j+1][j]`, `diag[i]` holds
/// `A[i][i]`, `super1[i]` holds `A[i][i+1]`, `super2[i]` holds `A[i][i+2]`.
///
/// Each forward step carries two multipliers, one per sub-diagonal, so both
/// entries below the pivot are cleared in a single sweep. The descending
/// sweep resolves the last two unknowns first, then combines both
/// super-diagonals at each remaining row down to row 0 inclusive. O(n).
pub fn solve_pentadiagonal<T: ComplexField>(
    sub2: Array1<T>,
    mut sub1: Array1<T>,
    mut diag: Array1<T>,
    mut super1: Array1<T>,
    super2: Array1<T>,
    mut b: Array1<T>,
) -> Result<Array1<T>, SolveError> {
    let n = diag.len();
    check_len(n, &sub2)?;
    check_len(n, &sub1)?;
    check_len(n, &super1)?;
    check_len(n, &super2)?;
    check_len(n, &b)?;
    if n == 0 {
        return Ok(Array1::from_elem(0, T::zero()));
    }
    let tiny = pivot_tol::<T>();

    for i in 1..n {
        let prev = diag[i - 1];
        if prev.norm() < tiny {
            return Err(SolveError::SingularMatrix);
        }
        let prev_inv = prev.inv();
        let c_prev = super1[i - 1];
        let b_prev = b[i - 1];

        // clear row i's first sub-diagonal entry against row i-1
        let m1 = sub1[i - 1] * prev_inv;
        diag[i] -= m1 * c_prev;
        if i + 1 < n {
            let f_prev = super2[i - 1];
            super1[i] -= m1 * f_prev;
        }
        b[i] -= m1 * b_prev;

        // clear row i+1's second sub-diagonal entry against the same pivot row
        if i + 1 < n {
            let m2 = sub2[i - 1] * prev_inv;
            let f_prev = super2[i - 1];
            sub1[i] -= m2 * c_prev;
            diag[i + 1] -= m2 * f_prev;
            b[i + 1] -= m2 * b_prev;
        }
    }

    let last = diag[n - 1];
    if last.norm() < tiny {
        return Err(SolveError::SingularMatrix);
    }

    // last two unknowns close the recursion, then both super-diagonals feed
    // every remaining row down to row 0 inclusive
    let mut x = Array1::from_elem(n, T::zero());
    x[n - 1] = b[n - 1] * last.inv();
    if n >= 2 {
        x[n - 2] = (b[n - 2] - super1[n - 2] * x[n - 1]) * diag[n - 2].inv();
    }
    for i in (0..n.saturating_sub(2)).rev() {
        x[i] = (b[i] - super1[i] * x[i + 1] - super2[i] * x[i + 2]) * diag[i].inv();
    }
    Ok(x)
}
