//! Direct solvers for linear systems
//!
//! This module provides the elimination and factorization routines:
//! - [`solve_naive`] / [`solve_scaled_pivot`]: dense Gaussian elimination
//! - [`solve_tridiagonal`] / [`solve_pentadiagonal`]: O(n) banded elimination
//! - [`lu_factorize`]: Doolittle LU with forward/back substitution
//! - [`ldlt_factorize`]: LDLᵀ for symmetric matrices
//! - [`cholesky_factorize`]: Cholesky for SPD matrices
//!
//! Routines that use their inputs as elimination scratch take them by value;
//! factorizations borrow their input and build fresh factors.

mod banded;
mod cholesky;
mod gauss;
mod ldlt;
mod lu;

pub use banded::{solve_pentadiagonal, solve_tridiagonal};
pub use cholesky::cholesky_factorize;
pub use gauss::{solve_naive, solve_scaled_pivot};
pub use ldlt::{LdltFactors, ldlt_factorize};
pub use lu::{LuFactors, back_substitute, forward_substitute, lu_factorize, update_rhs};

use crate::dense::DenseMatrix;
use crate::traits::ComplexField;
use ndarray::Array1;
use num_traits::FromPrimitive;
use thiserror::Error;

/// Errors shared by every solver and factorization
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("matrix is singular or nearly singular")]
    SingularMatrix,
    #[error("matrix is not positive definite")]
    NotPositiveDefinite,
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// A pivot or diagonal factor below this magnitude is treated as zero.
pub(crate) const PIVOT_TOL: f64 = 1e-30;

pub(crate) fn pivot_tol<T: ComplexField>() -> T::Real {
    T::Real::from_f64(PIVOT_TOL).unwrap()
}

/// Require a square matrix; returns its order.
pub(crate) fn check_square<T: ComplexField>(a: &DenseMatrix<T>) -> Result<usize, SolveError> {
    let n = a.num_rows();
    if a.num_cols() != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            got: a.num_cols(),
        });
    }
    Ok(n)
}

/// Require a vector of length `n`.
pub(crate) fn check_len<T: ComplexField>(n: usize, v: &Array1<T>) -> Result<(), SolveError> {
    if v.len() != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            got: v.len(),
        });
    }
    Ok(())
}
