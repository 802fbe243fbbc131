//! Direct solvers for dense and banded linear systems
//!
//! This crate provides a dense matrix container and a family of direct
//! solvers for `Ax = b` over real and complex scalar fields:
//!
//! - **Dense elimination**: unpivoted and scaled-partial-pivoting Gaussian
//!   elimination
//! - **Banded elimination**: O(n) tridiagonal (Thomas) and pentadiagonal
//!   solvers
//! - **Triangular factorizations**: Doolittle LU, LDLᵀ and Cholesky, with
//!   forward/back substitution for factor reuse
//! - **Generic scalar types**: works with `Complex64`, `Complex32`, `f64`,
//!   `f32`
//!
//! Every failure (out-of-bounds access, length mismatch, singular pivot,
//! non-positive-definite input) is a typed error, never a logged-and-ignored
//! condition or a propagated NaN.
//!
//! Solvers use their inputs as elimination scratch, so the destructive ones
//! take `a` and `b` by value; clone first if the originals are still needed.
//!
//! # Example
//!
//! ```ignore
//! use dense_solvers::{DenseMatrix, solve_scaled_pivot};
//! use ndarray::array;
//!
//! let a = DenseMatrix::from_dense(&array![[4.0, 1.0], [1.0, 3.0]]);
//! let b = array![1.0, 2.0];
//! let x = solve_scaled_pivot(a, b)?;
//! ```

pub mod dense;
pub mod direct;
pub mod traits;

// Re-export the container
pub use dense::{DenseMatrix, MatrixError};

// Re-export solvers and factorizations
pub use direct::{
    LdltFactors, LuFactors, SolveError, back_substitute, cholesky_factorize, forward_substitute,
    ldlt_factorize, lu_factorize, solve_naive, solve_pentadiagonal, solve_scaled_pivot,
    solve_tridiagonal, update_rhs,
};

pub use traits::ComplexField;
