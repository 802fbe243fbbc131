//! LDLᵀ factorization for symmetric matrices
//!
//! Splits a symmetric `A` into a unit-lower-triangular `L` and a diagonal
//! `D` (stored as a vector) with `A = L·diag(D)·Lᵀ`. The plain transpose is
//! used throughout, so for complex inputs this is the complex-symmetric
//! variant, not a Hermitian factorization. Only the lower triangle of `a`
//! is read.

use crate::dense::DenseMatrix;
use crate::direct::{SolveError, check_square, pivot_tol};
use crate::traits::ComplexField;
use ndarray::Array1;
use num_traits::Zero;

/// LDLᵀ factors: unit-lower-triangular `l` and the diagonal `d`
#[derive(Debug, Clone)]
pub struct LdltFactors<T: ComplexField> {
    pub l: DenseMatrix<T>,
    pub d: Array1<T>,
}

impl<T: ComplexField> LdltFactors<T> {
    /// Matrix order
    pub fn n(&self) -> usize {
        self.d.len()
    }

    /// Rebuild `L·diag(d)·Lᵀ`, mostly useful to validate the factors.
    pub fn reconstruct(&self) -> DenseMatrix<T> {
        let n = self.n();
        let mut ld = DenseMatrix::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                ld[(i, j)] = self.l[(i, j)] * self.d[j];
            }
        }
        // (L·D)·Lᵀ is square by construction
        ld.matmul(&self.l.transpose()).unwrap()
    }
}

/// Compute the LDLᵀ factorization of a symmetric matrix.
///
/// Column `j`: `d[j] = a[j][j] - Σ_{v<j} d[v]·l[j][v]²`, then for `i > j`
/// `l[i][j] = (a[i][j] - Σ_{v<j} l[i][v]·d[v]·l[j][v]) / d[j]`.
/// Fails with [`SolveError::SingularMatrix`] when a `d[j]` vanishes.
pub fn ldlt_factorize<T: ComplexField>(a: &DenseMatrix<T>) -> Result<LdltFactors<T>, SolveError> {
    let n = check_square(a)?;
    let tiny = pivot_tol::<T>();

    let mut l = DenseMatrix::identity(n);
    let mut d = Array1::from_elem(n, T::zero());

    for j in 0..n {
        let mut sum = a[(j, j)];
        for v in 0..j {
            let ljv = l[(j, v)];
            sum -= d[v] * ljv * ljv;
        }
        if sum.norm() < tiny {
            return Err(SolveError::SingularMatrix);
        }
        d[j] = sum;
        let d_inv = sum.inv();

        for i in (j + 1)..n {
            let mut sum = a[(i, j)];
            for v in 0..j {
                sum -= l[(i, v)] * d[v] * l[(j, v)];
            }
            l[(i, j)] = sum * d_inv;
        }
    }

    Ok(LdltFactors { l, d })
}
