//! Dense row-major matrix storage
//!
//! [`DenseMatrix`] is the container every solver in this crate operates on.
//! Entries are stored row-major (`index = row * cols + col`). A matrix with
//! exactly one zero dimension is a 1-D vector whose length is the nonzero
//! dimension; index 0 stays valid along the degenerate axis so vector access
//! can use `row = 0` or `col = 0` uniformly.
//!
//! The public accessors are checked and report [`MatrixError`] instead of
//! logging and continuing. Algorithm code that has already validated its
//! dimensions indexes with `m[(row, col)]`, which panics on misuse like an
//! `ndarray` index.

use crate::traits::ComplexField;
use ndarray::{Array1, Array2};
use num_traits::{One, Zero};
use std::ops::{Index, IndexMut};
use thiserror::Error;

/// Errors reported by the checked container accessors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

/// Dense row-major matrix over a [`ComplexField`] scalar.
///
/// Doubles as a 1-D vector when one dimension is zero; `zeros(0, n)` is the
/// conventional shape for right-hand-side and solution vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T: ComplexField> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: ComplexField> DenseMatrix<T> {
    /// Create a zero-filled matrix.
    ///
    /// When exactly one dimension is zero the backing store holds the other
    /// dimension's worth of entries (the vector form).
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let len = if rows == 0 || cols == 0 {
            rows.max(cols)
        } else {
            rows * cols
        };
        Self {
            rows,
            cols,
            data: vec![T::zero(); len],
        }
    }

    /// Create a length-`n` vector in the degenerate `(0, n)` form.
    pub fn vector(n: usize) -> Self {
        Self::zeros(0, n)
    }

    /// Create an `n` by `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create from an `ndarray` dense array.
    pub fn from_dense(a: &Array2<T>) -> Self {
        let (rows, cols) = (a.nrows(), a.ncols());
        let mut m = Self::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                m[(i, j)] = a[[i, j]];
            }
        }
        m
    }

    /// Convert to an `ndarray` dense array. Degenerate vectors convert to an
    /// array with a zero dimension.
    pub fn to_dense(&self) -> Array2<T> {
        Array2::from_shape_fn((self.rows, self.cols), |(i, j)| self[(i, j)])
    }

    /// Row count
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Column count
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Number of stored entries: `rows * cols`, or the vector length for a
    /// degenerate matrix.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when one dimension is zero and the matrix is a 1-D vector
    pub fn is_vector(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Backing-store offset for `(row, col)`, or `None` when the indices
    /// violate the bounds invariant. Index 0 is accepted along a degenerate
    /// axis only.
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        let row_ok = row < self.rows || (row == 0 && self.rows == 0);
        let col_ok = col < self.cols || (col == 0 && self.cols == 0);
        if !row_ok || !col_ok {
            return None;
        }
        let idx = if self.cols == 0 {
            row
        } else {
            row * self.cols + col
        };
        if idx < self.data.len() { Some(idx) } else { None }
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Read the entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.offset(row, col)
            .map(|idx| self.data[idx])
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Overwrite the entry at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        match self.offset(row, col) {
            Some(idx) => {
                self.data[idx] = value;
                Ok(())
            }
            None => Err(self.out_of_bounds(row, col)),
        }
    }

    /// Extract row `row` as a vector of length `num_cols`.
    pub fn get_row(&self, row: usize) -> Result<Array1<T>, MatrixError> {
        if !(row < self.rows || (row == 0 && self.rows == 0)) {
            return Err(self.out_of_bounds(row, 0));
        }
        Ok(Array1::from_iter((0..self.cols).map(|col| self[(row, col)])))
    }

    /// Extract column `col` as a vector of length `num_rows`.
    pub fn get_col(&self, col: usize) -> Result<Array1<T>, MatrixError> {
        if !(col < self.cols || (col == 0 && self.cols == 0)) {
            return Err(self.out_of_bounds(0, col));
        }
        Ok(Array1::from_iter((0..self.rows).map(|row| self[(row, col)])))
    }

    /// Overwrite row `row` with `values`, which must have length `num_cols`.
    pub fn set_row(&mut self, values: &[T], row: usize) -> Result<(), MatrixError> {
        if !(row < self.rows || (row == 0 && self.rows == 0)) {
            return Err(self.out_of_bounds(row, 0));
        }
        if values.len() != self.cols {
            return Err(MatrixError::LengthMismatch {
                expected: self.cols,
                got: values.len(),
            });
        }
        for (col, &v) in values.iter().enumerate() {
            self[(row, col)] = v;
        }
        Ok(())
    }

    /// Overwrite column `col` with `values`, which must have length `num_rows`.
    pub fn set_col(&mut self, values: &[T], col: usize) -> Result<(), MatrixError> {
        if !(col < self.cols || (col == 0 && self.cols == 0)) {
            return Err(self.out_of_bounds(0, col));
        }
        if values.len() != self.rows {
            return Err(MatrixError::LengthMismatch {
                expected: self.rows,
                got: values.len(),
            });
        }
        for (row, &v) in values.iter().enumerate() {
            self[(row, col)] = v;
        }
        Ok(())
    }

    /// Reinitialize the receiver as an independent deep copy of `source`.
    pub fn copy_from(&mut self, source: &Self) {
        self.rows = source.rows;
        self.cols = source.cols;
        self.data = source.data.clone();
    }

    /// Matrix-vector product `y = A * x`.
    ///
    /// # Panics
    ///
    /// Panics if `x.len() != num_cols`.
    pub fn matvec(&self, x: &Array1<T>) -> Array1<T> {
        assert_eq!(x.len(), self.cols, "input vector size mismatch");
        let mut y = Array1::from_elem(self.rows, T::zero());
        for i in 0..self.rows {
            let mut sum = T::zero();
            for j in 0..self.cols {
                sum += self[(i, j)] * x[j];
            }
            y[i] = sum;
        }
        y
    }

    /// Matrix product `A * B` for 2-D matrices.
    pub fn matmul(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::LengthMismatch {
                expected: self.cols,
                got: other.rows,
            });
        }
        let mut out = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = T::zero();
                for k in 0..self.cols {
                    sum += self[(i, k)] * other[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        Ok(out)
    }

    /// Plain transpose (no conjugation) of a 2-D matrix.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }
}

impl<T: ComplexField> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        let idx = self
            .offset(row, col)
            .unwrap_or_else(|| panic!("index ({row}, {col}) out of bounds"));
        &self.data[idx]
    }
}

impl<T: ComplexField> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let idx = self
            .offset(row, col)
            .unwrap_or_else(|| panic!("index ({row}, {col}) out of bounds"));
        &mut self.data[idx]
    }
}
