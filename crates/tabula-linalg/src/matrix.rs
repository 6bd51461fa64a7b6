//! Dense matrices: arithmetic, adjoint and inversion over a numeric table.
//!
//! [`Matrix`] owns its [`NumericTable`] and forwards the storage surface
//! explicitly rather than inheriting it. The determinant machinery comes
//! from [`crate::det`]; the adjoint fans one rayon task out per cell and
//! joins every task before returning.

use std::fmt;

use num_traits::{One, Zero};
use rayon::prelude::*;

use tabula_scalar::Scalar;

use crate::det::Determinant;
use crate::sequence;
use crate::table::{NumericTable, TableError};

/// A dense M×N matrix backed by a [`NumericTable`].
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    table: NumericTable<T>,
}

impl<T: Scalar> Matrix<T> {
    /// Builds a `num_rows × num_cols` matrix from column-major data.
    ///
    /// Short data is zero-filled and excess entries are ignored, as for
    /// [`NumericTable::new`].
    ///
    /// # Errors
    ///
    /// [`TableError`] when either dimension is zero.
    pub fn new(num_rows: usize, num_cols: usize, data: Vec<T>) -> Result<Self, TableError> {
        Ok(Self {
            table: NumericTable::new(num_rows, num_cols, data)?,
        })
    }

    /// Builds the `order × order` identity matrix.
    ///
    /// # Errors
    ///
    /// [`TableError`] when `order` is zero.
    pub fn identity(order: usize) -> Result<Self, TableError> {
        let mut result = Self::new(order, order, Vec::new())?;
        for i in 1..=order {
            result.set(i, i, T::one());
        }
        Ok(result)
    }

    /// Wraps an existing table.
    #[must_use]
    pub fn from_table(table: NumericTable<T>) -> Self {
        Self { table }
    }

    /// Borrows the backing table.
    #[must_use]
    pub fn table(&self) -> &NumericTable<T> {
        &self.table
    }

    /// Unwraps into the backing table.
    #[must_use]
    pub fn into_table(self) -> NumericTable<T> {
        self.table
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.table.num_rows()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.table.num_cols()
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.table.is_square()
    }

    /// Checks if `other` has the same shape.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.table.same_shape(&other.table)
    }

    /// Returns the `(i, j)` entry, or `None` when out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        self.table.get(i, j)
    }

    /// Overwrites the `(i, j)` entry. Out-of-range indices are ignored.
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.table.set(i, j, value);
    }

    /// Copies row `row`, or `None` when out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<Vec<T>> {
        self.table.row(row)
    }

    /// Overwrites row `row`; ignored on bad index or length mismatch.
    pub fn set_row(&mut self, row: usize, values: &[T]) {
        self.table.set_row(row, values);
    }

    /// Copies column `col`, or `None` when out of range.
    #[must_use]
    pub fn col(&self, col: usize) -> Option<Vec<T>> {
        self.table.col(col)
    }

    /// Overwrites column `col`; ignored on bad index or length mismatch.
    pub fn set_col(&mut self, col: usize, values: &[T]) {
        self.table.set_col(col, values);
    }

    /// Exchanges rows `i` and `j`; no-op on a bad index.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.table.swap_rows(i, j);
    }

    /// Exchanges columns `i` and `j`; no-op on a bad index.
    pub fn swap_cols(&mut self, i: usize, j: usize) {
        self.table.swap_cols(i, j);
    }

    /// Returns the transpose as a fresh matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            table: self.table.transpose(),
        }
    }

    /// Whether the matrix is a single row.
    #[must_use]
    pub fn is_single_row(&self) -> bool {
        self.num_rows() == 1
    }

    /// Whether the matrix is a single column.
    #[must_use]
    pub fn is_single_col(&self) -> bool {
        self.num_cols() == 1
    }

    /// Whether the matrix is square with zeros off the diagonal.
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 1..=self.num_rows() {
            for j in 1..=self.num_cols() {
                if i != j && self.get(i, j).is_some_and(|v| !v.is_zero()) {
                    return false;
                }
            }
        }
        true
    }

    /// Whether the matrix is the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 1..=self.num_rows() {
            for j in 1..=self.num_cols() {
                let expected = if i == j { T::one() } else { T::zero() };
                if self.get(i, j) != Some(expected) {
                    return false;
                }
            }
        }
        true
    }

    /// Whether the matrix equals its transpose.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 1..=self.num_rows() {
            for j in 1..=self.num_cols() {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Elementwise sum. `None` unless the shapes match.
    #[must_use]
    pub fn try_add(&self, right: &Self) -> Option<Self> {
        if !self.same_shape(right) {
            return None;
        }
        let mut result = self.clone();
        for i in 1..=self.num_rows() {
            let sum = sequence::add(&self.row(i)?, &right.row(i)?)?;
            result.set_row(i, &sum);
        }
        Some(result)
    }

    /// Scales every entry by `t`.
    ///
    /// `t == 0` is rejected and yields `None`.
    #[must_use]
    pub fn scale(&self, t: T) -> Option<Self> {
        if t.is_zero() {
            return None;
        }
        let mut result = self.clone();
        for i in 1..=self.num_rows() {
            let line = sequence::scale(&self.row(i)?, t);
            result.set_row(i, &line);
        }
        Some(result)
    }

    /// Matrix product `self × right`.
    ///
    /// `None` unless `self.num_cols()` equals `right.num_rows()`. Each
    /// result cell is the dot product of a row of `self` with a column of
    /// `right`.
    #[must_use]
    pub fn try_mul(&self, right: &Self) -> Option<Self> {
        if self.num_cols() != right.num_rows() {
            return None;
        }
        let mut result = Self::new(self.num_rows(), right.num_cols(), Vec::new()).ok()?;
        for i in 1..=result.num_rows() {
            for j in 1..=result.num_cols() {
                let value = sequence::dot(&self.row(i)?, &right.col(j)?)?;
                result.set(i, j, value);
            }
        }
        Some(result)
    }

    /// Copies the rows into a same-order determinant. `None` unless
    /// square.
    #[must_use]
    pub fn det(&self) -> Option<Determinant<T>> {
        if !self.is_square() {
            return None;
        }
        let mut result = Determinant::new(self.num_rows(), Vec::new()).ok()?;
        for i in 1..=self.num_rows() {
            result.set_row(i, &self.row(i)?);
        }
        Some(result)
    }

    /// The adjugate: cell `(i, j)` receives the signed cofactor of
    /// `(j, i)`, so that [`Matrix::inverse`] is `adjoint() × (1/det)`.
    ///
    /// Each cofactor is evaluated by permutation expansion in its own
    /// rayon task. All N² tasks complete before this returns, and each
    /// writes a distinct cell of the result. `None` unless the matrix is
    /// square with order above 1.
    #[must_use]
    pub fn adjoint(&self) -> Option<Self> {
        let order = self.num_rows();
        if !self.is_square() || order == 1 {
            return None;
        }

        let det = self.det()?;
        let cells: Vec<(usize, usize)> = (1..=order)
            .flat_map(|i| (1..=order).map(move |j| (i, j)))
            .collect();

        let values: Option<Vec<(usize, usize, T)>> = cells
            .into_par_iter()
            .map(|(i, j)| {
                let minor = det.minor(j, i)?;
                let sign = if (i + j) % 2 == 0 { T::one() } else { -T::one() };
                Some((i, j, sign * minor.expansion_value()))
            })
            .collect();

        let mut result = Self::new(order, order, Vec::new()).ok()?;
        for (i, j, value) in values? {
            result.set(i, j, value);
        }
        Some(result)
    }

    /// The inverse, via the adjugate and the elimination determinant.
    ///
    /// `None` when the matrix is not square, the order is 1, or the
    /// determinant is zero.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let det_value = self.det()?.elimination_value();
        if det_value.is_zero() {
            return None;
        }
        self.adjoint()?.scale(T::one() / det_value)
    }

    /// Scales row `row` by `t`. Out-of-range rows are ignored.
    pub fn scale_row(&mut self, row: usize, t: T) {
        let Some(line) = self.row(row) else {
            return;
        };
        self.set_row(row, &sequence::scale(&line, t));
    }

    /// Scales column `col` by `t`. Out-of-range columns are ignored.
    pub fn scale_col(&mut self, col: usize, t: T) {
        let Some(line) = self.col(col) else {
            return;
        };
        self.set_col(col, &sequence::scale(&line, t));
    }

    /// Adds `k` times row `source` to row `target` in place. Out-of-range
    /// indices are ignored.
    pub fn add_scaled_row(&mut self, target: usize, source: usize, k: T) {
        let (Some(target_line), Some(source_line)) = (self.row(target), self.row(source)) else {
            return;
        };
        if let Some(sum) = sequence::add(&target_line, &sequence::scale(&source_line, k)) {
            self.set_row(target, &sum);
        }
    }

    /// Adds `k` times column `source` to column `target` in place.
    /// Out-of-range indices are ignored.
    pub fn add_scaled_col(&mut self, target: usize, source: usize, k: T) {
        let (Some(target_line), Some(source_line)) = (self.col(target), self.col(source)) else {
            return;
        };
        if let Some(sum) = sequence::add(&target_line, &sequence::scale(&source_line, k)) {
            self.set_col(target, &sum);
        }
    }

    /// Reduces toward reduced row-echelon form, in place.
    ///
    /// Forward pass: swap a nonzero pivot onto the diagonal, normalize the
    /// pivot row to a leading 1, eliminate below. A second pass then
    /// eliminates above the pivots. Single-row and single-column matrices
    /// are already reduced and come back unchanged.
    pub fn eliminate(&mut self) {
        if self.is_single_row() || self.is_single_col() {
            return;
        }

        let pivots = self.num_rows().min(self.num_cols());
        for pivot in 1..=pivots {
            if self.get(pivot, pivot).is_some_and(|v| v.is_zero()) {
                for below in pivot + 1..=self.num_rows() {
                    if self.get(below, pivot).is_some_and(|v| !v.is_zero()) {
                        self.swap_rows(pivot, below);
                        break;
                    }
                }
                if self.get(pivot, pivot).is_some_and(|v| v.is_zero()) {
                    continue;
                }
            }

            let Some(pivot_value) = self.get(pivot, pivot) else {
                continue;
            };
            self.scale_row(pivot, T::one() / pivot_value);
            for below in pivot + 1..=self.num_rows() {
                let Some(factor) = self.get(below, pivot) else {
                    continue;
                };
                self.add_scaled_row(below, pivot, -factor);
            }
        }

        for pivot in (2..=pivots).rev() {
            if self.get(pivot, pivot).is_some_and(|v| v.is_zero()) {
                continue;
            }
            for above in (1..pivot).rev() {
                let Some(factor) = self.get(above, pivot) else {
                    continue;
                };
                self.add_scaled_row(above, pivot, -factor);
            }
        }
    }
}

impl<T: Scalar> Default for Matrix<T> {
    /// The 1×1 matrix holding `one()`.
    fn default() -> Self {
        Self {
            table: NumericTable::default(),
        }
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.table, f)
    }
}
