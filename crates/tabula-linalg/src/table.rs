//! Column-major numeric tables with bounds-checked 1-based accessors.
//!
//! [`NumericTable`] is the storage substrate of the crate: determinants and
//! matrices own one and delegate every element access to it. External
//! indices are 1-based and translated exactly once, in `offset`, so no
//! other code performs index arithmetic.

use std::fmt;

use num_traits::{One, Zero};
use thiserror::Error;

use tabula_scalar::Scalar;

/// Errors raised when constructing a table.
///
/// A zero dimension is the one fatal case; shape and range failures after
/// construction are reported as `Option` returns or silent no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    /// The requested row count was zero.
    #[error("table must have at least one row")]
    ZeroRows,
    /// The requested column count was zero.
    #[error("table must have at least one column")]
    ZeroCols,
}

/// A dense 2-D numeric table, stored column-major.
///
/// Rows run over `1..=num_rows` and columns over `1..=num_cols`. Readers
/// may share a table freely across threads; a writer takes `&mut self` and
/// therefore excludes all other access to the same instance. Atomic
/// multi-step updates across tables are the caller's responsibility.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericTable<T> {
    /// Entries in column-major order: `(col-1) * num_rows + (row-1)`.
    data: Vec<T>,
    num_rows: usize,
    num_cols: usize,
}

impl<T: Scalar> NumericTable<T> {
    /// Builds a `num_rows × num_cols` table from column-major data.
    ///
    /// Short data is zero-filled up to `num_rows * num_cols`; excess
    /// entries are ignored.
    ///
    /// # Errors
    ///
    /// [`TableError`] when either dimension is zero.
    pub fn new(num_rows: usize, num_cols: usize, mut data: Vec<T>) -> Result<Self, TableError> {
        if num_rows == 0 {
            return Err(TableError::ZeroRows);
        }
        if num_cols == 0 {
            return Err(TableError::ZeroCols);
        }
        data.resize(num_rows * num_cols, T::zero());
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the table is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Checks if `other` has the same shape.
    #[must_use]
    pub fn same_shape(&self, other: &Self) -> bool {
        self.num_rows == other.num_rows && self.num_cols == other.num_cols
    }

    /// Translates a valid 1-based `(row, col)` pair into a storage index.
    ///
    /// The single translation point between external indices and storage.
    fn offset(&self, row: usize, col: usize) -> usize {
        (col - 1) * self.num_rows + (row - 1)
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        (1..=self.num_rows).contains(&row) && (1..=self.num_cols).contains(&col)
    }

    /// Returns the `(row, col)` entry, or `None` when either index is out
    /// of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(self.data[self.offset(row, col)])
    }

    /// Overwrites the `(row, col)` entry. Out-of-range indices are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if !self.in_bounds(row, col) {
            return;
        }
        let index = self.offset(row, col);
        self.data[index] = value;
    }

    /// Copies row `row` into a fresh vector, or `None` when out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<Vec<T>> {
        if row < 1 || row > self.num_rows {
            return None;
        }
        (1..=self.num_cols).map(|col| self.get(row, col)).collect()
    }

    /// Copies column `col` into a fresh vector, or `None` when out of
    /// range.
    #[must_use]
    pub fn col(&self, col: usize) -> Option<Vec<T>> {
        if col < 1 || col > self.num_cols {
            return None;
        }
        (1..=self.num_rows).map(|row| self.get(row, col)).collect()
    }

    /// Overwrites row `row` from `values`.
    ///
    /// Silently ignored when the row is out of range or `values` does not
    /// match the column count; callers check postconditions.
    pub fn set_row(&mut self, row: usize, values: &[T]) {
        if row < 1 || row > self.num_rows {
            return;
        }
        if values.len() != self.num_cols {
            return;
        }
        for (col, &value) in values.iter().enumerate() {
            self.set(row, col + 1, value);
        }
    }

    /// Overwrites column `col` from `values`.
    ///
    /// Silently ignored when the column is out of range or `values` does
    /// not match the row count.
    pub fn set_col(&mut self, col: usize, values: &[T]) {
        if col < 1 || col > self.num_cols {
            return;
        }
        if values.len() != self.num_rows {
            return;
        }
        for (row, &value) in values.iter().enumerate() {
            self.set(row + 1, col, value);
        }
    }

    /// Exchanges rows `i` and `j`. No-op when either index is out of range.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        let (Some(row_i), Some(row_j)) = (self.row(i), self.row(j)) else {
            return;
        };
        self.set_row(i, &row_j);
        self.set_row(j, &row_i);
    }

    /// Exchanges columns `i` and `j`. No-op when either index is out of
    /// range.
    pub fn swap_cols(&mut self, i: usize, j: usize) {
        let (Some(col_i), Some(col_j)) = (self.col(i), self.col(j)) else {
            return;
        };
        self.set_col(i, &col_j);
        self.set_col(j, &col_i);
    }

    /// Returns the transpose as a fresh `N × M` table.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self {
            data: vec![T::zero(); self.data.len()],
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        };
        for row in 1..=self.num_rows {
            for col in 1..=self.num_cols {
                if let Some(value) = self.get(row, col) {
                    result.set(col, row, value);
                }
            }
        }
        result
    }

    /// Resizes the row count, zero-filling new cells. No-op on zero.
    ///
    /// Expressed as transpose → column resize → transpose back to reuse
    /// the column code path, at the cost of an extra O(M·N) copy.
    pub fn resize_rows(&mut self, num_rows: usize) {
        if num_rows == 0 {
            return;
        }
        let mut flipped = self.transpose();
        flipped.resize_cols(num_rows);
        *self = flipped.transpose();
    }

    /// Resizes the column count, zero-filling new cells. No-op on zero.
    pub fn resize_cols(&mut self, num_cols: usize) {
        if num_cols == 0 {
            return;
        }
        self.num_cols = num_cols;
        self.data.resize(self.num_rows * self.num_cols, T::zero());
    }
}

impl<T: Scalar> Default for NumericTable<T> {
    /// The 1×1 table holding `one()`: the degenerate-but-valid state that
    /// `std::mem::take` leaves behind.
    fn default() -> Self {
        Self {
            data: vec![T::one()],
            num_rows: 1,
            num_cols: 1,
        }
    }
}

impl<T: Scalar> fmt::Display for NumericTable<T> {
    /// The debug text dump: a `matrix {M} {N}` header, then one line per
    /// row with each element followed by a space. Write-only; the crate
    /// never parses it back.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "matrix {} {}", self.num_rows, self.num_cols)?;
        for row in 1..=self.num_rows {
            for col in 1..=self.num_cols {
                if let Some(value) = self.get(row, col) {
                    write!(f, "{value} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_2x3() -> NumericTable<f64> {
        // Column-major: col1 = (1, 2), col2 = (3, 4), col3 = (5, 6)
        NumericTable::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
    }

    #[test]
    fn zero_dimension_is_an_error() {
        assert_eq!(
            NumericTable::<f64>::new(0, 3, Vec::new()),
            Err(TableError::ZeroRows)
        );
        assert_eq!(
            NumericTable::<f64>::new(3, 0, Vec::new()),
            Err(TableError::ZeroCols)
        );
    }

    #[test]
    fn short_data_is_zero_filled() {
        let table = NumericTable::new(2, 3, vec![2.0]).unwrap();
        assert_eq!(table.get(1, 1), Some(2.0));
        assert_eq!(table.get(2, 3), Some(0.0));
    }

    #[test]
    fn excess_data_is_ignored() {
        let table = NumericTable::new(1, 2, vec![1.0, 2.0, 9.0, 9.0]).unwrap();
        assert_eq!(table.row(1), Some(vec![1.0, 2.0]));
    }

    #[test]
    fn get_set_round_trip() {
        let mut table = table_2x3();
        table.set(2, 3, 42.0);
        assert_eq!(table.get(2, 3), Some(42.0));
    }

    #[test]
    fn out_of_range_access() {
        let mut table = table_2x3();
        assert_eq!(table.get(0, 1), None);
        assert_eq!(table.get(3, 1), None);
        assert_eq!(table.get(1, 4), None);

        let before = table.clone();
        table.set(0, 1, 9.0);
        table.set(3, 1, 9.0);
        assert_eq!(table, before);
    }

    #[test]
    fn rows_and_cols_are_copies() {
        let table = table_2x3();
        assert_eq!(table.row(1), Some(vec![1.0, 3.0, 5.0]));
        assert_eq!(table.row(2), Some(vec![2.0, 4.0, 6.0]));
        assert_eq!(table.col(2), Some(vec![3.0, 4.0]));
        assert_eq!(table.row(3), None);
        assert_eq!(table.col(4), None);
    }

    #[test]
    fn mismatched_set_row_is_a_no_op() {
        let mut table = table_2x3();
        let before = table.clone();
        table.set_row(1, &[1.0, 2.0]);
        table.set_row(9, &[1.0, 2.0, 3.0]);
        table.set_col(1, &[1.0, 2.0, 3.0]);
        table.set_col(9, &[1.0, 2.0]);
        assert_eq!(table, before);
    }

    #[test]
    fn swap_rows_and_cols() {
        let mut table = table_2x3();
        table.swap_rows(1, 2);
        assert_eq!(table.row(1), Some(vec![2.0, 4.0, 6.0]));
        assert_eq!(table.row(2), Some(vec![1.0, 3.0, 5.0]));

        table.swap_cols(1, 3);
        assert_eq!(table.col(1), Some(vec![6.0, 5.0]));

        let before = table.clone();
        table.swap_rows(1, 7);
        table.swap_cols(0, 2);
        assert_eq!(table, before);
    }

    #[test]
    fn transpose_round_trip() {
        let table = table_2x3();
        let flipped = table.transpose();
        assert_eq!(flipped.num_rows(), 3);
        assert_eq!(flipped.num_cols(), 2);
        assert_eq!(flipped.get(3, 1), Some(5.0));
        assert_eq!(flipped.transpose(), table);
    }

    #[test]
    fn resize_cols_zero_fills() {
        let mut table = table_2x3();
        table.resize_cols(4);
        assert_eq!(table.num_cols(), 4);
        assert_eq!(table.col(4), Some(vec![0.0, 0.0]));

        table.resize_cols(2);
        assert_eq!(table.num_cols(), 2);
        assert_eq!(table.row(1), Some(vec![1.0, 3.0]));

        table.resize_cols(0);
        assert_eq!(table.num_cols(), 2);
    }

    #[test]
    fn resize_rows_zero_fills() {
        let mut table = table_2x3();
        table.resize_rows(3);
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.row(3), Some(vec![0.0, 0.0, 0.0]));
        assert_eq!(table.row(1), Some(vec![1.0, 3.0, 5.0]));

        table.resize_rows(0);
        assert_eq!(table.num_rows(), 3);
    }

    #[test]
    fn taken_table_is_the_default() {
        let mut table = table_2x3();
        let moved = std::mem::take(&mut table);
        assert_eq!(moved, table_2x3());
        assert_eq!(table.num_rows(), 1);
        assert_eq!(table.num_cols(), 1);
        assert_eq!(table.get(1, 1), Some(1.0));
    }

    #[test]
    fn dump_format() {
        let table = table_2x3();
        assert_eq!(table.to_string(), "matrix 2 3\n1 3 5 \n2 4 6 \n");
    }

    #[test]
    fn shape_predicates() {
        let table = table_2x3();
        assert!(!table.is_square());
        assert!(table.same_shape(&table_2x3()));
        assert!(NumericTable::<f64>::new(2, 2, Vec::new())
            .unwrap()
            .is_square());
    }
}
