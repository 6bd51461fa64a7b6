//! Square determinants with two independent evaluation algorithms.
//!
//! [`Determinant::expansion_value`] is the textbook Leibniz definition:
//! every permutation of the column indices contributes a signed product,
//! O(N!·N) in total. [`Determinant::elimination_value`] triangularizes a
//! copy by Gaussian elimination and multiplies the diagonal, O(N³). The
//! first is the correctness reference for the second; the tests hold the
//! two to agreement.

use std::fmt;

use num_traits::{One, Zero};

use tabula_scalar::Scalar;

use crate::sequence;
use crate::table::{NumericTable, TableError};

/// Counts the inversions of `sequence`: the pairs that appear out of
/// natural order. The parity of this count signs a permutation's term in
/// the Leibniz expansion.
#[must_use]
pub fn inversions(sequence: &[usize]) -> usize {
    let mut count = 0;
    for (index, value) in sequence.iter().enumerate() {
        count += sequence[..index]
            .iter()
            .filter(|&&earlier| earlier > *value)
            .count();
    }
    count
}

/// Advances `sequence` to its lexicographic successor in place.
///
/// Returns `false` once `sequence` was the final (descending) permutation,
/// leaving it sorted ascending again.
pub fn next_permutation(sequence: &mut [usize]) -> bool {
    let len = sequence.len();
    if len < 2 {
        return false;
    }

    let mut pivot = len - 1;
    while pivot > 0 && sequence[pivot - 1] >= sequence[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        sequence.reverse();
        return false;
    }

    let mut successor = len - 1;
    while sequence[successor] <= sequence[pivot - 1] {
        successor -= 1;
    }
    sequence.swap(pivot - 1, successor);
    sequence[pivot..].reverse();
    true
}

/// A square determinant backed by a [`NumericTable`].
#[derive(Clone, Debug, PartialEq)]
pub struct Determinant<T> {
    table: NumericTable<T>,
}

impl<T: Scalar> Determinant<T> {
    /// Builds an order-`order` determinant from column-major data.
    ///
    /// Short data is zero-filled and excess entries are ignored, as for
    /// [`NumericTable::new`].
    ///
    /// # Errors
    ///
    /// [`TableError`] when `order` is zero.
    pub fn new(order: usize, data: Vec<T>) -> Result<Self, TableError> {
        Ok(Self {
            table: NumericTable::new(order, order, data)?,
        })
    }

    /// Returns the order (rows and columns alike).
    #[must_use]
    pub fn order(&self) -> usize {
        self.table.num_rows()
    }

    /// Resizes both dimensions to `order`, zero-filling new cells. No-op
    /// on zero.
    pub fn resize(&mut self, order: usize) {
        self.table.resize_rows(order);
        self.table.resize_cols(order);
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

    /// Returns the transpose. A determinant equals its transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            table: self.table.transpose(),
        }
    }

    /// The minor `M(i, j)`: this determinant with row `i` and column `j`
    /// deleted.
    ///
    /// `None` when either index is out of range or the order is 1.
    #[must_use]
    pub fn minor(&self, i: usize, j: usize) -> Option<Self> {
        let order = self.order();
        if i < 1 || i > order || j < 1 || j > order || order == 1 {
            return None;
        }

        let mut result = Self::new(order - 1, Vec::new()).ok()?;
        let mut target = 1;
        for row in 1..=order {
            if row == i {
                continue;
            }
            let mut line = self.row(row)?;
            line.remove(j - 1);
            result.set_row(target, &line);
            target += 1;
        }
        Some(result)
    }

    /// The minor `M(i, j)` with every row negated when `(i + j)` is odd,
    /// unchanged when even.
    ///
    /// Fails under the same conditions as [`Determinant::minor`].
    #[must_use]
    pub fn cofactor_minor(&self, i: usize, j: usize) -> Option<Self> {
        let mut result = self.minor(i, j)?;
        if (i + j) % 2 == 1 {
            for row in 1..=result.order() {
                let line = result.row(row)?;
                result.set_row(row, &sequence::scale(&line, -T::one()));
            }
        }
        Some(result)
    }

    /// Evaluates by the Leibniz permutation expansion.
    ///
    /// Enumerates all N! permutations of the column indices in
    /// lexicographic order, signs each term by its inversion count and
    /// short-circuits a term as soon as a zero factor appears.
    #[must_use]
    pub fn expansion_value(&self) -> T {
        let Some(rows) = self.rows() else {
            return T::zero();
        };
        if self.order() == 1 {
            return rows[0][0];
        }

        let mut columns: Vec<usize> = (0..self.order()).collect();
        let mut result = T::zero();
        loop {
            let mut term = if inversions(&columns) % 2 == 0 {
                T::one()
            } else {
                -T::one()
            };
            for (row, &col) in columns.iter().enumerate() {
                let factor = rows[row][col];
                if factor.is_zero() {
                    term = T::zero();
                    break;
                }
                term = term * factor;
            }
            result = result + term;
            if !next_permutation(&mut columns) {
                break;
            }
        }
        result
    }

    /// Forward Gaussian elimination, in place.
    ///
    /// A zero pivot is repaired by swapping in the first row below with a
    /// nonzero entry in the pivot column; the displaced row is negated so
    /// the determinant value survives the swap. A column with no such row
    /// is skipped, leaving a zero on the diagonal. Rows below each pivot
    /// are cleared by adding a scaled pivot row. The result has enough
    /// upper-triangular structure for the diagonal-product evaluation; it
    /// is not a full row-echelon reduction.
    pub fn eliminate(&mut self) {
        let order = self.order();
        if order == 1 {
            return;
        }

        for pivot in 1..order {
            if self.get(pivot, pivot).is_some_and(|v| v.is_zero()) {
                for below in pivot + 1..=order {
                    if self.get(below, pivot).is_some_and(|v| !v.is_zero()) {
                        self.swap_rows(pivot, below);
                        if let Some(displaced) = self.row(below) {
                            self.set_row(below, &sequence::scale(&displaced, -T::one()));
                        }
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
            let Some(pivot_row) = self.row(pivot) else {
                continue;
            };
            for below in pivot + 1..=order {
                let Some(factor) = self.get(below, pivot) else {
                    continue;
                };
                let Some(line) = self.row(below) else {
                    continue;
                };
                let scaled = sequence::scale(&pivot_row, -factor / pivot_value);
                if let Some(sum) = sequence::add(&scaled, &line) {
                    self.set_row(below, &sum);
                }
            }
        }
    }

    /// Evaluates by elimination: triangularize a copy, multiply the
    /// diagonal.
    ///
    /// Agrees with [`Determinant::expansion_value`] up to floating-point
    /// error.
    #[must_use]
    pub fn elimination_value(&self) -> T {
        if self.order() == 1 {
            return self.get(1, 1).unwrap_or_else(T::zero);
        }

        let mut reduced = self.clone();
        reduced.eliminate();
        (1..=self.order()).fold(T::one(), |acc, i| {
            acc * reduced.get(i, i).unwrap_or_else(T::zero)
        })
    }

    /// Whether the determinant evaluates to zero, by the elimination path.
    ///
    /// Two proportional rows force a zero diagonal entry, so this also
    /// covers the degenerate-row case.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.elimination_value().is_zero()
    }

    fn rows(&self) -> Option<Vec<Vec<T>>> {
        (1..=self.order()).map(|row| self.row(row)).collect()
    }
}

impl<T: Scalar> Default for Determinant<T> {
    /// The order-1 determinant holding `one()`.
    fn default() -> Self {
        Self {
            table: NumericTable::default(),
        }
    }
}

impl<T: Scalar> fmt::Display for Determinant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.table, f)
    }
}
