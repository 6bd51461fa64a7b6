//! Augmented systems of linear equations.
//!
//! A [`LinearSystem`] holds an `M × N` augmented table: the first `N-1`
//! columns are the coefficients of the unknowns, the last column the
//! constants. Solving populates a solution vector that stays empty until a
//! solve succeeds.

use num_traits::{One, Zero};

use tabula_linalg::{Determinant, Matrix, NumericTable, TableError};
use tabula_scalar::Scalar;

/// A system of `M` linear equations in `N-1` unknowns.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSystem<T> {
    table: NumericTable<T>,
    solution: Vec<T>,
}

impl<T: Scalar> LinearSystem<T> {
    /// Builds a system from a column-major `num_rows × num_cols` augmented
    /// table.
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
            solution: Vec::new(),
        })
    }

    /// Returns the number of equations.
    #[must_use]
    pub fn num_equations(&self) -> usize {
        self.table.num_rows()
    }

    /// Returns the number of unknowns.
    #[must_use]
    pub fn num_unknowns(&self) -> usize {
        self.table.num_cols().saturating_sub(1)
    }

    /// Borrows the augmented table.
    #[must_use]
    pub fn table(&self) -> &NumericTable<T> {
        &self.table
    }

    /// Solves by Cramer's rule.
    ///
    /// No-op when the system has one equation or fewer. Clears the
    /// solution, then requires a square coefficient block (`M == N-1`) and
    /// a nonzero coefficient determinant; a singular or misshapen system
    /// leaves the solution empty, which is the caller's signal. Each
    /// unknown is the quotient of the constants-substituted determinant
    /// and the coefficient determinant; the substituted column is restored
    /// before moving to the next unknown.
    pub fn solve_cramer(&mut self) {
        let num_rows = self.table.num_rows();
        let num_cols = self.table.num_cols();
        if num_rows <= 1 {
            return;
        }

        self.solution.clear();
        if num_cols < 2 || num_rows != num_cols - 1 {
            return;
        }

        let order = num_cols - 1;
        let Ok(mut coefficient) = Determinant::new(order, Vec::new()) else {
            return;
        };
        for col in 1..=order {
            let Some(column) = self.table.col(col) else {
                return;
            };
            coefficient.set_col(col, &column);
        }

        let denominator = coefficient.expansion_value();
        if denominator.is_zero() {
            return;
        }

        let Some(constants) = self.table.col(num_cols) else {
            return;
        };
        let mut augmented = coefficient;
        for unknown in 1..=order {
            augmented.set_col(unknown, &constants);
            self.solution
                .push(augmented.expansion_value() / denominator);

            let Some(original) = self.table.col(unknown) else {
                return;
            };
            augmented.set_col(unknown, &original);
        }
    }

    /// Solves via the inverse of the coefficient matrix.
    ///
    /// No-op when the system has one equation or fewer. Builds the
    /// `M × (N-1)` coefficient matrix and the constants column and
    /// computes `inverse × constants`; when the coefficient matrix is
    /// singular or not invertible the previous solution is left untouched.
    pub fn solve_inverse(&mut self) {
        let num_rows = self.table.num_rows();
        let num_cols = self.table.num_cols();
        if num_rows <= 1 || num_cols < 2 {
            return;
        }

        let Ok(mut coefficient) = Matrix::new(num_rows, num_cols - 1, Vec::new()) else {
            return;
        };
        for col in 1..num_cols {
            let Some(column) = self.table.col(col) else {
                return;
            };
            coefficient.set_col(col, &column);
        }

        let Some(constants_column) = self.table.col(num_cols) else {
            return;
        };
        let Ok(constants) = Matrix::new(num_rows, 1, constants_column) else {
            return;
        };

        let Some(inverse) = coefficient.inverse() else {
            return;
        };
        let Some(product) = inverse.try_mul(&constants) else {
            return;
        };
        let Some(solution) = product.col(1) else {
            return;
        };
        self.solution = solution;
    }

    /// Returns the `n`-th (1-based) unknown's value.
    ///
    /// `None` before a successful solve or when `n` is outside
    /// `[1, solved_count]`.
    #[must_use]
    pub fn x_n(&self, n: usize) -> Option<T> {
        if n < 1 || n > self.solution.len() {
            return None;
        }
        Some(self.solution[n - 1])
    }

    /// The solved unknowns in order; empty before a successful solve.
    #[must_use]
    pub fn solution(&self) -> &[T] {
        &self.solution
    }
}

impl<T: Scalar> Default for LinearSystem<T> {
    /// The single-equation system `1·x = 0`.
    fn default() -> Self {
        Self {
            table: NumericTable::new(1, 2, vec![T::one(), T::zero()]).unwrap_or_default(),
            solution: Vec::new(),
        }
    }
}
