//! # Tabula
//!
//! A small numerical linear-algebra library built on a column-major
//! numeric table.
//!
//! ## Features
//!
//! - **Numeric tables**: bounds-checked, 1-based row/column/element access
//! - **Determinants**: permutation expansion and Gaussian elimination,
//!   two independent algorithms that agree up to floating-point error
//! - **Matrices**: arithmetic, a rayon-parallel adjoint, inversion and
//!   row-echelon reduction
//! - **Linear systems**: Cramer's rule and inverse-matrix solving over an
//!   augmented table
//!
//! ## Quick Start
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! // Column-major: rows are [3, -2] and [2, 1].
//! let det = Determinant::new(2, vec![3.0, 2.0, -2.0, 1.0]).unwrap();
//! assert_eq!(det.expansion_value(), 7.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tabula_linalg as linalg;
pub use tabula_scalar as scalar;
pub use tabula_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tabula_linalg::{Determinant, Matrix, NumericTable, TableError};
    pub use tabula_scalar::Scalar;
    pub use tabula_solve::LinearSystem;
}
