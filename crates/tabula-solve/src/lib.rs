//! Linear-equation solving for the tabula workspace.
//!
//! This crate provides [`LinearSystem`], an augmented-table representation
//! of a system of linear equations with two solving strategies:
//!
//! - **Cramer's rule**: one determinant quotient per unknown
//! - **Matrix inversion**: the coefficient inverse times the constants
//!
//! Both strategies leave the solution empty (or untouched) when the system
//! is singular; callers inspect [`LinearSystem::x_n`] or
//! [`LinearSystem::solution`] to find out whether a solve succeeded.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod system;

pub use system::LinearSystem;
