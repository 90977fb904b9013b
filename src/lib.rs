//! # A dense tableau linear program solver
//!
//! Linear programs in canonical form, `maximize c^T x` subject to `Ax <= b` and `x >= 0` with
//! nonnegative `A` and `b`, are solved using the Simplex Method as described in the book
//! Combinatorial Optimization by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! ```
//! use simplex_tableau::{Constraint, Objective, Solver, Term};
//!
//! let mut solver = Solver::new();
//! solver.add_constraint(Constraint::new(vec![Term::new("x"), Term::new("y")], 12f64))?;
//! solver.add_constraint(Constraint::new(vec![Term::with_coefficient(2f64, "x"), Term::new("y")], 16f64))?;
//!
//! let objective = Objective::new(vec![Term::with_coefficient(40f64, "x"), Term::with_coefficient(30f64, "y")]);
//! let solution = solver.maximize(&objective)?;
//! assert_eq!(solution.objective_value, 400f64);
//! assert_eq!(solution.value_of("x"), Some(&4f64));
//! # Ok::<(), simplex_tableau::SolveError>(())
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;
pub mod io;
pub mod solver;

pub use crate::algorithm::SimplexOptions;
pub use crate::data::linear_program::elements::{Constraint, Objective, Term};
pub use crate::data::linear_program::solution::Solution;
pub use crate::error::{SolveError, SolveResult};
pub use crate::solver::Solver;

#[cfg(test)]
mod tests;
