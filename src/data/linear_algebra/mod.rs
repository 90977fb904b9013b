//! # Linear algebra primitives
//!
//! Dense storage used by the simplex tableau.
pub mod matrix;
