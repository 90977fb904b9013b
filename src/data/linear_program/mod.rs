//! # Representing linear programs
//!
//! Linear programs are described by labeled terms: an objective function to maximize and a list of
//! `<=` constraints. Before solving, every variable is assigned a column index.
pub mod elements;
pub mod solution;
pub mod variables;
