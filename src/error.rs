//! # Error reporting for solving linear programs
//!
//! None of these errors are recovered from internally; they are the terminal outcome of a call to
//! `Solver::maximize`.
use thiserror::Error;

/// Errors that can occur while building or solving a linear program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The problem is not in canonical form.
    ///
    /// Constraints need nonnegative coefficients and bounds, such that the all-slack basis is
    /// feasible. The contained `String` is a message for the end user.
    #[error("Malformed problem: {0}")]
    MalformedProblem(String),

    /// The objective can be increased indefinitely.
    ///
    /// Detected when no row qualifies in the ratio test for the entering column.
    #[error("The objective function is unbounded")]
    UnboundedObjective,

    /// `maximize` was called before any constraint was added.
    #[error("No constraints were added to the problem")]
    NoConstraints,

    /// The maximum number of pivots was reached without finding an optimum.
    ///
    /// Without an anti-cycling rule, this typically indicates cycling on a degenerate problem.
    #[error("Iteration limit of {0} pivots reached")]
    IterationLimit(usize),
}

/// Result type for solving operations.
pub type SolveResult<T> = Result<T, SolveError>;
