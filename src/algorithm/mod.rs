//! # Algorithms
pub mod simplex;

/// A linear program in canonical form is either unbounded or has a finite optimum.
///
/// It can't be infeasible: the all-slack basis is a feasible solution. This is determined as the
/// result of an algorithm.
#[allow(missing_docs)]
#[derive(Eq, PartialEq, Debug)]
pub enum OptimizationResult<F> {
    /// Values of the basic variables as (column, value) tuples, sorted by column.
    FiniteOptimum(Vec<(usize, F)>),
    Unbounded,
    /// The algorithm was stopped after this many pivots.
    IterationLimit(usize),
}

/// Settings that control how long the Simplex method is allowed to run.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SimplexOptions {
    /// Maximum number of pivots before giving up.
    pub max_iterations: usize,
}

impl SimplexOptions {
    /// Default value of `max_iterations`.
    pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
}

impl Default for SimplexOptions {
    fn default() -> Self {
        Self { max_iterations: Self::DEFAULT_MAX_ITERATIONS }
    }
}
