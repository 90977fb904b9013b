//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapter 2 of Combinatorial Optimization, a book by
//! Christos H. Papadimitriou and Kenneth Steiglitz.
use log::{debug, trace, warn};

use crate::algorithm::{OptimizationResult, SimplexOptions};
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;

pub mod strategy;
pub mod tableau;

/// Increases the value of the basic feasible solution to the maximum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - The basis columns form an identity matrix and have zero relative cost
/// - All constants are nonnegative (primal feasibility)
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method. If the optimum is not
/// reached within `options.max_iterations` pivots, the tableau is left in its last state.
pub fn primal<F, PR>(
    tableau: &mut Tableau<F>,
    options: &SimplexOptions,
) -> OptimizationResult<F>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    let mut rule = PR::new(tableau);
    let mut nr_iterations = 0;
    loop {
        debug_assert!(tableau.is_in_basic_solution_state());
        debug_assert!(tableau.is_primal_feasible());
        trace!("Tableau after {} iterations:\n{}", nr_iterations, tableau);

        match rule.select_primal_pivot_column(tableau) {
            Some((column_index, cost)) => {
                if nr_iterations >= options.max_iterations {
                    warn!("Iteration limit of {} reached before optimality", options.max_iterations);
                    break OptimizationResult::IterationLimit(nr_iterations);
                }

                match tableau.select_primal_pivot_row(column_index) {
                    Some(row_index) => {
                        tableau.bring_into_basis(column_index, row_index);
                        nr_iterations += 1;
                        debug!(
                            "Pivot {}: column {} (relative cost {}) entered in row {}, objective value {}",
                            nr_iterations, column_index, cost, row_index, tableau.objective_function_value(),
                        );
                    },
                    None => {
                        debug!("Column {} (relative cost {}) has no eligible row", column_index, cost);
                        break OptimizationResult::Unbounded;
                    },
                }
            },
            None => break OptimizationResult::FiniteOptimum(tableau.current_bfs()),
        }
    }
}
