//! # Solving linear programs
//!
//! A `Solver` collects the constraints of a problem in canonical form. The objective function is
//! only provided when solving, such that the same constraints can be maximized for different
//! objectives.
use log::info;

use crate::algorithm::{OptimizationResult, SimplexOptions};
use crate::algorithm::simplex::primal;
use crate::algorithm::simplex::strategy::pivot_rule::{LargestCoefficient, PivotRule};
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::elements::{Constraint, Objective};
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::variables::VariableIndex;
use crate::data::number_types::traits::OrderedField;
use crate::error::{SolveError, SolveResult};

/// Accumulates `<=` constraints and maximizes objective functions subject to them.
///
/// The order in which constraints are added determines the rows of the tableau and the labels of
/// the slack variables: the `k`-th constraint (counting from zero) gets slack `S<k>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Solver<F = f64> {
    constraints: Vec<Constraint<F>>,
    options: SimplexOptions,
}

impl<F: OrderedField> Solver<F> {
    /// Create a solver without constraints, with default options.
    pub fn new() -> Self {
        Self::with_options(SimplexOptions::default())
    }

    /// Create a solver without constraints.
    pub fn with_options(options: SimplexOptions) -> Self {
        Self {
            constraints: Vec::new(),
            options,
        }
    }

    /// Add a constraint to the problem and give it a slack variable.
    ///
    /// # Errors
    ///
    /// `MalformedProblem` if a coefficient or the bound is negative. The constraint is not added
    /// in that case.
    pub fn add_constraint(&mut self, mut constraint: Constraint<F>) -> SolveResult<()> {
        constraint.check_canonical()?;

        constraint.add_slack(format!("S{}", self.constraints.len()));
        self.constraints.push(constraint);

        Ok(())
    }

    /// Constraints added so far, with their slack variables.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Options used when solving.
    pub fn options(&self) -> &SimplexOptions {
        &self.options
    }

    /// Column index of each variable, for the constraints added so far and an objective function.
    pub fn variable_index(&self, objective: &Objective<F>) -> SolveResult<VariableIndex> {
        VariableIndex::new(&self.constraints, objective)
    }

    /// Maximize an objective function, pivoting on the column with the largest relative cost.
    ///
    /// # Errors
    ///
    /// See `maximize_with_rule`.
    pub fn maximize(&self, objective: &Objective<F>) -> SolveResult<Solution<F>> {
        self.maximize_with_rule::<LargestCoefficient>(objective)
    }

    /// Maximize an objective function subject to the constraints added so far.
    ///
    /// # Return value
    ///
    /// The optimal value and the value of each variable in the objective function.
    ///
    /// # Errors
    ///
    /// * `NoConstraints` if no constraint was added.
    /// * `MalformedProblem` if a variable has the label of a slack variable.
    /// * `UnboundedObjective` if the objective function has no maximum.
    /// * `IterationLimit` if no optimum was found within the configured number of pivots.
    pub fn maximize_with_rule<PR: PivotRule<F>>(
        &self,
        objective: &Objective<F>,
    ) -> SolveResult<Solution<F>> {
        if self.constraints.is_empty() {
            return Err(SolveError::NoConstraints);
        }

        let variables = self.variable_index(objective)?;
        let mut tableau = Tableau::new(&variables, objective, &self.constraints);
        info!(
            "Solving problem with {} constraints and {} decision variables",
            variables.nr_slack_variables(), variables.nr_decision_variables(),
        );

        match primal::<F, PR>(&mut tableau, &self.options) {
            OptimizationResult::FiniteOptimum(_) => {
                let solution = tableau.current_solution(objective);
                info!("Optimal value {}", solution.objective_value);
                Ok(solution)
            },
            OptimizationResult::Unbounded => {
                info!("Objective function is unbounded");
                Err(SolveError::UnboundedObjective)
            },
            OptimizationResult::IterationLimit(nr_iterations) => {
                Err(SolveError::IterationLimit(nr_iterations))
            },
        }
    }
}

impl<F: OrderedField> Default for Solver<F> {
    fn default() -> Self {
        Self::new()
    }
}
