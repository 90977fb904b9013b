//! # Column indices of variables
//!
//! Variables are identified by their label in the problem description, but by their column index
//! in the tableau. The mapping between the two is fixed once, before a tableau is built, and not
//! changed afterwards.
//!
//! All slack columns come after all decision variable columns, rather than each slack directly
//! after the variables of its own constraint. This matters for ties in the entering column: when
//! a slack variable re-enters the basis with the same relative cost as a decision variable, the
//! decision variable has the lower index and wins.
use std::collections::{HashMap, HashSet};
use std::ops::Range;

use itertools::Itertools;

use crate::data::linear_program::elements::{Constraint, Objective, Term};
use crate::data::number_types::traits::OrderedField;
use crate::error::{SolveError, SolveResult};

/// Immutable snapshot of the index to label mapping.
///
/// Columns are ordered as follows:
///
/// * decision variables, in order of first appearance in the constraints;
/// * decision variables appearing only in the objective function, in order of appearance;
/// * slack variables, one per constraint, in constraint order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableIndex {
    labels: Vec<String>,
    indices: HashMap<String, usize>,
    nr_decision_variables: usize,
}

impl VariableIndex {
    /// Assign a column to each variable of the problem.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Constraints, each containing a slack variable.
    /// * `objective`: Objective function. Variables that appear only here still get a column.
    ///
    /// # Errors
    ///
    /// If a constraint has no slack variable, or if a decision variable has the same label as a
    /// slack variable.
    pub fn new<F: OrderedField>(
        constraints: &[Constraint<F>],
        objective: &Objective<F>,
    ) -> SolveResult<Self> {
        let slacks = constraints.iter()
            .enumerate()
            .map(|(i, constraint)| constraint.slack()
                .map(Term::label)
                .ok_or_else(|| SolveError::MalformedProblem(format!(
                    "Constraint {} has no slack variable", i,
                )))
            )
            .collect::<SolveResult<Vec<_>>>()?;
        let slack_set = slacks.iter().copied().collect::<HashSet<_>>();
        debug_assert_eq!(slack_set.len(), slacks.len(), "Slack labels are not unique");

        let decision = constraints.iter()
            .flat_map(Constraint::labels)
            .chain(objective.labels())
            .unique()
            .collect::<Vec<_>>();
        if let Some(label) = decision.iter().find(|label| slack_set.contains(*label)) {
            return Err(SolveError::MalformedProblem(format!(
                "Variable \"{}\" has the label of a slack variable", label,
            )));
        }

        let nr_decision_variables = decision.len();
        let labels = decision.into_iter()
            .chain(slacks)
            .map(str::to_string)
            .collect::<Vec<_>>();
        let indices = labels.iter()
            .enumerate()
            .map(|(j, label)| (label.clone(), j))
            .collect();

        Ok(Self { labels, indices, nr_decision_variables })
    }

    /// Label of the variable in column `j`.
    pub fn label(&self, j: usize) -> &str {
        debug_assert!(j < self.nr_columns());

        &self.labels[j]
    }

    /// Column of the variable labelled `label`, if it is part of the problem.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.indices.get(label).copied()
    }

    /// Total number of variables, including slacks.
    pub fn nr_columns(&self) -> usize {
        self.labels.len()
    }

    /// Number of non slack variables. These are non basic in the initial basis.
    pub fn nr_decision_variables(&self) -> usize {
        self.nr_decision_variables
    }

    /// Number of slack variables, equal to the number of constraints.
    pub fn nr_slack_variables(&self) -> usize {
        self.nr_columns() - self.nr_decision_variables
    }

    /// Columns of the slack variables, the initial basis.
    pub fn slack_columns(&self) -> Range<usize> {
        self.nr_decision_variables..self.nr_columns()
    }

    /// Whether the variable in column `j` is a slack variable.
    pub fn is_slack(&self, j: usize) -> bool {
        j >= self.nr_decision_variables
    }

    /// Iterate over all labels in column order.
    pub fn labels(&self) -> impl Iterator<Item=&str> {
        self.labels.iter().map(String::as_str)
    }
}
