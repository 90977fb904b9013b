//! # Representation of optimal solutions
//!
//! Once a linear program is solved, the value of every variable in the objective function is
//! reported, together with the optimal objective value.
use std::fmt::{Display, Formatter, Result as FormatResult};

/// The optimum of a linear program and the variable values attaining it.
///
/// Slack variables are not part of a solution. Objective variables that are not basic in the
/// optimal tableau are reported explicitly with value zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function for this solution.
    pub objective_value: F,
    /// (variable name, solution value) tuples for all variables in the objective function, in the
    /// order in which they appear there.
    pub solution_values: Vec<(String, F)>,
}

impl<F> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: F, solution_values: Vec<(String, F)>) -> Self {
        Self { objective_value, solution_values }
    }

    /// Value of a variable, if it is part of this solution.
    pub fn value_of(&self, label: &str) -> Option<&F> {
        self.solution_values.iter()
            .find(|(name, _)| name == label)
            .map(|(_, value)| value)
    }
}

impl<F: Display> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "{{")?;
        writeln!(f, "\toptimum_variable_values: {{")?;
        for (name, value) in &self.solution_values {
            writeln!(f, "\t\t{{{} = {}}}", name, value)?;
        }
        writeln!(f, "\t}}")?;
        writeln!(f, "\toptimum_obj_func_value: {}", self.objective_value)?;
        writeln!(f, "}}")
    }
}
