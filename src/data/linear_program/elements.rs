//! # Building blocks to describe linear programs.
//!
//! An objective function and constraints are both a list of labeled, weighted terms. Algorithms
//! only query them by label, through the `Coefficients` trait.
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use itertools::Itertools;

use crate::data::number_types::traits::OrderedField;
use crate::error::{SolveError, SolveResult};

/// Point lookup of the coefficient of a variable in a linear expression.
pub trait Coefficients<F> {
    /// Coefficient of the variable labelled `label`.
    ///
    /// # Return value
    ///
    /// The coefficient, or zero if the variable doesn't appear in the expression.
    fn coefficient_of(&self, label: &str) -> F;
}

/// A variable together with its coefficient in a linear expression.
///
/// For example, in `2x + 3y <= 8`, `(2, x)` and `(3, y)` are the terms.
#[derive(Clone, Debug, PartialEq)]
pub struct Term<F> {
    label: String,
    coefficient: F,
    /// Slack variables are added to constraints to turn the inequality into an equality.
    is_slack: bool,
}

impl<F: OrderedField> Term<F> {
    /// Create a term with unit coefficient.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_coefficient(F::one(), label)
    }

    /// Create a term with a given coefficient.
    pub fn with_coefficient(coefficient: F, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            coefficient,
            is_slack: false,
        }
    }

    pub(crate) fn slack(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            coefficient: F::one(),
            is_slack: true,
        }
    }
}

impl<F> Term<F> {
    #[allow(missing_docs)]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[allow(missing_docs)]
    pub fn coefficient(&self) -> &F {
        &self.coefficient
    }

    #[allow(missing_docs)]
    pub fn is_slack(&self) -> bool {
        self.is_slack
    }
}

/// Terms in their original order, indexed by label.
///
/// Terms sharing a label are added together.
#[derive(Clone, Debug, PartialEq)]
struct LinearExpression<F> {
    terms: Vec<Term<F>>,
    coefficients: HashMap<String, F>,
}

impl<F: OrderedField> LinearExpression<F> {
    fn new(terms: Vec<Term<F>>) -> Self {
        let mut coefficients = HashMap::with_capacity(terms.len());
        for term in &terms {
            Self::accumulate(&mut coefficients, term);
        }

        Self { terms, coefficients }
    }

    fn accumulate(coefficients: &mut HashMap<String, F>, term: &Term<F>) {
        match coefficients.entry(term.label.clone()) {
            Entry::Occupied(mut existing) => {
                let sum = existing.get().clone() + term.coefficient.clone();
                existing.insert(sum);
            },
            Entry::Vacant(vacant) => {
                vacant.insert(term.coefficient.clone());
            },
        }
    }

    fn coefficient_of(&self, label: &str) -> F {
        self.coefficients.get(label).cloned().unwrap_or_else(F::zero)
    }

    /// Labels in order of first appearance, each only once.
    fn labels(&self) -> impl Iterator<Item=&str> {
        self.terms.iter().map(Term::label).unique()
    }
}

/// Linear function to be maximized.
#[derive(Clone, Debug, PartialEq)]
pub struct Objective<F> {
    expression: LinearExpression<F>,
}

impl<F: OrderedField> Objective<F> {
    /// Create a new objective function `(a1 * x1) + (a2 * x2) + ... + (an * xn)`.
    pub fn new(terms: Vec<Term<F>>) -> Self {
        Self { expression: LinearExpression::new(terms) }
    }

    /// All terms, in the order in which they were provided.
    pub fn terms(&self) -> impl Iterator<Item=&Term<F>> {
        self.expression.terms.iter()
    }

    /// Labels of all variables in this objective in order of first appearance, each only once.
    pub fn labels(&self) -> impl Iterator<Item=&str> {
        self.expression.labels()
    }
}

impl<F: OrderedField> Coefficients<F> for Objective<F> {
    fn coefficient_of(&self, label: &str) -> F {
        self.expression.coefficient_of(label)
    }
}

/// An inequality `(c1 * x1) + (c2 * x2) + ... + (cn * xn) <= b`.
///
/// Once added to a problem, it also holds a slack variable that turns it into an equality.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint<F> {
    expression: LinearExpression<F>,
    bound: F,
    slack: Option<Term<F>>,
}

impl<F: OrderedField> Constraint<F> {
    /// Create a new constraint.
    ///
    /// # Arguments
    ///
    /// * `terms`: Left hand side of the inequality.
    /// * `bound`: The constant `b` on the right hand side.
    pub fn new(terms: Vec<Term<F>>, bound: F) -> Self {
        Self {
            expression: LinearExpression::new(terms),
            bound,
            slack: None,
        }
    }

    /// The right hand side of the inequality.
    pub fn bound(&self) -> &F {
        &self.bound
    }

    /// The slack variable, if this constraint is part of a problem.
    pub fn slack(&self) -> Option<&Term<F>> {
        self.slack.as_ref()
    }

    /// All terms including the slack, which comes last.
    pub fn terms(&self) -> impl Iterator<Item=&Term<F>> {
        self.expression.terms.iter().chain(self.slack.iter())
    }

    /// Labels of the non slack variables in order of first appearance, each only once.
    pub fn labels(&self) -> impl Iterator<Item=&str> {
        self.expression.labels()
    }

    /// Add a slack variable with unit coefficient.
    pub(crate) fn add_slack(&mut self, label: impl Into<String>) {
        debug_assert!(self.slack.is_none());

        let slack = Term::slack(label);
        LinearExpression::accumulate(&mut self.expression.coefficients, &slack);
        self.slack = Some(slack);
    }

    /// Check that this constraint is in canonical form.
    ///
    /// # Errors
    ///
    /// If a coefficient or the bound is negative, the all-slack basis might not be feasible.
    pub(crate) fn check_canonical(&self) -> SolveResult<()> {
        if let Some(term) = self.expression.terms.iter().find(|term| term.coefficient.is_negative()) {
            return Err(SolveError::MalformedProblem(format!(
                "Coefficient {} of variable \"{}\" is negative", term.coefficient, term.label,
            )));
        }
        if self.bound.is_negative() {
            return Err(SolveError::MalformedProblem(format!(
                "Constraint bound {} is negative", self.bound,
            )));
        }

        Ok(())
    }
}

impl<F: OrderedField> Coefficients<F> for Constraint<F> {
    fn coefficient_of(&self, label: &str) -> F {
        self.expression.coefficient_of(label)
    }
}

#[cfg(test)]
mod test {
    use relp_num::RB;
    use relp_num::RationalBig;

    use crate::data::linear_program::elements::{Coefficients, Constraint, Objective, Term};
    use crate::error::SolveError;

    #[test]
    fn coefficient_lookup() {
        let objective = Objective::new(vec![
            Term::with_coefficient(40f64, "x"),
            Term::new("y"),
        ]);
        assert_eq!(objective.coefficient_of("x"), 40f64);
        assert_eq!(objective.coefficient_of("y"), 1f64);
        assert_eq!(objective.coefficient_of("z"), 0f64);
    }

    #[test]
    fn duplicate_labels_are_added() {
        let constraint = Constraint::<RationalBig>::new(vec![
            Term::with_coefficient(RB!(1, 2), "x"),
            Term::new("y"),
            Term::with_coefficient(RB!(3, 2), "x"),
        ], RB!(4));
        assert_eq!(constraint.coefficient_of("x"), RB!(2));
        assert_eq!(constraint.labels().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn slack_comes_last() {
        let mut constraint = Constraint::new(vec![Term::new("x"), Term::new("y")], 12f64);
        assert_eq!(constraint.coefficient_of("S0"), 0f64);

        constraint.add_slack("S0");
        assert_eq!(constraint.coefficient_of("S0"), 1f64);
        let terms = constraint.terms().collect::<Vec<_>>();
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[2].label(), "S0");
        assert!(terms[2].is_slack());
        assert!(!terms[0].is_slack());
        assert_eq!(constraint.labels().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn check_canonical() {
        let constraint = Constraint::new(vec![Term::new("x")], 0f64);
        assert_eq!(constraint.check_canonical(), Ok(()));

        let constraint = Constraint::new(vec![Term::with_coefficient(-1f64, "x")], 3f64);
        assert!(matches!(constraint.check_canonical(), Err(SolveError::MalformedProblem(_))));

        let constraint = Constraint::new(vec![Term::new("x")], -3f64);
        assert!(matches!(constraint.check_canonical(), Err(SolveError::MalformedProblem(_))));
    }
}
