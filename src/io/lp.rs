//! # Parsing of `.lp` files
//!
//! A small line based format for problems in canonical form:
//!
//! ```text
//! # Two products sharing two resources
//! maximize: 40 x + 30 y
//! x + y <= 12
//! 2 x + y <= 16
//! ```
//!
//! Terms are separated by `+` and are written as `coefficient label`, `coefficient * label` or
//! just `label`. Coefficients are integers, decimals like `0.25` or fractions like `3/4`, parsed
//! exactly. Text after a `#` is ignored. There is exactly one objective line, all other lines are
//! constraints.
use crate::algorithm::SimplexOptions;
use crate::data::linear_program::elements::{Constraint, Objective, Term};
use crate::data::number_types::traits::OrderedField;
use crate::error::SolveResult;
use crate::io::error::{FileLocation, ParseError};
use crate::solver::Solver;

const OBJECTIVE_PREFIX: &str = "maximize:";
const COMMENT: char = '#';

/// A linear program as read from a file.
///
/// The constraints don't have slack variables yet; they are added when creating a `Solver`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram<F> {
    objective: Objective<F>,
    constraints: Vec<Constraint<F>>,
}

impl<F: OrderedField> LinearProgram<F> {
    #[allow(missing_docs)]
    pub fn objective(&self) -> &Objective<F> {
        &self.objective
    }

    /// Constraints in order of appearance in the file.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Create a solver containing all constraints of this problem.
    ///
    /// # Errors
    ///
    /// `MalformedProblem` if a constraint is not in canonical form.
    pub fn solver(&self, options: SimplexOptions) -> SolveResult<Solver<F>> {
        let mut solver = Solver::with_options(options);
        for constraint in &self.constraints {
            solver.add_constraint(constraint.clone())?;
        }

        Ok(solver)
    }
}

/// Parse the contents of an `.lp` file.
///
/// # Errors
///
/// If a line is not an objective function or a constraint, or if there isn't exactly one
/// objective function.
pub fn parse<F: OrderedField>(program: &str) -> Result<LinearProgram<F>, ParseError> {
    let mut objective = None;
    let mut constraints = Vec::new();

    for (line_number, line) in program.lines().enumerate().map(|(i, line)| (i + 1, line)) {
        let content = strip_comment(line).trim();
        if content.is_empty() {
            continue;
        }
        let location = (line_number, line);

        if let Some(expression) = content.strip_prefix(OBJECTIVE_PREFIX) {
            if objective.is_some() {
                return Err(ParseError::at_line("Second objective function", location));
            }
            objective = Some(Objective::new(parse_terms(expression, location)?));
        } else {
            constraints.push(parse_constraint(content, location)?);
        }
    }

    let objective = objective.ok_or_else(|| ParseError::Program(format!(
        "No objective function, expected a line starting with \"{}\"", OBJECTIVE_PREFIX,
    )))?;

    Ok(LinearProgram { objective, constraints })
}

fn strip_comment(line: &str) -> &str {
    line.split_once(COMMENT).map_or(line, |(content, _)| content)
}

/// Parse a line of the form `terms <= bound`.
fn parse_constraint<F: OrderedField>(
    content: &str,
    location: FileLocation,
) -> Result<Constraint<F>, ParseError> {
    let (lhs, rhs) = content.split_once("<=")
        .ok_or_else(|| ParseError::at_line("Expected a constraint of the form \"terms <= bound\"", location))?;
    let bound = parse_number(rhs.trim())
        .ok_or_else(|| ParseError::at_line(format!("Could not parse bound \"{}\"", rhs.trim()), location))?;

    Ok(Constraint::new(parse_terms(lhs, location)?, bound))
}

/// Parse a sum of terms, separated by `+`.
fn parse_terms<F: OrderedField>(
    expression: &str,
    location: FileLocation,
) -> Result<Vec<Term<F>>, ParseError> {
    expression.split('+')
        .map(str::trim)
        .map(|term| parse_term(term, location))
        .collect()
}

fn parse_term<F: OrderedField>(
    term: &str,
    location: FileLocation,
) -> Result<Term<F>, ParseError> {
    let error = || ParseError::at_line(format!("Could not parse term \"{}\"", term), location);

    let (coefficient, label) = match term.split_once('*') {
        Some((coefficient, label)) => (Some(coefficient.trim()), label.trim()),
        None => {
            let mut tokens = term.split_whitespace();
            match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(label), None, None) => (None, label),
                (Some(coefficient), Some(label), None) => (Some(coefficient), label),
                _ => return Err(error()),
            }
        },
    };

    if !is_label(label) {
        return Err(error());
    }
    match coefficient {
        Some(coefficient) => {
            let value = parse_number(coefficient).ok_or_else(error)?;
            Ok(Term::with_coefficient(value, label))
        },
        None => Ok(Term::new(label)),
    }
}

/// Labels start with a letter or an underscore and consist of alphanumerics and underscores.
fn is_label(text: &str) -> bool {
    let mut characters = text.chars();
    characters.next().is_some_and(|first| first.is_alphabetic() || first == '_') &&
        characters.all(|character| character.is_alphanumeric() || character == '_')
}

/// Parse a signed integer, decimal or fraction exactly.
fn parse_number<F: OrderedField>(text: &str) -> Option<F> {
    let (negative, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let value = match magnitude.split_once('/') {
        Some((numerator, denominator)) => {
            let denominator = parse_decimal::<F>(denominator.trim())?;
            if denominator.is_zero() {
                return None;
            }
            parse_decimal::<F>(numerator.trim())? / denominator
        },
        None => parse_decimal(magnitude)?,
    };

    Some(if negative { -value } else { value })
}

fn parse_decimal<F: OrderedField>(text: &str) -> Option<F> {
    let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let ten = small_integer::<F>(10);
    let mut numerator = F::zero();
    let mut denominator = F::one();
    for character in integer.chars() {
        numerator = numerator * ten.clone() + small_integer(character.to_digit(10)?);
    }
    for character in fraction.chars() {
        numerator = numerator * ten.clone() + small_integer(character.to_digit(10)?);
        denominator = denominator * ten.clone();
    }

    Some(numerator / denominator)
}

/// Exact for both floats and rationals, the values are at most ten.
fn small_integer<F: OrderedField>(value: u32) -> F {
    (0..value).fold(F::zero(), |total, _| total + F::one())
}
