//! # Data structures for Simplex
//!
//! Contains the dense simplex tableau and the logic for the elementary operations which can be
//! performed upon it: selecting a pivot row, and pivoting.
use std::fmt::{Display, Formatter, Result as FormatResult};

use itertools::Itertools;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::{Coefficients, Constraint, Objective};
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::variables::VariableIndex;
use crate::data::number_types::traits::OrderedField;
use crate::error::{SolveError, SolveResult};

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It holds only a reference to the (immutable) variable index of the problem it solves, but owns
/// all data structures that describe the current basis.
///
/// For the problem `maximize 40x + 30y` subject to `x + y <= 12` and `2x + y <= 16`, the initial
/// tableau is
///
/// ```text
///       | x  | y  | S0 | S1 | b
/// ------+----+----+----+----+----
/// S0    | 1  | 1  | 1  | 0  | 12
/// S1    | 2  | 1  | 0  | 1  | 16
/// ------+----+----+----+----+----
/// cj-zj | 40 | 30 | 0  | 0  | 0
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<'a, F> {
    /// Constraint coefficients with respect to the current basis, size `m` x `n + m`.
    matrix: DenseMatrix<F>,
    /// Right hand side with respect to the current basis, which are the values of the basic
    /// variables. Length `m`.
    constants: Vec<F>,
    /// Relative cost of each column, followed by minus the current objective value.
    ///
    /// Length `n + m + 1`.
    reduced_costs: Vec<F>,
    /// Maps the rows to the column that is basic in it.
    basis: Vec<usize>,
    /// The column with the largest positive relative cost, lowest index first.
    ///
    /// Maintained while pivoting. If there is none, the tableau is optimal.
    entering: Option<usize>,

    variables: &'a VariableIndex,
}

impl<'a, F> Tableau<'a, F>
where
    F: OrderedField,
{
    /// Create the initial tableau with the all-slack basis.
    ///
    /// # Arguments
    ///
    /// * `variables`: Column index of each variable. Its slack columns form the initial basis, in
    /// constraint order.
    /// * `objective`: Objective function to maximize.
    /// * `constraints`: Constraints with their slack variables added, in row order.
    ///
    /// # Note
    ///
    /// The all-slack basis is only feasible when all bounds are nonnegative. This is not checked.
    pub fn new<O: Coefficients<F>>(
        variables: &'a VariableIndex,
        objective: &O,
        constraints: &[Constraint<F>],
    ) -> Self {
        debug_assert_eq!(constraints.len(), variables.nr_slack_variables());
        debug_assert!(variables.slack_columns().all(|j| variables.is_slack(j)));
        debug_assert!((0..variables.nr_decision_variables()).all(|j| !variables.is_slack(j)));

        let nr_columns = variables.nr_columns();
        let matrix = DenseMatrix::from_data(
            constraints.iter()
                .map(|constraint| (0..nr_columns)
                    .map(|j| constraint.coefficient_of(variables.label(j)))
                    .collect()
                )
                .collect(),
            nr_columns,
        );
        let constants = constraints.iter().map(|constraint| constraint.bound().clone()).collect();

        let mut reduced_costs = (0..nr_columns)
            .map(|j| objective.coefficient_of(variables.label(j)))
            .collect::<Vec<_>>();
        reduced_costs.push(F::zero());

        // Without constraints, the tableau is vacuously optimal
        let entering = if constraints.is_empty() {
            None
        } else {
            largest_positive(reduced_costs[..nr_columns].iter().enumerate())
        };

        Self {
            matrix,
            constants,
            reduced_costs,
            basis: variables.slack_columns().collect(),
            entering,
            variables,
        }
    }

    /// Whether no column has a positive relative cost.
    ///
    /// This value is computed while pivoting, and is not recomputed here.
    pub fn is_optimal(&self) -> bool {
        self.entering.is_none()
    }

    /// The column with the largest positive relative cost and that cost.
    ///
    /// When several columns share the largest cost, the one with the lowest index is returned.
    pub fn entering_column(&self) -> Option<(usize, F)> {
        self.entering.map(|j| (j, self.reduced_costs[j].clone()))
    }

    /// Perform a single iteration of the Simplex method.
    ///
    /// Brings the column with the largest relative cost into the basis. Does nothing if the
    /// tableau is optimal already.
    ///
    /// # Errors
    ///
    /// `UnboundedObjective` if no row qualifies for the ratio test. The tableau is not modified in
    /// that case.
    pub fn iterate(&mut self) -> SolveResult<()> {
        if let Some(pivot_column) = self.entering {
            let pivot_row = self.select_primal_pivot_row(pivot_column)
                .ok_or(SolveError::UnboundedObjective)?;
            self.bring_into_basis(pivot_column, pivot_row);
        }

        Ok(())
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the minimal ratio
    /// between the constant and the (strictly positive) entry in the column. Rows with a constant
    /// of zero are eligible, which keeps all constants nonnegative in degenerate pivots. Ties are
    /// broken by taking the row with the lowest index.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the objective is unbounded along this column.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        let mut min_values: Option<(usize, F)> = None;
        for (row, constant) in self.constants.iter().enumerate() {
            let xij = self.matrix.get_value(row, column);
            if xij.is_positive() {
                let ratio = constant.clone() / xij.clone();
                if min_values.as_ref().map_or(true, |(_, min_ratio)| &ratio < min_ratio) {
                    min_values = Some((row, ratio));
                }
            }
        }

        min_values.map(|(row, _)| row)
    }

    /// Brings a column into the basis, replacing the variable that is basic in the pivot row.
    ///
    /// Divides the pivot row by the pivot element, eliminates the pivot column from all other
    /// rows and from the relative costs, and finally sets the basis columns to exact unit vectors.
    ///
    /// # Arguments
    ///
    /// * `pivot_column`: Column of the entering variable, not yet in the basis.
    /// * `pivot_row`: Row of the leaving variable, as selected by `select_primal_pivot_row`.
    pub fn bring_into_basis(&mut self, pivot_column: usize, pivot_row: usize) {
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column));
        debug_assert!(self.matrix.get_value(pivot_row, pivot_column).is_positive());

        self.basis[pivot_row] = pivot_column;

        self.divide_row(pivot_row, pivot_column);
        self.eliminate_column(pivot_row, pivot_column);
        self.entering = self.update_reduced_costs(pivot_row, pivot_column);
        self.make_basis_identity();
    }

    /// Normalize the pivot row such that the pivot element becomes one.
    fn divide_row(&mut self, pivot_row: usize, pivot_column: usize) {
        let pivot = self.matrix.get_value(pivot_row, pivot_column).clone();
        self.matrix.divide_row(pivot_row, &pivot);
        self.constants[pivot_row] /= pivot;
    }

    /// Subtract multiples of the (normalized) pivot row from all other rows.
    ///
    /// The pivot column itself is skipped; `make_basis_identity` sets it.
    fn eliminate_column(&mut self, pivot_row: usize, pivot_column: usize) {
        for row in (0..self.nr_rows()).filter(|&row| row != pivot_row) {
            let factor = self.matrix.get_value(row, pivot_column).clone();
            if factor.is_zero() {
                continue;
            }

            self.matrix.subtract_multiple_of_row(pivot_row, row, &factor, pivot_column);
            let difference = self.constants[pivot_row].clone() * factor;
            self.constants[row] -= difference;
        }
    }

    /// Subtract a multiple of the (normalized) pivot row from the relative costs.
    ///
    /// # Return value
    ///
    /// The column with the largest positive relative cost after the update, if there is one.
    fn update_reduced_costs(&mut self, pivot_row: usize, pivot_column: usize) -> Option<usize> {
        let factor = self.reduced_costs[pivot_column].clone();

        let mut largest: Option<(usize, F)> = None;
        for (j, value) in self.matrix.row(pivot_row).enumerate() {
            if j == pivot_column {
                continue;
            }

            let difference = value.clone() * factor.clone();
            self.reduced_costs[j] -= difference;

            let cost = &self.reduced_costs[j];
            if cost.is_positive() && largest.as_ref().map_or(true, |(_, max)| cost > max) {
                largest = Some((j, cost.clone()));
            }
        }

        let objective_index = self.nr_columns();
        let difference = self.constants[pivot_row].clone() * factor;
        self.reduced_costs[objective_index] -= difference;
        self.reduced_costs[pivot_column] = F::zero();

        largest.map(|(j, _)| j)
    }

    /// Set each basis column to the unit vector of its row.
    ///
    /// Exact arithmetic would produce these values already, this removes rounding errors.
    fn make_basis_identity(&mut self) {
        let nr_rows = self.nr_rows();
        for (basis_row, &column) in self.basis.iter().enumerate() {
            for row in 0..nr_rows {
                let value = if row == basis_row { F::one() } else { F::zero() };
                self.matrix.set_value(row, column, value);
            }
        }
    }

    /// Extract the values of the objective variables.
    ///
    /// Each variable in the objective function is reported in order of appearance: with the
    /// constant of its row when it is basic, and with zero otherwise.
    ///
    /// # Note
    ///
    /// The result is only the optimum of the problem when the tableau is optimal.
    pub fn current_solution(&self, objective: &Objective<F>) -> Solution<F> {
        debug_assert!(self.is_optimal());

        let solution_values = objective.labels()
            .map(|label| {
                let value = self.variables.index_of(label)
                    .and_then(|column| self.basis_row(column))
                    .map_or_else(F::zero, |row| self.constants[row].clone());
                (label.to_string(), value)
            })
            .collect();

        Solution::new(self.objective_function_value(), solution_values)
    }

    /// Values of the basic variables as (column, value) tuples, sorted by column.
    pub fn current_bfs(&self) -> Vec<(usize, F)> {
        self.basis.iter()
            .copied()
            .zip(self.constants.iter().cloned())
            .sorted_by_key(|&(column, _)| column)
            .collect()
    }

    /// Value of the objective function for the current basic solution.
    pub fn objective_function_value(&self) -> F {
        -self.reduced_costs[self.nr_columns()].clone()
    }

    /// Relative cost of column `j`, zero for basis columns.
    pub fn relative_cost(&self, j: usize) -> &F {
        debug_assert!(j < self.nr_columns());

        &self.reduced_costs[j]
    }

    /// Coefficient in row `i` and column `j` with respect to the current basis.
    pub fn value(&self, i: usize, j: usize) -> &F {
        self.matrix.get_value(i, j)
    }

    /// Right hand side of row `i`, the value of the variable basic in that row.
    pub fn constant(&self, i: usize) -> &F {
        &self.constants[i]
    }

    /// Column of the variable basic in each row.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Row in which column `j` is basic, if it is in the basis.
    fn basis_row(&self, j: usize) -> Option<usize> {
        self.basis.iter().position(|&column| column == j)
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, j: usize) -> bool {
        debug_assert!(j < self.nr_columns());

        self.basis.contains(&j)
    }

    /// Number of rows in the tableau, equal to the number of constraints.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows()
    }

    /// Number of variables in the problem, including slacks.
    pub fn nr_columns(&self) -> usize {
        self.matrix.nr_columns()
    }

    /// Whether the basis columns form an identity matrix with zero relative cost.
    ///
    /// Only used for debug purposes and in tests.
    pub fn is_in_basic_solution_state(&self) -> bool {
        self.basis.iter().all_unique() &&
            self.basis.iter().enumerate().all(|(i, &j)| {
                self.relative_cost(j).is_zero() &&
                    (0..self.nr_rows()).all(|row| {
                        let expected = if row == i { F::one() } else { F::zero() };
                        self.value(row, j) == &expected
                    })
            })
    }

    /// Whether the current basic solution is feasible, that is, all constants are nonnegative.
    pub fn is_primal_feasible(&self) -> bool {
        self.constants.iter().all(|constant| !constant.is_negative())
    }
}

#[cfg(test)]
impl<'a, F> Tableau<'a, F>
where
    F: OrderedField,
{
    /// Create a tableau in an arbitrary state.
    ///
    /// The entering column is derived from the relative costs.
    pub(crate) fn new_with_basis(
        variables: &'a VariableIndex,
        matrix: Vec<Vec<F>>,
        constants: Vec<F>,
        reduced_costs: Vec<F>,
        basis: Vec<usize>,
    ) -> Self {
        let nr_columns = variables.nr_columns();
        debug_assert_eq!(reduced_costs.len(), nr_columns + 1);
        debug_assert_eq!(constants.len(), basis.len());

        let entering = largest_positive(reduced_costs[..nr_columns].iter().enumerate());
        Self {
            matrix: DenseMatrix::from_data(matrix, nr_columns),
            constants,
            reduced_costs,
            basis,
            entering,
            variables,
        }
    }
}

/// Index of the first largest positive value.
fn largest_positive<'b, F: OrderedField + 'b>(
    values: impl Iterator<Item=(usize, &'b F)>,
) -> Option<usize> {
    let mut largest: Option<(usize, &F)> = None;
    for (j, value) in values {
        if value.is_positive() && largest.map_or(true, |(_, max)| value > max) {
            largest = Some((j, value));
        }
    }

    largest.map(|(j, _)| j)
}

impl<F> Display for Tableau<'_, F>
where
    F: OrderedField,
{
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let header = self.variables.labels()
            .map(str::to_string)
            .chain(Some("b".to_string()))
            .collect::<Vec<_>>();
        let rows = (0..self.nr_rows())
            .map(|i| self.matrix.row(i)
                .chain(Some(&self.constants[i]))
                .map(ToString::to_string)
                .collect::<Vec<_>>()
            )
            .collect::<Vec<_>>();
        let cost = self.reduced_costs.iter().map(ToString::to_string).collect::<Vec<_>>();

        let row_counter_width = self.basis.iter()
            .map(|&j| self.variables.label(j).len())
            .chain(Some("cj-zj".len()))
            .max()
            .unwrap_or(0);
        let column_width = (0..header.len())
            .map(|j| rows.iter()
                .map(|row| row[j].len())
                .chain([header[j].len(), cost[j].len()])
                .max()
                .unwrap_or(0)
            )
            .collect::<Vec<_>>();

        let format_line = |counter: &str, values: &[String]| format!(
            "{0:<width$} | {1}",
            counter,
            values.iter()
                .zip(&column_width)
                .enumerate()
                .map(|(j, (value, &width))| if j + 1 < values.len() {
                    format!("{0:<width$}", value, width = width)
                } else {
                    value.clone()
                })
                .join(" | "),
            width = row_counter_width,
        );
        let separator = std::iter::once("-".repeat(row_counter_width + 1))
            .chain(column_width.iter().map(|width| "-".repeat(width + 2)))
            .join("+");

        writeln!(f, "{}", format_line("", &header))?;
        writeln!(f, "{}", separator)?;
        for (i, row) in rows.iter().enumerate() {
            writeln!(f, "{}", format_line(self.variables.label(self.basis[i]), row))?;
        }
        writeln!(f, "{}", separator)?;
        writeln!(f, "{}", format_line("cj-zj", &cost))
    }
}
