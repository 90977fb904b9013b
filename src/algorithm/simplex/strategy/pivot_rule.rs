//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made by the
/// tableau, independent of the strategy.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new(tableau: &Tableau<F>) -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The index of a non basic column with a positive relative cost and that cost, or `None` if
    /// there is no such column (the tableau is optimal).
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)>;
}

/// Pivot on the column with the largest relative cost.
///
/// Uses the value maintained by the tableau while pivoting. Ties are broken by taking the column
/// with the lowest index.
pub struct LargestCoefficient;
impl<F: OrderedField> PivotRule<F> for LargestCoefficient {
    fn new(_tableau: &Tableau<F>) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        tableau.entering_column()
    }
}

/// Simply pivot on the first column which has a positive relative cost.
pub struct FirstProfitable;
impl<F: OrderedField> PivotRule<F> for FirstProfitable {
    fn new(_tableau: &Tableau<F>) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|(_, cost)| cost.is_positive())
            .map(|(column, cost)| (column, cost.clone()))
    }
}
