//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn create_problem()`
//! * `fn initial_tableau_form()`
//! * `fn intermediate_tableau_form()`
//! * `fn optimal_tableau_form()`
//! * `fn solution()`
use crate::data::number_types::traits::OrderedField;


/// Convert a small integer into any field, such that fixtures can be shared between number types.
pub fn int<F: OrderedField>(value: i32) -> F {
    let magnitude = (0..value.unsigned_abs()).fold(F::zero(), |total, _| total + F::one());
    if value < 0 { -magnitude } else { magnitude }
}

/// Convert a fraction of small integers into any field.
pub fn ratio<F: OrderedField>(numerator: i32, denominator: i32) -> F {
    int::<F>(numerator) / int(denominator)
}
