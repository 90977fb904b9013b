//! # Traits
//!
//! The field hierarchy used by the tableau. The contract is "mathematically exact", but the
//! implementations aren't necessarily: `f64` satisfies the trait bounds while only approximating
//! the field axioms.
use std::fmt::{Debug, Display};
use std::ops::{Add, DivAssign, Div, Mul, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

/// Basic field operations, together with a (partial) order.
///
/// The simplex algorithm is defined over the ordered fields. Both the ratio test and the choice of
/// the entering column compare values, so all methods containing algorithmic logic are defined
/// over this trait.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait OrderedField:
    PartialEq +
    PartialOrd +
    Zero + // Additive identity
    Neg<Output=Self> + // Additive inverse
    One + // Multiplicative identity
    Add<Output=Self> +
    Sub<Output=Self> +
    SubAssign +
    Mul<Output=Self> +
    Div<Output=Self> +
    DivAssign +
    // Practicalities
    Clone +
    Display +
    Debug +
{
    /// Whether this value is strictly larger than the additive identity.
    fn is_positive(&self) -> bool {
        self > &Self::zero()
    }

    /// Whether this value is strictly smaller than the additive identity.
    fn is_negative(&self) -> bool {
        self < &Self::zero()
    }
}

impl<T> OrderedField for T
where
    T: PartialEq + PartialOrd + Zero + Neg<Output=T> + One + Add<Output=T> + Sub<Output=T> +
    SubAssign + Mul<Output=T> + Div<Output=T> + DivAssign + Clone + Display + Debug,
{
}
