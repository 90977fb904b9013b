//! # Number types
//!
//! The tableau is defined over any ordered field. This module defines that space.
//!
//! A benefit of this approach is that the algorithm can be tested well for correctness using
//! fractional numbers, while the same code is used without adaptation with floating point numbers.
//! A downside is that floating point numbers are compared exactly: there is no tolerance anywhere
//! in the algorithm.
pub mod traits;
