//! # Small problems with known solutions
//!
//! Problems small enough to be verified by hand, mostly taken from introductory texts on linear
//! programming.

/// # Solving and inspecting the tableau while solving
#[allow(missing_docs)]
mod test;
