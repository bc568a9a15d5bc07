//! Fixed-point numerical building blocks.
//!
//! - [`arithmetic`]: signed addition, scaled multiply/divide, clamping
//! - [`special`]: natural logarithm and square root
//! - [`horner`]: polynomial and rational-function evaluation
//! - [`solvers`]: fixed-step Newton refinement

pub mod arithmetic;
pub mod horner;
pub mod solvers;
pub mod special;
