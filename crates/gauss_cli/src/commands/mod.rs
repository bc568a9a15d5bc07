//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod evaluate;
pub mod metadata;
pub mod quantile;
pub mod sample;
pub mod vectors;
