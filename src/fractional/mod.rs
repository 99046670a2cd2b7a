//! Fractional (divisible) allocation.
//!
//! Greedy selection by value density: items are taken whole in
//! descending `effective_value / weight` order, and the first item that no
//! longer fits is split to exhaust the remaining capacity. The greedy
//! choice is optimal when items are divisible.
//!
//! # References
//!
//! - Dantzig (1957), "Discrete-Variable Extremum Problems"

mod config;
mod runner;

pub use config::{FractionalConfig, ZeroWeightPolicy};
pub use runner::FractionalAllocator;
