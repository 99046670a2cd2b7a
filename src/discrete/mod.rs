//! Discrete (0/1) allocation.
//!
//! Classic dynamic program over integer capacity units:
//!
//! ```text
//! dp[0][w] = 0
//! dp[i][w] = dp[i-1][w]                                     if units(i) > w
//!          = max(dp[i-1][w], dp[i-1][w - units(i)] + v(i))  otherwise
//! ```
//!
//! The selection is recovered by walking the table back from `dp[n][W]`.
//!
//! # Scaling
//!
//! Cost is `O(n * W)` in both time and memory. Callers control `W` through
//! [`DiscreteConfig::scale`] and bound it with
//! [`DiscreteConfig::max_table_cells`].
//!
//! # References
//!
//! - Bellman (1957), "Dynamic Programming"
//! - Martello & Toth (1990), "Knapsack Problems: Algorithms and Computer Implementations"

mod config;
mod runner;

pub use config::DiscreteConfig;
pub use runner::DiscreteAllocator;
