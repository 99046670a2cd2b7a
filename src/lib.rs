//! Capacity-constrained item selection.
//!
//! Given items with a weight, a base value and a category, and a single
//! weight capacity, computes the selection of maximum total value under
//! one of two rules:
//!
//! - **Divisible** ([`fractional`]): greedy by value density; at most one
//!   item is split to exhaust the capacity.
//! - **Indivisible** ([`discrete`]): 0/1 knapsack solved exactly by dynamic
//!   programming with back-trace reconstruction.
//!
//! Before allocation every item is normalized by [`valuation`], which
//! multiplies its value by a category factor.
//!
//! # Examples
//!
//! ```
//! use u_allocator::valuation::{Category, Item};
//! use u_allocator::{allocate, Mode};
//!
//! let items = vec![
//!     Item::new(10.0, 60.0, Category::Food),
//!     Item::new(20.0, 100.0, Category::Food),
//!     Item::new(30.0, 120.0, Category::Food),
//! ];
//!
//! let result = allocate(Mode::Divisible, &items, 50.0).unwrap();
//! assert!((result.total_value - 240.0).abs() < 1e-9);
//! ```
//!
//! # Architecture
//!
//! All computations are pure and synchronous. The only shared state is the
//! read-only [`valuation::CategoryMultipliers::STANDARD`] table.

pub mod allocator;
pub mod discrete;
pub mod error;
pub mod fractional;
pub mod instance;
pub mod selection;
pub mod valuation;

pub use allocator::{allocate, allocate_discrete, allocate_fractional, Allocator, AllocatorConfig};
pub use error::{AllocationError, Result};
pub use selection::{Inclusion, Mode, SelectedItem, SelectionResult};
