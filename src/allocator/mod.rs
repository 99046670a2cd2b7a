//! Allocation entry point.
//!
//! [`Allocator`] takes an explicit [`crate::Mode`] and routes the request to
//! the fractional or discrete allocator. Requests are independent, so
//! batches can be evaluated in parallel without locking.

mod config;
mod runner;

pub use config::AllocatorConfig;
pub use runner::{allocate, allocate_discrete, allocate_fractional, AllocationRequest, Allocator};
