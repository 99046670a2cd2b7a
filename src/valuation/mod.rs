//! Item valuation.
//!
//! Normalizes raw item records into [`ValuedItem`]s by applying a
//! per-category value multiplier. Both allocators consume this output.
//!
//! | Category    | Multiplier |
//! |-------------|------------|
//! | Electronics | 1.5        |
//! | Clothing    | 1.2        |
//! | Food        | 1.0        |
//! | Furniture   | 0.8        |
//! | other       | 1.0        |

mod multipliers;
mod types;
mod valuer;

pub use multipliers::CategoryMultipliers;
pub use types::{Category, Item, ValuedItem};
pub use valuer::{validate_items, validate_valued, value_items, Valuation};
