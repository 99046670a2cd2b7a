//! Item normalization.

use super::multipliers::CategoryMultipliers;
use super::types::{Item, ValuedItem};
use crate::error::{AllocationError, Result};

/// Turns raw items into [`ValuedItem`]s using a multiplier table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Valuation {
    multipliers: CategoryMultipliers,
}

impl Valuation {
    /// Creates a valuation over [`CategoryMultipliers::STANDARD`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a valuation over a custom table.
    pub fn with_multipliers(multipliers: CategoryMultipliers) -> Self {
        Self { multipliers }
    }

    /// Returns the table in use.
    pub fn multipliers(&self) -> &CategoryMultipliers {
        &self.multipliers
    }

    /// Values every item. The output is parallel to the input.
    pub fn value(&self, items: &[Item]) -> Vec<ValuedItem> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| ValuedItem {
                index,
                item: *item,
                weight: item.weight,
                effective_value: item.value * self.multipliers.multiplier(item.category),
            })
            .collect()
    }
}

/// Values items with the standard multiplier table.
pub fn value_items(items: &[Item]) -> Vec<ValuedItem> {
    Valuation::new().value(items)
}

/// Checks the numeric constraints a caller must enforce before allocating.
///
/// Weight and value must both be finite and non-negative.
pub fn validate_items(items: &[Item]) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        if !item.weight.is_finite() || item.weight < 0.0 {
            return Err(AllocationError::InvalidItem {
                index,
                reason: format!("weight must be finite and non-negative, got {}", item.weight),
            });
        }
        if !item.value.is_finite() || item.value < 0.0 {
            return Err(AllocationError::InvalidItem {
                index,
                reason: format!("value must be finite and non-negative, got {}", item.value),
            });
        }
    }
    Ok(())
}

/// Checks that valuation kept every effective value finite.
///
/// A finite raw value can still overflow once multiplied by its category
/// factor (e.g. `f64::MAX * 1.5`).
pub fn validate_valued(valued: &[ValuedItem]) -> Result<()> {
    match valued.iter().find(|v| !v.effective_value.is_finite()) {
        Some(v) => Err(AllocationError::InvalidItem {
            index: v.index,
            reason: format!(
                "effective value overflows: {} x multiplier is not finite",
                v.item.value
            ),
        }),
        None => Ok(()),
    }
}
