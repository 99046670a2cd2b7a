//! Greedy fractional allocation.

use super::config::{FractionalConfig, ZeroWeightPolicy};
use crate::error::{AllocationError, Result};
use crate::selection::{check_request, Inclusion, Mode, SelectedItem, SelectionResult};
use crate::valuation::ValuedItem;
use tracing::debug;

/// Executes fractional (divisible) allocation.
pub struct FractionalAllocator;

impl FractionalAllocator {
    /// Selects items by descending value density, splitting the first item
    /// that no longer fits.
    ///
    /// Equal densities keep their input order.
    ///
    /// # Errors
    ///
    /// [`AllocationError::EmptyItems`] or [`AllocationError::InvalidCapacity`]
    /// when the request cannot be served.
    pub fn run(
        items: &[ValuedItem],
        capacity: f64,
        config: &FractionalConfig,
    ) -> Result<SelectionResult> {
        check_request(items.len(), capacity)?;
        config.validate().map_err(AllocationError::InvalidConfig)?;

        debug!(
            event = "fractional_start",
            item_count = items.len(),
            capacity = capacity,
        );

        let mut order: Vec<&ValuedItem> = items
            .iter()
            .filter(|v| v.weight > 0.0 || config.zero_weight == ZeroWeightPolicy::InfiniteDensity)
            .collect();
        // sort_by is stable
        order.sort_by(|a, b| b.density().total_cmp(&a.density()));

        let mut remaining = capacity;
        let mut total_value = 0.0;
        let mut total_weight = 0.0;
        let mut selected = Vec::new();

        for valued in order {
            if valued.weight <= remaining {
                remaining -= valued.weight;
                total_value += valued.effective_value;
                total_weight += valued.weight;
                selected.push(SelectedItem::from_valued(valued, Inclusion::Fraction(1.0)));
                continue;
            }

            if remaining <= 0.0 {
                break;
            }

            let fraction = remaining / valued.weight;
            total_value += valued.effective_value * fraction;
            total_weight += remaining;
            selected.push(SelectedItem::from_valued(valued, Inclusion::Fraction(fraction)));
            break;
        }

        debug!(
            event = "fractional_end",
            selected = selected.len(),
            total_value = total_value,
            total_weight = total_weight,
        );

        Ok(SelectionResult {
            mode: Mode::Divisible,
            capacity,
            total_value,
            total_weight,
            selected,
        })
    }
}
