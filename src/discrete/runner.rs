//! 0/1 dynamic-programming allocation with back-trace reconstruction.

use super::config::DiscreteConfig;
use crate::error::{AllocationError, Result};
use crate::selection::{check_request, Inclusion, Mode, SelectedItem, SelectionResult};
use crate::valuation::ValuedItem;
use tracing::{debug, warn};

/// Row-major `(n + 1) x (W + 1)` table of best achievable values.
struct DpTable {
    width: usize,
    cells: Vec<f64>,
}

impl DpTable {
    fn new(rows: usize, width: usize) -> Self {
        Self {
            width,
            cells: vec![0.0; rows * width],
        }
    }

    #[inline]
    fn get(&self, i: usize, w: usize) -> f64 {
        self.cells[i * self.width + w]
    }

    /// Returns row `i - 1` (read) and row `i` (write).
    fn rows_mut(&mut self, i: usize) -> (&[f64], &mut [f64]) {
        let (head, tail) = self.cells.split_at_mut(i * self.width);
        (&head[(i - 1) * self.width..], &mut tail[..self.width])
    }
}

/// Executes discrete (indivisible, 0/1) allocation.
///
/// Time and memory are `O(n * W)` where `W` is the capacity in units; see
/// [`DiscreteConfig`] for the discretization and the table bound.
pub struct DiscreteAllocator;

impl DiscreteAllocator {
    /// Selects the subset of whole items with maximum effective value whose
    /// weight fits the capacity.
    ///
    /// Selected items are reported in ascending input order.
    ///
    /// # Errors
    ///
    /// - [`AllocationError::EmptyItems`] / [`AllocationError::InvalidCapacity`]
    ///   for unserviceable requests.
    /// - [`AllocationError::TableTooLarge`] when `(n + 1) * (W + 1)` exceeds
    ///   `config.max_table_cells`.
    pub fn run(
        items: &[ValuedItem],
        capacity: f64,
        config: &DiscreteConfig,
    ) -> Result<SelectionResult> {
        check_request(items.len(), capacity)?;
        config.validate().map_err(AllocationError::InvalidConfig)?;

        let n = items.len();
        let capacity_units = config.capacity_units(capacity);
        let cells = (n as f64 + 1.0) * (capacity_units + 1.0);
        if cells > config.max_table_cells as f64 {
            warn!(
                event = "discrete_table_rejected",
                item_count = n,
                capacity_units = capacity_units,
                limit = config.max_table_cells,
            );
            return Err(AllocationError::TableTooLarge {
                cells,
                limit: config.max_table_cells,
            });
        }

        // Bounded by max_table_cells above.
        let cap = capacity_units as usize;
        let units: Vec<usize> = items
            .iter()
            .map(|v| {
                let u = config.weight_units(v.weight);
                if u > capacity_units {
                    cap + 1
                } else {
                    u as usize
                }
            })
            .collect();

        debug!(
            event = "discrete_start",
            item_count = n,
            capacity = capacity,
            capacity_units = cap,
            cells = (n + 1) * (cap + 1),
        );

        let mut table = DpTable::new(n + 1, cap + 1);
        for i in 1..=n {
            let item_units = units[i - 1];
            let value = items[i - 1].effective_value;
            let (prev, row) = table.rows_mut(i);
            for w in 0..=cap {
                row[w] = if item_units > w {
                    prev[w]
                } else {
                    prev[w].max(prev[w - item_units] + value)
                };
            }
        }

        // Each pick is re-checked against the real capacity, since float
        // sums of real weights can exceed what their units allowed.
        let mut w = cap;
        let mut used_units = 0usize;
        let mut total_weight = 0.0;
        let mut skipped = 0usize;
        let mut picked = Vec::new();
        for i in (1..=n).rev() {
            if table.get(i, w) == table.get(i - 1, w) {
                continue;
            }
            let item_units = units[i - 1];
            let weight = items[i - 1].weight;
            if used_units + item_units <= cap && total_weight + weight <= capacity {
                picked.push(i - 1);
                used_units += item_units;
                total_weight += weight;
                w -= item_units;
            } else {
                skipped += 1;
            }
        }
        picked.reverse();

        let total_value = if skipped == 0 {
            table.get(n, cap)
        } else {
            warn!(
                event = "discrete_pick_skipped",
                skipped = skipped,
                table_value = table.get(n, cap),
            );
            picked.iter().map(|&i| items[i].effective_value).sum()
        };
        let selected: Vec<SelectedItem> = picked
            .into_iter()
            .map(|i| SelectedItem::from_valued(&items[i], Inclusion::Included(true)))
            .collect();

        debug!(
            event = "discrete_end",
            selected = selected.len(),
            total_value = total_value,
            total_weight = total_weight,
            used_units = used_units,
        );

        Ok(SelectionResult {
            mode: Mode::Indivisible,
            capacity,
            total_value,
            total_weight,
            selected,
        })
    }
}
