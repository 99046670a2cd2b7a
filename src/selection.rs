//! Selection results shared by both allocators.

use crate::error::{AllocationError, Result};
use crate::valuation::{Item, ValuedItem};

/// Selection rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Items may be split; greedy by value density.
    Divisible,
    /// Each item is taken whole or not at all (0/1).
    Indivisible,
}

/// How much of an item a selection includes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Inclusion {
    /// Proportion in `(0, 1]` of the item's weight and value (divisible mode).
    Fraction(f64),
    /// Whole-item flag (indivisible mode).
    Included(bool),
}

impl Inclusion {
    /// Inclusion as a number in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        match *self {
            Inclusion::Fraction(f) => f,
            Inclusion::Included(true) => 1.0,
            Inclusion::Included(false) => 0.0,
        }
    }

    /// Returns `true` for a fraction strictly between 0 and 1.
    pub fn is_partial(&self) -> bool {
        matches!(*self, Inclusion::Fraction(f) if f > 0.0 && f < 1.0)
    }
}

/// One entry of a selection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedItem {
    /// Position of the item in the caller's input sequence.
    pub index: usize,
    pub item: Item,
    pub weight: f64,
    pub effective_value: f64,
    pub inclusion: Inclusion,
}

impl SelectedItem {
    pub(crate) fn from_valued(valued: &ValuedItem, inclusion: Inclusion) -> Self {
        Self {
            index: valued.index,
            item: valued.item,
            weight: valued.weight,
            effective_value: valued.effective_value,
            inclusion,
        }
    }

    /// Value this entry adds to the total.
    pub fn contributed_value(&self) -> f64 {
        self.effective_value * self.inclusion.fraction()
    }

    /// Weight this entry consumes.
    pub fn contributed_weight(&self) -> f64 {
        self.weight * self.inclusion.fraction()
    }
}

/// Outcome of an allocation. Owned by the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionResult {
    /// Rule that produced this selection.
    pub mode: Mode,

    /// Capacity the selection was computed for.
    pub capacity: f64,

    /// Total effective value of the selection.
    pub total_value: f64,

    /// Total weight consumed by the selection.
    pub total_weight: f64,

    /// Selected entries.
    ///
    /// Divisible mode lists them in the order they were taken (descending
    /// density); indivisible mode lists them in ascending input order.
    pub selected: Vec<SelectedItem>,
}

impl SelectionResult {
    /// Number of selected entries.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Returns the inclusion of the input item at `index`, if selected.
    pub fn inclusion_of(&self, index: usize) -> Option<Inclusion> {
        self.selected
            .iter()
            .find(|s| s.index == index)
            .map(|s| s.inclusion)
    }

    /// Returns `true` if the input item at `index` is part of the selection.
    pub fn is_selected(&self, index: usize) -> bool {
        self.inclusion_of(index).is_some()
    }

    /// Capacity left unused.
    pub fn remaining_capacity(&self) -> f64 {
        (self.capacity - self.total_weight).max(0.0)
    }
}

/// Rejects requests no allocator can serve: an empty item set or a
/// capacity that is not a positive finite number.
pub(crate) fn check_request(item_count: usize, capacity: f64) -> Result<()> {
    if item_count == 0 {
        return Err(AllocationError::EmptyItems);
    }
    if !capacity.is_finite() || capacity <= 0.0 {
        return Err(AllocationError::InvalidCapacity(capacity));
    }
    Ok(())
}
