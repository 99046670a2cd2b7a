//! Item records and their valued form.

use std::fmt;
use std::str::FromStr;

/// Item category. Determines the value multiplier applied before allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Furniture,
    /// Any label outside the fixed set.
    #[default]
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Furniture,
        Category::Other,
    ];

    /// Parses a category label. Unrecognized labels map to [`Category::Other`].
    ///
    /// Matching is exact (case-sensitive).
    pub fn from_label(label: &str) -> Self {
        match label {
            "Electronics" => Category::Electronics,
            "Clothing" => Category::Clothing,
            "Food" => Category::Food,
            "Furniture" => Category::Furniture,
            _ => Category::Other,
        }
    }

    /// Returns the canonical label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Food => "Food",
            Category::Furniture => "Furniture",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::from_label(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A raw item as submitted by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Weight consumed when the item is fully included.
    pub weight: f64,
    /// Base value before the category multiplier.
    pub value: f64,
    pub category: Category,
}

impl Item {
    pub fn new(weight: f64, value: f64, category: Category) -> Self {
        Self {
            weight,
            value,
            category,
        }
    }
}

/// An item paired with its effective (category-adjusted) value.
///
/// Created fresh for every computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuedItem {
    /// Position of the item in the caller's input sequence.
    pub index: usize,
    /// The original record.
    pub item: Item,
    pub weight: f64,
    /// `item.value * multiplier(item.category)`.
    pub effective_value: f64,
}

impl ValuedItem {
    /// Effective value per unit of weight.
    ///
    /// Zero-weight items report `f64::INFINITY`.
    pub fn density(&self) -> f64 {
        if self.weight == 0.0 {
            f64::INFINITY
        } else {
            self.effective_value / self.weight
        }
    }
}
