//! Category multiplier table.

use super::types::Category;

/// Value multiplier per category.
///
/// [`CategoryMultipliers::STANDARD`] is the process-wide table. A custom
/// table can be injected into [`super::Valuation`] instead.
///
/// # Examples
///
/// ```
/// use u_allocator::valuation::{Category, CategoryMultipliers};
///
/// let table = CategoryMultipliers::default().with_multiplier(Category::Food, 1.1);
/// assert!((table.multiplier(Category::Food) - 1.1).abs() < 1e-12);
/// assert!((table.multiplier(Category::Electronics) - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryMultipliers {
    pub electronics: f64,
    pub clothing: f64,
    pub food: f64,
    pub furniture: f64,
    /// Applied to [`Category::Other`].
    pub other: f64,
}

impl CategoryMultipliers {
    /// Electronics 1.5, Clothing 1.2, Food 1.0, Furniture 0.8, anything else 1.0.
    pub const STANDARD: CategoryMultipliers = CategoryMultipliers {
        electronics: 1.5,
        clothing: 1.2,
        food: 1.0,
        furniture: 0.8,
        other: 1.0,
    };

    /// Returns the multiplier for a category. Total: never fails.
    pub fn multiplier(&self, category: Category) -> f64 {
        match category {
            Category::Electronics => self.electronics,
            Category::Clothing => self.clothing,
            Category::Food => self.food,
            Category::Furniture => self.furniture,
            Category::Other => self.other,
        }
    }

    /// Overrides the multiplier of a single category.
    pub fn with_multiplier(mut self, category: Category, multiplier: f64) -> Self {
        match category {
            Category::Electronics => self.electronics = multiplier,
            Category::Clothing => self.clothing = multiplier,
            Category::Food => self.food = multiplier,
            Category::Furniture => self.furniture = multiplier,
            Category::Other => self.other = multiplier,
        }
        self
    }

    /// Validates the table. Multipliers must be finite and positive.
    pub fn validate(&self) -> Result<(), String> {
        for category in Category::ALL {
            let m = self.multiplier(category);
            if !m.is_finite() || m <= 0.0 {
                return Err(format!(
                    "multiplier for {category} must be finite and positive, got {m}"
                ));
            }
        }
        Ok(())
    }
}

impl Default for CategoryMultipliers {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let t = CategoryMultipliers::STANDARD;
        assert!((t.multiplier(Category::Electronics) - 1.5).abs() < 1e-12);
        assert!((t.multiplier(Category::Clothing) - 1.2).abs() < 1e-12);
        assert!((t.multiplier(Category::Food) - 1.0).abs() < 1e-12);
        assert!((t.multiplier(Category::Furniture) - 0.8).abs() < 1e-12);
        assert!((t.multiplier(Category::Other) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_validate_ok() {
        assert!(CategoryMultipliers::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let t = CategoryMultipliers::default().with_multiplier(Category::Furniture, 0.0);
        assert!(t.validate().is_err());

        let t = CategoryMultipliers::default().with_multiplier(Category::Other, f64::NAN);
        assert!(t.validate().is_err());
    }
}
