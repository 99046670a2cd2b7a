//! Seeded random item sets for benchmarks and tests.

use crate::valuation::{Category, Item};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape of a generated instance.
///
/// # Examples
///
/// ```
/// use u_allocator::instance::InstanceConfig;
///
/// let config = InstanceConfig::default().with_num_items(20);
/// let items = config.generate(7);
/// assert_eq!(items.len(), 20);
/// assert_eq!(items, config.generate(7));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceConfig {
    pub num_items: usize,

    /// Weights are drawn from `[1, max_weight]`.
    pub max_weight: f64,

    /// Base values are drawn from `[1, max_value]`.
    pub max_value: f64,

    /// Round weights to whole numbers (exact under the default discretization).
    pub integral_weights: bool,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            num_items: 50,
            max_weight: 100.0,
            max_value: 100.0,
            integral_weights: true,
        }
    }
}

impl InstanceConfig {
    pub fn with_num_items(mut self, n: usize) -> Self {
        self.num_items = n;
        self
    }

    pub fn with_max_weight(mut self, w: f64) -> Self {
        self.max_weight = w;
        self
    }

    pub fn with_max_value(mut self, v: f64) -> Self {
        self.max_value = v;
        self
    }

    pub fn with_integral_weights(mut self, integral: bool) -> Self {
        self.integral_weights = integral;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.max_weight.is_finite() || self.max_weight < 1.0 {
            return Err(format!("max_weight must be >= 1, got {}", self.max_weight));
        }
        if !self.max_value.is_finite() || self.max_value < 1.0 {
            return Err(format!("max_value must be >= 1, got {}", self.max_value));
        }
        Ok(())
    }

    /// Generates items. The same seed always yields the same items.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn generate(&self, seed: u64) -> Vec<Item> {
        self.validate().expect("invalid InstanceConfig");
        let mut rng = StdRng::seed_from_u64(seed);

        (0..self.num_items)
            .map(|_| {
                let weight = if self.integral_weights {
                    rng.random_range(1..=self.max_weight as u64) as f64
                } else {
                    rng.random_range(1.0..=self.max_weight)
                };
                let value = rng.random_range(1.0..=self.max_value);
                let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
                Item::new(weight, value, category)
            })
            .collect()
    }
}
