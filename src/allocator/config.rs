//! Combined allocator configuration.

use crate::discrete::DiscreteConfig;
use crate::fractional::FractionalConfig;
use crate::valuation::CategoryMultipliers;

/// Configuration for [`super::Allocator`].
///
/// # Examples
///
/// ```
/// use u_allocator::allocator::AllocatorConfig;
/// use u_allocator::discrete::DiscreteConfig;
/// use u_allocator::fractional::{FractionalConfig, ZeroWeightPolicy};
///
/// let config = AllocatorConfig::default()
///     .with_fractional(FractionalConfig::default().with_zero_weight_policy(ZeroWeightPolicy::Exclude))
///     .with_discrete(DiscreteConfig::default().with_scale(100.0))
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocatorConfig {
    /// Category multiplier table used for valuation.
    pub multipliers: CategoryMultipliers,

    /// Settings for divisible requests.
    pub fractional: FractionalConfig,

    /// Settings for indivisible requests.
    pub discrete: DiscreteConfig,

    /// Whether batches are evaluated in parallel using rayon.
    pub parallel: bool,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            multipliers: CategoryMultipliers::STANDARD,
            fractional: FractionalConfig::default(),
            discrete: DiscreteConfig::default(),
            parallel: true,
        }
    }
}

impl AllocatorConfig {
    pub fn with_multipliers(mut self, multipliers: CategoryMultipliers) -> Self {
        self.multipliers = multipliers;
        self
    }

    pub fn with_fractional(mut self, fractional: FractionalConfig) -> Self {
        self.fractional = fractional;
        self
    }

    pub fn with_discrete(mut self, discrete: DiscreteConfig) -> Self {
        self.discrete = discrete;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates every nested configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.multipliers.validate()?;
        self.fractional.validate()?;
        self.discrete.validate()?;
        Ok(())
    }
}
