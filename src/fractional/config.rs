//! Fractional allocator configuration.

/// Treatment of items whose weight is zero.
///
/// Their value density `effective_value / 0` is undefined, so the policy
/// decides it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZeroWeightPolicy {
    /// Density is `+inf`: taken whole before any weighted item, using no
    /// capacity.
    #[default]
    InfiniteDensity,

    /// Never selected.
    Exclude,
}

/// Configuration for [`super::FractionalAllocator`].
///
/// # Examples
///
/// ```
/// use u_allocator::fractional::{FractionalConfig, ZeroWeightPolicy};
///
/// let config = FractionalConfig::default().with_zero_weight_policy(ZeroWeightPolicy::Exclude);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FractionalConfig {
    /// Zero-weight item handling.
    pub zero_weight: ZeroWeightPolicy,
}

impl FractionalConfig {
    pub fn with_zero_weight_policy(mut self, policy: ZeroWeightPolicy) -> Self {
        self.zero_weight = policy;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let config = FractionalConfig::default();
        assert_eq!(config.zero_weight, ZeroWeightPolicy::InfiniteDensity);
        assert!(config.validate().is_ok());
    }
}
