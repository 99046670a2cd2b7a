//! Discrete allocator configuration and discretization policy.

/// Scaled values within this distance of an integer snap to it, so that
/// e.g. `0.3 * 10.0` maps to exactly 3 units. A snap is only taken when it
/// does not cross the real bound.
const UNIT_TOLERANCE: f64 = 1e-9;

/// Configuration for [`super::DiscreteAllocator`].
///
/// The dynamic program runs over integer capacity units. Weights and
/// capacity are converted with `scale` (units per weight unit):
///
/// - capacity units: `floor(capacity * scale)`
/// - item units: `ceil(weight * scale)`
///
/// Rounding the capacity down and weights up keeps every unit-feasible
/// selection feasible in real weights. With integral inputs and `scale = 1`
/// the conversion is exact.
///
/// The table holds `(n + 1) * (W + 1)` cells; requests above
/// `max_table_cells` are rejected rather than truncated.
///
/// # Examples
///
/// ```
/// use u_allocator::discrete::DiscreteConfig;
///
/// // Weights given to one decimal place.
/// let config = DiscreteConfig::default()
///     .with_scale(10.0)
///     .with_max_table_cells(1 << 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscreteConfig {
    /// Units per weight unit. Must be finite and positive.
    pub scale: f64,

    /// Upper bound on DP table cells.
    pub max_table_cells: usize,
}

impl Default for DiscreteConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            max_table_cells: 1 << 24,
        }
    }
}

impl DiscreteConfig {
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_max_table_cells(mut self, cells: usize) -> Self {
        self.max_table_cells = cells;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(format!("scale must be finite and positive, got {}", self.scale));
        }
        if self.max_table_cells == 0 {
            return Err("max_table_cells must be positive".into());
        }
        Ok(())
    }

    /// Capacity in whole units, rounded down.
    ///
    /// Never exceeds `capacity * scale` in real terms.
    pub fn capacity_units(&self, capacity: f64) -> f64 {
        let scaled = capacity * self.scale;
        let nearest = scaled.round();
        let units = if (scaled - nearest).abs() <= UNIT_TOLERANCE && nearest / self.scale <= capacity {
            nearest
        } else {
            scaled.floor()
        };
        units.max(0.0)
    }

    /// Item weight in whole units, rounded up.
    ///
    /// Never falls below `weight * scale` in real terms.
    pub fn weight_units(&self, weight: f64) -> f64 {
        let scaled = weight * self.scale;
        let nearest = scaled.round();
        let units = if (scaled - nearest).abs() <= UNIT_TOLERANCE && nearest / self.scale >= weight {
            nearest
        } else {
            scaled.ceil()
        };
        units.max(0.0)
    }
}
