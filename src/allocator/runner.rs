//! Mode dispatch and batch evaluation.

use super::config::AllocatorConfig;
use crate::discrete::DiscreteAllocator;
use crate::error::{AllocationError, Result};
use crate::fractional::FractionalAllocator;
use crate::selection::{Mode, SelectionResult};
use crate::valuation::{validate_items, validate_valued, Item, Valuation};
use rayon::prelude::*;
use tracing::info;

/// One independent allocation request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocationRequest {
    pub mode: Mode,
    pub items: Vec<Item>,
    pub capacity: f64,
}

impl AllocationRequest {
    pub fn new(mode: Mode, items: Vec<Item>, capacity: f64) -> Self {
        Self {
            mode,
            items,
            capacity,
        }
    }
}

/// Single entry point: validates input, values items and runs the allocator
/// selected by [`Mode`].
///
/// # Examples
///
/// ```
/// use u_allocator::allocator::{Allocator, AllocatorConfig};
/// use u_allocator::valuation::{Category, Item};
/// use u_allocator::Mode;
///
/// let allocator = Allocator::new(AllocatorConfig::default()).unwrap();
/// let items = vec![
///     Item::new(10.0, 60.0, Category::Food),
///     Item::new(20.0, 100.0, Category::Food),
///     Item::new(30.0, 120.0, Category::Food),
/// ];
///
/// let divisible = allocator.allocate(Mode::Divisible, &items, 50.0).unwrap();
/// assert!((divisible.total_value - 240.0).abs() < 1e-9);
///
/// let whole = allocator.allocate(Mode::Indivisible, &items, 50.0).unwrap();
/// assert!((whole.total_value - 220.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Allocator {
    config: AllocatorConfig,
    valuation: Valuation,
}

impl Allocator {
    /// Creates an allocator after validating its configuration.
    pub fn new(config: AllocatorConfig) -> Result<Self> {
        config.validate().map_err(AllocationError::InvalidConfig)?;
        let valuation = Valuation::with_multipliers(config.multipliers);
        Ok(Self { config, valuation })
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Allocates `items` into `capacity` under `mode`.
    ///
    /// # Errors
    ///
    /// [`AllocationError::InvalidItem`] for negative or non-finite input, or
    /// when a multiplier pushes an effective value past `f64::MAX`;
    /// otherwise whatever the selected allocator reports.
    pub fn allocate(&self, mode: Mode, items: &[Item], capacity: f64) -> Result<SelectionResult> {
        validate_items(items)?;
        let valued = self.valuation.value(items);
        validate_valued(&valued)?;
        match mode {
            Mode::Divisible => FractionalAllocator::run(&valued, capacity, &self.config.fractional),
            Mode::Indivisible => DiscreteAllocator::run(&valued, capacity, &self.config.discrete),
        }
    }

    /// Runs a request.
    pub fn run(&self, request: &AllocationRequest) -> Result<SelectionResult> {
        self.allocate(request.mode, &request.items, request.capacity)
    }

    /// Runs independent requests. Results are parallel to `requests`.
    pub fn allocate_batch(&self, requests: &[AllocationRequest]) -> Vec<Result<SelectionResult>> {
        info!(
            event = "batch_start",
            request_count = requests.len(),
            parallel = self.config.parallel,
        );

        let results: Vec<Result<SelectionResult>> = if self.config.parallel {
            requests.par_iter().map(|r| self.run(r)).collect()
        } else {
            requests.iter().map(|r| self.run(r)).collect()
        };

        info!(
            event = "batch_end",
            succeeded = results.iter().filter(|r| r.is_ok()).count(),
            failed = results.iter().filter(|r| r.is_err()).count(),
        );
        results
    }
}

impl Default for Allocator {
    fn default() -> Self {
        let config = AllocatorConfig::default();
        let valuation = Valuation::with_multipliers(config.multipliers);
        Self { config, valuation }
    }
}

/// Allocates with the default configuration.
pub fn allocate(mode: Mode, items: &[Item], capacity: f64) -> Result<SelectionResult> {
    Allocator::default().allocate(mode, items, capacity)
}

/// Fractional allocation with the default configuration.
pub fn allocate_fractional(items: &[Item], capacity: f64) -> Result<SelectionResult> {
    allocate(Mode::Divisible, items, capacity)
}

/// Discrete (0/1) allocation with the default configuration.
pub fn allocate_discrete(items: &[Item], capacity: f64) -> Result<SelectionResult> {
    allocate(Mode::Indivisible, items, capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discrete::DiscreteConfig;
    use crate::fractional::{FractionalConfig, ZeroWeightPolicy};
    use crate::valuation::{Category, CategoryMultipliers};

    fn classic() -> Vec<Item> {
        vec![
            Item::new(10.0, 60.0, Category::Food),
            Item::new(20.0, 100.0, Category::Food),
            Item::new(30.0, 120.0, Category::Food),
        ]
    }

    #[test]
    fn test_mode_dispatch() {
        let items = classic();
        let divisible = allocate_fractional(&items, 50.0).unwrap();
        let whole = allocate_discrete(&items, 50.0).unwrap();
        assert_eq!(divisible.mode, Mode::Divisible);
        assert_eq!(whole.mode, Mode::Indivisible);
        assert!((divisible.total_value - 240.0).abs() < 1e-9);
        assert!((whole.total_value - 220.0).abs() < 1e-9);
    }

    #[test]
    fn test_preconditions_both_modes() {
        for mode in [Mode::Divisible, Mode::Indivisible] {
            assert_eq!(allocate(mode, &[], 10.0), Err(AllocationError::EmptyItems));
            assert!(matches!(
                allocate(mode, &classic(), 0.0),
                Err(AllocationError::InvalidCapacity(_))
            ));
        }
    }

    #[test]
    fn test_invalid_item_rejected() {
        let mut items = classic();
        items[2].weight = -3.0;
        assert!(matches!(
            allocate(Mode::Indivisible, &items, 50.0),
            Err(AllocationError::InvalidItem { index: 2, .. })
        ));
    }

    #[test]
    fn test_overflowing_effective_value_rejected() {
        let items = vec![
            Item::new(1.0, 5.0, Category::Food),
            Item::new(1.0, f64::MAX, Category::Electronics),
        ];
        for mode in [Mode::Divisible, Mode::Indivisible] {
            assert!(matches!(
                allocate(mode, &items, 2.0),
                Err(AllocationError::InvalidItem { index: 1, .. })
            ));
        }

        let table = CategoryMultipliers::default().with_multiplier(Category::Food, 4.0);
        let allocator = Allocator::new(AllocatorConfig::default().with_multipliers(table)).unwrap();
        let items = vec![Item::new(1.0, f64::MAX / 2.0, Category::Food)];
        assert!(matches!(
            allocator.allocate(Mode::Indivisible, &items, 1.0),
            Err(AllocationError::InvalidItem { index: 0, .. })
        ));
    }

    #[test]
    fn test_electronics_valued_before_allocation() {
        let items = vec![Item::new(1.0, 100.0, Category::Electronics)];
        for mode in [Mode::Divisible, Mode::Indivisible] {
            let result = allocate(mode, &items, 1.0).unwrap();
            assert!((result.selected[0].effective_value - 150.0).abs() < 1e-9);
            assert!((result.total_value - 150.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_weight_policy_both_modes() {
        let items = vec![Item::new(0.0, 5.0, Category::Food)];
        for mode in [Mode::Divisible, Mode::Indivisible] {
            let result = allocate(mode, &items, 1.0).unwrap();
            assert!(result.is_selected(0));
            assert!((result.total_value - 5.0).abs() < 1e-12);
        }

        let allocator = Allocator::new(
            AllocatorConfig::default()
                .with_fractional(FractionalConfig::default().with_zero_weight_policy(ZeroWeightPolicy::Exclude)),
        )
        .unwrap();
        let result = allocator.allocate(Mode::Divisible, &items, 1.0).unwrap();
        assert!(result.selected.is_empty());
    }

    #[test]
    fn test_custom_multipliers() {
        let table = CategoryMultipliers::default().with_multiplier(Category::Food, 2.0);
        let allocator = Allocator::new(AllocatorConfig::default().with_multipliers(table)).unwrap();
        let result = allocator.allocate(Mode::Indivisible, &classic(), 50.0).unwrap();
        assert!((result.total_value - 440.0).abs() < 1e-9);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = AllocatorConfig::default().with_discrete(DiscreteConfig::default().with_scale(0.0));
        assert!(matches!(
            Allocator::new(config),
            Err(AllocationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_batch_parallel_matches_sequential() {
        let requests = vec![
            AllocationRequest::new(Mode::Divisible, classic(), 50.0),
            AllocationRequest::new(Mode::Indivisible, classic(), 50.0),
            AllocationRequest::new(Mode::Indivisible, Vec::new(), 50.0),
            AllocationRequest::new(Mode::Divisible, classic(), -1.0),
            AllocationRequest::new(Mode::Indivisible, classic(), 30.0),
        ];

        let parallel = Allocator::new(AllocatorConfig::default().with_parallel(true)).unwrap();
        let sequential = Allocator::new(AllocatorConfig::default().with_parallel(false)).unwrap();

        let a = parallel.allocate_batch(&requests);
        let b = sequential.allocate_batch(&requests);
        assert_eq!(a, b);
        assert_eq!(a.len(), requests.len());
        assert!(a[0].is_ok());
        assert_eq!(a[2], Err(AllocationError::EmptyItems));
        assert!(matches!(a[3], Err(AllocationError::InvalidCapacity(_))));
        assert!((a[4].as_ref().unwrap().total_value - 160.0).abs() < 1e-9);
    }
}
