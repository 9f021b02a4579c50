//! Archive configuration.
//!
//! [`ArchiveConfig`] holds the parameters that control a bounded archive:
//! capacity, objective count, and the density estimator that picks the
//! eviction victim when the archive overflows.

/// Density estimator used to rank members when the archive must evict.
///
/// Both estimators assign every member a score where **higher = more
/// valuable**; the member with the lowest score is evicted.
///
/// # Examples
///
/// ```
/// use u_pareto::archive::DensityStrategy;
///
/// // NSGA-II-style diversity preservation
/// let strategy = DensityStrategy::CrowdingDistance;
///
/// // SMS-EMOA-style hypervolume maximization
/// let strategy = DensityStrategy::HypervolumeContribution;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DensityStrategy {
    /// Crowding distance: normalized gap to the nearest neighbors per
    /// objective, infinite for per-objective extremes.
    ///
    /// Cheap and scale-free; the usual choice for archives that feed
    /// NSGA-II-style selection.
    ///
    /// # Complexity
    /// O(m · n log n) per eviction
    CrowdingDistance,

    /// Exclusive hypervolume contribution: the volume that would vanish if
    /// the member were removed, measured against the per-objective worst
    /// corner of the archive.
    ///
    /// The sharpest density signal, at real computational cost.
    ///
    /// # Complexity
    /// Exponential in m in the worst case; fast in practice for m = 2–4
    HypervolumeContribution,
}

impl Default for DensityStrategy {
    fn default() -> Self {
        DensityStrategy::CrowdingDistance
    }
}

/// Configuration for a bounded non-dominated archive.
///
/// # Defaults
///
/// ```
/// use u_pareto::archive::{ArchiveConfig, DensityStrategy};
///
/// let config = ArchiveConfig::default();
/// assert_eq!(config.capacity, 100);
/// assert_eq!(config.objectives, 2);
/// assert_eq!(config.strategy, DensityStrategy::CrowdingDistance);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pareto::archive::{ArchiveConfig, DensityStrategy};
///
/// let config = ArchiveConfig::new(50, 3)
///     .with_strategy(DensityStrategy::HypervolumeContribution)
///     .with_parallel(false);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchiveConfig {
    /// Maximum number of members the archive retains.
    ///
    /// Must be at least 1. Typical range: 50–500.
    pub capacity: usize,

    /// Number of objectives every added solution must carry.
    pub objectives: usize,

    /// Density estimator used to choose the eviction victim.
    pub strategy: DensityStrategy,

    /// Whether to compute hypervolume contributions in parallel.
    ///
    /// Only takes effect with the `parallel` crate feature enabled and the
    /// hypervolume strategy selected; otherwise it is ignored.
    pub parallel: bool,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            objectives: 2,
            strategy: DensityStrategy::default(),
            parallel: true,
        }
    }
}

impl ArchiveConfig {
    /// Creates a configuration with the two required parameters.
    pub fn new(capacity: usize, objectives: usize) -> Self {
        Self {
            capacity,
            objectives,
            ..Self::default()
        }
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the objective count.
    pub fn with_objectives(mut self, objectives: usize) -> Self {
        self.objectives = objectives;
        self
    }

    /// Sets the density estimator.
    pub fn with_strategy(mut self, strategy: DensityStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enables or disables parallel contribution computation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("archive capacity must be at least 1".into());
        }
        if self.objectives == 0 {
            return Err("objectives must be at least 1".into());
        }
        if self.strategy == DensityStrategy::HypervolumeContribution && self.objectives < 2 {
            return Err("hypervolume contribution needs at least 2 objectives".into());
        }
        Ok(())
    }
}
