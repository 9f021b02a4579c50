//! Bounded non-dominated archive.
//!
//! The survival mechanism shared by Pareto-based metaheuristics: candidates
//! stream in from an external search loop, the archive keeps the best
//! mutually non-dominated subset within a fixed capacity, and a density
//! estimator decides which member to sacrifice when the archive overflows.

use super::config::{ArchiveConfig, DensityStrategy};
use super::unbounded::try_admit;
use crate::crowding::crowding_distance;
use crate::hypervolume::WfgHypervolume;
use crate::solution::Solution;

/// A capacity-limited archive of mutually non-dominated solutions.
///
/// [`add`](BoundedArchive::add) runs a fixed pipeline: candidates dominated
/// by a member (constraints first, then objectives) are rejected; members
/// dominated by the candidate are removed; objective-identical duplicates
/// are rejected; an admission that overflows the capacity evicts exactly one
/// member — the one with the lowest density score under the configured
/// [`DensityStrategy`], first index on ties.
///
/// Under the hypervolume strategy the density score is the member's
/// exclusive hypervolume against the per-objective worst corner of the
/// current members. Extreme members touch that corner and score zero, so
/// pure hypervolume ranking sacrifices the extremes first; pick the crowding
/// strategy when boundary solutions must survive.
///
/// Density scores are archive-owned bookkeeping, exposed through
/// [`compute_density_scores`](BoundedArchive::compute_density_scores);
/// solutions are never mutated.
///
/// # Example
///
/// ```
/// use u_pareto::archive::{ArchiveConfig, BoundedArchive};
///
/// let mut archive = BoundedArchive::new(ArchiveConfig::new(3, 2));
///
/// assert!(archive.add(vec![1.0, 4.0]));
/// assert!(archive.add(vec![4.0, 1.0]));
/// assert!(archive.add(vec![2.0, 2.0]));
/// assert!(!archive.add(vec![5.0, 5.0])); // dominated: rejected
///
/// // A fourth non-dominated solution forces one eviction.
/// assert!(archive.add(vec![3.0, 1.5]));
/// assert_eq!(archive.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedArchive<S: Solution> {
    config: ArchiveConfig,
    members: Vec<S>,
    scores: Vec<f64>,
    engine: Option<WfgHypervolume>,
}

impl<S: Solution> BoundedArchive<S> {
    /// Creates an archive from a validated configuration.
    ///
    /// The hypervolume strategy pre-builds its engine here, sized for the
    /// overflow state (`capacity + 1` points), so eviction never allocates.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid, with the failing rule in the
    /// message (see [`ArchiveConfig::validate`]).
    pub fn new(config: ArchiveConfig) -> Self {
        config.validate().expect("invalid ArchiveConfig");
        let engine = match config.strategy {
            DensityStrategy::HypervolumeContribution => Some(WfgHypervolume::new(
                config.objectives,
                config.capacity + 1,
            )),
            DensityStrategy::CrowdingDistance => None,
        };
        Self {
            members: Vec::with_capacity(config.capacity + 1),
            scores: Vec::new(),
            engine,
            config,
        }
    }

    /// Tries to add a solution.
    ///
    /// Returns `true` when the solution was admitted — even if a later
    /// overflow eviction removed it again in the same call. Returns `false`
    /// for dominated or duplicate candidates.
    ///
    /// # Panics
    ///
    /// Panics if the solution's objective count differs from the configured
    /// one.
    pub fn add(&mut self, solution: S) -> bool {
        assert_eq!(
            solution.objectives().len(),
            self.config.objectives,
            "solution has {} objectives, archive expects {}",
            solution.objectives().len(),
            self.config.objectives
        );

        if !try_admit(&mut self.members, &solution) {
            return false;
        }
        self.members.push(solution);
        if self.members.len() > self.config.capacity {
            self.evict_one();
        }
        true
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` when the archive has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Maximum number of members.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Configured objective count.
    pub fn objectives(&self) -> usize {
        self.config.objectives
    }

    /// Configured density estimator.
    pub fn strategy(&self) -> DensityStrategy {
        self.config.strategy
    }

    /// The members, in insertion order. The borrow is a snapshot: any
    /// subsequent `&mut` call may reorder or replace members.
    pub fn solutions(&self) -> &[S] {
        &self.members
    }

    /// Consumes the archive and returns its members.
    pub fn into_solutions(self) -> Vec<S> {
        self.members
    }

    /// Recomputes every member's density score and returns the scores,
    /// index-aligned with [`solutions`](BoundedArchive::solutions).
    ///
    /// Higher means more valuable. Crowding scores are `f64::INFINITY` for
    /// per-objective extremes; hypervolume scores are exclusive
    /// contributions against the current per-objective worst corner.
    pub fn compute_density_scores(&mut self) -> &[f64] {
        self.refresh_scores();
        &self.scores
    }

    /// Removes the member with the lowest density score (first on ties).
    fn evict_one(&mut self) {
        self.refresh_scores();
        let victim = self
            .scores
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .expect("eviction requires a non-empty archive");
        self.members.remove(victim);
        self.scores.remove(victim);
    }

    fn refresh_scores(&mut self) {
        match self.config.strategy {
            DensityStrategy::CrowdingDistance => {
                self.scores = crowding_distance(&self.members);
            }
            DensityStrategy::HypervolumeContribution => {
                let reference = self.supremum_reference();
                #[cfg(feature = "parallel")]
                if self.config.parallel {
                    let engine = self
                        .engine
                        .as_ref()
                        .expect("hypervolume strategy constructs an engine");
                    self.scores = engine.contributions_par(&self.members, &reference);
                    return;
                }
                let engine = self
                    .engine
                    .as_mut()
                    .expect("hypervolume strategy constructs an engine");
                self.scores = engine.contributions(&self.members, &reference);
            }
        }
    }

    /// Per-objective worst value over the current members — the reference
    /// point for contribution scoring.
    fn supremum_reference(&self) -> Vec<f64> {
        let mut reference = vec![f64::NEG_INFINITY; self.config.objectives];
        for member in &self.members {
            for (r, &v) in reference.iter_mut().zip(member.objectives()) {
                if v > *r {
                    *r = v;
                }
            }
        }
        reference
    }
}

// ============================================================================
// Tests
// ============================================================================
