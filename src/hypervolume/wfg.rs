//! WFG exclusive-hypervolume engine.
//!
//! Exact hypervolume computation by recursive slicing: each point's
//! exclusive volume is its inclusive box minus the volume of the *dominated
//! bit* — the componentwise-worse combinations with the points after it.
//! The recursion bottoms out in a linear 2D sweep.
//!
//! # References
//!
//! - While, Hingston, Barone, Huband (2006), "A Faster Algorithm for Calculating Hypervolume"
//! - While, Bradstreet, Barone (2012), "A Fast Way of Calculating Exact Hypervolumes"
//! - IEEE Transactions on Evolutionary Computation, 10(1) / 16(1)

use super::front::{Front, Point};
use crate::solution::Solution;

/// Exact hypervolume engine (While–Bradstreet–Barone).
///
/// All objectives are **minimized**, and the reference point must be weakly
/// dominated by the front (no better than every point in every objective);
/// points that fail this are excluded from the computation and contribute
/// zero. Two-dimensional fronts must be mutually non-dominated (the sweep
/// assumes a clean staircase); in three or more dimensions dominated
/// members are tolerated and simply contribute nothing.
///
/// The engine pre-allocates one scratch front per recursion depth
/// (`dimension - 1` of them, `max_points` points each) and reuses them
/// across calls, so repeated evaluation — the archive eviction loop is the
/// typical consumer — does not allocate on the hot path. Buffers grow on
/// demand if a call brings more points than the initial sizing.
///
/// # Example
///
/// ```
/// use u_pareto::hypervolume::WfgHypervolume;
///
/// let mut engine = WfgHypervolume::new(2, 8);
/// let front = vec![vec![1.0, 4.0], vec![2.0, 2.0], vec![4.0, 1.0]];
///
/// let hv = engine.hypervolume(&front, &[5.0, 5.0]);
/// assert!((hv - 11.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct WfgHypervolume {
    dimension: usize,
    reference: Vec<f64>,
    /// Filtered working copy of the caller's front.
    work: Front,
    /// Maps work indices back to caller indices (reference filter may drop points).
    work_ids: Vec<usize>,
    /// Scratch fronts indexed by recursion depth.
    pool: Vec<Front>,
    current_dim: usize,
    depth: usize,
}

impl WfgHypervolume {
    /// Creates an engine for fronts of the given objective count.
    ///
    /// `max_points` sizes the scratch buffers; it is a hint, not a limit.
    ///
    /// # Panics
    ///
    /// Panics if `dimension < 2`.
    pub fn new(dimension: usize, max_points: usize) -> Self {
        assert!(
            dimension >= 2,
            "hypervolume needs at least 2 objectives, got {dimension}"
        );
        let pool = (0..dimension - 1)
            .map(|_| Front::with_capacity(max_points, dimension))
            .collect();
        Self {
            dimension,
            reference: vec![0.0; dimension],
            work: Front::with_capacity(max_points, dimension),
            work_ids: Vec::with_capacity(max_points),
            pool,
            current_dim: dimension,
            depth: 0,
        }
    }

    /// Number of objectives this engine was built for.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total hypervolume of `front` relative to `reference`.
    ///
    /// Points that do not weakly dominate the reference are excluded; an
    /// empty (or fully excluded) front has hypervolume 0. A point exactly on
    /// the reference contributes 0.
    ///
    /// # Panics
    ///
    /// Panics if `reference` or any solution has an objective count other
    /// than [`dimension`](WfgHypervolume::dimension).
    pub fn hypervolume<S: Solution>(&mut self, front: &[S], reference: &[f64]) -> f64 {
        self.load(front, reference);
        if self.work.is_empty() {
            return 0.0;
        }
        let mut work = std::mem::take(&mut self.work);
        let volume = self.hv_recursive(&mut work);
        self.work = work;
        volume
    }

    /// Exclusive hypervolume of every point, in input order.
    ///
    /// Each point's contribution is computed against the points *after* it
    /// in input order, so the vector sums to the total hypervolume. Points
    /// excluded by the reference filter report 0. The input is not
    /// reordered.
    ///
    /// # Panics
    ///
    /// Panics if `reference` or any solution has the wrong objective count.
    ///
    /// # Example
    ///
    /// ```
    /// use u_pareto::hypervolume::WfgHypervolume;
    ///
    /// let mut engine = WfgHypervolume::new(2, 8);
    /// let front = vec![vec![1.0, 4.0], vec![2.0, 2.0], vec![4.0, 1.0]];
    ///
    /// let c = engine.contributions(&front, &[5.0, 5.0]);
    /// assert_eq!(c, vec![1.0, 6.0, 4.0]);
    /// ```
    pub fn contributions<S: Solution>(&mut self, front: &[S], reference: &[f64]) -> Vec<f64> {
        self.load(front, reference);
        let mut result = vec![0.0; front.len()];
        let work = std::mem::take(&mut self.work);
        let ids = std::mem::take(&mut self.work_ids);
        for (w, &original) in ids.iter().enumerate() {
            result[original] = self.exclusive_hv(&work, w);
        }
        self.work = work;
        self.work_ids = ids;
        result
    }

    /// Exclusive hypervolume of the point at `index`, against the points
    /// after it in input order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds or dimensions mismatch.
    pub fn contribution<S: Solution>(
        &mut self,
        front: &[S],
        index: usize,
        reference: &[f64],
    ) -> f64 {
        assert!(
            index < front.len(),
            "contribution index {} out of bounds for front of {} points",
            index,
            front.len()
        );
        self.load(front, reference);
        let w = match self.work_ids.binary_search(&index) {
            Ok(w) => w,
            Err(_) => return 0.0, // excluded by the reference filter
        };
        let work = std::mem::take(&mut self.work);
        let volume = self.exclusive_hv(&work, w);
        self.work = work;
        volume
    }

    /// Exclusive hypervolume of every point, computed in parallel.
    ///
    /// Each rayon worker operates on its own clone of the engine, so the
    /// result is identical to [`contributions`](WfgHypervolume::contributions).
    #[cfg(feature = "parallel")]
    pub fn contributions_par<S: Solution>(&self, front: &[S], reference: &[f64]) -> Vec<f64> {
        use rayon::prelude::*;

        (0..front.len())
            .into_par_iter()
            .map_init(
                || self.clone(),
                |engine, i| engine.contribution(front, i, reference),
            )
            .collect()
    }

    /// Index of the point with the smallest exclusive hypervolume
    /// (first index on ties).
    ///
    /// # Panics
    ///
    /// Panics if `front` is empty, or on dimension mismatch.
    pub fn least_contributor<S: Solution>(&mut self, front: &[S], reference: &[f64]) -> usize {
        assert!(
            !front.is_empty(),
            "cannot pick a least contributor from an empty front"
        );
        let contributions = self.contributions(front, reference);
        contributions
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .expect("front verified non-empty")
    }

    // ---- Loading ----

    /// Copies the front into the working buffer, dropping points that fail
    /// to weakly dominate the reference, and resets the recursion state.
    fn load<S: Solution>(&mut self, front: &[S], reference: &[f64]) {
        assert_eq!(
            reference.len(),
            self.dimension,
            "reference point has {} objectives, engine expects {}",
            reference.len(),
            self.dimension
        );
        self.reference.clear();
        self.reference.extend_from_slice(reference);
        self.current_dim = self.dimension;
        self.depth = 0;
        self.work.clear();
        self.work_ids.clear();
        for (index, solution) in front.iter().enumerate() {
            let objectives = solution.objectives();
            assert_eq!(
                objectives.len(),
                self.dimension,
                "solution has {} objectives, engine expects {}",
                objectives.len(),
                self.dimension
            );
            if objectives.iter().zip(reference).all(|(&v, &r)| v <= r) {
                self.work.push(objectives);
                self.work_ids.push(index);
            }
        }
    }

    // ---- Recursion ----

    /// Hypervolume of a non-empty front over the active dimensions.
    fn hv_recursive(&mut self, front: &mut Front) -> f64 {
        self.sort_descending(front);
        if self.current_dim == 2 {
            self.hv_2d(front)
        } else {
            // Slice off the last active dimension: in descending order every
            // later point has a smaller last coordinate, so point i's
            // exclusive volume factors into |last - reference| times the
            // lower-dimensional exclusive volume.
            self.current_dim -= 1;
            let last = self.current_dim;
            let mut volume = 0.0;
            for i in (0..front.len()).rev() {
                let slice = (front.point(i).value(last) - self.reference[last]).abs();
                volume += slice * self.exclusive_hv(front, i);
            }
            self.current_dim += 1;
            volume
        }
    }

    /// Linear sweep over a front sorted descending by the second objective.
    fn hv_2d(&self, front: &Front) -> f64 {
        let r0 = self.reference[0];
        let r1 = self.reference[1];
        let first = front.point(0);
        let mut volume = ((first.value(0) - r0) * (first.value(1) - r1)).abs();
        for i in 1..front.len() {
            let y_above = front.point(i - 1).value(1);
            let p = front.point(i);
            volume += ((p.value(0) - r0) * (p.value(1) - y_above)).abs();
        }
        volume
    }

    /// Exclusive hypervolume of `front[p]` against the points after it,
    /// over the active dimensions.
    fn exclusive_hv(&mut self, front: &Front, p: usize) -> f64 {
        let mut volume = self.inclusive_hv(front.point(p));
        if front.len() > p + 1 {
            self.make_dominated_bit(front, p);
            let mut bit = std::mem::take(&mut self.pool[self.depth - 1]);
            volume -= self.hv_recursive(&mut bit);
            self.pool[self.depth - 1] = bit;
            self.depth -= 1;
        }
        volume
    }

    /// Box volume between a point and the reference over the active
    /// dimensions.
    fn inclusive_hv(&self, point: &Point) -> f64 {
        (0..self.current_dim)
            .map(|d| (point.value(d) - self.reference[d]).abs())
            .product()
    }

    /// Builds the dominated bit of `front[p]` into the scratch front for the
    /// current depth: componentwise worse-of with every later point,
    /// deduplicated to a mutually incomparable set.
    fn make_dominated_bit(&mut self, front: &Front, p: usize) {
        let dims = self.current_dim;
        let count = front.len() - 1 - p;
        let bit = &mut self.pool[self.depth];
        bit.ensure_physical(count, self.dimension);

        for i in 0..count {
            for d in 0..dims {
                let worse = front.point(p).value(d).max(front.point(p + 1 + i).value(d));
                bit.point_mut(i).set_value(d, worse);
            }
        }

        // Compact to the non-dominated subset. Candidates sit at their
        // original physical slot until swapped into the live region; a
        // dropped survivor is swapped to the end and its replacement is
        // rechecked before advancing.
        bit.set_len(1);
        for i in 1..count {
            let mut j = 0;
            let mut keep = true;
            while j < bit.len() && keep {
                match two_way_dominance(bit.slot(i), bit.slot(j), dims) {
                    TwoWay::Left => {
                        let last = bit.len() - 1;
                        bit.swap_points(j, last);
                        bit.set_len(last);
                    }
                    TwoWay::Incomparable => j += 1,
                    TwoWay::Right | TwoWay::Equal => keep = false,
                }
            }
            if keep {
                let live = bit.len();
                bit.swap_points(live, i);
                bit.set_len(live + 1);
            }
        }

        self.depth += 1;
    }

    /// Sorts the live points descending-lexicographically from the last
    /// active dimension down, so worse last coordinates come first.
    fn sort_descending(&self, front: &mut Front) {
        let dims = self.current_dim;
        front.sort_live_by(|a, b| {
            for d in (0..dims).rev() {
                match b
                    .value(d)
                    .partial_cmp(&a.value(d))
                    .unwrap_or(std::cmp::Ordering::Equal)
                {
                    std::cmp::Ordering::Equal => continue,
                    order => return order,
                }
            }
            std::cmp::Ordering::Equal
        });
    }
}

/// Weak-dominance classification over the first `dims` objectives, used for
/// dominated-bit deduplication (equal points must be distinguished from
/// incomparable ones).
#[derive(Debug, PartialEq)]
enum TwoWay {
    Left,
    Right,
    Equal,
    Incomparable,
}

fn two_way_dominance(a: &Point, b: &Point, dims: usize) -> TwoWay {
    let mut a_better = false;
    let mut b_better = false;
    for d in 0..dims {
        if a.value(d) < b.value(d) {
            if b_better {
                return TwoWay::Incomparable;
            }
            a_better = true;
        } else if b.value(d) < a.value(d) {
            if a_better {
                return TwoWay::Incomparable;
            }
            b_better = true;
        }
    }
    match (a_better, b_better) {
        (true, false) => TwoWay::Left,
        (false, true) => TwoWay::Right,
        (false, false) => TwoWay::Equal,
        (true, true) => TwoWay::Incomparable,
    }
}

// ============================================================================
// Tests
// ============================================================================
