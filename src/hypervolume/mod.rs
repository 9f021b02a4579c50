//! Hypervolume quality indicator.
//!
//! **Hypervolume** measures the volume of objective space dominated by a
//! front and bounded by a reference point. It is strictly monotonic with
//! respect to Pareto dominance, which makes it the standard yardstick for
//! comparing fronts — and the exclusive hypervolume of a single member
//! (how much volume would vanish if it were removed) the sharpest density
//! estimator a bounded archive can use.
//!
//! # Key Types
//!
//! - [`WfgHypervolume`]: reusable exact engine (WFG algorithm)
//! - [`Front`] / [`Point`]: geometry primitives and scratch buffers
//!
//! All objectives are **minimized** and the reference point must be no
//! better than any front member in any objective; negate objectives to
//! handle maximization.
//!
//! # References
//!
//! - While, Hingston, Barone, Huband (2006), "A Faster Algorithm for Calculating Hypervolume"
//! - Zitzler & Thiele (1999), "Multiobjective Evolutionary Algorithms: A Comparative
//!   Case Study and the Strength Pareto Approach"

mod front;
mod wfg;

pub use front::{Front, Point};
pub use wfg::WfgHypervolume;

use crate::solution::Solution;

/// One-shot hypervolume of a front relative to a reference point.
///
/// Builds a throwaway engine sized to the front. For repeated evaluation
/// (archives, indicator tracking across generations) construct a
/// [`WfgHypervolume`] once and reuse it.
///
/// # Panics
///
/// Panics if the front is non-empty and `reference` or any solution has
/// fewer than 2 objectives, or on dimension mismatch.
///
/// # Example
///
/// ```
/// use u_pareto::hypervolume::compute;
///
/// let front = vec![vec![1.0, 4.0], vec![2.0, 2.0], vec![4.0, 1.0]];
/// assert_eq!(compute(&front, &[5.0, 5.0]), 11.0);
/// ```
pub fn compute<S: Solution>(front: &[S], reference: &[f64]) -> f64 {
    if front.is_empty() {
        return 0.0;
    }
    let mut engine = WfgHypervolume::new(reference.len(), front.len());
    engine.hypervolume(front, reference)
}

/// Box volume spanned by a single point and the reference point.
///
/// The product of `|point[d] - reference[d]|` over all objectives. This is
/// the point's hypervolume in isolation when it weakly dominates the
/// reference.
///
/// # Panics
///
/// Panics if the two slices have different lengths.
///
/// # Example
///
/// ```
/// use u_pareto::hypervolume::inclusive_hv;
///
/// assert_eq!(inclusive_hv(&[1.0, 1.0], &[3.0, 4.0]), 6.0);
/// ```
pub fn inclusive_hv(point: &[f64], reference: &[f64]) -> f64 {
    assert_eq!(
        point.len(),
        reference.len(),
        "point has {} objectives, reference point has {}",
        point.len(),
        reference.len()
    );
    point
        .iter()
        .zip(reference)
        .map(|(&v, &r)| (v - r).abs())
        .product()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_empty_front() {
        let front: Vec<Vec<f64>> = Vec::new();
        assert_eq!(compute(&front, &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_compute_matches_engine() {
        let front = vec![vec![1.0, 4.0], vec![2.0, 2.0], vec![4.0, 1.0]];
        let reference = [5.0, 5.0];
        let mut engine = WfgHypervolume::new(2, front.len());
        assert_eq!(compute(&front, &reference), engine.hypervolume(&front, &reference));
    }

    #[test]
    fn test_inclusive_hv_box() {
        assert_eq!(inclusive_hv(&[1.0, 2.0, 3.0], &[6.0, 6.0, 6.0]), 60.0);
    }

    #[test]
    #[should_panic(expected = "point has 2 objectives, reference point has 3")]
    fn test_inclusive_hv_mismatch_panics() {
        inclusive_hv(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
    }
}
