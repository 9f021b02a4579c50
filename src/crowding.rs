//! Crowding distance density estimation.
//!
//! Measures how isolated each member of a front is in objective space.
//! Used by bounded archives and NSGA-II-style selection to prefer solutions
//! in sparse regions when capacity forces a choice.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"

use crate::solution::Solution;

/// Crowding distance assignment for diversity preservation.
///
/// Computes the crowding distance for each member of a mutually
/// non-dominated front. Higher distance means the solution is more isolated
/// (more diverse). Boundary solutions (min/max for any objective) receive
/// `f64::INFINITY`, and fronts of one or two solutions are all-boundary,
/// so every member gets infinity.
///
/// Sorting per objective is stable: members with equal objective values keep
/// insertion order, so the result is deterministic for any input.
///
/// # Algorithm (Deb et al., 2002)
///
/// For each objective:
/// 1. Sort solutions by objective value
/// 2. Assign infinity to boundary solutions
/// 3. For interior solutions, add the neighbor gap normalized by the
///    objective range; a zero-range objective contributes nothing
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = front size
///
/// # Arguments
///
/// - `front`: the members of one non-dominated front.
///
/// # Returns
///
/// A vector of crowding distances, one per solution, in input order.
///
/// # Example
///
/// ```
/// use u_pareto::crowding::crowding_distance;
///
/// let front = vec![
///     vec![1.0, 5.0],
///     vec![3.0, 3.0],
///     vec![5.0, 1.0],
/// ];
///
/// let distances = crowding_distance(&front);
///
/// // Boundary solutions get infinity
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// // Interior solution gets finite distance
/// assert!(distances[1].is_finite());
/// ```
pub fn crowding_distance<S: Solution>(front: &[S]) -> Vec<f64> {
    let n = front.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let m = front[0].objectives().len();
    let mut distances = vec![0.0f64; n];

    for obj_idx in 0..m {
        // Sort indices by this objective
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| {
            front[a].objectives()[obj_idx]
                .partial_cmp(&front[b].objectives()[obj_idx])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // Boundary solutions get infinity
        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        // Objective range for normalization
        let min_val = front[indices[0]].objectives()[obj_idx];
        let max_val = front[indices[n - 1]].objectives()[obj_idx];
        let range = max_val - min_val;

        if range > 0.0 {
            for i in 1..(n - 1) {
                let prev = front[indices[i - 1]].objectives()[obj_idx];
                let next = front[indices[i + 1]].objectives()[obj_idx];
                distances[indices[i]] += (next - prev) / range;
            }
        }
    }

    distances
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Degenerate fronts ----

    #[test]
    fn test_crowding_empty() {
        let front: Vec<Vec<f64>> = Vec::new();
        assert!(crowding_distance(&front).is_empty());
    }

    #[test]
    fn test_crowding_single() {
        let front = vec![vec![1.0, 2.0]];
        let dist = crowding_distance(&front);
        assert_eq!(dist.len(), 1);
        assert!(dist[0].is_infinite());
    }

    #[test]
    fn test_crowding_two() {
        let front = vec![vec![1.0, 3.0], vec![3.0, 1.0]];
        let dist = crowding_distance(&front);
        assert!(dist[0].is_infinite());
        assert!(dist[1].is_infinite());
    }

    // ---- Interior distances ----

    #[test]
    fn test_crowding_three_points() {
        let front = vec![
            vec![1.0, 5.0], // boundary
            vec![3.0, 3.0], // interior
            vec![5.0, 1.0], // boundary
        ];
        let dist = crowding_distance(&front);
        assert!(dist[0].is_infinite());
        assert!(dist[2].is_infinite());
        // Interior: (5-1)/(5-1) per objective = 1.0 + 1.0
        assert_eq!(dist[1], 2.0);
    }

    #[test]
    fn test_crowding_evenly_spaced() {
        // Evenly spaced solutions on a line
        let front = vec![
            vec![0.0, 4.0],
            vec![1.0, 3.0],
            vec![2.0, 2.0],
            vec![3.0, 1.0],
            vec![4.0, 0.0],
        ];
        let dist = crowding_distance(&front);

        // Boundaries
        assert!(dist[0].is_infinite());
        assert!(dist[4].is_infinite());

        // Interior points should have equal crowding distance
        let d1 = dist[1];
        let d2 = dist[2];
        let d3 = dist[3];
        assert!((d1 - d2).abs() < 1e-10, "expected equal: {d1} vs {d2}");
        assert!((d2 - d3).abs() < 1e-10, "expected equal: {d2} vs {d3}");
    }

    #[test]
    fn test_crowding_prefers_isolated() {
        // x = 1 sits in a cluster; x = 2 faces a wide gap on its right.
        let front = vec![
            vec![0.0, 10.0],
            vec![1.0, 9.0],
            vec![2.0, 8.0],
            vec![9.0, 1.0],
            vec![10.0, 0.0],
        ];
        let dist = crowding_distance(&front);
        assert!(
            dist[2] > dist[1],
            "isolated point must score higher: {} vs {}",
            dist[2],
            dist[1]
        );
    }

    #[test]
    fn test_crowding_zero_range_objective() {
        // One objective has zero range — should not cause division by zero
        let front = vec![vec![1.0, 5.0], vec![2.0, 5.0], vec![3.0, 5.0]];
        let dist = crowding_distance(&front);
        assert!(dist[0].is_infinite());
        assert!(dist[2].is_infinite());
        // Interior: only the non-zero-range objective contributes
        assert_eq!(dist[1], 1.0);
    }

    #[test]
    fn test_crowding_duplicate_interior_points() {
        // Stable sorting keeps duplicates in insertion order; both get the
        // same finite score.
        let front = vec![
            vec![0.0, 4.0],
            vec![2.0, 2.0],
            vec![2.0, 2.0],
            vec![4.0, 0.0],
        ];
        let dist = crowding_distance(&front);
        assert!(dist[0].is_infinite());
        assert!(dist[3].is_infinite());
        assert!(dist[1].is_finite());
        assert_eq!(dist[1], dist[2]);
    }
}
