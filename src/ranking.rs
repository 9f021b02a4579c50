//! Non-dominated front ranking.
//!
//! Partitions a set of solutions into successive Pareto fronts using fast
//! non-dominated sorting. Constraint handling comes from
//! [`compare_solutions`](crate::dominance::compare_solutions), so infeasible
//! solutions always rank behind feasible ones.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

use crate::dominance::{compare_solutions, Dominance};
use crate::solution::Solution;

/// Result of non-dominated sorting.
///
/// Each element of `ranks` is the Pareto rank of the solution at the same
/// index. Rank 0 is the Pareto front (non-dominated solutions).
#[derive(Debug, Clone)]
pub struct Ranking {
    /// Pareto rank for each solution (0 = front).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

/// Fast non-dominated sorting.
///
/// Assigns a Pareto rank to each solution based on dominance relationships.
/// All objectives are **minimized**: lower values are better. Solutions with
/// identical objective vectors do not dominate each other and land in the
/// same front. An empty input yields an empty ranking.
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. For each pair of solutions, determine dominance
/// 2. Solutions dominated by no other belong to front 0 (rank 0)
/// 3. Remove front 0, repeat to find subsequent fronts
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of solutions
///
/// # Arguments
///
/// - `solutions`: the solutions to rank. All must have the same number of
///   objectives.
///
/// # Panics
///
/// Panics if solutions have no objectives or inconsistent objective counts.
///
/// # Example
///
/// ```
/// use u_pareto::ranking::non_dominated_sort;
///
/// let solutions = vec![
///     vec![1.0, 5.0],  // Solution A
///     vec![3.0, 3.0],  // Solution B
///     vec![5.0, 1.0],  // Solution C
///     vec![4.0, 4.0],  // Solution D — dominated by B
/// ];
///
/// let result = non_dominated_sort(&solutions);
///
/// // A, B, C are non-dominated (rank 0)
/// assert_eq!(result.ranks[0], 0); // A
/// assert_eq!(result.ranks[1], 0); // B
/// assert_eq!(result.ranks[2], 0); // C
/// assert_eq!(result.ranks[3], 1); // D — dominated by B
/// ```
pub fn non_dominated_sort<S: Solution>(solutions: &[S]) -> Ranking {
    let n = solutions.len();
    if n == 0 {
        return Ranking {
            ranks: Vec::new(),
            fronts: Vec::new(),
        };
    }

    let m = solutions[0].objectives().len();
    assert!(m > 0, "each solution must have at least one objective");

    if n == 1 {
        return Ranking {
            ranks: vec![0],
            fronts: vec![vec![0]],
        };
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];
    let mut front_0 = Vec::new();

    // Compute dominance relationships
    for i in 0..n {
        for j in (i + 1)..n {
            match compare_solutions(&solutions[i], &solutions[j]) {
                Dominance::Left => {
                    // i dominates j
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    // j dominates i
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }

        if domination_count[i] == 0 {
            ranks[i] = 0;
            front_0.push(i);
        }
    }

    // Build subsequent fronts
    let mut fronts = vec![front_0];
    loop {
        let current = fronts.last().expect("fronts is initialized with front_0; never empty");
        let mut next_front = Vec::new();

        for &i in current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len();
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    Ranking { ranks, fronts }
}

// ============================================================================
// Tests
// ============================================================================
