//! Pareto dominance comparison.
//!
//! Domain-agnostic dominance testing for minimization problems, with
//! constraint handling: feasibility is compared before objectives, so any
//! feasible solution dominates any infeasible one.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - Deb (2000), "An Efficient Constraint Handling Method for Genetic Algorithms"

use crate::solution::Solution;

/// Dominance comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other (incomparable or equal).
    Neither,
}

/// Compares two objective vectors for Pareto dominance (minimization).
///
/// `a` dominates `b` when `a` is no worse in every objective and strictly
/// better in at least one. Comparison uses exact IEEE-754 equality; there is
/// no tolerance. Identical vectors are [`Neither`](Dominance::Neither).
///
/// Dominance is a strict partial order: irreflexive, asymmetric, and not
/// total — most solution pairs on a Pareto front are incomparable.
///
/// # Arguments
///
/// - `a`, `b`: objective vectors of equal length.
///
/// # Panics
///
/// Panics if the two vectors have different lengths.
///
/// # Example
///
/// ```
/// use u_pareto::dominance::{compare, Dominance};
///
/// assert_eq!(compare(&[1.0, 2.0], &[2.0, 3.0]), Dominance::Left);
/// assert_eq!(compare(&[2.0, 3.0], &[1.0, 2.0]), Dominance::Right);
/// assert_eq!(compare(&[1.0, 3.0], &[3.0, 1.0]), Dominance::Neither);
/// ```
pub fn compare(a: &[f64], b: &[f64]) -> Dominance {
    assert_eq!(
        a.len(),
        b.len(),
        "objective vectors must have the same length: {} vs {}",
        a.len(),
        b.len()
    );

    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Compares two solutions for constrained Pareto dominance.
///
/// Constraint violations are compared first: if either solution is
/// infeasible and their overall violations differ, the one with less total
/// violation (closer to zero) dominates outright, regardless of objectives.
/// Solutions with equal violation — in particular, two feasible ones — fall
/// through to the objective comparison of [`compare`].
///
/// # Panics
///
/// Panics if the two solutions have different objective counts.
///
/// # Example
///
/// ```
/// use u_pareto::dominance::{compare_solutions, Dominance};
///
/// let a = vec![1.0, 2.0];
/// let b = vec![2.0, 3.0];
/// assert_eq!(compare_solutions(&a, &b), Dominance::Left);
/// ```
pub fn compare_solutions<S: Solution>(a: &S, b: &S) -> Dominance {
    let va = a.overall_constraint_violation();
    let vb = b.overall_constraint_violation();

    if va < 0.0 || vb < 0.0 {
        if va > vb {
            return Dominance::Left;
        }
        if vb > va {
            return Dominance::Right;
        }
    }

    compare(a.objectives(), b.objectives())
}

// ============================================================================
// Tests
// ============================================================================
