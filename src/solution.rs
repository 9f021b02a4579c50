//! Core trait definition for multi-objective candidate solutions.
//!
//! The [`Solution`] trait is the contract between external search algorithms
//! (which create and evaluate candidates) and the ranking / archive machinery
//! in this crate (which only reads objective and constraint values).

/// A candidate solution in a multi-objective problem.
///
/// Solutions expose their evaluated objective values and, optionally,
/// constraint-violation values. All objectives are minimized; for
/// maximization problems, negate the objective.
///
/// Constraint values follow the standard convention: a negative value means
/// the constraint is violated by that amount, zero or positive means it is
/// satisfied. [`overall_constraint_violation`](Solution::overall_constraint_violation)
/// aggregates the negative entries.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct MySolution {
///     genes: Vec<f64>,
///     objectives: Vec<f64>,
/// }
///
/// impl Solution for MySolution {
///     fn objectives(&self) -> &[f64] { &self.objectives }
/// }
/// ```
///
/// Plain objective vectors (`Vec<f64>` and `[f64; N]`) implement `Solution`
/// directly, so the ranking functions and archives work without a wrapper
/// type for unconstrained problems.
pub trait Solution: Clone + Send + Sync {
    /// Returns the evaluated objective values, in problem order.
    ///
    /// The length must be the same for every solution of a given problem.
    fn objectives(&self) -> &[f64];

    /// Returns the constraint-violation values, in problem order.
    ///
    /// Negative entries are violations. The default implementation returns
    /// an empty slice (unconstrained problem).
    fn constraint_violations(&self) -> &[f64] {
        &[]
    }

    /// Sum of all negative constraint values.
    ///
    /// `0.0` for feasible solutions; strictly negative otherwise. Larger
    /// values (closer to zero) mean less total violation.
    fn overall_constraint_violation(&self) -> f64 {
        self.constraint_violations()
            .iter()
            .filter(|&&v| v < 0.0)
            .sum()
    }

    /// Returns `true` when no constraint is violated.
    fn is_feasible(&self) -> bool {
        self.overall_constraint_violation() == 0.0
    }
}

impl Solution for Vec<f64> {
    fn objectives(&self) -> &[f64] {
        self
    }
}

impl<const N: usize> Solution for [f64; N] {
    fn objectives(&self) -> &[f64] {
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Constrained {
        objectives: Vec<f64>,
        constraints: Vec<f64>,
    }

    impl Solution for Constrained {
        fn objectives(&self) -> &[f64] {
            &self.objectives
        }

        fn constraint_violations(&self) -> &[f64] {
            &self.constraints
        }
    }

    #[test]
    fn test_vec_is_a_solution() {
        let s = vec![1.0, 2.0];
        assert_eq!(s.objectives(), &[1.0, 2.0]);
        assert!(s.constraint_violations().is_empty());
        assert!(s.is_feasible());
    }

    #[test]
    fn test_array_is_a_solution() {
        let s = [3.0, 4.0, 5.0];
        assert_eq!(s.objectives(), &[3.0, 4.0, 5.0]);
        assert!(s.is_feasible());
    }

    #[test]
    fn test_overall_violation_sums_only_negatives() {
        let s = Constrained {
            objectives: vec![0.0],
            constraints: vec![-0.5, 2.0, -1.5, 0.0],
        };
        // 2.0 and 0.0 are satisfied and must not offset the violations.
        assert_eq!(s.overall_constraint_violation(), -2.0);
        assert!(!s.is_feasible());
    }

    #[test]
    fn test_all_constraints_satisfied_is_feasible() {
        let s = Constrained {
            objectives: vec![0.0],
            constraints: vec![0.0, 3.0],
        };
        assert_eq!(s.overall_constraint_violation(), 0.0);
        assert!(s.is_feasible());
    }
}
