//! Unbounded non-dominated archive.
//!
//! Keeps every non-dominated solution encountered, with no capacity limit.
//! Also hosts the admission filter shared with the bounded archive.

use crate::dominance::{compare_solutions, Dominance};
use crate::solution::Solution;

/// Admission filter shared by the archives: removes members the candidate
/// dominates (order-preserving) and returns whether the candidate belongs
/// in the archive.
///
/// Returns `false` — leaving earlier removals in place — when a member
/// dominates the candidate or matches its objectives exactly.
pub(crate) fn try_admit<S: Solution>(members: &mut Vec<S>, candidate: &S) -> bool {
    let mut i = 0;
    while i < members.len() {
        match compare_solutions(candidate, &members[i]) {
            Dominance::Right => return false,
            Dominance::Left => {
                members.remove(i);
            }
            Dominance::Neither => {
                if members[i].objectives() == candidate.objectives() {
                    return false;
                }
                i += 1;
            }
        }
    }
    true
}

/// An archive that keeps every non-dominated solution seen so far.
///
/// [`add`](NonDominatedArchive::add) applies the same dominance and
/// duplicate filters as [`BoundedArchive`](crate::archive::BoundedArchive)
/// but never evicts. Useful when the complete final front matters more than
/// bounded memory — small problems, reference-front construction, or
/// post-run collection.
///
/// # Example
///
/// ```
/// use u_pareto::archive::NonDominatedArchive;
///
/// let mut archive = NonDominatedArchive::new();
/// archive.add(vec![2.0, 2.0]);
/// archive.add(vec![1.0, 3.0]);
/// assert_eq!(archive.len(), 2);
///
/// // A dominating solution replaces everything it beats.
/// archive.add(vec![1.0, 1.0]);
/// assert_eq!(archive.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct NonDominatedArchive<S: Solution> {
    members: Vec<S>,
}

impl<S: Solution> NonDominatedArchive<S> {
    /// Creates an empty archive.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Tries to add a solution.
    ///
    /// Members dominated by the solution are removed. Returns `false` when
    /// a member dominates the solution or duplicates its objectives; the
    /// archive is unchanged in the dominated case.
    pub fn add(&mut self, solution: S) -> bool {
        if !try_admit(&mut self.members, &solution) {
            return false;
        }
        self.members.push(solution);
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

    /// The members, in insertion order.
    pub fn solutions(&self) -> &[S] {
        &self.members
    }

    /// Consumes the archive and returns its members.
    pub fn into_solutions(self) -> Vec<S> {
        self.members
    }
}

impl<S: Solution> Default for NonDominatedArchive<S> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
