//! Geometry primitives for the hypervolume engine.
//!
//! [`Point`] is an owned objective vector; [`Front`] is a reusable buffer of
//! points with a live count, so the engine's recursion scratch can be
//! allocated once and recycled across calls without freeing storage.

/// A point in objective space.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    values: Vec<f64>,
}

impl Point {
    /// Creates a point from its objective values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Creates a zero point of the given dimension.
    pub fn zeroed(dimension: usize) -> Self {
        Self {
            values: vec![0.0; dimension],
        }
    }

    /// Number of objective values.
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Value of one objective.
    pub fn value(&self, objective: usize) -> f64 {
        self.values[objective]
    }

    /// All objective values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn set_value(&mut self, objective: usize, value: f64) {
        self.values[objective] = value;
    }

    pub(crate) fn copy_from(&mut self, values: &[f64]) {
        self.values.clear();
        self.values.extend_from_slice(values);
    }
}

/// A reusable buffer of points.
///
/// The live length ([`len`](Front::len)) can be smaller than the physical
/// storage: shrinking the front keeps the allocated points available for
/// reuse. The hypervolume engine exploits this to build scratch fronts with
/// zero allocation on the hot path.
#[derive(Debug, Clone, Default)]
pub struct Front {
    points: Vec<Point>,
    len: usize,
}

impl Front {
    /// Creates an empty front with no pre-allocated storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty front with `max_points` zeroed points of the given
    /// dimension pre-allocated.
    pub fn with_capacity(max_points: usize, dimension: usize) -> Self {
        Self {
            points: (0..max_points).map(|_| Point::zeroed(dimension)).collect(),
            len: 0,
        }
    }

    /// Number of live points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the front holds no live points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live points, in order.
    pub fn points(&self) -> &[Point] {
        &self.points[..self.len]
    }

    /// One live point.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn point(&self, index: usize) -> &Point {
        assert!(
            index < self.len,
            "point index {} out of bounds for front of {} points",
            index,
            self.len
        );
        &self.points[index]
    }

    /// Drops all live points, keeping the storage.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Appends a point by copying `values` into the next slot, reusing
    /// storage when available.
    pub fn push(&mut self, values: &[f64]) {
        if self.len == self.points.len() {
            self.points.push(Point::new(values.to_vec()));
        } else {
            self.points[self.len].copy_from(values);
        }
        self.len += 1;
    }

    /// Ensures at least `n` physical slots of the given dimension exist.
    pub(crate) fn ensure_physical(&mut self, n: usize, dimension: usize) {
        while self.points.len() < n {
            self.points.push(Point::zeroed(dimension));
        }
    }

    /// Sets the live length. Slots beyond the previous length must already
    /// hold meaningful data.
    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.points.len(), "live length exceeds physical storage");
        self.len = len;
    }

    /// Swaps two physical slots (either may be beyond the live length).
    pub(crate) fn swap_points(&mut self, a: usize, b: usize) {
        self.points.swap(a, b);
    }

    /// Read access to one physical slot (may be beyond the live length).
    pub(crate) fn slot(&self, index: usize) -> &Point {
        &self.points[index]
    }

    /// Mutable access to one physical slot.
    pub(crate) fn point_mut(&mut self, index: usize) -> &mut Point {
        &mut self.points[index]
    }

    /// Sorts the live points with `compare`, leaving spare slots untouched.
    pub(crate) fn sort_live_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Point, &Point) -> std::cmp::Ordering,
    {
        self.points[..self.len].sort_by(compare);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_accessors() {
        let p = Point::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(p.dimension(), 3);
        assert_eq!(p.value(1), 2.0);
        assert_eq!(p.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_push_and_view() {
        let mut front = Front::new();
        front.push(&[1.0, 2.0]);
        front.push(&[3.0, 4.0]);
        assert_eq!(front.len(), 2);
        assert_eq!(front.point(0).values(), &[1.0, 2.0]);
        assert_eq!(front.point(1).values(), &[3.0, 4.0]);
    }

    #[test]
    fn test_clear_keeps_storage() {
        let mut front = Front::with_capacity(4, 2);
        front.push(&[1.0, 2.0]);
        front.push(&[3.0, 4.0]);
        front.clear();
        assert!(front.is_empty());
        // Reuse the same slots
        front.push(&[5.0, 6.0]);
        assert_eq!(front.len(), 1);
        assert_eq!(front.point(0).values(), &[5.0, 6.0]);
    }

    #[test]
    fn test_push_grows_beyond_capacity() {
        let mut front = Front::with_capacity(1, 2);
        front.push(&[1.0, 2.0]);
        front.push(&[3.0, 4.0]);
        assert_eq!(front.len(), 2);
        assert_eq!(front.point(1).values(), &[3.0, 4.0]);
    }

    #[test]
    fn test_set_len_exposes_written_slots() {
        let mut front = Front::with_capacity(3, 2);
        front.point_mut(0).set_value(0, 7.0);
        front.point_mut(0).set_value(1, 8.0);
        front.set_len(1);
        assert_eq!(front.point(0).values(), &[7.0, 8.0]);
    }

    #[test]
    #[should_panic(expected = "point index 1 out of bounds")]
    fn test_live_indexing_is_checked() {
        let mut front = Front::with_capacity(4, 2);
        front.push(&[1.0, 2.0]);
        front.point(1);
    }

    #[test]
    fn test_sort_live_only() {
        let mut front = Front::with_capacity(4, 1);
        front.push(&[3.0]);
        front.push(&[1.0]);
        front.push(&[2.0]);
        front.sort_live_by(|a, b| {
            a.value(0).partial_cmp(&b.value(0)).unwrap_or(std::cmp::Ordering::Equal)
        });
        assert_eq!(front.point(0).value(0), 1.0);
        assert_eq!(front.point(1).value(0), 2.0);
        assert_eq!(front.point(2).value(0), 3.0);
    }
}
