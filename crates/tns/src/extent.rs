//! Axis-aligned bounds over parsed coordinates.

/// Per-axis minimum and maximum of a set of `(x, y, z)` coordinates.
///
/// Starts at [`Extent3::EMPTY`], where every `min` is `+inf` and every `max`
/// is `-inf`, so the first included point snaps both bounds onto itself.
/// An extent that never saw a point stays inverted (`min > max`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent3 {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Default for Extent3 {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Extent3 {
    /// Sentinel extent containing no points.
    pub const EMPTY: Self = Self {
        min: [f64::INFINITY; 3],
        max: [f64::NEG_INFINITY; 3],
    };

    /// Grow the extent so that it covers `point`.
    #[inline(always)]
    pub fn include(&mut self, point: [f64; 3]) {
        for axis in 0..3 {
            if point[axis] < self.min[axis] {
                self.min[axis] = point[axis];
            }
            if point[axis] > self.max[axis] {
                self.max[axis] = point[axis];
            }
        }
    }

    /// True while no point has been included on some axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        (0..3).any(|axis| self.min[axis] > self.max[axis])
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, point: [f64; 3]) -> bool {
        (0..3).all(|axis| self.min[axis] <= point[axis] && point[axis] <= self.max[axis])
    }
}

impl FromIterator<[f64; 3]> for Extent3 {
    fn from_iter<I: IntoIterator<Item = [f64; 3]>>(iter: I) -> Self {
        let mut extent = Self::EMPTY;
        for point in iter {
            extent.include(point);
        }
        extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_extent_is_inverted() {
        let extent = Extent3::EMPTY;
        assert!(extent.is_empty());
        assert!(!extent.contains([0.0, 0.0, 0.0]));
        assert_eq!(Extent3::default(), Extent3::EMPTY);
    }

    #[test]
    fn single_point_collapses_bounds() {
        let mut extent = Extent3::EMPTY;
        extent.include([-2.0, 5.0, 0.5]);
        assert!(!extent.is_empty());
        assert_eq!(extent.min, [-2.0, 5.0, 0.5]);
        assert_eq!(extent.max, [-2.0, 5.0, 0.5]);
        assert!(extent.contains([-2.0, 5.0, 0.5]));
    }

    #[test]
    fn negative_axes_keep_negative_max() {
        let extent: Extent3 = [[-3.0, -1.0, -7.0], [-4.0, -2.0, -6.0]].into_iter().collect();
        assert_eq!(extent.min, [-4.0, -2.0, -7.0]);
        assert_eq!(extent.max, [-3.0, -1.0, -6.0]);
    }
}
