use crate::extent::Extent3;

/// A parsed sparse tensor, reduced to its first three modes.
///
/// `vertices[i]` and `values[i]` come from the same input record, in file
/// order. Nothing mutates a dataset after construction; loading another file
/// produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorDataset {
    vertices: Vec<[f64; 3]>,
    values: Vec<f64>,
    extent: Extent3,
    mode_count: usize,
}

impl Default for TensorDataset {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            values: Vec::new(),
            extent: Extent3::EMPTY,
            mode_count: 0,
        }
    }
}

impl TensorDataset {
    pub(crate) fn from_parts(
        vertices: Vec<[f64; 3]>,
        values: Vec<f64>,
        extent: Extent3,
        mode_count: usize,
    ) -> Self {
        debug_assert_eq!(vertices.len(), values.len());
        Self {
            vertices,
            values,
            extent,
            mode_count,
        }
    }

    /// Build a 3-mode dataset from `(coordinate, value)` records.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ([f64; 3], f64)>,
    {
        let (vertices, values): (Vec<[f64; 3]>, Vec<f64>) = records.into_iter().unzip();
        let extent = vertices.iter().copied().collect();
        let mode_count = if vertices.is_empty() { 0 } else { 3 };

        Self::from_parts(vertices, values, extent, mode_count)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[[f64; 3]] {
        &self.vertices
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn extent(&self) -> Extent3 {
        self.extent
    }

    /// Per-axis minimum; `+inf` on every axis for an empty dataset.
    #[inline]
    pub fn min_extent(&self) -> [f64; 3] {
        self.extent.min
    }

    /// Per-axis maximum; `-inf` on every axis for an empty dataset.
    #[inline]
    pub fn max_extent(&self) -> [f64; 3] {
        self.extent.max
    }

    /// Largest number of coordinate modes seen on a single record.
    #[inline]
    pub fn mode_count(&self) -> usize {
        self.mode_count
    }

    /// True when some record carried modes beyond the third, which were dropped.
    #[inline]
    pub fn has_higher_modes(&self) -> bool {
        self.mode_count > 3
    }

    /// True when the extents never left their sentinels, i.e. there is no
    /// box worth drawing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.extent.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = ([f64; 3], f64)> + '_ {
        self.vertices
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_records_keeps_order_and_bounds() {
        let ds = TensorDataset::from_records([
            ([3.0, 0.0, 1.0], 0.5),
            ([1.0, 2.0, -1.0], 1.5),
        ]);

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.vertices(), &[[3.0, 0.0, 1.0], [1.0, 2.0, -1.0]]);
        assert_eq!(ds.values(), &[0.5, 1.5]);
        assert_eq!(ds.min_extent(), [1.0, 0.0, -1.0]);
        assert_eq!(ds.max_extent(), [3.0, 2.0, 1.0]);
        assert_eq!(ds.mode_count(), 3);
        assert!(!ds.is_degenerate());
    }

    #[test]
    fn default_is_degenerate() {
        let ds = TensorDataset::default();
        assert!(ds.is_empty());
        assert!(ds.is_degenerate());
        assert_eq!(ds.mode_count(), 0);
        assert!(!ds.has_higher_modes());
        assert_eq!(ds.iter().len(), 0);
    }
}
