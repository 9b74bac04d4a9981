//! Coordinate compression: map the sparse endpoint coordinates of one
//! axis to dense indices `0..len`.
//!
//! The painted picture can span coordinates up to the sum of all stroke
//! lengths, but only coordinates that appear as segment endpoints
//! matter: within a compressed cell the coverage is uniform. Compression
//! bounds the sweep and detection work by the number of strokes instead
//! of the coordinate range.
//!
//! This is step 2 in the pipeline, between tracing and the sweep.

use std::collections::HashMap;

/// Sorted distinct coordinates for one axis, with a reverse map from
/// real coordinate to dense index.
///
/// Index 0 is the minimum coordinate seen and `len() - 1` the maximum.
/// Indices are order-preserving: a smaller real coordinate always maps
/// to a smaller index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompressedAxis {
    sorted: Vec<i64>,
    index: HashMap<i64, usize>,
}

impl CompressedAxis {
    /// Build from the (unsorted, possibly duplicated) coordinates seen
    /// on one axis.
    #[must_use]
    pub fn new(mut coords: Vec<i64>) -> Self {
        coords.sort_unstable();
        coords.dedup();
        let index = coords
            .iter()
            .copied()
            .enumerate()
            .map(|(i, coord)| (coord, i))
            .collect();
        Self {
            sorted: coords,
            index,
        }
    }

    /// Number of distinct coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Whether the axis saw no coordinates at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Dense index of a real coordinate, if it was seen.
    #[must_use]
    pub fn index_of(&self, coord: i64) -> Option<usize> {
        self.index.get(&coord).copied()
    }

    /// Real coordinate at a dense index.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<i64> {
        self.sorted.get(index).copied()
    }

    /// The sorted distinct coordinates.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.sorted
    }
}
