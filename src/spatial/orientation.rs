//! Orientation expansion for polyomino shapes
//!
//! Generates the rotations and reflections of a shape and collapses the ones
//! that coincide, so a symmetric piece yields fewer than eight orientations.

use crate::io::configuration::ORIENTATION_CANDIDATES;
use crate::spatial::shape::Shape;

/// The distinct orientations of one base shape
///
/// Orientations are trimmed to their bounding boxes and kept sorted by
/// (height, width, cell pattern), so two shapes with the same geometry always
/// produce identical sets in identical order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrientationSet {
    area: usize,
    orientations: Vec<Shape>,
}

impl OrientationSet {
    /// Expand a base shape into its distinct orientations
    pub fn new(shape: &Shape) -> Self {
        Self {
            area: shape.area(),
            orientations: orientations(shape),
        }
    }

    /// Number of filled cells shared by every orientation
    pub const fn area(&self) -> usize {
        self.area
    }

    /// Number of distinct orientations
    pub const fn len(&self) -> usize {
        self.orientations.len()
    }

    /// Always false for sets built from a valid shape
    pub const fn is_empty(&self) -> bool {
        self.orientations.is_empty()
    }

    /// Orientation at a given index
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.orientations.get(index)
    }

    /// Test whether a grid is one of the orientations
    pub fn contains(&self, shape: &Shape) -> bool {
        self.orientations.contains(shape)
    }

    /// Iterate orientations in canonical order
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.orientations.iter()
    }
}

impl<'a> IntoIterator for &'a OrientationSet {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Expand a shape into its distinct orientations
///
/// Applies four quarter turns, reflects, and applies four more. Each
/// candidate is trimmed to its bounding box before deduplication.
pub fn orientations(shape: &Shape) -> Vec<Shape> {
    let mut candidates = Vec::with_capacity(ORIENTATION_CANDIDATES);
    let mut current = shape.trimmed();

    for _ in 0..2 {
        for _ in 0..4 {
            let next = current.rotate_90();
            candidates.push(current);
            current = next;
        }
        current = current.reflect();
    }

    candidates.sort_by_cached_key(canonical_key);
    candidates.dedup();
    candidates
}

fn canonical_key(shape: &Shape) -> (usize, usize, Vec<bool>) {
    (shape.height(), shape.width(), shape.pattern())
}
