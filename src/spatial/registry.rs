//! Immutable shape registry built once at load time
//!
//! Owns every base shape together with its precomputed orientations so that
//! repeated problems never re-run the normalizer.

use std::collections::BTreeMap;

use crate::io::error::{PackingError, Result, malformed_shape};
use crate::spatial::orientation::OrientationSet;
use crate::spatial::shape::Shape;

/// Small non-negative shape identifier
pub type ShapeId = usize;

/// A registered shape and its cached orientations
#[derive(Clone, Debug)]
pub struct ShapeEntry {
    shape: Shape,
    orientations: OrientationSet,
}

impl ShapeEntry {
    /// The shape as it was registered
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Distinct orientations of the shape
    pub const fn orientations(&self) -> &OrientationSet {
        &self.orientations
    }

    /// Number of filled cells
    pub const fn area(&self) -> usize {
        self.orientations.area()
    }
}

/// Lookup table from shape identifier to shape and orientations
#[derive(Clone, Debug, Default)]
pub struct ShapeRegistry {
    entries: BTreeMap<ShapeId, ShapeEntry>,
}

impl ShapeRegistry {
    /// Build a registry, expanding orientations for every shape
    ///
    /// # Errors
    ///
    /// Returns `MalformedShape` if the same identifier appears twice
    pub fn from_shapes(shapes: impl IntoIterator<Item = (ShapeId, Shape)>) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for (id, shape) in shapes {
            if entries.contains_key(&id) {
                return Err(malformed_shape(Some(id), &"identifier registered twice"));
            }
            let orientations = OrientationSet::new(&shape);
            entries.insert(
                id,
                ShapeEntry {
                    shape,
                    orientations,
                },
            );
        }

        Ok(Self { entries })
    }

    /// Look up a registered shape
    pub fn get(&self, id: ShapeId) -> Option<&ShapeEntry> {
        self.entries.get(&id)
    }

    /// Look up a registered shape, failing for unknown identifiers
    ///
    /// # Errors
    ///
    /// Returns `UnknownShape` if the identifier was never registered
    pub fn require(&self, id: ShapeId, count: usize) -> Result<&ShapeEntry> {
        self.entries
            .get(&id)
            .ok_or(PackingError::UnknownShape { shape: id, count })
    }

    /// Orientations of a registered shape
    pub fn orientations(&self, id: ShapeId) -> Option<&OrientationSet> {
        self.get(id).map(ShapeEntry::orientations)
    }

    /// Number of registered shapes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test whether no shapes are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending identifier order
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &ShapeEntry)> {
        self.entries.iter().map(|(&id, entry)| (id, entry))
    }
}
