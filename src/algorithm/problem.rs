//! Packing problems: a container plus required shape counts

use crate::io::error::{PackingError, Result};
use crate::spatial::registry::{ShapeId, ShapeRegistry};

/// Rectangular container measured in cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Container {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Container {
    /// Create a container of the given size
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total number of cells, or `None` on overflow
    pub const fn checked_cells(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Total number of cells, validated against a mask capacity
    ///
    /// # Errors
    ///
    /// Returns `OversizedContainer` if the area exceeds `max_cells` or
    /// overflows `usize`
    pub fn cells_within(&self, max_cells: usize) -> Result<usize> {
        match self.checked_cells() {
            Some(cells) if cells <= max_cells => Ok(cells),
            _ => Err(PackingError::OversizedContainer {
                width: self.width,
                height: self.height,
                max_cells,
            }),
        }
    }

    /// Flattened cell index of `(row, col)`
    pub const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// `(row, col)` of a flattened cell index
    pub const fn position(&self, index: usize) -> (usize, usize) {
        if self.width == 0 {
            (0, 0)
        } else {
            (index / self.width, index % self.width)
        }
    }
}

/// One feasibility question: can these pieces fit in this container?
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    /// Container to pack into
    pub container: Container,
    /// Required instance count, indexed by shape identifier
    pub counts: Vec<usize>,
}

impl Problem {
    /// Create a problem from container size and per-shape counts
    pub const fn new(width: usize, height: usize, counts: Vec<usize>) -> Self {
        Self {
            container: Container::new(width, height),
            counts,
        }
    }

    /// Total number of pieces to place, saturating at `usize::MAX`
    pub fn item_count(&self) -> usize {
        self.counts.iter().copied().fold(0, usize::saturating_add)
    }

    /// Shape identifiers with a positive count, with their counts
    pub fn requested(&self) -> impl Iterator<Item = (ShapeId, usize)> + '_ {
        self.counts
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, count)| count > 0)
    }

    /// Total area of all requested pieces
    ///
    /// Saturates instead of overflowing, so an absurd request still compares
    /// as larger than any container.
    ///
    /// # Errors
    ///
    /// Returns `UnknownShape` if a positive count names an unregistered shape
    pub fn required_area(&self, registry: &ShapeRegistry) -> Result<usize> {
        let mut total = 0_usize;
        for (id, count) in self.requested() {
            let entry = registry.require(id, count)?;
            total = total.saturating_add(entry.area().saturating_mul(count));
        }
        Ok(total)
    }
}
