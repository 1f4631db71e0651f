//! Placement mask encoding
//!
//! Turns one orientation and one container into the list of cell masks the
//! orientation could occupy, one per top-left offset where its bounding box
//! fits inside the container.

use crate::algorithm::bitset::CellMask;
use crate::algorithm::problem::Container;
use crate::spatial::shape::Shape;

/// One orientation anchored at one container offset
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementMask {
    /// Flattened index of the bounding box's top-left cell
    pub offset: usize,
    /// Cells occupied at this offset
    pub mask: CellMask,
}

/// Every valid placement of one orientation inside one container
#[derive(Clone, Debug)]
pub struct EncodedOrientation {
    /// Bounding box height of the orientation
    pub height: usize,
    /// Bounding box width of the orientation
    pub width: usize,
    /// Placements in ascending offset order
    pub placements: Vec<PlacementMask>,
}

impl EncodedOrientation {
    /// Placements whose offset is at least `start`
    pub fn placements_from(&self, start: usize) -> &[PlacementMask] {
        let first = self
            .placements
            .partition_point(|placement| placement.offset < start);
        self.placements.get(first..).unwrap_or(&[])
    }
}

/// Encode every valid placement of `orientation` in `container`
///
/// Offsets are visited in row-major order over the flattened cell index
/// space; offsets whose bounding box would cross the right or bottom edge are
/// skipped. The container size must already have been checked against the
/// mask capacity.
pub fn encode(orientation: &Shape, container: Container) -> EncodedOrientation {
    let (height, width) = (orientation.height(), orientation.width());
    let cells: Vec<(usize, usize)> = orientation.filled_cells().collect();
    let cell_count = container.width * container.height;

    let mut placements = Vec::new();
    for shift in 0..cell_count {
        let (row, col) = container.position(shift);
        if row + height > container.height || col + width > container.width {
            continue;
        }

        let mut mask = CellMask::new(cell_count);
        for &(dr, dc) in &cells {
            mask.insert(container.index(row + dr, col + dc));
        }
        placements.push(PlacementMask { offset: shift, mask });
    }

    EncodedOrientation {
        height,
        width,
        placements,
    }
}
