//! Backtracking placement search
//!
//! Places items one at a time in list order. Each level tries every
//! orientation of its item at every free offset, ORs the chosen mask into the
//! occupancy and recurses; on failure the mask is removed again before the
//! next candidate, so sibling branches always see the same occupancy.

use crate::algorithm::bitset::CellMask;
use crate::algorithm::items::SearchItem;
use crate::algorithm::solver::{SearchStats, SymmetryBreaking};

/// Orientation index and offset chosen for one item
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlacementChoice {
    /// Flattened container index of the bounding box's top-left cell
    pub offset: usize,
    /// Index into the item's orientation list
    pub orientation: usize,
}

/// How a search run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every item was placed
    Found,
    /// All candidates were tried without success
    Exhausted,
    /// The node limit was reached before a verdict
    Aborted,
}

/// First offset an item may use in a given orientation
///
/// Untied items start at 0. An item tied to an identical predecessor must
/// come strictly after it in (offset, orientation) order: orientations with a
/// larger index than the predecessor's may reuse its offset, the rest start
/// at `last_offset + 1`.
pub fn start_offset(
    tied_to_previous: bool,
    symmetry: SymmetryBreaking,
    previous: Option<PlacementChoice>,
    orientation: usize,
) -> usize {
    match previous {
        Some(last) if tied_to_previous && symmetry == SymmetryBreaking::Canonical => {
            if orientation > last.orientation {
                last.offset
            } else {
                last.offset + 1
            }
        }
        _ => 0,
    }
}

/// Depth-first placement search over a prepared item list
pub struct PlacementSearch<'a> {
    items: &'a [SearchItem],
    symmetry: SymmetryBreaking,
    node_limit: Option<u64>,
    occupancy: CellMask,
    trail: Vec<PlacementChoice>,
    stats: SearchStats,
}

impl<'a> PlacementSearch<'a> {
    /// Prepare a search over `items` in a container of `cell_count` cells
    pub fn new(
        items: &'a [SearchItem],
        cell_count: usize,
        symmetry: SymmetryBreaking,
        node_limit: Option<u64>,
    ) -> Self {
        Self {
            items,
            symmetry,
            node_limit,
            occupancy: CellMask::new(cell_count),
            trail: Vec::with_capacity(items.len()),
            stats: SearchStats {
                items: items.len(),
                ..SearchStats::default()
            },
        }
    }

    /// Run the search from an empty container
    pub fn run(&mut self) -> SearchOutcome {
        self.place(0, None)
    }

    /// Choices made for each item, in item order, after a `Found` outcome
    pub fn trail(&self) -> &[PlacementChoice] {
        &self.trail
    }

    /// Counters accumulated so far
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Current occupancy; empty again after an `Exhausted` outcome
    pub const fn occupancy(&self) -> &CellMask {
        &self.occupancy
    }

    fn place(&mut self, depth: usize, previous: Option<PlacementChoice>) -> SearchOutcome {
        let items = self.items;
        let Some(item) = items.get(depth) else {
            return SearchOutcome::Found;
        };

        self.stats.nodes += 1;
        if self.node_limit.is_some_and(|limit| self.stats.nodes > limit) {
            return SearchOutcome::Aborted;
        }

        for (orientation_index, orientation) in item.orientations.iter().enumerate() {
            let start = start_offset(
                item.tied_to_previous,
                self.symmetry,
                previous,
                orientation_index,
            );

            for placement in orientation.placements_from(start) {
                self.stats.placements_tested += 1;
                if self.occupancy.overlaps(&placement.mask) {
                    continue;
                }

                let choice = PlacementChoice {
                    offset: placement.offset,
                    orientation: orientation_index,
                };
                self.occupancy.union_with(&placement.mask);
                self.trail.push(choice);

                match self.place(depth + 1, Some(choice)) {
                    SearchOutcome::Found => return SearchOutcome::Found,
                    SearchOutcome::Aborted => return SearchOutcome::Aborted,
                    SearchOutcome::Exhausted => {
                        self.trail.pop();
                        self.occupancy.remove(&placement.mask);
                    }
                }
            }
        }

        SearchOutcome::Exhausted
    }
}
