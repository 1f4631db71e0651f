use bitvec::prelude::*;
use std::fmt;

/// Fixed-length bit-set over the cells of one container
///
/// Bit `row * width + col` marks container cell `(row, col)`. Used both for
/// placement masks and for the working occupancy of a search. Set operations
/// work word-by-word on the backing storage; two masks combined in one
/// operation must have the same length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMask {
    bits: BitVec<u64, Lsb0>,
}

impl CellMask {
    /// Create a mask with no cells set
    pub fn new(cell_count: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, cell_count),
        }
    }

    /// Number of addressable cells
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Test if the mask addresses no cells at all
    pub fn is_zero_length(&self) -> bool {
        self.bits.is_empty()
    }

    /// Mark a cell; indices past the end are ignored
    pub fn insert(&mut self, cell: usize) {
        if cell < self.bits.len() {
            self.bits.set(cell, true);
        }
    }

    /// Test cell membership
    pub fn contains(&self, cell: usize) -> bool {
        self.bits.get(cell).as_deref() == Some(&true)
    }

    /// Test if any cell is set in both masks
    pub fn overlaps(&self, other: &Self) -> bool {
        self.bits
            .as_raw_slice()
            .iter()
            .zip(other.bits.as_raw_slice())
            .any(|(mine, theirs)| mine & theirs != 0)
    }

    /// Set every cell of `other` in this mask
    pub fn union_with(&mut self, other: &Self) {
        for (mine, theirs) in self
            .bits
            .as_raw_mut_slice()
            .iter_mut()
            .zip(other.bits.as_raw_slice())
        {
            *mine |= *theirs;
        }
    }

    /// Clear every cell of `other` from this mask
    ///
    /// Exactly undoes `union_with` when the two masks were disjoint beforehand.
    pub fn remove(&mut self, other: &Self) {
        for (mine, theirs) in self
            .bits
            .as_raw_mut_slice()
            .iter_mut()
            .zip(other.bits.as_raw_slice())
        {
            *mine &= !*theirs;
        }
    }

    /// Test if no cells are set
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count set cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate set cell indices in ascending order
    pub fn iter_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}

impl fmt::Display for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CellMask({}/{} cells: {:?})",
            self.count(),
            self.len(),
            self.iter_cells().collect::<Vec<_>>()
        )
    }
}
