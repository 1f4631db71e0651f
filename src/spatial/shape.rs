//! Immutable boolean polyomino grids
//!
//! A [`Shape`] is a rectangular grid of filled and empty cells. Grids are
//! validated on construction: every row has the same length and at least one
//! cell is filled. Transformations return new grids and never mutate in place.

use ndarray::{Array2, Axis, Slice};

use crate::io::error::{Result, malformed_shape};

/// A rectangular boolean grid describing one polyomino
///
/// Cell `(row, col)` is `true` when filled. Equality and hashing are
/// structural, so two shapes with the same cells compare equal regardless of
/// where they came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: Array2<bool>,
}

impl Shape {
    /// Build a shape from rows of cells
    ///
    /// # Errors
    ///
    /// Returns `MalformedShape` if there are no rows, the rows differ in
    /// length, or no cell is filled
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        if height == 0 || width == 0 {
            return Err(malformed_shape(None, &"grid has no cells"));
        }

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != width)
        {
            return Err(malformed_shape(
                None,
                &format!(
                    "row {index} has {} cells, expected {width}",
                    row.as_ref().len()
                ),
            ));
        }

        let flat: Vec<bool> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        let cells = Array2::from_shape_vec((height, width), flat)
            .map_err(|err| malformed_shape(None, &err))?;

        Self::from_array(cells)
    }

    /// Wrap an existing grid
    ///
    /// # Errors
    ///
    /// Returns `MalformedShape` if the grid has no filled cell
    pub fn from_array(cells: Array2<bool>) -> Result<Self> {
        if !cells.iter().any(|&filled| filled) {
            return Err(malformed_shape(None, &"grid has no filled cells"));
        }
        Ok(Self { cells })
    }

    /// Number of rows in the bounding grid
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns in the bounding grid
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of filled cells
    pub fn area(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Test whether a cell is filled; out-of-range cells are empty
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cells.get((row, col)).copied().unwrap_or(false)
    }

    /// Iterate filled cells as `(row, col)` in row-major order
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|(position, &filled)| filled.then_some(position))
    }

    /// Borrow the underlying grid
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Quarter turn clockwise
    ///
    /// Cell `(r, c)` of an `H×W` grid moves to `(c, H-1-r)` of the `W×H` result.
    #[must_use]
    pub fn rotate_90(&self) -> Self {
        let mut rotated = self.cells.t();
        rotated.invert_axis(Axis(1));
        Self {
            cells: rotated.to_owned(),
        }
    }

    /// Mirror by reversing the row order
    #[must_use]
    pub fn reflect(&self) -> Self {
        let mut reflected = self.cells.view();
        reflected.invert_axis(Axis(0));
        Self {
            cells: reflected.to_owned(),
        }
    }

    /// Crop empty border rows and columns
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let filled_rows: Vec<usize> = self
            .cells
            .axis_iter(Axis(0))
            .enumerate()
            .filter_map(|(index, row)| row.iter().any(|&filled| filled).then_some(index))
            .collect();
        let filled_cols: Vec<usize> = self
            .cells
            .axis_iter(Axis(1))
            .enumerate()
            .filter_map(|(index, col)| col.iter().any(|&filled| filled).then_some(index))
            .collect();

        match (
            filled_rows.first().zip(filled_rows.last()),
            filled_cols.first().zip(filled_cols.last()),
        ) {
            (Some((&top, &bottom)), Some((&left, &right))) => Self {
                cells: self
                    .cells
                    .slice_axis(Axis(0), Slice::from(top..=bottom))
                    .slice_axis(Axis(1), Slice::from(left..=right))
                    .to_owned(),
            },
            _ => self.clone(),
        }
    }

    /// Row-major cell pattern, used as an ordering key
    pub fn pattern(&self) -> Vec<bool> {
        self.cells.iter().copied().collect()
    }
}
