//! Piece catalog - base shape grids and the rotation transform
//!
//! The catalog is immutable: `shape_for` always returns the spawn orientation.
//! A rotated grid only lives on the piece instance that committed the rotation.

use serde::{Serialize, Serializer};

use crate::types::{ShapeId, MAX_SHAPE_DIM};

/// Boolean occupancy grid of a shape, at most 4x4.
///
/// Cells outside `width` x `height` are always unoccupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeGrid {
    width: u8,
    height: u8,
    /// Indexed `[row][col]`
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl ShapeGrid {
    /// Build a grid from rows of 0/1 flags (top row first).
    ///
    /// Panics if the rows are ragged or larger than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        assert!(
            height <= MAX_SHAPE_DIM && width <= MAX_SHAPE_DIM,
            "shape grid is {}x{}, larger than {}x{}",
            width,
            height,
            MAX_SHAPE_DIM,
            MAX_SHAPE_DIM
        );

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "shape grid rows must have equal length");
            for (c, &flag) in row.iter().enumerate() {
                cells[r][c] = flag != 0;
            }
        }

        Self {
            width: width as u8,
            height: height as u8,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Whether the cell at (col, row) is occupied; false outside the grid
    pub fn is_occupied(&self, col: usize, row: usize) -> bool {
        col < self.width() && row < self.height() && self.cells[row][col]
    }

    /// Occupied cells as `(col, row)` offsets from the top-left corner
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height()).flat_map(move |row| {
            (0..self.width())
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (col, row))
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    /// Rows of the grid (top row first), each `width` flags long
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells[..self.height()]
            .iter()
            .map(move |row| &row[..self.width()])
    }
}

impl Serialize for ShapeGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

/// Base grid (spawn orientation) for a shape id
pub fn shape_for(id: ShapeId) -> ShapeGrid {
    match id {
        ShapeId::I => ShapeGrid::from_rows(&[&[1, 1, 1, 1]]),
        ShapeId::O => ShapeGrid::from_rows(&[&[1, 1], &[1, 1]]),
        ShapeId::T => ShapeGrid::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        ShapeId::L => ShapeGrid::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        ShapeId::J => ShapeGrid::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        ShapeId::S => ShapeGrid::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        ShapeId::Z => ShapeGrid::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}

/// Quarter turn: transpose, then reverse the order of the transposed rows.
///
/// A `w x h` grid becomes `h x w`. Four turns give back the original grid.
pub fn rotate_clockwise(grid: &ShapeGrid) -> ShapeGrid {
    let (w, h) = (grid.width(), grid.height());
    let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];

    // Row i of the result is column (w - 1 - i) of the source.
    for (i, out_row) in cells.iter_mut().enumerate().take(w) {
        for (j, out) in out_row.iter_mut().enumerate().take(h) {
            *out = grid.cells[j][w - 1 - i];
        }
    }

    ShapeGrid {
        width: grid.height,
        height: grid.width,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_base_shape_has_four_cells() {
        for id in ShapeId::ALL {
            assert_eq!(shape_for(id).occupied_count(), 4, "{:?}", id);
        }
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let i = rotate_clockwise(&shape_for(ShapeId::I));
        assert_eq!((i.width(), i.height()), (1, 4));
        assert_eq!(i.occupied().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn rotation_of_l_matches_transpose_then_reverse() {
        let rotated = rotate_clockwise(&shape_for(ShapeId::L));
        let expected = ShapeGrid::from_rows(&[&[0, 1], &[0, 1], &[1, 1]]);
        assert_eq!(rotated, expected);
    }

    #[test]
    fn is_occupied_outside_grid_is_false() {
        let o = shape_for(ShapeId::O);
        assert!(o.is_occupied(1, 1));
        assert!(!o.is_occupied(2, 0));
        assert!(!o.is_occupied(0, 2));
    }
}
