//! Collision detection between a shape grid placed at an anchor and the board.

use crate::board::Board;
use crate::catalog::ShapeGrid;

/// Returns true if `grid` anchored at (x, y) collides.
///
/// A collision is an occupied cell landing left of column 0, right of the last
/// column, below the last row, or on a filled board cell. Rows above the top edge
/// (y < 0) are neither out of bounds nor tested against the board.
pub fn check(x: i32, y: i32, grid: &ShapeGrid, board: &Board) -> bool {
    let cols = board.cols() as i32;
    let rows = board.rows() as i32;

    grid.occupied().any(|(dx, dy)| {
        let bx = x + dx as i32;
        let by = y + dy as i32;

        if bx < 0 || bx >= cols || by >= rows {
            return true;
        }

        by >= 0 && board.is_occupied(bx, by)
    })
}
