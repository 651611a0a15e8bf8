//! Active piece - the falling, player-controlled piece and its moves.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::catalog::{rotate_clockwise, shape_for, ShapeGrid};
use crate::collision::check;
use crate::types::{PieceColor, ShapeId, MAX_SHAPE_DIM, SPAWN_X, SPAWN_Y};

/// Absolute board coordinates of a piece's occupied cells
pub type PieceCells = ArrayVec<(i32, i32), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Active falling piece
///
/// `grid` carries the accumulated rotations of this instance; `(x, y)` is the
/// top-left corner of its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: ShapeId,
    pub grid: ShapeGrid,
    pub x: i32,
    pub y: i32,
    pub color: PieceColor,
}

impl ActivePiece {
    /// Create a piece in its base orientation at the spawn anchor
    pub fn spawn(shape: ShapeId, color: PieceColor) -> Self {
        Self {
            shape,
            grid: shape_for(shape),
            x: SPAWN_X,
            y: SPAWN_Y,
            color,
        }
    }

    /// Whether the current placement collides with the board
    pub fn collides(&self, board: &Board) -> bool {
        check(self.x, self.y, &self.grid, board)
    }

    /// Absolute coordinates of every occupied cell
    pub fn cells(&self) -> PieceCells {
        self.grid
            .occupied()
            .map(|(dx, dy)| (self.x + dx as i32, self.y + dy as i32))
            .collect()
    }

    /// Shift by (dx, dy) if the target placement is free
    pub fn try_shift(&mut self, dx: i32, dy: i32, board: &Board) -> bool {
        if check(self.x + dx, self.y + dy, &self.grid, board) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Rotate a quarter turn, kicking right if needed.
    ///
    /// Returns the committed kick offset, or None if the rotation was abandoned
    /// (the piece is left untouched).
    pub fn try_rotate_cw(&mut self, board: &Board) -> Option<i32> {
        let rotated = rotate_clockwise(&self.grid);
        let kick = find_kick(self.x, self.y, &rotated, board)?;
        self.grid = rotated;
        self.x += kick;
        Some(kick)
    }
}

/// Rightward-only kick search.
///
/// Tries offsets `0..cols` added to `x` and returns the first one where `grid`
/// fits. Offset 0 is the in-place placement.
pub fn find_kick(x: i32, y: i32, grid: &ShapeGrid, board: &Board) -> Option<i32> {
    (0..board.cols() as i32).find(|&dx| !check(x + dx, y, grid, board))
}
