//! Board module - manages the game grid
//!
//! The board is a rows x cols grid where each cell is either empty or holds the
//! color of a locked piece. Dimensions are fixed when the board is created.
//! Uses a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row (top to bottom).

use crate::types::Cell;

/// The game board - fixed-size grid using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat vector of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Build a board from explicit rows (top row first).
    ///
    /// Panics if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|row| row.len() == cols),
            "board rows must all have {} cells",
            cols
        );
        let height = rows.len();
        Self {
            rows: height,
            cols,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Copy the board out as rows (top row first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        (0..self.rows).map(|y| self.row(y).to_vec()).collect()
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(y * self.cols + x)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Cells of row `y`. Panics if `y` is not a row of this board.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows || self.cols == 0 {
            return false;
        }
        self.row(y).iter().all(Option::is_some)
    }

    /// Remove row `y`, shift every row above it down by one and leave an empty row on top.
    ///
    /// Returns false if `y` is out of range.
    pub fn remove_row(&mut self, y: usize) -> bool {
        if y >= self.rows {
            return false;
        }

        let width = self.cols;
        // copy_within handles the overlapping ranges.
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);
        true
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_ROWS, crate::types::BOARD_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceColor;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(30, 15);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(14, 0), Some(14));
        assert_eq!(board.index(0, 1), Some(15));
        assert_eq!(board.index(14, 29), Some(449));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(15, 0), None);
        assert_eq!(board.index(0, 30), None);
        assert_eq!(board.index(0, -1), None);
    }

    #[test]
    fn test_remove_row_shifts_rows_above() {
        let mut board = Board::new(3, 2);
        board.set(0, 0, Some(PieceColor::Red));
        board.set(1, 1, Some(PieceColor::Blue));
        board.set(0, 2, Some(PieceColor::Cyan));

        assert!(board.remove_row(2));

        assert_eq!(board.row(0), &[None, None]);
        assert_eq!(board.row(1), &[Some(PieceColor::Red), None]);
        assert_eq!(board.row(2), &[None, Some(PieceColor::Blue)]);
        assert!(!board.remove_row(3));
    }

    #[test]
    fn test_zero_width_row_is_never_full() {
        let board = Board::new(2, 0);
        assert!(!board.is_row_full(0));
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let mut rows = vec![vec![None; 4]; 3];
        rows[1][2] = Some(PieceColor::Orange);
        let board = Board::from_rows(rows.clone());
        assert_eq!(board.rows(), 3);
        assert_eq!(board.cols(), 4);
        assert_eq!(board.to_rows(), rows);
    }
}
