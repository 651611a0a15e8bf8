//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the engine, the runtime driver and
//! the terminal front end. Everything here is plain data; the only dependency is
//! `serde` so that events built from these types can be serialized.
//!
//! # Board Dimensions
//!
//! The default playfield is 15 columns by 30 rows:
//!
//! - **Columns**: indexed 0-14, left to right
//! - **Rows**: indexed 0-29, top to bottom
//! - **Spawn anchor**: (5, 0), the top-left corner of the piece bounding box
//!
//! # Score Clock Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | Score clock period |
//! | `SECONDS_PER_MINUTE` | 60 | Ticks between difficulty ratchets |
//! | `INITIAL_LINE_BASE_POINTS` | 10 | Points for a single cleared row |
//! | `INITIAL_TIME_INCREMENT` | 1 | Points awarded per tick |
//!
//! # Examples
//!
//! ```
//! use fallblock_types::{Command, ShapeId, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(ShapeId::from_str("t"), Some(ShapeId::T));
//! assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
//! assert_eq!(Command::from_str("jump"), None);
//!
//! assert_eq!(BOARD_ROWS, 30);
//! assert_eq!(BOARD_COLS, 15);
//! ```

use serde::Serialize;

/// Board height in rows (30 rows)
pub const BOARD_ROWS: usize = 30;

/// Board width in columns (15 columns)
pub const BOARD_COLS: usize = 15;

/// Column of the spawn anchor
pub const SPAWN_X: i32 = 5;

/// Row of the spawn anchor
pub const SPAWN_Y: i32 = 0;

/// Largest width or height of any built-in shape grid
pub const MAX_SHAPE_DIM: usize = 4;

/// Narrowest board that can host every shape at the spawn anchor
pub const MIN_BOARD_COLS: usize = SPAWN_X as usize + MAX_SHAPE_DIM;

/// Shortest board that can host every shape at the spawn anchor
pub const MIN_BOARD_ROWS: usize = 2;

/// Score clock period in milliseconds
pub const TICK_MS: u64 = 1000;

/// Ticks per elapsed minute; each rollover ratchets the difficulty
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Line-clear base points at session start
pub const INITIAL_LINE_BASE_POINTS: u64 = 10;

/// Points added per tick at session start
pub const INITIAL_TIME_INCREMENT: u64 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dimensions_host_the_spawn_point() {
        assert!(BOARD_COLS >= MIN_BOARD_COLS);
        assert!(BOARD_ROWS >= MIN_BOARD_ROWS);
        assert_eq!(MIN_BOARD_COLS, 9);
    }

    #[test]
    fn command_names_round_trip() {
        for command in Command::ALL {
            assert_eq!(Command::from_str(command.as_str()), Some(command));
        }
        assert_eq!(Command::from_str("ROTATE"), Some(Command::RotateCw));
        assert_eq!(Command::from_str(""), None);
    }
}

/// The seven built-in shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeId {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeId {
    /// Every shape, in catalog order
    pub const ALL: [ShapeId; 7] = [
        ShapeId::I,
        ShapeId::O,
        ShapeId::T,
        ShapeId::L,
        ShapeId::J,
        ShapeId::S,
        ShapeId::Z,
    ];

    /// Parse shape id from string (case-insensitive)
    ///
    /// ```
    /// use fallblock_types::ShapeId;
    ///
    /// assert_eq!(ShapeId::from_str("i"), Some(ShapeId::I));
    /// assert_eq!(ShapeId::from_str("Z"), Some(ShapeId::Z));
    /// assert_eq!(ShapeId::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeId::I),
            "o" => Some(ShapeId::O),
            "t" => Some(ShapeId::T),
            "l" => Some(ShapeId::L),
            "j" => Some(ShapeId::J),
            "s" => Some(ShapeId::S),
            "z" => Some(ShapeId::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeId::I => "i",
            ShapeId::O => "o",
            ShapeId::T => "t",
            ShapeId::L => "l",
            ShapeId::J => "j",
            ShapeId::S => "s",
            ShapeId::Z => "z",
        }
    }
}

/// Color tag assigned to a piece at spawn and kept by its cells once locked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Cyan,
}

impl PieceColor {
    /// Every color a piece can be assigned
    pub const ALL: [PieceColor; 7] = [
        PieceColor::Red,
        PieceColor::Green,
        PieceColor::Blue,
        PieceColor::Yellow,
        PieceColor::Orange,
        PieceColor::Purple,
        PieceColor::Cyan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::Red => "red",
            PieceColor::Green => "green",
            PieceColor::Blue => "blue",
            PieceColor::Yellow => "yellow",
            PieceColor::Orange => "orange",
            PieceColor::Purple => "purple",
            PieceColor::Cyan => "cyan",
        }
    }
}

/// Player commands accepted by a session
///
/// These are produced by keyboard mapping or by any other input source that
/// drives the runtime. Each command resolves to a move, a rotation, a lock or
/// a silent rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Shift the active piece one column left
    MoveLeft,
    /// Shift the active piece one column right
    MoveRight,
    /// Step the active piece one row down, locking it when blocked
    MoveDown,
    /// Rotate the active piece 90°, kicking right when blocked
    RotateCw,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::MoveDown,
        Command::RotateCw,
    ];

    /// Parse a command name (case-insensitive)
    ///
    /// Accepts the camelCase names as well as the short forms
    /// `left`, `right`, `down` and `rotate`.
    ///
    /// ```
    /// use fallblock_types::Command;
    ///
    /// assert_eq!(Command::from_str("left"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("rotateCw"), Some(Command::RotateCw));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "movedown" | "down" => Some(Command::MoveDown),
            "rotatecw" | "rotate" => Some(Command::RotateCw),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::RotateCw => "rotateCw",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceColor)`: Cell locked with the color of the piece that filled it
pub type Cell = Option<PieceColor>;
