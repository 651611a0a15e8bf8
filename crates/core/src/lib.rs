//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the board, the piece
//! catalog, collision detection, the active piece state machine, line clearing and
//! the time-driven score clock. It performs no I/O and reads no clock, which makes it:
//!
//! - **Deterministic**: Same seed and the same command/tick sequence give the same game
//! - **Testable**: Time only advances when a caller invokes [`Session::tick`]
//! - **Portable**: Events go to any [`EventSink`], terminal or not
//!
//! # Module Structure
//!
//! - [`board`]: rows x cols grid of empty or color-tagged cells
//! - [`catalog`]: the seven base shapes and the quarter-turn transform
//! - [`collision`]: boundary and occupancy check for a grid at an anchor
//! - [`piece`]: the active piece, its moves and the rightward kick search
//! - [`line_clear`]: full-row removal and multi-line points
//! - [`score_clock`]: per-tick score and the per-minute difficulty ratchet
//! - [`session`]: the game loop binding commands and ticks together
//! - [`snapshot`]: render/score events and event sinks
//! - [`rng`]: seeded shape and color selection
//!
//! # Game Rules
//!
//! - Left/right/down moves are applied only when the target placement is free
//! - A blocked move down locks the piece, clears full rows and spawns a new piece at (5, 0)
//! - A blocked rotation is retried 0..cols columns to the right, never to the left
//! - Clearing `n` rows at once scores `base * 2^(n-1)`; `base` starts at 10
//! - Each tick scores the time increment (starts at 1); every 60 ticks the base
//!   doubles and the increment grows by one
//!
//! # Example
//!
//! ```
//! use fallblock_core::{GameEvent, Session};
//! use fallblock_core::types::Command;
//!
//! let mut session = Session::new(30, 15, 12345);
//! let mut events: Vec<GameEvent> = Vec::new();
//!
//! session.command(Command::MoveLeft, &mut events);
//! session.command(Command::RotateCw, &mut events);
//! session.tick(&mut events);
//!
//! assert_eq!(session.score(), 1);
//! assert!(matches!(events.last(), Some(GameEvent::Score(_))));
//! ```

pub mod board;
pub mod catalog;
pub mod collision;
pub mod line_clear;
pub mod piece;
pub mod rng;
pub mod score_clock;
pub mod session;
pub mod snapshot;

pub use fallblock_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{rotate_clockwise, shape_for, ShapeGrid};
pub use collision::check;
pub use line_clear::{line_clear_points, scan_and_clear};
pub use piece::{find_kick, ActivePiece};
pub use rng::PieceRng;
pub use score_clock::ScoreClock;
pub use session::{init_game, CommandOutcome, Session};
pub use snapshot::{ActiveSnapshot, EventSink, GameEvent, NullSink, RenderSnapshot, ScoreUpdate};
