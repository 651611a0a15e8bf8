//! Session module - the game loop
//!
//! A session ties together the board, the active piece, the RNG and the score
//! clock. Commands and ticks are `&mut self` methods that run to completion, so a
//! lock, its line clear and the respawn that follows are never observable half-done.

use log::{debug, info, trace};

use crate::board::Board;
use crate::line_clear::scan_and_clear;
use crate::piece::ActivePiece;
use crate::rng::PieceRng;
use crate::score_clock::ScoreClock;
use crate::snapshot::{ActiveSnapshot, EventSink, GameEvent, RenderSnapshot, ScoreUpdate};
use crate::types::{Command, MIN_BOARD_COLS, MIN_BOARD_ROWS};

/// What a command did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandOutcome {
    /// The piece moved one cell
    Moved,
    /// The rotation was committed, `kick` columns to the right
    Rotated { kick: i32 },
    /// Blocked move or abandoned rotation; nothing changed
    Rejected,
    /// A blocked move down locked the piece and a new one spawned
    Locked { lines_cleared: usize },
}

impl CommandOutcome {
    /// Whether the session state changed
    pub fn changed(&self) -> bool {
        !matches!(self, CommandOutcome::Rejected)
    }
}

/// Start a session with a random seed
pub fn init_game(rows: usize, cols: usize) -> Session {
    Session::new(rows, cols, rand::random())
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: ActivePiece,
    rng: PieceRng,
    clock: ScoreClock,
    /// Number of pieces spawned so far, the active one included
    piece_id: u64,
    pieces_locked: u64,
    lines_cleared: u64,
}

impl Session {
    /// Build an empty board and spawn the first piece.
    ///
    /// Panics if the board cannot host every shape at the spawn anchor
    /// (fewer than 9 columns or 2 rows).
    pub fn new(rows: usize, cols: usize, seed: u64) -> Self {
        assert!(
            cols >= MIN_BOARD_COLS && rows >= MIN_BOARD_ROWS,
            "a {}x{} board cannot host the spawn point (minimum {}x{})",
            cols,
            rows,
            MIN_BOARD_COLS,
            MIN_BOARD_ROWS
        );

        let mut rng = PieceRng::new(seed);
        let active = ActivePiece::spawn(rng.next_shape(), rng.next_color());
        debug!(
            "session started: {}x{} board, seed {}, first piece {:?}",
            cols, rows, seed, active.shape
        );

        Self {
            board: Board::new(rows, cols),
            active,
            rng,
            clock: ScoreClock::new(),
            piece_id: 1,
            pieces_locked: 0,
            lines_cleared: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn clock(&self) -> &ScoreClock {
        &self.clock
    }

    pub fn score(&self) -> u64 {
        self.clock.score()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn piece_id(&self) -> u64 {
        self.piece_id
    }

    pub fn pieces_locked(&self) -> u64 {
        self.pieces_locked
    }

    pub fn lines_cleared(&self) -> u64 {
        self.lines_cleared
    }

    pub fn render_snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            rows: self.board.rows(),
            cols: self.board.cols(),
            board: self.board.cells().to_vec(),
            active: ActiveSnapshot::from(&self.active),
        }
    }

    pub fn score_update(&self) -> ScoreUpdate {
        self.clock.update()
    }

    /// Apply a command.
    ///
    /// Always emits a render snapshot; a lock that clears rows also emits a
    /// score update after it.
    pub fn command(&mut self, command: Command, sink: &mut impl EventSink) -> CommandOutcome {
        let outcome = match command {
            Command::MoveLeft => self.shift(-1),
            Command::MoveRight => self.shift(1),
            Command::MoveDown => self.move_down(),
            Command::RotateCw => self.rotate(),
        };

        sink.emit(GameEvent::Render(self.render_snapshot()));
        if let CommandOutcome::Locked { lines_cleared } = outcome {
            if lines_cleared > 0 {
                sink.emit(GameEvent::Score(self.score_update()));
            }
        }

        outcome
    }

    /// Apply a command given by name.
    ///
    /// Unrecognized names are ignored: nothing changes and nothing is emitted.
    pub fn command_named(&mut self, name: &str, sink: &mut impl EventSink) -> Option<CommandOutcome> {
        let Some(command) = Command::from_str(name) else {
            trace!("ignoring unknown command {:?}", name);
            return None;
        };
        Some(self.command(command, sink))
    }

    /// Advance the score clock by one tick and emit a score update
    pub fn tick(&mut self, sink: &mut impl EventSink) {
        if self.clock.tick() {
            info!(
                "minute {} reached: line base {} points, {} per second",
                self.clock.elapsed_minutes(),
                self.clock.line_base_points(),
                self.clock.time_increment()
            );
        }
        sink.emit(GameEvent::Score(self.score_update()));
    }

    fn shift(&mut self, dx: i32) -> CommandOutcome {
        if self.active.try_shift(dx, 0, &self.board) {
            CommandOutcome::Moved
        } else {
            trace!("shift by {} rejected at x={}", dx, self.active.x);
            CommandOutcome::Rejected
        }
    }

    fn move_down(&mut self) -> CommandOutcome {
        if self.active.try_shift(0, 1, &self.board) {
            return CommandOutcome::Moved;
        }
        let lines_cleared = self.lock_and_respawn();
        CommandOutcome::Locked { lines_cleared }
    }

    fn rotate(&mut self) -> CommandOutcome {
        match self.active.try_rotate_cw(&self.board) {
            Some(kick) => {
                if kick > 0 {
                    debug!("rotation of {:?} kicked {} right", self.active.shape, kick);
                }
                CommandOutcome::Rotated { kick }
            }
            None => {
                trace!("rotation of {:?} abandoned", self.active.shape);
                CommandOutcome::Rejected
            }
        }
    }

    /// Merge the active piece into the board, clear rows, score them and spawn
    /// the next piece. Returns the number of rows cleared.
    fn lock_and_respawn(&mut self) -> usize {
        let piece = self.active;
        for (x, y) in piece.cells() {
            // Cells above the top edge have no board cell to land in.
            if y < 0 {
                continue;
            }
            let placed = self.board.set(x, y, Some(piece.color));
            assert!(placed, "locked cell ({}, {}) lies outside the board", x, y);
        }
        self.pieces_locked += 1;
        debug!(
            "locked {:?} at ({}, {}), piece #{}",
            piece.shape, piece.x, piece.y, self.piece_id
        );

        let lines_cleared = scan_and_clear(&mut self.board);
        if lines_cleared > 0 {
            let points = self.clock.award_lines(lines_cleared);
            self.lines_cleared += lines_cleared as u64;
            info!("cleared {} rows for {} points", lines_cleared, points);
        }

        self.spawn_piece();
        lines_cleared
    }

    fn spawn_piece(&mut self) {
        self.active = ActivePiece::spawn(self.rng.next_shape(), self.rng.next_color());
        self.piece_id += 1;
        if self.active.collides(&self.board) {
            // No game over: the piece stays playable and locks over the stack.
            debug!("piece #{} spawned over locked cells", self.piece_id);
        }
    }

    /// Mutable board access for tests
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn active_mut(&mut self) -> &mut ActivePiece {
        &mut self.active
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(crate::types::BOARD_ROWS, crate::types::BOARD_COLS, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::shape_for;
    use crate::snapshot::NullSink;
    use crate::types::{PieceColor, ShapeId};

    fn session_with(shape: ShapeId) -> Session {
        let mut session = Session::new(30, 15, 12345);
        *session.active_mut() = ActivePiece::spawn(shape, PieceColor::Red);
        session
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(30, 15, 12345);
        assert_eq!(session.board().rows(), 30);
        assert_eq!(session.board().cols(), 15);
        assert_eq!(session.board().filled_count(), 0);
        assert_eq!((session.active().x, session.active().y), (5, 0));
        assert_eq!(session.active().grid, shape_for(session.active().shape));
        assert_eq!(session.score(), 0);
        assert_eq!(session.piece_id(), 1);
        assert_eq!(session.seed(), 12345);
    }

    #[test]
    #[should_panic(expected = "cannot host the spawn point")]
    fn test_too_narrow_board_panics() {
        let _ = Session::new(30, 8, 1);
    }

    #[test]
    fn test_move_left_and_right() {
        let mut session = session_with(ShapeId::O);
        assert_eq!(session.command(Command::MoveLeft, &mut NullSink), CommandOutcome::Moved);
        assert_eq!(session.active().x, 4);
        assert_eq!(session.command(Command::MoveRight, &mut NullSink), CommandOutcome::Moved);
        assert_eq!(session.active().x, 5);
    }

    #[test]
    fn test_move_into_wall_is_rejected_without_lock() {
        let mut session = session_with(ShapeId::O);
        for _ in 0..5 {
            session.command(Command::MoveLeft, &mut NullSink);
        }
        assert_eq!(session.active().x, 0);
        assert_eq!(session.command(Command::MoveLeft, &mut NullSink), CommandOutcome::Rejected);
        assert_eq!(session.pieces_locked(), 0);
        assert_eq!(session.piece_id(), 1);
    }

    #[test]
    fn test_piece_falls_to_floor_and_locks() {
        let mut session = session_with(ShapeId::O);
        for _ in 0..28 {
            assert_eq!(session.command(Command::MoveDown, &mut NullSink), CommandOutcome::Moved);
        }
        assert_eq!(session.active().y, 28);

        let outcome = session.command(Command::MoveDown, &mut NullSink);
        assert_eq!(outcome, CommandOutcome::Locked { lines_cleared: 0 });
        assert_eq!(session.pieces_locked(), 1);
        assert_eq!(session.piece_id(), 2);
        assert_eq!(session.board().filled_count(), 4);
        assert_eq!(session.board().get(5, 29), Some(Some(PieceColor::Red)));
        assert_eq!((session.active().x, session.active().y), (5, 0));
    }

    #[test]
    fn test_lock_clears_row_and_scores() {
        let mut session = session_with(ShapeId::I);
        // Bottom row full except columns 5..=8, where the I lands.
        for x in 0..15 {
            if !(5..=8).contains(&x) {
                session.board_mut().set(x, 29, Some(PieceColor::Blue));
            }
        }
        session.active_mut().y = 29;

        let mut events: Vec<GameEvent> = Vec::new();
        let outcome = session.command(Command::MoveDown, &mut events);

        assert_eq!(outcome, CommandOutcome::Locked { lines_cleared: 1 });
        assert_eq!(session.board().filled_count(), 0);
        assert_eq!(session.score(), 10);
        assert_eq!(session.lines_cleared(), 1);
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], GameEvent::Render(_)));
        assert_eq!(
            events[1],
            GameEvent::Score(ScoreUpdate {
                elapsed_seconds: 0,
                elapsed_minutes: 0,
                score: 10
            })
        );
    }

    #[test]
    fn test_rotation_stays_on_the_instance() {
        let mut session = session_with(ShapeId::L);
        assert_eq!(
            session.command(Command::RotateCw, &mut NullSink),
            CommandOutcome::Rotated { kick: 0 }
        );
        assert_ne!(session.active().grid, shape_for(ShapeId::L));
        // The catalog still hands out the base grid.
        assert_eq!(ActivePiece::spawn(ShapeId::L, PieceColor::Red).grid, shape_for(ShapeId::L));
    }

    #[test]
    fn test_unknown_command_name_is_ignored() {
        let mut session = Session::new(30, 15, 3);
        let before = *session.active();
        let mut events: Vec<GameEvent> = Vec::new();
        assert_eq!(session.command_named("hardDrop", &mut events), None);
        assert!(events.is_empty());
        assert_eq!(*session.active(), before);

        assert_eq!(
            session.command_named("down", &mut events),
            Some(CommandOutcome::Moved)
        );
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_tick_emits_score_update() {
        let mut session = Session::new(30, 15, 3);
        let mut events: Vec<GameEvent> = Vec::new();
        session.tick(&mut events);
        assert_eq!(
            events,
            vec![GameEvent::Score(ScoreUpdate {
                elapsed_seconds: 1,
                elapsed_minutes: 0,
                score: 1
            })]
        );
    }

    #[test]
    fn test_outcome_changed() {
        assert!(CommandOutcome::Moved.changed());
        assert!(CommandOutcome::Locked { lines_cleared: 0 }.changed());
        assert!(!CommandOutcome::Rejected.changed());
    }
}
