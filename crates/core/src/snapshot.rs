//! Events emitted by a session and the sinks that receive them.
//!
//! Snapshots are owned copies: a renderer can hold on to one while the session
//! keeps running.

use std::sync::mpsc;

use serde::Serialize;

use crate::catalog::ShapeGrid;
use crate::piece::ActivePiece;
use crate::types::{Cell, PieceColor, ShapeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub shape: ShapeId,
    pub grid: ShapeGrid,
    pub x: i32,
    pub y: i32,
    pub color: PieceColor,
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            shape: value.shape,
            grid: value.grid,
            x: value.x,
            y: value.y,
            color: value.color,
        }
    }
}

/// Board and active piece, as needed to draw a frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major locked cells, `rows * cols` long
    pub board: Vec<Cell>,
    pub active: ActiveSnapshot,
}

impl RenderSnapshot {
    /// Locked cell at (x, y); None when empty or out of range
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        self.board[y * self.cols + x]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ScoreUpdate {
    pub elapsed_seconds: u64,
    pub elapsed_minutes: u64,
    pub score: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Emitted after every resolved command
    Render(RenderSnapshot),
    /// Emitted after every tick and after every line clear
    Score(ScoreUpdate),
}

/// Receiver of session events.
///
/// Emitting must not block; sinks that can fail (closed channels) drop the event.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl EventSink for mpsc::Sender<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        let _ = self.send(event);
    }
}

/// Sink that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_channel_drops_events() {
        let (mut tx, rx) = mpsc::channel::<GameEvent>();
        drop(rx);
        tx.emit(GameEvent::Score(ScoreUpdate::default()));
    }

    #[test]
    fn out_of_range_cell_is_empty() {
        let snap = RenderSnapshot {
            rows: 1,
            cols: 1,
            board: vec![Some(PieceColor::Red)],
            active: ActiveSnapshot::from(&ActivePiece::spawn(ShapeId::O, PieceColor::Blue)),
        };
        assert_eq!(snap.cell(0, 0), Some(PieceColor::Red));
        assert_eq!(snap.cell(1, 0), None);
        assert_eq!(snap.cell(0, 1), None);
    }
}
