//! Runtime configuration read from `FALLBLOCK_*` environment variables.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Result};

use crate::core::Session;
use crate::types::{BOARD_COLS, BOARD_ROWS, MIN_BOARD_COLS, MIN_BOARD_ROWS, TICK_MS};

/// Largest accepted board dimension
const MAX_BOARD_DIM: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub rows: usize,
    pub cols: usize,
    pub tick_ms: u64,
    /// Fixed RNG seed; a random one is drawn when unset
    pub seed: Option<u64>,
    pub max_pending_commands: usize,
    /// JSON-lines file receiving every emitted event
    pub event_log: Option<PathBuf>,
    /// File receiving diagnostic log output
    pub log_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            tick_ms: TICK_MS,
            seed: None,
            max_pending_commands: 32,
            event_log: None,
            log_path: None,
        }
    }
}

impl RuntimeConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup; unset or unparsable values fall back
    /// to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            rows: parsed(&lookup, "FALLBLOCK_ROWS").unwrap_or(defaults.rows),
            cols: parsed(&lookup, "FALLBLOCK_COLS").unwrap_or(defaults.cols),
            tick_ms: parsed(&lookup, "FALLBLOCK_TICK_MS").unwrap_or(defaults.tick_ms),
            seed: parsed(&lookup, "FALLBLOCK_SEED"),
            max_pending_commands: parsed(&lookup, "FALLBLOCK_MAX_PENDING")
                .unwrap_or(defaults.max_pending_commands),
            event_log: path(&lookup, "FALLBLOCK_EVENT_LOG"),
            log_path: path(&lookup, "FALLBLOCK_LOG_PATH"),
        }
    }

    /// Reject settings a session or the driver cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.cols < MIN_BOARD_COLS || self.rows < MIN_BOARD_ROWS {
            bail!(
                "board {}x{} is too small, the spawn point needs at least {}x{}",
                self.cols,
                self.rows,
                MIN_BOARD_COLS,
                MIN_BOARD_ROWS
            );
        }
        if self.cols > MAX_BOARD_DIM || self.rows > MAX_BOARD_DIM {
            bail!(
                "board {}x{} is too large (maximum {} per side)",
                self.cols,
                self.rows,
                MAX_BOARD_DIM
            );
        }
        if self.tick_ms == 0 {
            bail!("FALLBLOCK_TICK_MS must be greater than zero");
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Build the session described by this configuration
    pub fn build_session(&self) -> Session {
        match self.seed {
            Some(seed) => Session::new(self.rows, self.cols, seed),
            None => crate::core::init_game(self.rows, self.cols),
        }
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn path(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    lookup(key)
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
}
