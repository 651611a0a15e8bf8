//! Runtime module - configuration and the signal driver
//!
//! The core never reads a clock. This crate is where wall time enters: the
//! [`driver`] owns a session inside a tokio task and multiplexes player commands
//! with a periodic tick, and [`config`] reads the session and driver settings
//! from the environment.
//!
//! # Environment Variables
//!
//! - `FALLBLOCK_ROWS` / `FALLBLOCK_COLS`: board size (default 30 x 15)
//! - `FALLBLOCK_TICK_MS`: score clock period (default 1000)
//! - `FALLBLOCK_SEED`: fixed RNG seed (default: random)
//! - `FALLBLOCK_MAX_PENDING`: command queue capacity (default 32)
//! - `FALLBLOCK_EVENT_LOG`: JSON-lines file receiving every event
//! - `FALLBLOCK_LOG_PATH`: file receiving diagnostic logs

pub mod config;
pub mod driver;

pub use fallblock_core as core;
pub use fallblock_types as types;

pub use config::RuntimeConfig;
pub use driver::{run, ChannelSink, Driver};
