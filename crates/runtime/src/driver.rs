//! Single-consumer signal driver.
//!
//! One task owns the [`Session`]. Commands arrive on a bounded channel and ticks
//! come from a `tokio::time::interval`; `select!` hands the session exactly one
//! signal at a time, so no command can observe a half-applied tick or the other
//! way round. Events leave on an unbounded channel and never block the driver.

use std::time::Duration;

use log::{debug, info};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::config::RuntimeConfig;
use crate::core::{EventSink, GameEvent, Session};
use crate::types::Command;

/// Event sink forwarding into an unbounded tokio channel.
///
/// Events are dropped once the receiving side is gone.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<GameEvent>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelSink {
    fn emit(&mut self, event: GameEvent) {
        let _ = self.tx.send(event);
    }
}

/// Handles to a spawned driver task
pub struct Driver {
    /// Dropping every clone of this sender stops the driver.
    pub commands: mpsc::Sender<Command>,
    pub events: mpsc::UnboundedReceiver<GameEvent>,
    /// Resolves to the final session once the driver stops
    pub task: JoinHandle<Session>,
}

impl Driver {
    /// Spawn a driver for `session` on the given runtime.
    pub fn spawn(handle: &Handle, session: Session, config: &RuntimeConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(config.max_pending_commands.max(1));
        let (event_tx, event_rx) = mpsc::unbounded_channel::<GameEvent>();
        let task = handle.spawn(run(session, cmd_rx, event_tx, config.tick_period()));

        Self {
            commands: cmd_tx,
            events: event_rx,
            task,
        }
    }
}

/// Feed commands and ticks to `session` until the command channel closes.
///
/// The first tick fires one `period` after the call. Returns the session in its
/// final state.
pub async fn run(
    mut session: Session,
    mut commands: mpsc::Receiver<Command>,
    events: mpsc::UnboundedSender<GameEvent>,
    period: Duration,
) -> Session {
    let mut sink = ChannelSink::new(events);
    let mut ticker = time::interval_at(Instant::now() + period, period);
    info!("driver started, tick every {:?}", period);

    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(command) => {
                    let outcome = session.command(command, &mut sink);
                    debug!("{} -> {:?}", command.as_str(), outcome);
                }
                None => break,
            },
            _ = ticker.tick() => session.tick(&mut sink),
        }
    }

    info!(
        "driver stopped after {}s with score {}",
        session.clock().elapsed_seconds(),
        session.score()
    );
    session
}
