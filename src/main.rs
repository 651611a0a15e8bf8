//! Terminal runner (default binary).
//!
//! Three threads of control: the tokio driver owns the session, a plain thread
//! blocks on crossterm input and forwards commands, and the main thread draws
//! every event it receives. Quitting drops the command sender, which stops the
//! driver, which closes the event channel and ends the draw loop.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::thread;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::{info, warn};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use fallblock::core::{GameEvent, RenderSnapshot, ScoreUpdate};
use fallblock::input::{command_for_event, should_quit};
use fallblock::runtime::{Driver, RuntimeConfig};
use fallblock::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use fallblock::types::Command;

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    init_logging(&config)?;
    config.validate()?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|_| run(&mut term, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &RuntimeConfig) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = &config.log_path {
        let file = File::create(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .filter_level(log::LevelFilter::Debug)
            .parse_default_env();
    }
    builder.init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RuntimeConfig) -> Result<()> {
    let mut event_log = match &config.event_log {
        Some(path) => Some(BufWriter::new(File::create(path).with_context(|| {
            format!("failed to create event log {}", path.display())
        })?)),
        None => None,
    };

    let runtime = Runtime::new().context("failed to start tokio runtime")?;
    let session = config.build_session();
    info!(
        "starting {}x{} session with seed {}",
        config.cols,
        config.rows,
        session.seed()
    );

    let mut snapshot = session.render_snapshot();
    let mut score = session.score_update();
    let Driver {
        commands,
        mut events,
        task,
    } = Driver::spawn(runtime.handle(), session, config);

    let input = thread::spawn(move || forward_input(commands));

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut size = (0, 0);
    draw(term, &view, &mut fb, &mut size, &snapshot, &score)?;

    while let Some(event) = events.blocking_recv() {
        if let Some(log) = event_log.as_mut() {
            serde_json::to_writer(&mut *log, &event)?;
            log.write_all(b"\n")?;
        }
        match event {
            GameEvent::Render(next) => snapshot = next,
            GameEvent::Score(next) => score = next,
        }
        draw(term, &view, &mut fb, &mut size, &snapshot, &score)?;
    }

    if let Some(mut log) = event_log {
        log.flush()?;
    }

    let input_result = match input.join() {
        Ok(result) => result,
        Err(_) => anyhow::bail!("input thread panicked"),
    };
    let session = runtime.block_on(task).context("driver task failed")?;
    info!(
        "session over: score {}, {} pieces locked, {} lines cleared",
        session.score(),
        session.pieces_locked(),
        session.lines_cleared()
    );
    input_result
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    fb: &mut FrameBuffer,
    size: &mut (u16, u16),
    snapshot: &RenderSnapshot,
    score: &ScoreUpdate,
) -> Result<()> {
    let current = crossterm::terminal::size().unwrap_or((80, 24));
    if current != *size {
        term.invalidate();
        *size = current;
    }
    view.render_into(snapshot, score, Viewport::new(current.0, current.1), fb);
    term.draw_swap(fb)
}

/// Block on terminal input until the player quits or the driver goes away.
fn forward_input(commands: mpsc::Sender<Command>) -> Result<()> {
    loop {
        let event = event::read()?;
        if let Event::Key(key) = event {
            if should_quit(key) {
                return Ok(());
            }
        }
        if let Some(command) = command_for_event(&event) {
            if commands.blocking_send(command).is_err() {
                warn!("driver stopped while input was pending");
                return Ok(());
            }
        }
    }
}
