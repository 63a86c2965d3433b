//! Terminal tile-tapping game (default binary).
//!
//! Rows scroll down the track; tap the dark tile of each row before it
//! leaves the bottom edge. Click tiles with the mouse or use the lane keys
//! `d f j k`. Configuration comes from `TILES_*` environment variables.

mod logging;

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{debug, info};

use tui_tiles::core::config::seed_from_env;
use tui_tiles::core::{
    ConfigExt, EventLog, EventQueue, GameController, GameEvent, GameSnapshot, RenderEvent,
};
use tui_tiles::input::InputHandler;
use tui_tiles::term::{FrameBuffer, GameView, Target, TerminalRenderer, Viewport};
use tui_tiles::types::{GameConfig, InputCommand};

fn main() -> Result<()> {
    let _log_guard = logging::init()?;

    let config = GameConfig::from_env().context("invalid TILES_* configuration")?;
    let seed = seed_from_env()?.unwrap_or_else(clock_seed);
    let mut game = GameController::new(config, seed, EventLog::new())
        .context("invalid TILES_* configuration")?;
    info!(?config, seed, "starting tui-tiles");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, game: &mut GameController<EventLog>) -> Result<()> {
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut queue = EventQueue::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next tick is due.
        let timeout = Duration::from_millis(game.timer().until_next_ms() as u64);
        if event::poll(timeout)? {
            loop {
                let ev = event::read()?;
                if matches!(ev, Event::Resize(..)) {
                    term.invalidate();
                }
                input.handle_event(&ev);
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
        if input.quit_requested() {
            info!(score = game.score(), "quit");
            return Ok(());
        }

        // Clicks are resolved against the frame the player was looking at.
        for command in input.take() {
            match command {
                InputCommand::Start => queue.push(GameEvent::Start),
                InputCommand::Restart => queue.push(GameEvent::Restart),
                // Resolved by the controller so each lane tap sees the taps before it.
                InputCommand::TapLane(column) => queue.push_lane(column),
                InputCommand::TapAt { x, y } => match view.target_at(&snap, viewport, x, y) {
                    Target::Cell { row, column } => queue.push_tap(row, column),
                    Target::StartControl => queue.push(GameEvent::Start),
                    Target::Outside => {}
                },
            }
        }

        // Tick: carry the sub-millisecond remainder into the next frame.
        let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_tick += Duration::from_millis(elapsed_ms as u64);
        game.schedule(elapsed_ms, &mut queue);
        game.drain(&mut queue);

        for event in game.renderer_mut().drain() {
            match event {
                RenderEvent::GameOver => info!("game over"),
                RenderEvent::ScoreChanged(score) => debug!(score, "score changed"),
                RenderEvent::RowRecycled { row, active_column } => {
                    debug!(row, active_column, "row recycled")
                }
                RenderEvent::PhaseChanged(phase) => debug!(phase = phase.as_str(), "phase"),
                RenderEvent::OffsetChanged(_) => {}
            }
        }
    }
}
