//! Terminal runner (default binary).
//!
//! Crossterm events in, framebuffer frames out. All game rules live in
//! `core`; this loop only shuttles commands and the clock.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::core::GameState;
use tui_blockfall::input::{handle_key_event, should_quit};
use tui_blockfall::term::{GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::FRAME_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u32)
        .unwrap_or(1);
    let mut state = GameState::new(seed).start();
    let view = GameView::default();

    let start = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);
    let mut next_frame = start + frame;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&state.snapshot(), Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next frame.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Terminal auto-repeat stands in for held keys, so Repeat
                // queues commands just like Press.
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        state = state.queue_command(command);
                    }
                }
            }
        }

        // Advance the engine once per frame; it drains queued commands and
        // derives its own delta from the monotonic clock we hand it.
        if Instant::now() >= next_frame {
            next_frame += frame;
            state = state.tick(start.elapsed());
        }
    }
}
