//! Terminal puzzle runner (default binary).
//!
//! Moves a cursor over the 8x8 board, toggles cell selection, and drives
//! the engine's swap/score actions. The engine rejects invalid moves with
//! messages that land on the status line.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_chroma::core::GameSession;
use tui_chroma::input::{handle_key_event, should_quit, UiAction};
use tui_chroma::term::{GameView, TerminalRenderer, UiState, Viewport};
use tui_chroma::types::{Coord, BOARD_SIZE};

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
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);

    let mut session = GameSession::new(seed);
    session.start();

    let view = GameView::default();
    let mut ui = UiState::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session, &ui, Viewport::new(w, h));
        term.draw(&fb)?;

        // Turn-based game: block until the next event.
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        let Some(action) = handle_key_event(key) else {
            continue;
        };

        ui.message = None;
        match action {
            UiAction::CursorUp => ui.cursor.row = ui.cursor.row.saturating_sub(1),
            UiAction::CursorDown => ui.cursor.row = (ui.cursor.row + 1).min(BOARD_SIZE - 1),
            UiAction::CursorLeft => ui.cursor.col = ui.cursor.col.saturating_sub(1),
            UiAction::CursorRight => ui.cursor.col = (ui.cursor.col + 1).min(BOARD_SIZE - 1),
            UiAction::ToggleSelect => session.toggle_select(ui.cursor),
            UiAction::Swap => {
                if let Err(err) = session.swap() {
                    ui.message = Some(err.to_string());
                }
            }
            UiAction::Score => match session.score_selection() {
                Ok(earned) => ui.message = Some(format!("+{} points", earned)),
                Err(err) => ui.message = Some(err.to_string()),
            },
            UiAction::NewGame => {
                session.start();
                ui.cursor = Coord::new(0, 0);
            }
        }
    }
}
