//! Key mapping from terminal events to UI actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the player asked the front-end to do.
///
/// Only `ToggleSelect`, `Swap`, `Score`, and `NewGame` reach the engine;
/// cursor movement is purely a front-end concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    ToggleSelect,
    Swap,
    Score,
    NewGame,
}

/// Map keyboard input to UI actions.
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        // Cursor movement (arrows or vi keys)
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(UiAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(UiAction::CursorDown),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(UiAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(UiAction::CursorRight),

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(UiAction::ToggleSelect),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(UiAction::Swap),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(UiAction::Score),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::NewGame),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
