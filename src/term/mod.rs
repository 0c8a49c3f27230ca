//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: views draw into a character
//! framebuffer, and a renderer flushes the framebuffer to a raw-mode
//! terminal. Keeping the view pure leaves `core` and the layout logic
//! fully unit-testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{GameView, UiState, Viewport};
pub use renderer::TerminalRenderer;
