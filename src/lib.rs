//! TUI Chroma library.
//!
//! An 8x8 swap-and-score color-matching puzzle. The `core` module is the
//! complete game engine (board, region finder, turn/scoring state machine);
//! `term` and `input` are the thin terminal presentation layer driven by
//! the `tui-chroma` binary.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
