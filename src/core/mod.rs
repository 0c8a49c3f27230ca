//! Core module - pure game logic with no external I/O
//!
//! This module contains all the game rules and state management.
//! It has zero dependencies on UI, terminals, or timing.

pub mod board;
pub mod region;
pub mod rng;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use board::Board;
pub use region::{find_region, MAX_REGION};
pub use rng::SimpleRng;
pub use scoring::region_score;
pub use session::{ActionError, GameSession};
