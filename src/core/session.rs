//! Session module - the turn engine
//!
//! `GameSession` owns the complete state of one game: board, selection,
//! score, game-over latch, and the RNG. The two legal actions, `swap` and
//! `score_selection`, validate the caller's selection, mutate the board,
//! and report rule violations as `ActionError` values so a front-end can
//! surface them and leave state untouched.

use thiserror::Error;

use crate::core::{find_region, region_score, Board, SimpleRng};
use crate::types::{Cell, Coord, MIN_REGION_SIZE, REFILL_TILE_COUNT, SEED_TILE_COUNT};

/// A rejected action. All variants are recoverable: the board, score, and
/// selection are exactly as they were before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("exactly two cells must be selected to swap")]
    SwapSelectionCount,
    #[error("only colored cells can be swapped")]
    SwapTarget,
    #[error("exactly one cell must be selected to score")]
    ScoreSelectionCount,
    #[error("the connected group has {len} cells; at least {MIN_REGION_SIZE} are required")]
    RegionTooSmall { len: usize },
    #[error("the board is full; no more swaps are possible")]
    GameOver,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    /// Caller's selected coordinates, in toggle order, each at most once
    selection: Vec<Coord>,
    score: u32,
    game_over: bool,
    started: bool,
    rng: SimpleRng,
}

impl GameSession {
    /// Create a session with an empty board and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            selection: Vec::new(),
            score: 0,
            game_over: false,
            started: false,
            rng: SimpleRng::new(seed),
        }
    }

    /// Start a fresh game: stamp the 16 goal markers, then seed exactly
    /// five colored tiles on distinct empty cells. Score, selection, and
    /// the game-over latch are reset. Calling this mid-game abandons the
    /// current game and starts over.
    pub fn start(&mut self) {
        self.board = Board::new();
        self.board.stamp_goals();

        let mut placed = 0;
        while placed < SEED_TILE_COUNT {
            let coord = self.rng.draw_coord();
            if self.board.get(coord) == Some(Cell::Empty) {
                self.board.set(coord, Cell::Color(self.rng.draw_color()));
                placed += 1;
            }
        }

        self.selection.clear();
        self.score = 0;
        self.game_over = false;
        self.started = true;
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &[Coord] {
        &self.selection
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Current RNG state (a session restarted from this value replays the
    /// same tile sequence)
    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Toggle a coordinate in the selection: remove it if present, append
    /// it otherwise. Never touches the board.
    pub fn toggle_select(&mut self, coord: Coord) {
        match self.selection.iter().position(|c| *c == coord) {
            Some(idx) => {
                self.selection.remove(idx);
            }
            None => self.selection.push(coord),
        }
    }

    /// Exchange the two selected colored tiles, then inject up to five new
    /// tiles on random empty cells.
    ///
    /// The full-board check runs unconditionally before any validation:
    /// a swap attempted on a full board latches the game-over flag even if
    /// the selection is invalid. The swap that latches the flag still runs;
    /// later swap attempts are rejected with `ActionError::GameOver`.
    pub fn swap(&mut self) -> Result<(), ActionError> {
        let was_over = self.game_over;
        if self.board.is_full() {
            self.game_over = true;
        }
        if was_over {
            return Err(ActionError::GameOver);
        }

        if self.selection.len() != 2 {
            return Err(ActionError::SwapSelectionCount);
        }
        let (a, b) = (self.selection[0], self.selection[1]);

        let cell_a = self.board.get(a).filter(Cell::is_color);
        let cell_b = self.board.get(b).filter(Cell::is_color);
        let (Some(cell_a), Some(cell_b)) = (cell_a, cell_b) else {
            return Err(ActionError::SwapTarget);
        };

        self.board.set(a, cell_b);
        self.board.set(b, cell_a);

        self.refill();
        self.selection.clear();
        Ok(())
    }

    /// Color up to five random empty cells. Goal markers are never
    /// overwritten; the loop stops early once the board fills up.
    fn refill(&mut self) {
        let mut placed = 0;
        while placed < REFILL_TILE_COUNT {
            if self.board.is_full() {
                break;
            }
            let coord = self.rng.draw_coord();
            if self.board.get(coord) == Some(Cell::Empty) {
                self.board.set(coord, Cell::Color(self.rng.draw_color()));
                placed += 1;
            }
        }
    }

    /// Clear the connected same-color group around the single selected cell
    /// and earn its points. Returns the points earned.
    ///
    /// There is deliberately no full-board check here: scoring stays
    /// possible after the game-over latch, matching the swap/score
    /// asymmetry of the original rules.
    pub fn score_selection(&mut self) -> Result<u32, ActionError> {
        if self.selection.len() != 1 {
            return Err(ActionError::ScoreSelectionCount);
        }
        let start = self.selection[0];

        // A start cell that holds no color has no region at all.
        let Some(color) = self.board.get(start).and_then(|cell| cell.color()) else {
            return Err(ActionError::RegionTooSmall { len: 0 });
        };

        let region = find_region(&self.board, start);
        if region.len() < MIN_REGION_SIZE {
            return Err(ActionError::RegionTooSmall { len: region.len() });
        }

        for coord in &region {
            self.board.set(*coord, Cell::Empty);
        }

        let earned = region_score(color, region.len());
        self.score += earned;
        self.selection.clear();
        Ok(earned)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
