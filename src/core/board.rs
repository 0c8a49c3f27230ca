//! Board module - manages the game grid
//!
//! The board is a fixed 8x8 grid where each cell is empty, a fixed goal
//! marker, or a colored tile. Uses a flat array for better cache locality
//! and zero-allocation. Coordinates: (row, col) with row 0 at the top.
//!
//! Goal markers occupy rows 2-5 in columns {0, 1, 6, 7}. They are stamped
//! once per game and no operation overwrites them with a color.

use crate::types::{Cell, Coord, BOARD_SIZE, GOAL_COLS, GOAL_ROWS};

/// Total number of cells on the board
const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// The game board - 8 rows x 8 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new board with every cell empty
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(coord: Coord) -> Option<usize> {
        if coord.row >= BOARD_SIZE || coord.col >= BOARD_SIZE {
            return None;
        }
        Some((coord.row as usize) * (BOARD_SIZE as usize) + (coord.col as usize))
    }

    /// Get side length of the (square) board
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Get cell at a coordinate
    /// Returns None if out of bounds
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        Self::index(coord).map(|idx| self.cells[idx])
    }

    /// Set cell at a coordinate
    /// Returns false if out of bounds
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match Self::index(coord) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a coordinate belongs to the fixed goal band
    pub fn is_goal_coord(coord: Coord) -> bool {
        GOAL_ROWS.contains(&coord.row) && GOAL_COLS.contains(&coord.col)
    }

    /// Stamp the 16 fixed goal markers onto the board
    pub fn stamp_goals(&mut self) {
        for row in GOAL_ROWS {
            for col in GOAL_COLS {
                self.set(Coord::new(row, col), Cell::Goal);
            }
        }
    }

    /// True iff no empty cell remains.
    ///
    /// Goal markers count as occupied: a board whose only non-colored cells
    /// are goals is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Number of cells holding a colored tile
    pub fn colored_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_color()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a board from 8 rows of 8 fixture characters.
    ///
    /// '.' is empty, '*' is a goal marker, color letters are parsed
    /// case-insensitively. Panics on malformed input; intended for tests
    /// and fixtures.
    pub fn from_rows(rows: [&str; BOARD_SIZE as usize]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(
                line.chars().count(),
                BOARD_SIZE as usize,
                "row {} must have {} cells",
                row,
                BOARD_SIZE
            );
            for (col, c) in line.chars().enumerate() {
                let cell = Cell::from_char(c)
                    .unwrap_or_else(|| panic!("bad cell character {:?} at ({}, {})", c, row, col));
                board.set(Coord::new(row as u8, col as u8), cell);
            }
        }
        board
    }

    /// Render the board as 8 fixture strings (inverse of `from_rows`)
    pub fn to_rows(&self) -> [String; BOARD_SIZE as usize] {
        std::array::from_fn(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    self.get(Coord::new(row as u8, col))
                        .map(|cell| cell.as_char())
                        .unwrap_or('?')
                })
                .collect()
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
