//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (the grid is always exactly 8x8)
pub const BOARD_SIZE: u8 = 8;

/// Rows carrying the fixed goal markers
pub const GOAL_ROWS: std::ops::RangeInclusive<u8> = 2..=5;
/// Columns carrying the fixed goal markers
pub const GOAL_COLS: [u8; 4] = [0, 1, 6, 7];

/// Number of colored tiles seeded onto a fresh board
pub const SEED_TILE_COUNT: usize = 5;
/// Maximum number of tiles injected after each swap
pub const REFILL_TILE_COUNT: usize = 5;
/// Minimum connected-region size eligible for scoring
pub const MIN_REGION_SIZE: usize = 5;

/// Tile colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    Purple,
    Blue,
    Yellow,
    Red,
    Green,
}

/// All tile colors, in draw order
pub const ALL_COLORS: [TileColor; 5] = [
    TileColor::Purple,
    TileColor::Blue,
    TileColor::Yellow,
    TileColor::Red,
    TileColor::Green,
];

impl TileColor {
    /// Parse a color from its letter (case-insensitive).
    ///
    /// Upper and lower case of the same letter denote the same color, so two
    /// parsed colors compare equal regardless of the case they came from.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(TileColor::Purple),
            'B' => Some(TileColor::Blue),
            'Y' => Some(TileColor::Yellow),
            'R' => Some(TileColor::Red),
            'G' => Some(TileColor::Green),
            _ => None,
        }
    }

    /// Letter used for display and test fixtures
    pub fn as_char(&self) -> char {
        match self {
            TileColor::Purple => 'P',
            TileColor::Blue => 'B',
            TileColor::Yellow => 'Y',
            TileColor::Red => 'R',
            TileColor::Green => 'G',
        }
    }

    /// Point value of a single tile of this color
    pub fn points(&self) -> u32 {
        match self {
            TileColor::Purple => 2,
            TileColor::Blue => 3,
            TileColor::Yellow => 4,
            TileColor::Red => 5,
            TileColor::Green => 6,
        }
    }
}

/// Cell on the board: empty, a fixed goal marker, or a colored tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Goal,
    Color(TileColor),
}

impl Cell {
    /// Parse a cell from its fixture character ('.' empty, '*' goal, letter color)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            '*' => Some(Cell::Goal),
            _ => TileColor::from_char(c).map(Cell::Color),
        }
    }

    /// Character used for display and test fixtures
    pub fn as_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Goal => '*',
            Cell::Color(color) => color.as_char(),
        }
    }

    /// The tile color, if this cell holds one
    pub fn color(&self) -> Option<TileColor> {
        match self {
            Cell::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(self, Cell::Color(_))
    }
}

/// Grid coordinate: (row, col) with row 0 at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}
