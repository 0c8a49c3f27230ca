//! Region finder - connected same-color component discovery
//!
//! A scoring move clears the maximal 4-connected group of same-color tiles
//! around a chosen cell. The search is a depth-first traversal with an
//! explicit stack and a visited bitmap; the board is bounded at 64 cells so
//! a single fixed-capacity buffer holds any result.

use arrayvec::ArrayVec;

use crate::core::Board;
use crate::types::{Cell, Coord, BOARD_SIZE};

/// Maximum cells a region can hold (the whole board)
pub const MAX_REGION: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Neighbor offsets in traversal order: up, right, down, left
const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Find the maximal 4-connected set of cells sharing the start cell's color.
///
/// The result is in DFS discovery order and always begins with `start`.
/// If the start cell is empty, a goal marker, or out of bounds, the result
/// is empty: only colored tiles form regions.
pub fn find_region(board: &Board, start: Coord) -> ArrayVec<Coord, MAX_REGION> {
    let mut region = ArrayVec::new();

    let color = match board.get(start).and_then(|cell| cell.color()) {
        Some(color) => color,
        None => return region,
    };

    let mut visited = [false; MAX_REGION];
    let mut stack: ArrayVec<Coord, MAX_REGION> = ArrayVec::new();

    visited[flat_index(start)] = true;
    stack.push(start);

    while let Some(coord) = stack.pop() {
        region.push(coord);

        for (dr, dc) in DIRECTIONS {
            let row = coord.row as i8 + dr;
            let col = coord.col as i8 + dc;
            if row < 0 || row >= BOARD_SIZE as i8 || col < 0 || col >= BOARD_SIZE as i8 {
                continue;
            }
            let next = Coord::new(row as u8, col as u8);
            let idx = flat_index(next);
            if visited[idx] {
                continue;
            }
            if board.get(next) == Some(Cell::Color(color)) {
                visited[idx] = true;
                stack.push(next);
            }
        }
    }

    region
}

#[inline(always)]
fn flat_index(coord: Coord) -> usize {
    (coord.row as usize) * (BOARD_SIZE as usize) + (coord.col as usize)
}
