//! Scoring module - point values for cleared regions
//!
//! Each color carries a fixed per-tile value; clearing a region earns
//! value * region size. The table matches the original ruleset:
//! P=2, B=3, Y=4, R=5, G=6.

use crate::types::TileColor;

/// Points earned for clearing `len` connected tiles of `color`
pub fn region_score(color: TileColor, len: usize) -> u32 {
    color.points().saturating_mul(len as u32)
}
