//! Board cells and their single-bit position masks.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::StateError;

use super::{BOARD_MASK, CELL_COUNT, FILES, RANKS};

const FILE_CHARS: [char; FILES] = ['a', 'b', 'c', 'd', 'e'];

/// Two-character cell names indexed by bit position (bit 0 is `e1`, bit 29 is `a6`).
pub const CELL_NAMES: [&str; CELL_COUNT] = [
    "e1", "d1", "c1", "b1", "a1", //
    "e2", "d2", "c2", "b2", "a2", //
    "e3", "d3", "c3", "b3", "a3", //
    "e4", "d4", "c4", "b4", "a4", //
    "e5", "d5", "c5", "b5", "a5", //
    "e6", "d6", "c6", "b6", "a6",
];

/// One of the 30 cells, stored as its bit index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell(pub(crate) u8);

impl Cell {
    /// Cell at `row` (0 = rank 1) and `col` (0 = file a).
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Cell> {
        if row < RANKS && col < FILES {
            Some(Cell((row * FILES + (FILES - 1 - col)) as u8))
        } else {
            None
        }
    }

    /// Cell from signed coordinates, `None` when off the board.
    #[inline]
    pub(crate) fn offset(row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        Cell::new(row as usize, col as usize)
    }

    /// Cell for a mask holding exactly one board bit.
    #[inline]
    #[must_use]
    pub const fn from_mask(mask: u32) -> Option<Cell> {
        if mask.count_ones() == 1 && mask & BOARD_MASK != 0 {
            Some(Cell(mask.trailing_zeros() as u8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Cell> {
        if index < CELL_COUNT {
            Some(Cell(index as u8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn mask(self) -> u32 {
        1 << self.0
    }

    /// Row index, 0 for rank 1.
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / FILES
    }

    /// Column index, 0 for file a.
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        FILES - 1 - self.0 as usize % FILES
    }

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        CELL_NAMES[self.0 as usize]
    }

    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT as u8).map(Cell)
    }

    /// Iterate the cells of a mask from the lowest bit up.
    pub fn iter_mask(mut mask: u32) -> impl Iterator<Item = Cell> {
        mask &= BOARD_MASK;
        std::iter::from_fn(move || {
            if mask == 0 {
                return None;
            }
            let idx = mask.trailing_zeros() as u8;
            mask &= mask - 1;
            Some(Cell(idx))
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cell {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(StateError::InvalidCell { notation: s.to_string() });
        };
        let col = FILE_CHARS.iter().position(|&c| c == file.to_ascii_lowercase());
        let row = rank.to_digit(10).and_then(|r| (r as usize).checked_sub(1));
        match (row, col) {
            (Some(row), Some(col)) => Cell::new(row, col)
                .ok_or_else(|| StateError::InvalidCell { notation: s.to_string() }),
            _ => Err(StateError::InvalidCell { notation: s.to_string() }),
        }
    }
}
