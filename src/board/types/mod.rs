//! Core board types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Cell` - one of the 30 board cells and its single-bit mask
//! - `Side`, `PieceKind` and `Slot` - players, piece categories and the 20 fixed piece slots
//! - `Move` - a quiet move or an attack

mod cell;
mod moves;
mod piece;

pub use cell::{Cell, CELL_NAMES};
pub use moves::Move;
pub use piece::{PieceKind, Side, Slot};

/// Board width (files a..e).
pub const FILES: usize = 5;

/// Board height (ranks 1..6).
pub const RANKS: usize = 6;

/// Number of cells on the board.
pub const CELL_COUNT: usize = FILES * RANKS;

/// Every cell of the board.
pub const BOARD_MASK: u32 = (1 << CELL_COUNT) - 1;

/// Set on a pawn slot once the pawn has promoted.
pub const PROMOTED_FLAG: u32 = 1 << 30;

/// Move number past which a game is over.
pub const MOVE_LIMIT: u32 = 40;
