//! Evaluation terms.
//!
//! Contains evaluation functions for:
//! - Material (per-kind weights by game phase)
//! - Piece-cell tables (middle-game and endgame tables blended by phase)
//! - Mobility (reachable captures, quiet cells and defended pieces)

mod material;
mod mobility;
pub mod tables;

pub use mobility::MobilityCounts;

use crate::board::types::MOVE_LIMIT;

/// Game phase, selected by move number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Opening,
    Middle,
    End,
}

impl Phase {
    pub const OPENING_END: u32 = 10;
    pub const MIDDLE_END: u32 = 30;

    #[must_use]
    pub const fn of(move_number: u32) -> Phase {
        if move_number < Self::OPENING_END {
            Phase::Opening
        } else if move_number < Self::MIDDLE_END {
            Phase::Middle
        } else {
            Phase::End
        }
    }
}

const _: () = assert!(Phase::MIDDLE_END < MOVE_LIMIT);
