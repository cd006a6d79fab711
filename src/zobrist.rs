//! Zobrist hashing for minichess positions.
//!
//! Every cell gets one random key per occupant kind (six piece kinds per
//! side plus "empty"); a position's fingerprint XORs the key of each cell's
//! occupant, plus one extra key when Black is to move.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{PieceKind, Position, Side, Slot, CELL_COUNT};

/// Six kinds per side plus the empty cell.
pub const OCCUPANT_KINDS: usize = 13;

const EMPTY_KIND: usize = OCCUPANT_KINDS - 1;

pub struct ZobristKeys {
    // cell_keys[cell][occupant kind]
    pub(crate) cell_keys: [[u64; OCCUPANT_KINDS]; CELL_COUNT],
    pub(crate) black_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        Self::from_rng(&mut StdRng::from_entropy())
    }

    /// Reproducible key table.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    fn from_rng<R: Rng>(rng: &mut R) -> Self {
        let mut cell_keys = [[0; OCCUPANT_KINDS]; CELL_COUNT];
        for cell in &mut cell_keys {
            for key in cell.iter_mut() {
                *key = rng.gen();
            }
        }
        ZobristKeys {
            cell_keys,
            black_to_move_key: rng.gen(),
        }
    }

    /// Fingerprint of `pos`. Promoted pawns hash as queens of their side.
    #[must_use]
    pub fn hash(&self, pos: &Position) -> u64 {
        let mut occupants = [EMPTY_KIND; CELL_COUNT];
        for slot in Slot::all() {
            if let Some(cell) = pos.cell_of(slot) {
                let kind = slot.effective_kind(pos.slot_value(slot));
                occupants[cell.index()] = occupant_index(slot.side(), kind);
            }
        }

        let mut hash = occupants
            .iter()
            .enumerate()
            .fold(0, |h, (cell, &kind)| h ^ self.cell_keys[cell][kind]);
        if pos.side_to_move() == Side::Black {
            hash ^= self.black_to_move_key;
        }
        hash
    }
}

#[inline]
fn occupant_index(side: Side, kind: PieceKind) -> usize {
    side.index() * PieceKind::ALL.len() + kind.index()
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
