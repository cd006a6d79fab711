//! Material and piece-cell evaluation.

use crate::board::state::Position;
use crate::board::types::{Cell, Side, Slot, FILES, RANKS};

use super::tables::{MATERIAL_END, MATERIAL_MIDDLE, MATERIAL_OPENING, PST_EG, PST_MG};
use super::Phase;

/// Index into a piece-cell table for a piece of `side` on `cell`.
#[inline]
fn pst_index(cell: Cell, side: Side) -> usize {
    let drawn_row = match side {
        Side::White => RANKS - 1 - cell.row(),
        Side::Black => cell.row(),
    };
    drawn_row * FILES + cell.col()
}

impl Position {
    /// Sum of piece weights for `side`; promoted pawns count as queens.
    #[must_use]
    pub fn material_score(&self, side: Side, phase: Phase) -> i32 {
        let weights = match phase {
            Phase::Opening => &MATERIAL_OPENING,
            Phase::Middle => &MATERIAL_MIDDLE,
            Phase::End => &MATERIAL_END,
        };
        side.slots()
            .filter_map(Slot::new)
            .filter(|&s| self.slot_value(s) != 0)
            .map(|s| weights[s.effective_kind(self.slot_value(s)).index()])
            .sum()
    }

    /// Piece-cell bonus for `side`. The middle game averages the two tables.
    #[must_use]
    pub fn positional_score(&self, side: Side, phase: Phase) -> i32 {
        let mut mg = 0;
        let mut eg = 0;
        for slot in side.slots().filter_map(Slot::new) {
            let Some(cell) = self.cell_of(slot) else {
                continue;
            };
            let kind = slot.effective_kind(self.slot_value(slot)).index();
            let idx = pst_index(cell, side);
            mg += PST_MG[kind][idx];
            eg += PST_EG[kind][idx];
        }
        match phase {
            Phase::Opening => mg,
            Phase::Middle => (mg + eg) / 2,
            Phase::End => eg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_index() {
        let a1: Cell = "a1".parse().unwrap();
        let a6: Cell = "a6".parse().unwrap();
        assert_eq!(pst_index(a1, Side::White), 25);
        assert_eq!(pst_index(a6, Side::Black), 25);
        assert_eq!(pst_index(a6, Side::White), 0);
    }

    #[test]
    fn initial_material_balanced() {
        let pos = Position::initial();
        for phase in [Phase::Opening, Phase::Middle, Phase::End] {
            assert_eq!(
                pos.material_score(Side::White, phase),
                pos.material_score(Side::Black, phase)
            );
            assert_eq!(
                pos.positional_score(Side::White, phase),
                pos.positional_score(Side::Black, phase)
            );
        }
        assert_eq!(
            pos.material_score(Side::White, Phase::Opening),
            20000 + 900 + 330 + 300 + 500 + 5 * 100
        );
    }

    #[test]
    fn promoted_pawn_counts_as_queen() {
        let mut slots = *Position::initial().slots();
        slots[10] |= crate::board::types::PROMOTED_FLAG;
        let pos = Position::from_slots(slots, 0, Side::White);
        assert_eq!(
            pos.material_score(Side::White, Phase::Opening)
                - pos.material_score(Side::Black, Phase::Opening),
            900 - 100
        );
    }
}
