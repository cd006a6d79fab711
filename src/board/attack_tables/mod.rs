//! Precomputed destination and shadow tables.
//!
//! Every movement pattern has, per origin cell, the list of cells it could
//! reach on an empty board, split into attack destinations and quiet
//! destinations. Sliding pieces are then cut down with the shadow table:
//! `shadow(origin, blocker)` holds the cells hidden behind `blocker` on the
//! ray from `origin`.

#![allow(clippy::needless_range_loop)]

mod tables;

use crate::board::types::{Cell, PieceKind, Side, Slot, CELL_COUNT};

use tables::{DESTINATIONS, SHADOWS};

/// Movement pattern of a piece, with pawns split by direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Pattern {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn(Side),
}

impl Pattern {
    pub(crate) const COUNT: usize = 7;

    pub(crate) const ALL: [Pattern; Self::COUNT] = [
        Pattern::King,
        Pattern::Queen,
        Pattern::Rook,
        Pattern::Bishop,
        Pattern::Knight,
        Pattern::Pawn(Side::White),
        Pattern::Pawn(Side::Black),
    ];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Pattern::King => 0,
            Pattern::Queen => 1,
            Pattern::Rook => 2,
            Pattern::Bishop => 3,
            Pattern::Knight => 4,
            Pattern::Pawn(Side::White) => 5,
            Pattern::Pawn(Side::Black) => 6,
        }
    }

    /// Pattern of the piece in `slot`, given its raw slot value.
    #[inline]
    pub(crate) const fn for_slot(slot: Slot, value: u32) -> Pattern {
        match slot.effective_kind(value) {
            PieceKind::King => Pattern::King,
            PieceKind::Queen => Pattern::Queen,
            PieceKind::Rook => Pattern::Rook,
            PieceKind::Bishop => Pattern::Bishop,
            PieceKind::Knight => Pattern::Knight,
            PieceKind::Pawn => Pattern::Pawn(slot.side()),
        }
    }

    /// Knights jump; everything else is stopped by the first occupied cell.
    #[inline]
    pub(crate) const fn is_blocked(self) -> bool {
        !matches!(self, Pattern::Knight)
    }
}

/// Reachable cells from one origin on an empty board.
#[derive(Debug, Clone)]
pub(crate) struct Destinations {
    /// Attack destinations, nearest first along each ray
    pub attacks: Vec<Cell>,
    pub quiets: Vec<Cell>,
    pub attack_mask: u32,
    pub quiet_mask: u32,
}

impl Destinations {
    fn new(attacks: Vec<Cell>, quiets: Vec<Cell>) -> Self {
        let attack_mask = attacks.iter().fold(0, |acc, c| acc | c.mask());
        let quiet_mask = quiets.iter().fold(0, |acc, c| acc | c.mask());
        Destinations {
            attacks,
            quiets,
            attack_mask,
            quiet_mask,
        }
    }
}

#[inline]
pub(crate) fn destinations(pattern: Pattern, from: Cell) -> &'static Destinations {
    &DESTINATIONS[pattern.index() * CELL_COUNT + from.index()]
}

/// Cells hidden behind `blocker` as seen from `origin`; empty when the two
/// cells do not share a line.
#[inline]
pub(crate) fn shadow(origin: Cell, blocker: Cell) -> u32 {
    SHADOWS[origin.index()][blocker.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(name: &str) -> Cell {
        name.parse().unwrap()
    }

    fn names(mask: u32) -> Vec<&'static str> {
        let mut v: Vec<&str> = Cell::iter_mask(mask).map(Cell::name).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn knight_from_corner() {
        let d = destinations(Pattern::Knight, cell("b1"));
        assert_eq!(names(d.quiet_mask), vec!["a3", "c3", "d2"]);
        assert_eq!(d.attack_mask, d.quiet_mask);
    }

    #[test]
    fn bishop_steps_sideways_only_quietly() {
        let d = destinations(Pattern::Bishop, cell("c3"));
        assert_eq!(d.quiet_mask & !d.attack_mask, {
            cell("c2").mask() | cell("c4").mask() | cell("b3").mask() | cell("d3").mask()
        });
        assert_eq!(d.attack_mask & cell("c4").mask(), 0);
        assert_ne!(d.attack_mask & cell("a5").mask(), 0);
    }

    #[test]
    fn king_has_eight_neighbours_in_the_middle() {
        let d = destinations(Pattern::King, cell("c3"));
        assert_eq!(d.attacks.len(), 8);
        assert_eq!(destinations(Pattern::King, cell("a1")).attacks.len(), 3);
    }

    #[test]
    fn rook_covers_rank_and_file() {
        let d = destinations(Pattern::Rook, cell("a1"));
        assert_eq!(d.attack_mask.count_ones(), 4 + 5);
    }

    #[test]
    fn shadow_hides_cells_beyond_blocker() {
        let hidden = shadow(cell("a1"), cell("a3"));
        assert_eq!(names(hidden), vec!["a4", "a5", "a6"]);
        assert_eq!(shadow(cell("a1"), cell("c2")), 0);
        assert_eq!(names(shadow(cell("e1"), cell("d2"))), vec!["a5", "b4", "c3"]);
    }

    #[test]
    fn promoted_pawn_uses_queen_pattern() {
        let pawn = Slot::new(12).unwrap();
        assert_eq!(Pattern::for_slot(pawn, 1 << 12), Pattern::Pawn(Side::White));
        assert_eq!(
            Pattern::for_slot(pawn, (1 << 12) | crate::board::types::PROMOTED_FLAG),
            Pattern::Queen
        );
        assert!(!Pattern::Knight.is_blocked());
    }
}
