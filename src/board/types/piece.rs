//! Sides, piece kinds and the 20 fixed piece slots.

use std::fmt;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two players. The wire encoding is 1 for White and 2 for Black.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Decode the side-to-move token (1 = White, 2 = Black).
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Side> {
        match code {
            1 => Some(Side::White),
            2 => Some(Side::Black),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Side::White => 1,
            Side::Black => 2,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// The ten slot indices owned by this side.
    #[inline]
    #[must_use]
    pub const fn slots(self) -> Range<usize> {
        match self {
            Side::Black => 0..10,
            Side::White => 10..20,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king_slot(self) -> Slot {
        match self {
            Side::Black => Slot(0),
            Side::White => Slot(19),
        }
    }

    /// Row (0 = rank 1) on which this side's pawns promote.
    #[inline]
    #[must_use]
    pub(crate) const fn promotion_row(self) -> usize {
        match self {
            Side::White => 5,
            Side::Black => 0,
        }
    }

    /// Row step a pawn of this side takes when advancing.
    #[inline]
    #[must_use]
    pub(crate) const fn forward(self) -> isize {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "W"),
            Side::Black => write!(f, "B"),
        }
    }
}

/// Piece categories. Promoted pawns are reported as queens by
/// [`Slot::effective_kind`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Pawn,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Bishop => 2,
            PieceKind::Knight => 3,
            PieceKind::Rook => 4,
            PieceKind::Pawn => 5,
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceKind::King),
            'q' => Some(PieceKind::Queen),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            'r' => Some(PieceKind::Rook),
            'p' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Diagram character, uppercase for White.
    #[must_use]
    pub fn to_char(self, side: Side) -> char {
        let c = match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Pawn => 'p',
        };
        if side == Side::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

/// Index of one of the 20 fixed piece slots.
///
/// Slots 0..=9 are Black (king, queen, bishop, knight, rook, five pawns) and
/// slots 10..=19 are White in mirrored order (five pawns, rook, knight,
/// bishop, queen, king).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot(pub(crate) u8);

impl Slot {
    pub const COUNT: usize = 20;

    #[must_use]
    pub const fn new(index: usize) -> Option<Slot> {
        if index < Self::COUNT {
            Some(Slot(index as u8))
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
    pub const fn side(self) -> Side {
        if self.0 < 10 {
            Side::Black
        } else {
            Side::White
        }
    }

    /// Kind fixed by the slot layout, ignoring promotion.
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self.0 {
            0 | 19 => PieceKind::King,
            1 | 18 => PieceKind::Queen,
            2 | 17 => PieceKind::Bishop,
            3 | 16 => PieceKind::Knight,
            4 | 15 => PieceKind::Rook,
            _ => PieceKind::Pawn,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn(self) -> bool {
        matches!(self.kind(), PieceKind::Pawn)
    }

    /// Kind the piece in this slot currently moves and is valued as.
    #[inline]
    #[must_use]
    pub const fn effective_kind(self, value: u32) -> PieceKind {
        if self.is_pawn() && value & super::PROMOTED_FLAG != 0 {
            PieceKind::Queen
        } else {
            self.kind()
        }
    }

    pub fn all() -> impl Iterator<Item = Slot> {
        (0..Self::COUNT as u8).map(Slot)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind().to_char(self.side()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_layout_matches_wire_order() {
        let kinds: Vec<char> = Slot::all().map(|s| s.kind().to_char(s.side())).collect();
        let layout: String = kinds.into_iter().collect();
        assert_eq!(layout, "kqbnrpppppPPPPPRNBQK");
    }

    #[test]
    fn king_slots_belong_to_their_side() {
        for side in Side::BOTH {
            let king = side.king_slot();
            assert_eq!(king.side(), side);
            assert_eq!(king.kind(), PieceKind::King);
            assert!(side.slots().contains(&king.index()));
        }
    }

    #[test]
    fn promoted_pawn_moves_as_queen() {
        let pawn = Slot(12);
        assert_eq!(pawn.effective_kind(1 << 27), PieceKind::Pawn);
        assert_eq!(
            pawn.effective_kind((1 << 27) | super::super::PROMOTED_FLAG),
            PieceKind::Queen
        );
        // The flag is meaningless on a non-pawn slot.
        assert_eq!(Slot(15).effective_kind(super::super::PROMOTED_FLAG | 1), PieceKind::Rook);
    }

    #[test]
    fn side_codes_roundtrip() {
        assert_eq!(Side::from_code(1), Some(Side::White));
        assert_eq!(Side::from_code(2), Some(Side::Black));
        assert_eq!(Side::from_code(0), None);
        assert_eq!(Side::from_code(3), None);
        assert_eq!(Side::White.code(), 1);
        assert_eq!(Side::Black.opponent(), Side::White);
    }
}
