//! Move representation.

use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::piece::Slot;

/// A legal move for the side to move.
///
/// `target` is the captured slot for an attack and `None` for a quiet move.
/// `value` is only an ordering score assigned by
/// [`Position::ordered_moves`](crate::board::Position::ordered_moves); the raw
/// enumeration leaves it at 0.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub(crate) mover: Slot,
    pub(crate) target: Option<Slot>,
    pub(crate) from: Cell,
    pub(crate) to: Cell,
    pub(crate) value: i32,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn quiet(mover: Slot, from: Cell, to: Cell) -> Self {
        Move {
            mover,
            target: None,
            from,
            to,
            value: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn attack(mover: Slot, target: Slot, from: Cell, to: Cell) -> Self {
        Move {
            mover,
            target: Some(target),
            from,
            to,
            value: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn mover(&self) -> Slot {
        self.mover
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> Option<Slot> {
        self.target
    }

    #[inline]
    #[must_use]
    pub const fn is_attack(&self) -> bool {
        self.target.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Cell {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Cell {
        self.to
    }

    /// Destination as a single-bit position mask.
    #[inline]
    #[must_use]
    pub const fn destination_mask(&self) -> u32 {
        self.to.mask()
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn with_value(self, value: i32) -> Self {
        Move { value, ..self }
    }

    /// `<origin>-<destination>`, e.g. `b1-c3`.
    #[must_use]
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

impl Neg for Move {
    type Output = Move;

    fn neg(self) -> Move {
        Move {
            value: -self.value,
            ..self
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
