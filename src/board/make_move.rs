use super::state::Position;
use super::types::{Cell, Move, Slot, BOARD_MASK, PROMOTED_FLAG};

impl Position {
    /// Position after `mv`. The receiver is left untouched.
    #[must_use]
    pub fn apply(&self, mv: &Move) -> Position {
        let mut next = *self;
        if let Some(target) = mv.target {
            next.slots[target.index()] = 0;
        }
        next.finish_move(mv.mover, mv.to)
    }

    /// `mover` captures the piece in `target`, taking its cell.
    ///
    /// Returns `None` when `target` is already empty.
    #[must_use]
    pub fn make_attack(&self, mover: Slot, target: Slot) -> Option<Position> {
        let to = self.cell_of(target)?;
        let mut next = *self;
        next.slots[target.index()] = 0;
        Some(next.finish_move(mover, to))
    }

    /// `mover` steps to the empty cell `to`.
    #[must_use]
    pub fn make_quiet(&self, mover: Slot, to: Cell) -> Position {
        (*self).finish_move(mover, to)
    }

    fn finish_move(mut self, mover: Slot, to: Cell) -> Position {
        let mut value = to.mask() | (self.slots[mover.index()] & PROMOTED_FLAG);
        if mover.is_pawn() && to.row() == mover.side().promotion_row() {
            value |= PROMOTED_FLAG;
        }
        self.slots[mover.index()] = value;

        let moved = self.side_to_move;
        self.side_to_move = moved.opponent();
        self.opponents = self.occupancy(moved);
        self.empty = !self.occupied() & BOARD_MASK;
        self.move_number += 1;
        self
    }
}
