use super::types::{Cell, Side, Slot, BOARD_MASK, MOVE_LIMIT};

/// A minichess position: 20 piece slots plus the derived occupancy aggregates.
///
/// Positions are small `Copy` values. Every ply produces a fresh position
/// through [`Position::apply`]; nothing is mutated in place.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub(crate) slots: [u32; Slot::COUNT],
    pub(crate) move_number: u32,
    pub(crate) side_to_move: Side,
    /// Cells occupied by the side not to move
    pub(crate) opponents: u32,
    /// Unoccupied cells
    pub(crate) empty: u32,
}

const fn bit(file: usize, rank: usize) -> u32 {
    1 << ((rank - 1) * 5 + (4 - file))
}

impl Position {
    /// The standard opening setup, White to move at move 0.
    #[must_use]
    pub fn initial() -> Self {
        let slots = [
            // black: k q b n r on rank 6, pawns on rank 5
            bit(0, 6),
            bit(1, 6),
            bit(2, 6),
            bit(3, 6),
            bit(4, 6),
            bit(0, 5),
            bit(1, 5),
            bit(2, 5),
            bit(3, 5),
            bit(4, 5),
            // white: pawns on rank 2, then R N B Q K on rank 1
            bit(0, 2),
            bit(1, 2),
            bit(2, 2),
            bit(3, 2),
            bit(4, 2),
            bit(0, 1),
            bit(1, 1),
            bit(2, 1),
            bit(3, 1),
            bit(4, 1),
        ];
        Position::from_slots(slots, 0, Side::White)
    }

    /// Build a position and derive its aggregates from the slots.
    #[must_use]
    pub fn from_slots(slots: [u32; Slot::COUNT], move_number: u32, side_to_move: Side) -> Self {
        let mut pos = Position {
            slots,
            move_number,
            side_to_move,
            opponents: 0,
            empty: 0,
        };
        pos.recompute_aggregates();
        pos
    }

    /// Build a position with aggregates taken as given.
    pub(crate) const fn from_parts(
        slots: [u32; Slot::COUNT],
        move_number: u32,
        side_to_move: Side,
        opponents: u32,
        empty: u32,
    ) -> Self {
        Position {
            slots,
            move_number,
            side_to_move,
            opponents,
            empty,
        }
    }

    pub(crate) fn recompute_aggregates(&mut self) {
        let (opponents, empty) = self.computed_aggregates();
        self.opponents = opponents;
        self.empty = empty;
    }

    /// Opponent and empty aggregates as a function of the slots alone.
    #[must_use]
    pub fn computed_aggregates(&self) -> (u32, u32) {
        (
            self.occupancy(self.side_to_move.opponent()),
            !self.occupied() & BOARD_MASK,
        )
    }

    /// Whether the stored aggregates agree with the slots.
    #[must_use]
    pub fn aggregates_consistent(&self) -> bool {
        self.computed_aggregates() == (self.opponents, self.empty)
    }

    /// The same physical position with a different side to move.
    #[must_use]
    pub fn with_side_to_move(&self, side: Side) -> Self {
        Position::from_slots(self.slots, self.move_number, side)
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[u32; Slot::COUNT] {
        &self.slots
    }

    /// Raw slot value, including the promotion flag.
    #[inline]
    #[must_use]
    pub const fn slot_value(&self, slot: Slot) -> u32 {
        self.slots[slot.index()]
    }

    /// Cell of the piece in `slot`, `None` once captured.
    #[inline]
    #[must_use]
    pub const fn cell_of(&self, slot: Slot) -> Option<Cell> {
        Cell::from_mask(self.slots[slot.index()] & BOARD_MASK)
    }

    /// Slot of the piece standing on `cell`, if any.
    #[must_use]
    pub fn piece_at(&self, cell: Cell) -> Option<Slot> {
        Slot::all().find(|s| self.slots[s.index()] & cell.mask() != 0)
    }

    #[inline]
    #[must_use]
    pub const fn move_number(&self) -> u32 {
        self.move_number
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub const fn opponents(&self) -> u32 {
        self.opponents
    }

    #[inline]
    #[must_use]
    pub const fn empty(&self) -> u32 {
        self.empty
    }

    /// Cells occupied by `side`, promotion flag stripped.
    #[must_use]
    pub fn occupancy(&self, side: Side) -> u32 {
        self.slots[side.slots()]
            .iter()
            .fold(0, |acc, v| acc | v)
            & BOARD_MASK
    }

    #[must_use]
    pub fn occupied(&self) -> u32 {
        self.slots.iter().fold(0, |acc, v| acc | v) & BOARD_MASK
    }

    /// Whether `side`'s king is still on the board.
    #[inline]
    #[must_use]
    pub const fn king_present(&self, side: Side) -> bool {
        self.slots[side.king_slot().index()] != 0
    }

    /// A game is over once a king is captured or the move limit is passed.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !self.king_present(Side::White)
            || !self.king_present(Side::Black)
            || self.move_number > MOVE_LIMIT
    }

    /// Zobrist fingerprint under the process-wide key table.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        crate::zobrist::ZOBRIST.hash(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_aggregates() {
        let pos = Position::initial();
        assert_eq!(pos.occupied().count_ones(), 20);
        assert_eq!(pos.opponents(), 0x3FF << 20);
        assert_eq!(pos.empty().count_ones(), 10);
        assert!(pos.aggregates_consistent());
        assert!(!pos.is_terminal());
    }

    #[test]
    fn initial_pieces_on_expected_cells() {
        let pos = Position::initial();
        let name = |i: usize| pos.cell_of(Slot::new(i).unwrap()).map(Cell::name);
        assert_eq!(name(0), Some("a6"));
        assert_eq!(name(4), Some("e6"));
        assert_eq!(name(5), Some("a5"));
        assert_eq!(name(10), Some("a2"));
        assert_eq!(name(15), Some("a1"));
        assert_eq!(name(18), Some("d1"));
        assert_eq!(name(19), Some("e1"));
    }

    #[test]
    fn terminal_on_missing_king_or_move_limit() {
        let mut slots = *Position::initial().slots();
        slots[0] = 0;
        assert!(Position::from_slots(slots, 3, Side::White).is_terminal());

        let pos = Position::from_slots(*Position::initial().slots(), MOVE_LIMIT, Side::White);
        assert!(!pos.is_terminal());
        let pos = Position::from_slots(*Position::initial().slots(), MOVE_LIMIT + 1, Side::White);
        assert!(pos.is_terminal());
    }

    #[test]
    fn promotion_flag_ignored_by_aggregates() {
        let mut slots = [0u32; Slot::COUNT];
        slots[0] = 1 << 29;
        slots[19] = 1;
        slots[12] = (1 << 27) | super::super::types::PROMOTED_FLAG;
        let pos = Position::from_slots(slots, 12, Side::Black);
        assert_eq!(pos.opponents(), 1 | (1 << 27));
        assert_eq!(pos.empty() & super::super::types::PROMOTED_FLAG, 0);
        assert_eq!(pos.piece_at(Cell::from_index(27).unwrap()), Slot::new(12));
    }
}
