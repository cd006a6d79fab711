use log::error;
use rand::seq::SliceRandom;
use rand::Rng;

use super::attack_tables::{destinations, shadow, Pattern};
use super::error::MoveGenError;
use super::eval::EvalConfig;
use super::state::Position;
use super::types::{Cell, Move, Side, Slot, BOARD_MASK};

impl Position {
    /// Cells the piece in `mover` can see from `from`: the board minus
    /// everything hidden behind any other occupied slot.
    pub(crate) fn shadow_mask(&self, mover: Slot, from: Cell) -> u32 {
        let mut visible = BOARD_MASK;
        for slot in Slot::all() {
            if slot == mover {
                continue;
            }
            if let Some(blocker) = self.cell_of(slot) {
                visible &= !shadow(from, blocker);
            }
        }
        visible
    }

    /// Movement pattern, origin and visibility of an occupied slot.
    pub(crate) fn reach(&self, slot: Slot) -> Option<(Pattern, Cell, u32)> {
        let from = self.cell_of(slot)?;
        let pattern = Pattern::for_slot(slot, self.slot_value(slot));
        let visible = if pattern.is_blocked() {
            self.shadow_mask(slot, from)
        } else {
            BOARD_MASK
        };
        Some((pattern, from, visible))
    }

    /// The `side` slot standing on `cell`.
    fn occupant(&self, side: Side, cell: Cell) -> Option<Slot> {
        side.slots()
            .filter_map(Slot::new)
            .find(|&s| self.slot_value(s) & cell.mask() != 0)
    }

    /// Every legal move for the side to move, captures first, values unset.
    ///
    /// # Errors
    /// [`MoveGenError::TerminalPosition`] on a finished game and
    /// [`MoveGenError::EmptyMoveList`] when a live position yields nothing.
    pub fn generate_moves(&self) -> Result<Vec<Move>, MoveGenError> {
        if self.is_terminal() {
            error!(
                "move generation requested on terminal position at move {}",
                self.move_number
            );
            return Err(MoveGenError::TerminalPosition {
                move_number: self.move_number,
            });
        }

        let side = self.side_to_move;
        let opponent = side.opponent();
        let mut attacks = Vec::with_capacity(16);
        let mut quiets = Vec::with_capacity(32);

        for slot in side.slots().filter_map(Slot::new) {
            let Some((pattern, from, visible)) = self.reach(slot) else {
                continue;
            };
            let dests = destinations(pattern, from);
            for &to in &dests.attacks {
                if to.mask() & self.opponents & visible == 0 {
                    continue;
                }
                if let Some(target) = self.occupant(opponent, to) {
                    attacks.push(Move::attack(slot, target, from, to));
                }
            }
            for &to in &dests.quiets {
                if to.mask() & self.empty & visible != 0 {
                    quiets.push(Move::quiet(slot, from, to));
                }
            }
        }

        attacks.append(&mut quiets);
        if attacks.is_empty() {
            error!(
                "no legal moves in live position at move {}:\n{}",
                self.move_number, self
            );
            return Err(MoveGenError::EmptyMoveList {
                move_number: self.move_number,
            });
        }
        Ok(attacks)
    }

    /// Legal moves valued for search ordering.
    ///
    /// Each move is valued as the negated evaluation of its child position
    /// minus the development penalty, if the configuration enables one.
    /// Captures still precede quiet moves; within each class moves are
    /// shuffled with `rng` and then stably sorted by descending value, so
    /// equal values come out in random order.
    pub fn ordered_moves<R: Rng + ?Sized>(
        &self,
        eval: &EvalConfig,
        rng: &mut R,
    ) -> Result<Vec<Move>, MoveGenError> {
        let (mut attacks, mut quiets): (Vec<Move>, Vec<Move>) = self
            .generate_moves()?
            .into_iter()
            .map(|mv| {
                let child = self.apply(&mv);
                mv.with_value(-child.evaluate(eval) - eval.development_penalty(&mv, &child))
            })
            .partition(Move::is_attack);

        for class in [&mut attacks, &mut quiets] {
            class.shuffle(rng);
            class.sort_by(|a, b| b.value.cmp(&a.value));
        }
        attacks.append(&mut quiets);
        Ok(attacks)
    }

    /// Legal move with the given `<from>-<to>` notation.
    #[must_use]
    pub fn find_move(&self, notation: &str) -> Option<Move> {
        if self.is_terminal() {
            return None;
        }
        self.generate_moves()
            .ok()?
            .into_iter()
            .find(|mv| mv.to_string() == notation)
    }
}
