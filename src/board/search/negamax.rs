//! Core negamax / alpha-beta recursion.

mod iterative;

use crate::tt::BoundType;

use super::clock::SearchClock;
use super::constants::{INFINITY, KING_CAPTURE_THRESHOLD};
use super::{SearchConfig, SearchState};
use crate::board::error::SearchError;
use crate::board::eval::EvalConfig;
use crate::board::state::Position;
use crate::board::types::Move;

/// Game-theoretic tag carried with a search value, relative to the side
/// the value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    /// The opponent's king is gone
    Win,
    /// Our king is gone
    Loss,
}

impl Outcome {
    #[must_use]
    pub const fn flip(self) -> Outcome {
        match self {
            Outcome::Ongoing => Outcome::Ongoing,
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
        }
    }

    /// Tag of a leaf, from its mover's point of view.
    fn of_leaf(pos: &Position) -> Outcome {
        let me = pos.side_to_move();
        if !pos.king_present(me) {
            Outcome::Loss
        } else if !pos.king_present(me.opponent()) {
            Outcome::Win
        } else {
            Outcome::Ongoing
        }
    }

    /// Tag recovered from a cached value.
    fn of_cached(value: i32) -> Outcome {
        if value >= KING_CAPTURE_THRESHOLD {
            Outcome::Win
        } else if value <= -KING_CAPTURE_THRESHOLD {
            Outcome::Loss
        } else {
            Outcome::Ongoing
        }
    }
}

/// A search value with its tag and the move that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scored {
    pub value: i32,
    pub outcome: Outcome,
    pub best: Option<Move>,
}

impl Scored {
    fn leaf(value: i32, outcome: Outcome) -> Self {
        Scored {
            value,
            outcome,
            best: None,
        }
    }

    fn cached(value: i32) -> Self {
        Scored::leaf(value, Outcome::of_cached(value))
    }

    /// The child's result seen from the parent, reached through `mv`.
    #[must_use]
    pub fn negate_for(self, mv: Move) -> Self {
        Scored {
            value: -self.value,
            outcome: self.outcome.flip(),
            best: Some(mv),
        }
    }
}

/// Search context for a single search
pub(crate) struct SearchContext<'a> {
    pub state: &'a mut SearchState,
    pub clock: SearchClock,
    pub eval: EvalConfig,
    pub prune: bool,
    pub use_tt: bool,
    /// Best root child finished in the running iteration
    pub partial_root: Option<Scored>,
}

impl<'a> SearchContext<'a> {
    pub fn new(state: &'a mut SearchState, config: &SearchConfig) -> Self {
        SearchContext {
            state,
            clock: SearchClock::new(config.time_limit, config.node_limit),
            eval: config.eval,
            prune: config.variant.prunes(),
            use_tt: config.variant.uses_tt(),
            partial_root: None,
        }
    }

    /// Full-window search of the root to `depth`.
    pub fn search_root(&mut self, root: &Position, depth: u32) -> Result<Scored, SearchError> {
        self.partial_root = None;
        self.negamax(root, depth, 0, -INFINITY, INFINITY)
    }

    /// Negamax with optional alpha-beta cutoffs and table lookups.
    ///
    /// Table cutoffs are skipped at the root so the root always reports a
    /// move.
    pub fn negamax(
        &mut self,
        pos: &Position,
        depth: u32,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<Scored, SearchError> {
        self.clock.tick()?;

        if depth == 0 || pos.is_terminal() {
            return Ok(Scored::leaf(pos.evaluate(&self.eval), Outcome::of_leaf(pos)));
        }

        let original_alpha = alpha;
        let hash = self.use_tt.then(|| pos.fingerprint());

        if let Some(hash) = hash.filter(|_| ply > 0) {
            if let Some(cut) = self.probe_tt_for_cutoff(hash, depth, &mut alpha, &mut beta) {
                return Ok(cut);
            }
        }

        let moves = pos.ordered_moves(&self.eval, &mut self.state.rng)?;

        let mut best = Scored::leaf(-INFINITY, Outcome::Ongoing);
        for mv in moves {
            let child = pos.apply(&mv);
            let (child_alpha, child_beta) = if self.prune {
                (-beta, -alpha)
            } else {
                (-INFINITY, INFINITY)
            };
            let scored = self
                .negamax(&child, depth - 1, ply + 1, child_alpha, child_beta)?
                .negate_for(mv);

            if best.best.is_none() || scored.value > best.value {
                best = scored;
                if ply == 0 {
                    self.partial_root = Some(best);
                }
            }

            if self.prune {
                if best.value >= beta {
                    return Ok(best);
                }
                alpha = alpha.max(best.value);
            }
        }

        if let Some(hash) = hash {
            self.store_tt(hash, depth, best.value, original_alpha, beta);
        }
        Ok(best)
    }

    /// Tighten the window from a stored entry searched at least as deep.
    /// Returns a result when the entry settles the node.
    fn probe_tt_for_cutoff(
        &mut self,
        hash: u64,
        depth: u32,
        alpha: &mut i32,
        beta: &mut i32,
    ) -> Option<Scored> {
        let entry = self.state.tt.probe(hash)?;
        if entry.depth() < depth {
            return None;
        }
        self.state.stats.tt_hits += 1;
        let value = entry.value();
        match entry.bound_type() {
            BoundType::Exact => return Some(Scored::cached(value)),
            BoundType::LowerBound => *alpha = (*alpha).max(value),
            BoundType::UpperBound => *beta = (*beta).min(value),
        }
        (*alpha >= *beta).then(|| Scored::cached(value))
    }

    fn store_tt(&mut self, hash: u64, depth: u32, value: i32, alpha: i32, beta: i32) {
        let bound = if value <= alpha {
            BoundType::UpperBound
        } else if value >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.state.tt.store(hash, depth, value, bound);
    }
}
