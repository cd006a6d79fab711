use log::debug;

use super::{Outcome, Scored, SearchContext};
use crate::board::error::{MoveGenError, SearchError};
use crate::board::search::constants::GAME_PLY_LIMIT;
use crate::board::search::SearchResult;
use crate::board::state::Position;

impl SearchContext<'_> {
    /// One search at `depth`, falling back to the best finished root move
    /// if the clock runs out.
    pub fn fixed_depth(&mut self, root: &Position, depth: u32) -> Result<SearchResult, MoveGenError> {
        match self.search_root(root, depth) {
            Ok(scored) => self.finish(root, scored, depth, false),
            Err(SearchError::Timeout) => self.fail_soft(root),
            Err(SearchError::MoveGen(e)) => Err(e),
        }
    }

    /// Iterative deepening from depth 1 while `move_number + depth` stays
    /// within the game limit.
    ///
    /// A timed-out depth is discarded in favour of the previous one. A depth
    /// that reports a loss is also discarded and ends the search; a depth
    /// that reports a win is kept and ends the search.
    pub fn iterative_deepening(
        &mut self,
        root: &Position,
        max_depth: Option<u32>,
    ) -> Result<SearchResult, MoveGenError> {
        let ceiling = GAME_PLY_LIMIT.saturating_sub(root.move_number()).max(1);
        let ceiling = max_depth.map_or(ceiling, |m| m.min(ceiling)).max(1);

        let mut completed = match self.search_root(root, 1) {
            Ok(scored) => scored,
            Err(SearchError::Timeout) => return self.fail_soft(root),
            Err(SearchError::MoveGen(e)) => return Err(e),
        };
        let mut completed_depth = 1;
        self.log_iteration(1, &completed);

        let mut timed_out = false;
        if completed.outcome == Outcome::Ongoing {
            for depth in 2..=ceiling {
                if self.clock.expired() {
                    timed_out = true;
                    break;
                }
                match self.search_root(root, depth) {
                    Ok(scored) => {
                        self.log_iteration(depth, &scored);
                        match scored.outcome {
                            Outcome::Loss => break,
                            Outcome::Win => {
                                completed = scored;
                                completed_depth = depth;
                                break;
                            }
                            Outcome::Ongoing => {
                                completed = scored;
                                completed_depth = depth;
                            }
                        }
                    }
                    Err(SearchError::Timeout) => {
                        debug!("depth {depth} timed out after {} nodes", self.clock.nodes());
                        timed_out = true;
                        break;
                    }
                    Err(SearchError::MoveGen(e)) => return Err(e),
                }
            }
        }

        self.finish(root, completed, completed_depth, timed_out)
    }

    /// Best move when depth 1 itself did not finish: the best root child
    /// examined so far, else the first move in search order.
    fn fail_soft(&mut self, root: &Position) -> Result<SearchResult, MoveGenError> {
        debug!(
            "depth 1 cut short after {} nodes, using partial result",
            self.clock.nodes()
        );
        let scored = match self.partial_root {
            Some(scored) => scored,
            None => {
                let moves = root.ordered_moves(&self.eval, &mut self.state.rng)?;
                let first = moves.first().copied().ok_or(MoveGenError::EmptyMoveList {
                    move_number: root.move_number(),
                })?;
                Scored {
                    value: first.value(),
                    outcome: Outcome::Ongoing,
                    best: Some(first),
                }
            }
        };
        self.finish(root, scored, 0, true)
    }

    fn finish(
        &self,
        root: &Position,
        scored: Scored,
        depth: u32,
        timed_out: bool,
    ) -> Result<SearchResult, MoveGenError> {
        let best_move = scored.best.ok_or(MoveGenError::EmptyMoveList {
            move_number: root.move_number(),
        })?;
        Ok(SearchResult {
            best_move,
            value: scored.value,
            outcome: scored.outcome,
            depth,
            nodes: self.clock.nodes(),
            elapsed: self.clock.elapsed(),
            timed_out,
        })
    }

    fn log_iteration(&self, depth: u32, scored: &Scored) {
        debug!(
            "depth {depth} value {} {:?} best {} nodes {} time {}ms",
            scored.value,
            scored.outcome,
            scored.best.map_or_else(|| "-".to_string(), |m| m.to_string()),
            self.clock.nodes(),
            self.clock.elapsed().as_millis()
        );
    }
}
