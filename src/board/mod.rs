//! Minichess board representation and game logic.
//!
//! A position is twenty piece slots, each holding the single-bit mask of the
//! cell its piece stands on (0 once captured), plus the move number, the
//! side to move and two derived occupancy masks.
//!
//! # Example
//! ```
//! use minichess_engine::board::Position;
//!
//! let pos = Position::initial();
//! let moves = pos.generate_moves().expect("opening position has moves");
//! println!("Opening position has {} moves", moves.len());
//! ```

mod attack_tables;
mod codec;
mod error;
mod eval;
mod eval_terms;
mod make_move;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use codec::{parse_tokens, Request, POSITION_TOKENS};
pub use error::{MoveGenError, SearchError, StateError, UnknownVariant};
pub use eval::EvalConfig;
pub use eval_terms::{MobilityCounts, Phase};
pub use state::Position;
pub use types::{
    Cell, Move, PieceKind, Side, Slot, BOARD_MASK, CELL_COUNT, CELL_NAMES, FILES, MOVE_LIMIT,
    PROMOTED_FLAG, RANKS,
};

pub use search::{
    find_best_move, search, Outcome, Scored, SearchClock, SearchConfig, SearchResult, SearchState,
    SearchStats, Variant, ALPHA_BETA_DEPTH, CLOCK_SAMPLE_INTERVAL, INFINITY, NEGAMAX_DEPTH,
};
