//! Search module: the minichess strategy family.
//!
//! Variants:
//! - Random: a uniformly chosen legal move
//! - Negamax: fixed depth, full window, no pruning
//! - AlphaBeta: fixed depth with alpha-beta cutoffs
//! - IterativeDeepening: alpha-beta under a deadline, deepening one ply at a time
//! - Transposition: iterative deepening backed by the transposition table

mod clock;
pub(crate) mod constants;
mod negamax;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::tt::{TranspositionTable, DEFAULT_TT_BITS};

use super::error::{MoveGenError, UnknownVariant};
use super::eval::EvalConfig;
use super::state::Position;
use super::types::Move;

pub use clock::SearchClock;
pub use constants::{ALPHA_BETA_DEPTH, CLOCK_SAMPLE_INTERVAL, INFINITY, NEGAMAX_DEPTH};
pub use negamax::{Outcome, Scored};

use negamax::SearchContext;

/// Search strategy, selected once per session by the handshake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Random,
    Negamax,
    AlphaBeta,
    IterativeDeepening,
    Transposition,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Random,
        Variant::Negamax,
        Variant::AlphaBeta,
        Variant::IterativeDeepening,
        Variant::Transposition,
    ];

    /// Handshake code, 1 through 5.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Variant::Random => 1,
            Variant::Negamax => 2,
            Variant::AlphaBeta => 3,
            Variant::IterativeDeepening => 4,
            Variant::Transposition => 5,
        }
    }

    #[must_use]
    pub const fn from_code(code: u32) -> Option<Variant> {
        match code {
            1 => Some(Variant::Random),
            2 => Some(Variant::Negamax),
            3 => Some(Variant::AlphaBeta),
            4 => Some(Variant::IterativeDeepening),
            5 => Some(Variant::Transposition),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Random => "random",
            Variant::Negamax => "negamax",
            Variant::AlphaBeta => "alphabeta",
            Variant::IterativeDeepening => "iterative",
            Variant::Transposition => "transposition",
        }
    }

    /// Active evaluation terms.
    #[must_use]
    pub const fn eval_config(self) -> EvalConfig {
        match self {
            Variant::Random => EvalConfig::NONE,
            Variant::Negamax => EvalConfig::MATERIAL,
            Variant::AlphaBeta => EvalConfig::POSITIONAL,
            Variant::IterativeDeepening => EvalConfig::MOBILITY,
            Variant::Transposition => EvalConfig::FULL,
        }
    }

    #[must_use]
    pub const fn prunes(self) -> bool {
        !matches!(self, Variant::Random | Variant::Negamax)
    }

    /// Whether the variant deepens under a deadline instead of searching a
    /// fixed depth.
    #[must_use]
    pub const fn deepens(self) -> bool {
        matches!(self, Variant::IterativeDeepening | Variant::Transposition)
    }

    #[must_use]
    pub const fn uses_tt(self) -> bool {
        matches!(self, Variant::Transposition)
    }

    /// Depth searched by the fixed-depth variants.
    #[must_use]
    pub const fn default_depth(self) -> u32 {
        match self {
            Variant::Negamax => NEGAMAX_DEPTH,
            _ => ALPHA_BETA_DEPTH,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    /// Accepts a handshake code or a variant name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let variant = match token.as_str() {
            "1" | "random" => Variant::Random,
            "2" | "negamax" => Variant::Negamax,
            "3" | "ab" | "alphabeta" | "alpha-beta" => Variant::AlphaBeta,
            "4" | "id" | "iterative" | "abid" => Variant::IterativeDeepening,
            "5" | "tt" | "abttable" | "transposition" => Variant::Transposition,
            _ => {
                return Err(UnknownVariant {
                    found: s.trim().to_string(),
                })
            }
        };
        Ok(variant)
    }
}

/// Result of a search.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub best_move: Move,
    /// Root value from the mover's point of view
    pub value: i32,
    pub outcome: Outcome,
    /// Deepest fully completed depth (0 for the random variant or when
    /// depth 1 itself was cut short)
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
    /// Whether the deadline or node limit stopped the search
    pub timed_out: bool,
}

/// Statistics tracked during search
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub total_nodes: u64,
    pub depth: u32,
    pub tt_hits: u64,
}

impl SearchStats {
    pub fn reset_search(&mut self) {
        self.nodes = 0;
        self.depth = 0;
        self.tt_hits = 0;
    }
}

/// Search state persisted across searches: the transposition table, the
/// random generator used for tie-breaking, and statistics.
pub struct SearchState {
    pub stats: SearchStats,
    pub(crate) tt: TranspositionTable,
    pub(crate) rng: StdRng,
}

impl SearchState {
    #[must_use]
    pub fn new(tt_bits: u32) -> Self {
        SearchState {
            stats: SearchStats::default(),
            tt: TranspositionTable::new(tt_bits),
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible tie-breaking and random play.
    #[must_use]
    pub fn with_seed(tt_bits: u32, seed: u64) -> Self {
        SearchState {
            rng: StdRng::seed_from_u64(seed),
            ..SearchState::new(tt_bits)
        }
    }

    #[must_use]
    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        self.tt.hashfull_per_mille()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(DEFAULT_TT_BITS)
    }
}

/// Configuration for a search operation.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub variant: Variant,
    /// Active evaluation terms, the variant's own by default
    pub eval: EvalConfig,
    /// Depth for the fixed-depth variants
    pub depth: u32,
    /// Deepest iteration for the deepening variants (None = game limit)
    pub max_depth: Option<u32>,
    /// Deadline for the deepening variants (None = unlimited)
    pub time_limit: Option<Duration>,
    /// Node limit (0 = unlimited)
    pub node_limit: u64,
}

impl SearchConfig {
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        SearchConfig {
            variant,
            eval: variant.eval_config(),
            depth: variant.default_depth(),
            max_depth: None,
            time_limit: None,
            node_limit: 0,
        }
    }

    /// Set the fixed search depth
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth.max(1);
        self
    }

    /// Cap iterative deepening
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth.max(1));
        self
    }

    /// Set the deadline
    #[must_use]
    pub fn with_time(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// Set node limit
    #[must_use]
    pub fn with_nodes(mut self, node_limit: u64) -> Self {
        self.node_limit = node_limit;
        self
    }

    /// Override the evaluation terms
    #[must_use]
    pub fn with_eval(mut self, eval: EvalConfig) -> Self {
        self.eval = eval;
        self
    }
}

/// Search `pos` with the configured variant.
///
/// # Errors
/// A [`MoveGenError`] when `pos` is terminal or has no legal move. Running
/// out of time is not an error: the best move found so far is returned.
pub fn search(
    pos: &Position,
    state: &mut SearchState,
    config: &SearchConfig,
) -> Result<SearchResult, MoveGenError> {
    state.stats.reset_search();
    let moves = pos.generate_moves()?;

    if config.variant == Variant::Random {
        let best_move = moves
            .choose(&mut state.rng)
            .copied()
            .ok_or(MoveGenError::EmptyMoveList {
                move_number: pos.move_number(),
            })?;
        state.stats.nodes = 1;
        state.stats.total_nodes += 1;
        return Ok(SearchResult {
            best_move,
            value: 0,
            outcome: Outcome::Ongoing,
            depth: 0,
            nodes: 1,
            elapsed: Duration::ZERO,
            timed_out: false,
        });
    }

    let mut ctx = SearchContext::new(state, config);
    let result = if config.variant.deepens() {
        ctx.iterative_deepening(pos, config.max_depth)
    } else {
        ctx.fixed_depth(pos, config.depth)
    };
    let nodes = ctx.clock.nodes();
    state.stats.nodes = nodes;
    state.stats.total_nodes += nodes;
    if let Ok(r) = &result {
        state.stats.depth = r.depth;
    }
    result
}

/// Find best move with the given configuration
pub fn find_best_move(
    pos: &Position,
    state: &mut SearchState,
    config: &SearchConfig,
) -> Result<Move, MoveGenError> {
    search(pos, state, config).map(|r| r.best_move)
}
