//! Engine controller: one variant, one search state, one reply per request.

use log::{info, warn};
use thiserror::Error;

use super::time::TimeBudget;
use crate::board::{
    search, MoveGenError, Request, SearchConfig, SearchResult, SearchState, StateError, Variant,
};

/// Reply sent when no move can be produced.
pub const FAILURE_TOKEN: &str = "LOSS!";

/// Table size for the variants that never probe it.
const UNUSED_TT_BITS: u32 = 4;

/// Why a request produced no move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("malformed request: {0}")]
    Request(#[from] StateError),
    #[error("search failed: {0}")]
    Search(#[from] MoveGenError),
}

/// Variant-independent engine options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// log2 of the transposition table size
    pub tt_bits: u32,
    /// Depth for the fixed-depth variants (None = the variant's own)
    pub depth: Option<u32>,
    /// Deepest iteration for the deepening variants
    pub max_depth: Option<u32>,
    /// Node limit per move (0 = unlimited)
    pub node_limit: u64,
    pub time_budget: TimeBudget,
    /// Seed for tie-breaking and random play (None = from entropy)
    pub seed: Option<u64>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            tt_bits: crate::tt::DEFAULT_TT_BITS,
            depth: None,
            max_depth: None,
            node_limit: 0,
            time_budget: TimeBudget::Schedule,
            seed: None,
        }
    }
}

/// Engine controller owning the search state for one session.
pub struct Engine {
    variant: Variant,
    options: EngineOptions,
    state: SearchState,
    moves_played: u32,
}

impl Engine {
    /// Create an engine for `variant`. Only the transposition variant gets
    /// a full-sized table.
    #[must_use]
    pub fn new(variant: Variant, options: EngineOptions) -> Self {
        let tt_bits = if variant.uses_tt() {
            options.tt_bits
        } else {
            UNUSED_TT_BITS
        };
        let state = match options.seed {
            Some(seed) => SearchState::with_seed(tt_bits, seed),
            None => SearchState::new(tt_bits),
        };
        Engine {
            variant,
            options,
            state,
            moves_played: 0,
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Number of requests answered with a move.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Search configuration for a request.
    #[must_use]
    pub fn config_for(&self, request: &Request) -> SearchConfig {
        let mut config = SearchConfig::new(self.variant).with_nodes(self.options.node_limit);
        if let Some(depth) = self.options.depth {
            config = config.with_depth(depth);
        }
        if let Some(max_depth) = self.options.max_depth {
            config = config.with_max_depth(max_depth);
        }
        if self.variant.deepens() {
            let budget = self
                .options
                .time_budget
                .budget(request.position.move_number(), request.time_left_ms);
            config = config.with_time(budget);
        }
        config
    }

    /// Search one decoded request.
    ///
    /// # Errors
    /// [`EngineError::Search`] when the position has no legal move.
    pub fn think(&mut self, request: &Request) -> Result<SearchResult, EngineError> {
        let config = self.config_for(request);
        let result = search(&request.position, &mut self.state, &config)?;
        self.moves_played += 1;
        info!(
            "move {} {}: {} value {} {:?} depth {} nodes {} time {}ms hashfull {}",
            request.position.move_number(),
            self.variant,
            result.best_move,
            result.value,
            result.outcome,
            result.depth,
            result.nodes,
            result.elapsed.as_millis(),
            self.state.hashfull_per_mille()
        );
        Ok(result)
    }

    /// Decode and search one position line, returning the move notation.
    ///
    /// # Errors
    /// [`EngineError::Request`] for a malformed line, [`EngineError::Search`]
    /// when the position has no legal move.
    pub fn choose_move(&mut self, line: &str) -> Result<String, EngineError> {
        let request = Request::parse(line)?;
        let result = self.think(&request)?;
        Ok(result.best_move.to_string())
    }

    /// Reply line for one position line: a move, or [`FAILURE_TOKEN`].
    pub fn respond(&mut self, line: &str) -> String {
        match self.choose_move(line) {
            Ok(notation) => notation,
            Err(e) => {
                warn!("no move for request '{}': {e}", line.trim());
                FAILURE_TOKEN.to_string()
            }
        }
    }
}
