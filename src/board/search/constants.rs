//! Search constants.

use crate::board::types::MOVE_LIMIT;

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Window bound; far beyond any evaluation, and safe to negate.
pub const INFINITY: i32 = 1_000_000;

/// Move number plus search depth may not exceed this.
pub const GAME_PLY_LIMIT: u32 = MOVE_LIMIT + 1;

/// Nodes between two reads of the wall clock.
pub const CLOCK_SAMPLE_INTERVAL: u64 = 1024;

/// Cached values at least this large mean a king has been taken.
pub const KING_CAPTURE_THRESHOLD: i32 = 10_000;

// ============================================================================
// FIXED-DEPTH DEFAULTS
// ============================================================================

pub const NEGAMAX_DEPTH: u32 = 4;

pub const ALPHA_BETA_DEPTH: u32 = 5;
