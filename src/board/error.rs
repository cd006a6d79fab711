//! Error types for board, generation and search operations.

use thiserror::Error;

/// Rejected request lines and board diagrams.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// Fewer tokens than a position needs
    #[error("position needs at least {expected} integers, found {found}")]
    TooShort { found: usize, expected: usize },
    /// Side to move token is neither 1 nor 2
    #[error("invalid side to move {found}, expected 1 or 2")]
    InvalidSide { found: u32 },
    /// Slot value is not empty and not exactly one board cell
    #[error("slot {slot} holds {value}, which is not a single board cell")]
    InvalidSlot { slot: usize, value: u32 },
    /// Two slots claim the same cell
    #[error("slots {first} and {second} occupy the same cell")]
    SharedCell { first: usize, second: usize },
    /// Unknown cell name
    #[error("invalid cell notation '{notation}'")]
    InvalidCell { notation: String },
    /// Diagram header is not `<move number> <W|B>`
    #[error("invalid diagram header '{found}'")]
    InvalidHeader { found: String },
    /// Diagram has the wrong number of rows or columns
    #[error("diagram row {row} is malformed")]
    InvalidRow { row: usize },
    /// Unknown piece character in a diagram
    #[error("invalid piece character '{piece}' in diagram")]
    InvalidPiece { piece: char },
    /// More pieces of one kind than the slot layout can hold
    #[error("too many '{piece}' pieces in diagram")]
    TooManyPieces { piece: char },
}

/// Invariant violations of move generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveGenError {
    /// Generation requested on a finished game
    #[error("move generation requested on a terminal position (move {move_number})")]
    TerminalPosition { move_number: u32 },
    /// A non-terminal position produced no legal move
    #[error("no legal moves in non-terminal position (move {move_number})")]
    EmptyMoveList { move_number: u32 },
}

/// Reasons a search stops before producing a score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Deadline or node limit reached; unwinds to the deepening driver
    #[error("search deadline reached")]
    Timeout,
    /// Fatal generation failure
    #[error(transparent)]
    MoveGen(#[from] MoveGenError),
}

/// Handshake token naming no known search variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search variant '{found}'")]
pub struct UnknownVariant {
    pub found: String,
}
