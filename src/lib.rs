pub mod board;
pub mod engine;
pub mod tt;
pub mod zobrist;

pub use board::{Cell, Move, Position, Side, Variant};
pub use engine::{Engine, EngineOptions, MoveExchange, TimeBudget};
pub use tt::TranspositionTable;
