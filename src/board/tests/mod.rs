//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Destinations, blocking and capture ordering
//! - `make_move.rs` - Move application, aggregates and promotion
//! - `eval.rs` - Evaluation symmetry and material balance
//! - `search.rs` - Search variants and their agreement
//! - `proptest.rs` - Property-based tests over random playouts

use crate::board::Position;

mod movegen;
mod proptest;

/// Parse a diagram, panicking on error.
pub(super) fn diagram(text: &str) -> Position {
    Position::from_diagram(text).unwrap_or_else(|e| panic!("bad diagram {text:?}: {e}"))
}

/// Notations of every legal move.
pub(super) fn notations(pos: &Position) -> Vec<String> {
    pos.generate_moves()
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Play a sequence of moves by notation.
pub(super) fn play(pos: &Position, moves: &[&str]) -> Position {
    moves.iter().fold(*pos, |p, n| {
        let mv = p.find_move(n).unwrap_or_else(|| panic!("{n} not legal in\n{p}"));
        p.apply(&mv)
    })
}
