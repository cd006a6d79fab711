//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{EvalConfig, Position, Side, PROMOTED_FLAG};

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Positions visited by a random playout from the opening, stopping early
/// once the game is over.
fn playout(seed: u64, num_moves: usize) -> Vec<Position> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position::initial();
    let mut visited = vec![pos];
    for _ in 0..num_moves {
        if pos.is_terminal() {
            break;
        }
        let Ok(moves) = pos.generate_moves() else {
            break;
        };
        let mv = moves[rng.gen_range(0..moves.len())];
        pos = pos.apply(&mv);
        visited.push(pos);
    }
    visited
}

proptest! {
    /// Property: aggregates always match the slots after any move sequence
    #[test]
    fn prop_aggregates_follow_slots(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for pos in playout(seed, num_moves) {
            prop_assert!(pos.aggregates_consistent(), "{}", pos);
            prop_assert_eq!(pos.occupied() & pos.empty(), 0);
            prop_assert_eq!(pos.opponents() & !pos.occupancy(pos.side_to_move().opponent()), 0);
        }
    }

    /// Property: generated moves start on own pieces and land on empty cells
    /// or opponent pieces, never on own pieces
    #[test]
    fn prop_moves_target_empty_or_enemy(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for pos in playout(seed, num_moves) {
            let Ok(moves) = pos.generate_moves() else {
                continue;
            };
            let own = pos.occupancy(pos.side_to_move());
            for mv in moves {
                prop_assert_ne!(own & mv.from().mask(), 0);
                prop_assert_eq!(own & mv.destination_mask(), 0);
                if mv.is_attack() {
                    prop_assert_ne!(pos.opponents() & mv.destination_mask(), 0);
                } else {
                    prop_assert_ne!(pos.empty() & mv.destination_mask(), 0);
                }
            }
        }
    }

    /// Property: evaluating a position for the other side negates the score
    #[test]
    fn prop_eval_antisymmetric(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for pos in playout(seed, num_moves) {
            let flipped = pos.with_side_to_move(pos.side_to_move().opponent());
            for config in [EvalConfig::MATERIAL, EvalConfig::POSITIONAL, EvalConfig::FULL] {
                prop_assert_eq!(pos.evaluate(&config), -flipped.evaluate(&config));
            }
        }
    }

    /// Property: the fingerprint depends only on the physical position and
    /// the side to move, not on the path that reached it
    #[test]
    fn prop_fingerprint_is_path_independent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for pos in playout(seed, num_moves) {
            let rebuilt = Position::from_slots(*pos.slots(), pos.move_number(), pos.side_to_move());
            prop_assert_eq!(pos.fingerprint(), rebuilt.fingerprint());
            let other = pos.with_side_to_move(pos.side_to_move().opponent());
            prop_assert_ne!(pos.fingerprint(), other.fingerprint());
        }
    }

    /// Property: relocating a single piece to an empty cell changes the
    /// fingerprint
    #[test]
    fn prop_fingerprint_tracks_piece_location(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        pick in 0..20usize,
        target in 0..30u32
    ) {
        let pos = *playout(seed, num_moves).last().unwrap();
        let mut slots = *pos.slots();
        let Some(slot) = (0..20).map(|i| (pick + i) % 20).find(|&i| slots[i] != 0) else {
            return Ok(());
        };
        let empty = pos.empty();
        let cell = (0..30).map(|i| (target + i) % 30).find(|&i| empty & (1 << i) != 0).unwrap();
        slots[slot] = (slots[slot] & PROMOTED_FLAG) | (1 << cell);

        let moved = Position::from_slots(slots, pos.move_number(), pos.side_to_move());
        prop_assert!(moved.aggregates_consistent());
        prop_assert_ne!(pos.fingerprint(), moved.fingerprint(), "{}", moved);
    }

    /// Property: ordering only reorders, keeping captures ahead of quiet moves
    #[test]
    fn prop_ordering_is_a_permutation(seed in seed_strategy(), num_moves in 0..20usize) {
        let pos = *playout(seed, num_moves).last().unwrap();
        let raw = pos.generate_moves();
        prop_assume!(raw.is_ok());
        let raw = raw.unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let ordered = pos.ordered_moves(&EvalConfig::FULL, &mut rng).unwrap();
        prop_assert_eq!(raw.len(), ordered.len());
        for mv in &raw {
            prop_assert!(ordered.iter().any(|o| o.from() == mv.from() && o.to() == mv.to()));
        }
        let captures = ordered.iter().take_while(|m| m.is_attack()).count();
        prop_assert!(ordered[captures..].iter().all(|m| !m.is_attack()));
        for class in [&ordered[..captures], &ordered[captures..]] {
            prop_assert!(class.windows(2).all(|w| w[0].value() >= w[1].value()));
        }
    }

    /// Property: a shallower result never replaces a deeper one in its slot
    #[test]
    fn prop_tt_prefers_depth(
        hash in any::<u64>(),
        first_depth in 0..20u32,
        second_depth in 0..20u32,
        value in -30000..30000i32
    ) {
        use crate::tt::{BoundType, TranspositionTable};

        let mut tt = TranspositionTable::new(4);
        prop_assert!(tt.store(hash, first_depth, value, BoundType::Exact));
        let replaced = tt.store(hash, second_depth, -value, BoundType::LowerBound);
        prop_assert_eq!(replaced, second_depth >= first_depth);

        let entry = tt.probe(hash).unwrap();
        prop_assert_eq!(entry.depth(), first_depth.max(second_depth));
        prop_assert_eq!(tt.len(), 1);
    }
}

#[test]
fn white_moves_first_in_every_playout() {
    let visited = playout(1, 4);
    assert_eq!(visited[0].side_to_move(), Side::White);
    assert_eq!(visited[1].side_to_move(), Side::Black);
}
