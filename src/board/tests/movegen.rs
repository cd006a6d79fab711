//! Move generation tests.

use super::{diagram, notations};
use crate::board::{MoveGenError, Position};

#[test]
fn initial_position_has_seven_moves() {
    let mut moves = notations(&Position::initial());
    moves.sort();
    assert_eq!(
        moves,
        vec!["a2-a3", "b1-a3", "b1-c3", "b2-b3", "c2-c3", "d2-d3", "e2-e3"]
    );
}

#[test]
fn black_replies_mirror_white() {
    let pos = super::play(&Position::initial(), &["c2-c3"]);
    let mut moves = notations(&pos);
    moves.sort();
    assert_eq!(
        moves,
        vec!["a5-a4", "b5-b4", "c5-c4", "d5-d4", "d6-c4", "d6-e4", "e5-e4"]
    );
}

#[test]
fn captures_precede_quiet_moves() {
    let pos = diagram("1 W\nkqbnr\np.ppp\n.....\n.p...\nPPPPP\nRNBQK");
    let moves = pos.generate_moves().unwrap();
    let attacks = moves.iter().take_while(|m| m.is_attack()).count();
    assert_eq!(attacks, 2);
    assert!(moves[attacks..].iter().all(|m| !m.is_attack()));

    let names = notations(&pos);
    assert!(names.contains(&"a2-b3".to_string()));
    assert!(names.contains(&"c2-b3".to_string()));
    // b2 is blocked head-on and pawns never capture straight ahead
    assert!(!names.iter().any(|n| n.starts_with("b2-")));
}

#[test]
fn sliders_stop_at_first_blocker() {
    let pos = diagram("1 W\nkqbnr\nppppp\n.....\n.....\n.PPPP\nRNBQK");
    let moves = pos.generate_moves().unwrap();
    let rook: Vec<(String, bool)> = moves
        .iter()
        .filter(|m| m.from().name() == "a1")
        .map(|m| (m.to_string(), m.is_attack()))
        .collect();
    assert!(rook.contains(&("a1-a5".to_string(), true)));
    assert!(rook.contains(&("a1-a4".to_string(), false)));
    assert!(rook.contains(&("a1-a2".to_string(), false)));
    assert!(!rook.iter().any(|(n, _)| n == "a1-a6"));
    assert!(!rook.iter().any(|(n, _)| n == "a1-c1"));
}

#[test]
fn bishop_steps_sideways_but_only_captures_diagonally() {
    let pos = diagram("1 W\nkqbnr\npp.pp\n..p..\n..B..\n.....\n....K");
    let moves = pos.generate_moves().unwrap();
    let bishop: Vec<(String, bool)> = moves
        .iter()
        .filter(|m| m.from().name() == "c3")
        .map(|m| (m.to_string(), m.is_attack()))
        .collect();

    for quiet in ["c3-b3", "c3-d3", "c3-c2", "c3-b4", "c3-d4", "c3-d2", "c3-a1"] {
        assert!(bishop.contains(&(quiet.to_string(), false)), "missing {quiet}");
    }
    assert!(bishop.contains(&("c3-a5".to_string(), true)));
    assert!(bishop.contains(&("c3-e5".to_string(), true)));
    // enemy pawn straight ahead cannot be taken by the sideways step
    assert!(!bishop.iter().any(|(n, _)| n == "c3-c4"));
    // own king on the diagonal
    assert!(!bishop.iter().any(|(n, _)| n == "c3-e1"));
}

#[test]
fn knights_jump_over_pieces() {
    let pos = diagram("1 W\nkqbnr\nppppp\n.....\n.....\nPPPPP\nRNBQK");
    let names = notations(&pos);
    assert!(names.contains(&"b1-c3".to_string()));
    assert!(names.contains(&"b1-a3".to_string()));
    assert!(!names.contains(&"b1-d2".to_string()));
}

#[test]
fn promoted_pawn_moves_like_a_queen() {
    // the second white queen in reading order is a promoted pawn
    let pos = diagram("5 W\nk....\n.....\n.....\n.....\n..Q..\nQ...K");
    let moves = pos.generate_moves().unwrap();
    let promoted: Vec<String> = moves
        .iter()
        .filter(|m| m.mover().is_pawn())
        .map(ToString::to_string)
        .collect();
    assert!(promoted.contains(&"a1-a6".to_string()));
    assert!(promoted.contains(&"a1-d4".to_string()));
    assert!(promoted.contains(&"a1-d1".to_string()));
    assert!(moves.iter().any(|m| m.to_string() == "a1-a6" && m.is_attack()));
}

#[test]
fn terminal_positions_are_rejected() {
    let pos = diagram("3 W\n.....\n.....\n.....\n.....\n.....\nR...K");
    assert_eq!(
        pos.generate_moves(),
        Err(MoveGenError::TerminalPosition { move_number: 3 })
    );
    assert!(pos.find_move("a1-a2").is_none());
}

#[test]
fn lookup_after_the_move_limit_finds_nothing() {
    let live = diagram("40 W\nk....\n.....\n.....\n.....\n.....\nR...K");
    assert!(live.find_move("a1-a2").is_some());

    let over = Position::from_slots(*live.slots(), 41, live.side_to_move());
    assert!(over.is_terminal());
    assert!(over.find_move("a1-a2").is_none());
}

#[test]
fn find_move_matches_notation() {
    let pos = Position::initial();
    let mv = pos.find_move("b1-c3").unwrap();
    assert_eq!(mv.from().name(), "b1");
    assert_eq!(mv.to().name(), "c3");
    assert!(pos.find_move("b1-d2").is_none());
    assert!(pos.find_move("nonsense").is_none());
}
