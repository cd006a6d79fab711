//! Evaluation constants and tables.
//!
//! Piece-indexed arrays follow `PieceKind::index` order:
//! king, queen, bishop, knight, rook, pawn.

// ============================================================================
// MATERIAL
// ============================================================================

/// Material per kind in the opening (moves 0..10)
pub const MATERIAL_OPENING: [i32; 6] = [20000, 900, 330, 300, 500, 100];
/// Material per kind in the middle game (moves 10..30)
pub const MATERIAL_MIDDLE: [i32; 6] = [20000, 900, 330, 300, 500, 110];
/// Material per kind in the endgame (moves 30 and later)
pub const MATERIAL_END: [i32; 6] = [20000, 950, 320, 280, 550, 140];

// ============================================================================
// MOBILITY
// ============================================================================

/// Per reachable enemy piece
pub const ATTACK_WEIGHT: i32 = 8;
/// Per reachable empty cell
pub const QUIET_WEIGHT: i32 = 3;
/// Per friendly piece covered
pub const DEFEND_WEIGHT: i32 = 4;

// ============================================================================
// DEVELOPMENT
// ============================================================================

/// Ceiling of the early king/queen move penalty
pub const DEVELOPMENT_PENALTY: i32 = 500;

// ============================================================================
// PIECE-CELL TABLES
// ============================================================================
//
// Written from White's side as the board is drawn: first row is rank 6,
// last row is rank 1, files a..e left to right. Black reads them mirrored
// by rank.

#[rustfmt::skip]
pub const PST_MG: [[i32; 30]; 6] = [
    // King
    [
        -40, -40, -50, -40, -40,
        -30, -40, -40, -40, -30,
        -20, -30, -30, -30, -20,
        -10, -20, -20, -20, -10,
         10,   0, -10,   0,  10,
         20,  10,   0,  10,  20,
    ],
    // Queen
    [
        -20, -10,  -5, -10, -20,
        -10,   0,   5,   0, -10,
         -5,   5,  10,   5,  -5,
         -5,   5,  10,   5,  -5,
        -10,   0,   5,   0, -10,
        -20, -10,  -5, -10, -20,
    ],
    // Bishop
    [
        -20, -10, -10, -10, -20,
        -10,   5,   5,   5, -10,
        -10,  10,  15,  10, -10,
        -10,  10,  15,  10, -10,
        -10,   5,   5,   5, -10,
        -20, -10, -10, -10, -20,
    ],
    // Knight
    [
        -50, -30, -30, -30, -50,
        -30,   0,  10,   0, -30,
        -20,  10,  20,  10, -20,
        -20,  10,  20,  10, -20,
        -30,   0,   5,   0, -30,
        -50, -30, -20, -30, -50,
    ],
    // Rook
    [
          0,   0,   0,   0,   0,
         10,  20,  20,  20,  10,
         -5,   0,   0,   0,  -5,
         -5,   0,   0,   0,  -5,
         -5,   0,   0,   0,  -5,
          0,   0,   5,   0,   0,
    ],
    // Pawn
    [
          0,   0,   0,   0,   0,
         50,  50,  50,  50,  50,
         10,  20,  30,  20,  10,
          5,  10,  20,  10,   5,
          0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,
    ],
];

#[rustfmt::skip]
pub const PST_EG: [[i32; 30]; 6] = [
    // King
    [
        -50, -30, -20, -30, -50,
        -30,   0,  10,   0, -30,
        -20,  10,  20,  10, -20,
        -20,  10,  20,  10, -20,
        -30,   0,  10,   0, -30,
        -50, -30, -20, -30, -50,
    ],
    // Queen
    [
        -20, -10, -10, -10, -20,
        -10,   5,  10,   5, -10,
        -10,  10,  20,  10, -10,
        -10,  10,  20,  10, -10,
        -10,   5,  10,   5, -10,
        -20, -10, -10, -10, -20,
    ],
    // Bishop
    [
        -15, -10,  -5, -10, -15,
        -10,   0,   5,   0, -10,
         -5,   5,  10,   5,  -5,
         -5,   5,  10,   5,  -5,
        -10,   0,   5,   0, -10,
        -15, -10,  -5, -10, -15,
    ],
    // Knight
    [
        -40, -20, -20, -20, -40,
        -20,   0,   5,   0, -20,
        -20,   5,  15,   5, -20,
        -20,   5,  15,   5, -20,
        -20,   0,   5,   0, -20,
        -40, -20, -20, -20, -40,
    ],
    // Rook
    [
         10,  10,  10,  10,  10,
         15,  15,  15,  15,  15,
          0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,
         -5,   0,   0,   0,  -5,
    ],
    // Pawn
    [
          0,   0,   0,   0,   0,
         90,  90,  90,  90,  90,
         50,  50,  50,  50,  50,
         20,  20,  20,  20,  20,
          0,   0,   0,   0,   0,
          0,   0,   0,   0,   0,
    ],
];
