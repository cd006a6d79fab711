//! Position codecs: the coordinator's integer line and its board diagram.

use std::fmt;
use std::str::FromStr;

use super::error::StateError;
use super::state::Position;
use super::types::{
    Cell, PieceKind, Side, Slot, BOARD_MASK, FILES, PROMOTED_FLAG, RANKS,
};

/// Tokens in a position line: 20 slots, move number, side, two aggregates.
pub const POSITION_TOKENS: usize = 24;

/// Read whitespace-separated unsigned integers, stopping at the first token
/// that is not one.
#[must_use]
pub fn parse_tokens(line: &str) -> Vec<u32> {
    line.split_whitespace()
        .map_while(|t| t.parse::<u32>().ok())
        .collect()
}

/// One decoded position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub position: Position,
    /// Coordinator's remaining clock, when it sends one
    pub time_left_ms: Option<u64>,
}

impl Request {
    /// Decode a position line.
    ///
    /// The opponent and empty aggregates are taken as received.
    pub fn parse(line: &str) -> Result<Request, StateError> {
        let tokens = parse_tokens(line);
        if tokens.len() < POSITION_TOKENS {
            return Err(StateError::TooShort {
                found: tokens.len(),
                expected: POSITION_TOKENS,
            });
        }

        let side = Side::from_code(tokens[21]).ok_or(StateError::InvalidSide { found: tokens[21] })?;

        let mut slots = [0u32; Slot::COUNT];
        for (i, &value) in tokens[..Slot::COUNT].iter().enumerate() {
            if value != 0 && Cell::from_mask(value & !PROMOTED_FLAG).is_none() {
                return Err(StateError::InvalidSlot { slot: i, value });
            }
            slots[i] = value;
        }
        for first in 0..Slot::COUNT {
            for second in first + 1..Slot::COUNT {
                if slots[first] & slots[second] & BOARD_MASK != 0 {
                    return Err(StateError::SharedCell { first, second });
                }
            }
        }

        Ok(Request {
            position: Position::from_parts(slots, tokens[20], side, tokens[22], tokens[23]),
            time_left_ms: tokens.get(POSITION_TOKENS).map(|&t| u64::from(t)),
        })
    }
}

impl FromStr for Request {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Request::parse(s)
    }
}

impl Position {
    /// Encode as the 24-token position line.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut out: Vec<String> = self.slots.iter().map(u32::to_string).collect();
        out.push(self.move_number.to_string());
        out.push(self.side_to_move.code().to_string());
        out.push(self.opponents.to_string());
        out.push(self.empty.to_string());
        out.join(" ")
    }

    /// Parse a board diagram:
    ///
    /// ```text
    /// 1 W
    /// kqbnr
    /// ppppp
    /// .....
    /// .....
    /// PPPPP
    /// RNBQK
    /// ```
    ///
    /// Rows run from rank 6 down to rank 1. Pieces fill their slots in
    /// reading order; queens beyond the first become promoted pawns, placed
    /// ahead of the plain pawns.
    pub fn from_diagram(text: &str) -> Result<Self, StateError> {
        let mut parts = text.split_whitespace();
        let number = parts.next().unwrap_or_default();
        let side_char = parts.next().unwrap_or_default();
        let header = || StateError::InvalidHeader {
            found: format!("{number} {side_char}"),
        };
        let move_number: u32 = number.parse().map_err(|_| header())?;
        let side = match side_char {
            "W" | "w" => Side::White,
            "B" | "b" => Side::Black,
            _ => return Err(header()),
        };

        // found[side][kind] = masks in reading order
        let mut found: [[Vec<u32>; 6]; 2] = Default::default();
        let mut rows = 0;
        for (i, row) in parts.enumerate() {
            if i >= RANKS || row.chars().count() != FILES {
                return Err(StateError::InvalidRow { row: i });
            }
            for (col, c) in row.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(StateError::InvalidPiece { piece: c })?;
                let owner = if c.is_ascii_uppercase() {
                    Side::White
                } else {
                    Side::Black
                };
                let cell = Cell::new(RANKS - 1 - i, col).ok_or(StateError::InvalidRow { row: i })?;
                found[owner.index()][kind.index()].push(cell.mask());
            }
            rows += 1;
        }
        if rows != RANKS {
            return Err(StateError::InvalidRow { row: rows });
        }

        let mut slots = [0u32; Slot::COUNT];
        for owner in Side::BOTH {
            let lists = &mut found[owner.index()];
            let queens = &mut lists[PieceKind::Queen.index()];
            let promoted: Vec<u32> = if queens.len() > 1 {
                queens.split_off(1).into_iter().map(|m| m | PROMOTED_FLAG).collect()
            } else {
                Vec::new()
            };
            let pawn_list = &mut lists[PieceKind::Pawn.index()];
            let mut pawns = promoted;
            pawns.append(pawn_list);
            *pawn_list = pawns;

            for kind in PieceKind::ALL {
                let targets: Vec<Slot> = owner
                    .slots()
                    .filter_map(Slot::new)
                    .filter(|s| s.kind() == kind)
                    .collect();
                let masks = &lists[kind.index()];
                if masks.len() > targets.len() {
                    return Err(StateError::TooManyPieces {
                        piece: kind.to_char(owner),
                    });
                }
                for (slot, &mask) in targets.iter().zip(masks) {
                    slots[slot.index()] = mask;
                }
            }
        }

        Ok(Position::from_slots(slots, move_number, side))
    }

    /// Render as a board diagram; inverse of [`Position::from_diagram`] up to
    /// pawn slot order.
    #[must_use]
    pub fn to_diagram(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.move_number, self.side_to_move)?;
        for row in (0..RANKS).rev() {
            for col in 0..FILES {
                let c = Cell::new(row, col)
                    .and_then(|cell| self.piece_at(cell))
                    .map_or('.', |slot| {
                        slot.effective_kind(self.slot_value(slot)).to_char(slot.side())
                    });
                write!(f, "{c}")?;
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
