use super::eval_terms::tables::DEVELOPMENT_PENALTY;
use super::eval_terms::Phase;
use super::state::Position;
use super::types::{Move, PieceKind, Side};

/// Which evaluation terms are active.
///
/// Each search variant carries its own configuration; see
/// [`Variant::eval_config`](crate::board::Variant::eval_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvalConfig {
    pub material: bool,
    pub positional: bool,
    pub mobility: bool,
    /// Early king/queen move penalty, applied to move ordering only
    pub development: bool,
}

impl EvalConfig {
    pub const NONE: EvalConfig = EvalConfig {
        material: false,
        positional: false,
        mobility: false,
        development: false,
    };

    pub const MATERIAL: EvalConfig = EvalConfig {
        material: true,
        ..Self::NONE
    };

    pub const POSITIONAL: EvalConfig = EvalConfig {
        positional: true,
        ..Self::MATERIAL
    };

    pub const MOBILITY: EvalConfig = EvalConfig {
        mobility: true,
        ..Self::POSITIONAL
    };

    pub const FULL: EvalConfig = EvalConfig {
        development: true,
        ..Self::MOBILITY
    };

    /// Ordering penalty for moving the king or queen early.
    ///
    /// `child` is the position after `mv`. The penalty shrinks
    /// quadratically with the move number and is zero once it would turn
    /// negative. Promoted pawns are not penalized.
    #[must_use]
    pub fn development_penalty(&self, mv: &Move, child: &Position) -> i32 {
        if !self.development {
            return 0;
        }
        let n = child.move_number() as i32;
        let penalty = match mv.mover().kind() {
            PieceKind::King => DEVELOPMENT_PENALTY - 2 * n * n,
            PieceKind::Queen => DEVELOPMENT_PENALTY - n * n / 2,
            _ => 0,
        };
        penalty.max(0)
    }
}

impl Position {
    /// Static score from the side to move's point of view.
    ///
    /// Computed as `side_score(mover) - side_score(opponent)`, so evaluating
    /// the same physical position for the other side gives exactly the
    /// negated score.
    #[must_use]
    pub fn evaluate(&self, config: &EvalConfig) -> i32 {
        let me = self.side_to_move;
        self.side_score(me, config) - self.side_score(me.opponent(), config)
    }

    /// Score of one side's pieces alone; independent of who is to move.
    #[must_use]
    pub fn side_score(&self, side: Side, config: &EvalConfig) -> i32 {
        let phase = Phase::of(self.move_number);
        let mut score = 0;
        if config.material {
            score += self.material_score(side, phase);
        }
        if config.positional {
            score += self.positional_score(side, phase);
        }
        if config.mobility {
            score += self.mobility_score(side);
        }
        score
    }
}
