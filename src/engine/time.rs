//! Per-move time budget.
//!
//! The schedule peaks around moves 6 to 20 and thins out toward the move
//! limit.

use std::time::Duration;

use crate::board::MOVE_LIMIT;

/// Budget table: (last move number of the band, milliseconds).
const SCHEDULE_MS: [(u32, u64); 7] = [
    (5, 5_000),
    (10, 15_000),
    (15, 10_000),
    (20, 9_000),
    (25, 4_000),
    (30, 5_000),
    (35, 6_000),
];

/// Budget after the last band.
const LATE_GAME_MS: u64 = 4_000;

/// How long one move may think.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeBudget {
    /// Move-number schedule, capped by the coordinator's remaining clock
    #[default]
    Schedule,
    /// The same budget for every move
    Fixed(Duration),
}

impl TimeBudget {
    /// Create a fixed budget from milliseconds.
    #[must_use]
    pub fn fixed_ms(ms: u64) -> Self {
        TimeBudget::Fixed(Duration::from_millis(ms))
    }

    /// Budget for the move at `move_number`.
    ///
    /// With a remaining clock the schedule is capped at an even share of it
    /// over our own moves still to play.
    #[must_use]
    pub fn budget(self, move_number: u32, time_left_ms: Option<u64>) -> Duration {
        match self {
            TimeBudget::Fixed(duration) => duration,
            TimeBudget::Schedule => {
                let planned = scheduled_ms(move_number);
                let capped = time_left_ms.map_or(planned, |left| {
                    planned.min(left / own_moves_left(move_number))
                });
                Duration::from_millis(capped)
            }
        }
    }
}

fn scheduled_ms(move_number: u32) -> u64 {
    SCHEDULE_MS
        .iter()
        .find(|&&(last, _)| move_number <= last)
        .map_or(LATE_GAME_MS, |&(_, ms)| ms)
}

/// Moves still to be played by the side to move, at least 1.
fn own_moves_left(move_number: u32) -> u64 {
    let plies_left = (MOVE_LIMIT + 1).saturating_sub(move_number) + 1;
    u64::from((plies_left / 2).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_follows_move_bands() {
        let budget = TimeBudget::Schedule;
        assert_eq!(budget.budget(1, None), Duration::from_millis(5_000));
        assert_eq!(budget.budget(5, None), Duration::from_millis(5_000));
        assert_eq!(budget.budget(6, None), Duration::from_millis(15_000));
        assert_eq!(budget.budget(12, None), Duration::from_millis(10_000));
        assert_eq!(budget.budget(20, None), Duration::from_millis(9_000));
        assert_eq!(budget.budget(25, None), Duration::from_millis(4_000));
        assert_eq!(budget.budget(30, None), Duration::from_millis(5_000));
        assert_eq!(budget.budget(33, None), Duration::from_millis(6_000));
        assert_eq!(budget.budget(40, None), Duration::from_millis(4_000));
    }

    #[test]
    fn remaining_clock_caps_schedule() {
        let budget = TimeBudget::Schedule;
        // Move 1: 41 plies left, 20 of them ours
        assert_eq!(budget.budget(1, Some(60_000)), Duration::from_millis(3_000));
        // Plenty of time left: the schedule wins
        assert_eq!(
            budget.budget(1, Some(10_000_000)),
            Duration::from_millis(5_000)
        );
    }

    #[test]
    fn last_move_gets_the_whole_clock() {
        assert_eq!(own_moves_left(40), 1);
        assert_eq!(own_moves_left(41), 1);
        assert_eq!(
            TimeBudget::Schedule.budget(40, Some(1_500)),
            Duration::from_millis(1_500)
        );
    }

    #[test]
    fn fixed_budget_ignores_move_number_and_clock() {
        let budget = TimeBudget::fixed_ms(250);
        assert_eq!(budget.budget(1, None), Duration::from_millis(250));
        assert_eq!(budget.budget(39, Some(10)), Duration::from_millis(250));
    }
}
