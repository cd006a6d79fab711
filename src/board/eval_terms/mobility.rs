//! Mobility evaluation.
//!
//! Counts reachable cells with the same shadow masks move generation uses,
//! without enumerating moves.

use crate::board::attack_tables::destinations;
use crate::board::state::Position;
use crate::board::types::{Side, Slot, BOARD_MASK};

use super::tables::{ATTACK_WEIGHT, DEFEND_WEIGHT, QUIET_WEIGHT};

/// Raw mobility bit counts for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobilityCounts {
    /// Enemy pieces within capture reach
    pub attacks: u32,
    /// Empty cells reachable by a quiet move
    pub quiets: u32,
    /// Friendly pieces covered by a capture pattern
    pub defends: u32,
}

impl MobilityCounts {
    #[must_use]
    pub fn weighted(&self) -> i32 {
        self.attacks as i32 * ATTACK_WEIGHT
            + self.quiets as i32 * QUIET_WEIGHT
            + self.defends as i32 * DEFEND_WEIGHT
    }
}

impl Position {
    /// Mobility counts for `side`, whoever is to move. Occupancy comes
    /// from the slots rather than the stored aggregates.
    #[must_use]
    pub fn mobility_counts(&self, side: Side) -> MobilityCounts {
        let own = self.occupancy(side);
        let enemy = self.occupancy(side.opponent());
        let empty = !(own | enemy) & BOARD_MASK;

        let mut counts = MobilityCounts::default();
        for slot in side.slots().filter_map(Slot::new) {
            let Some((pattern, from, visible)) = self.reach(slot) else {
                continue;
            };
            let dests = destinations(pattern, from);
            counts.attacks += (dests.attack_mask & enemy & visible).count_ones();
            counts.quiets += (dests.quiet_mask & empty & visible).count_ones();
            counts.defends += (dests.attack_mask & own & visible).count_ones();
        }
        counts
    }

    #[must_use]
    pub fn mobility_score(&self, side: Side) -> i32 {
        self.mobility_counts(side).weighted()
    }
}
