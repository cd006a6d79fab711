//! Transposition table for caching search results.
//!
//! A power-of-two vector of entries indexed by the low bits of the position
//! fingerprint. Every entry keeps the full fingerprint, and a probe only
//! reports a hit when it matches, so index collisions never leak a result
//! from a different position.

use crate::board::Position;

/// Default table size as a power of two.
pub const DEFAULT_TT_BITS: u32 = 21;

/// Largest accepted table size as a power of two.
pub const MAX_TT_BITS: u32 = 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BoundType {
    #[default]
    Exact, // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

/// One cached search result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TTEntry {
    hash: u64,
    value: i32,
    depth: u8,
    bound_type: BoundType,
    valid: bool,
}

impl TTEntry {
    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn depth(&self) -> u32 {
        u32::from(self.depth)
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }
}

pub struct TranspositionTable {
    entries: Vec<TTEntry>,
    mask: usize,
    filled: usize,
}

impl TranspositionTable {
    /// Create a table with `2^bits` entries; `bits` is clamped to
    /// `1..=MAX_TT_BITS`.
    #[must_use]
    pub fn new(bits: u32) -> Self {
        let size = 1usize << bits.clamp(1, MAX_TT_BITS);
        TranspositionTable {
            entries: vec![TTEntry::default(); size],
            mask: size - 1,
            filled: 0,
        }
    }

    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Probe the table for an entry matching the given hash.
    /// Returns None if no valid entry is found.
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<TTEntry> {
        let entry = self.entries[self.index(hash)];
        (entry.valid && entry.hash == hash).then_some(entry)
    }

    #[must_use]
    pub fn probe_position(&self, pos: &Position) -> Option<TTEntry> {
        self.probe(pos.fingerprint())
    }

    /// Store an entry in the table.
    ///
    /// Depth-preferred replacement: an empty slot or an occupant searched
    /// no deeper than `depth` is overwritten; a deeper occupant is kept.
    /// Returns whether the entry was written.
    pub fn store(&mut self, hash: u64, depth: u32, value: i32, bound_type: BoundType) -> bool {
        let depth = depth.min(u32::from(u8::MAX)) as u8;
        let idx = self.index(hash);
        let slot = &mut self.entries[idx];
        if slot.valid && depth < slot.depth {
            return false;
        }
        if !slot.valid {
            self.filled += 1;
        }
        *slot = TTEntry {
            hash,
            value,
            depth,
            bound_type,
            valid: true,
        };
        true
    }

    /// Number of valid entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filled
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Returns hash table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        ((self.filled as u64 * 1000) / self.entries.len() as u64) as u32
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        TranspositionTable::new(DEFAULT_TT_BITS)
    }
}
