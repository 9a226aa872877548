//! Score memoization keyed by position identity.
//!
//! One cache per search phase (main search and quiescence). Entries map a
//! 64-bit position fingerprint to the score computed for that position,
//! from that position's own side-to-move perspective.
//!
//! The table stores no depth, bound type, or age: the first score written
//! for a key answers every later probe, whatever depth either search ran
//! at. That is an approximation inherited from the original search, kept
//! deliberately — see `DESIGN.md`.

use std::collections::HashMap;

/// Position-identity → score table with first-write-wins inserts.
#[derive(Clone, Debug, Default)]
pub struct ScoreCache {
    entries: HashMap<u64, i32>,
}

impl ScoreCache {
    #[must_use]
    pub fn new() -> Self {
        ScoreCache {
            entries: HashMap::new(),
        }
    }

    /// Look up the score stored for `key`.
    #[must_use]
    pub fn probe(&self, key: u64) -> Option<i32> {
        self.entries.get(&key).copied()
    }

    /// Store `score` under `key`. A no-op when `key` is already present:
    /// the first write wins.
    pub fn store(&mut self, key: u64, score: i32) {
        self.entries.entry(key).or_insert(score);
    }

    /// Number of cached positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
