//! Sliding window of recently visited position identities.
//!
//! Tracks positions the agent actually reached with its committed moves,
//! not speculative search nodes. The root driver consults it to discourage
//! shuffling back into a recent position.

use arrayvec::ArrayVec;

/// Number of committed positions remembered.
pub const WINDOW_CAPACITY: usize = 20;

/// Fixed-capacity FIFO of position identities. Starts empty; once full,
/// each insertion evicts the oldest entry. Never cleared.
#[derive(Clone, Debug, Default)]
pub struct RepetitionWindow {
    keys: ArrayVec<u64, WINDOW_CAPACITY>,
}

impl RepetitionWindow {
    #[must_use]
    pub fn new() -> Self {
        RepetitionWindow {
            keys: ArrayVec::new(),
        }
    }

    /// Record a position the agent just reached.
    pub fn record(&mut self, key: u64) {
        if self.keys.is_full() {
            self.keys.remove(0);
        }
        self.keys.push(key);
    }

    /// Was `key` reached within the last [`WINDOW_CAPACITY`] moves?
    #[must_use]
    pub fn contains(&self, key: u64) -> bool {
        self.keys.contains(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let window = RepetitionWindow::new();
        assert!(window.is_empty());
        assert!(!window.contains(1));
    }

    #[test]
    fn records_and_finds_keys() {
        let mut window = RepetitionWindow::new();
        window.record(10);
        window.record(20);

        assert!(window.contains(10));
        assert!(window.contains(20));
        assert!(!window.contains(30));
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut window = RepetitionWindow::new();
        for key in 0..WINDOW_CAPACITY as u64 {
            window.record(key);
        }
        assert_eq!(window.len(), WINDOW_CAPACITY);
        assert!(window.contains(0));

        window.record(999);

        assert_eq!(window.len(), WINDOW_CAPACITY);
        assert!(!window.contains(0), "oldest key should be evicted");
        assert!(window.contains(1));
        assert!(window.contains(999));
    }

    #[test]
    fn duplicate_keys_occupy_separate_slots() {
        let mut window = RepetitionWindow::new();
        window.record(7);
        window.record(7);

        assert_eq!(window.len(), 2);
        assert!(window.contains(7));
    }
}
