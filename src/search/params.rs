//! Search parameters.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable knobs for a [`Searcher`](super::Searcher).
///
/// The defaults reproduce the reference behavior: two fixed nominal depth
/// tiers picked on remaining clock time, a four-ply quiescence budget, and
/// an extension rule that charges forcing lines one ply and quiet lines two.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Nominal search depth when plenty of clock remains.
    pub deep_depth: i32,
    /// Nominal search depth under time pressure.
    pub shallow_depth: i32,
    /// Remaining-clock threshold separating the two depth tiers.
    pub deep_time_threshold: Duration,
    /// Extra ply budget granted to the quiescence phase at the horizon.
    pub quiescence_depth: i32,
    /// Ply cost charged for descending into a position that gives check.
    pub check_ply_cost: i32,
    /// Ply cost charged for descending into a quiet position.
    pub quiet_ply_cost: i32,
    /// Divisor applied at the root to the score of a move that re-enters a
    /// recently visited position.
    pub repetition_divisor: i32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            deep_depth: 8,
            shallow_depth: 6,
            deep_time_threshold: Duration::from_secs(25),
            quiescence_depth: 4,
            check_ply_cost: 1,
            quiet_ply_cost: 2,
            repetition_divisor: 2,
        }
    }
}
