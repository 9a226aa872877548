//! Search module: root move selection over alpha-beta and quiescence.
//!
//! A [`Searcher`] owns all search state for one agent instance — the two
//! score caches, the repetition window, parameters, and counters. State is
//! constructed once and lives as long as the agent; nothing here is a
//! process-wide global, so independent instances never share caches.

mod alphabeta;
mod constants;
mod params;
mod quiescence;

use std::time::Duration;

use log::{debug, trace};

use crate::cache::ScoreCache;
use crate::history::RepetitionWindow;
use crate::rules::Rules;

pub use constants::SCORE_INFINITY;
pub use params::SearchParams;

/// Counters for the most recent root search.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Full-width nodes visited.
    pub nodes: u64,
    /// Quiescence nodes visited.
    pub qnodes: u64,
    /// Child scores answered by the search cache.
    pub cache_hits: u64,
    /// Child scores answered by the quiescence cache.
    pub qcache_hits: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

/// Move-selection engine. One instance per agent.
pub struct Searcher {
    params: SearchParams,
    /// Memoized scores for full-width search nodes.
    cache: ScoreCache,
    /// Memoized scores for quiescence nodes.
    qcache: ScoreCache,
    /// Identities of positions actually reached by committed moves.
    recent: RepetitionWindow,
    stats: SearchStats,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(SearchParams::default())
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        Searcher {
            params,
            cache: ScoreCache::new(),
            qcache: ScoreCache::new(),
            recent: RepetitionWindow::new(),
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn search_cache(&self) -> &ScoreCache {
        &self.cache
    }

    #[must_use]
    pub fn quiescence_cache(&self) -> &ScoreCache {
        &self.qcache
    }

    #[must_use]
    pub fn recent_positions(&self) -> &RepetitionWindow {
        &self.recent
    }

    /// Note a position the agent has reached in the game. [`select_move`]
    /// records the chosen move's destination itself; hosts only need this
    /// to feed in positions reached by the opponent's replies.
    ///
    /// [`select_move`]: Searcher::select_move
    pub fn record_position(&mut self, key: u64) {
        self.recent.record(key);
    }

    /// Pick a move under the two-tier time policy: search to the deep
    /// depth while `remaining` clock exceeds the configured threshold,
    /// otherwise to the shallow depth. Returns `None` only when the
    /// position has no legal move.
    pub fn choose_move<R: Rules>(&mut self, pos: &mut R, remaining: Duration) -> Option<R::Move> {
        let depth = if remaining > self.params.deep_time_threshold {
            self.params.deep_depth
        } else {
            self.params.shallow_depth
        };
        debug!("remaining clock {remaining:?}: searching to depth {depth}");
        self.select_move(pos, depth).map(|(mv, _)| mv)
    }

    /// Search every root move to `depth` and return the best one with its
    /// score. Returns `None` only when the position has no legal move; if
    /// no candidate ever beats the sentinel (every line is lost), the
    /// first enumerated legal move is returned rather than nothing.
    ///
    /// Root scores of moves that land on a recently visited position are
    /// halved toward zero, so the agent prefers making progress over
    /// shuffling. The chosen move's resulting identity is recorded in the
    /// repetition window before returning.
    pub fn select_move<R: Rules>(&mut self, pos: &mut R, depth: i32) -> Option<(R::Move, i32)> {
        self.stats.reset();

        let moves = pos.legal_moves(false);
        let mut best: Option<(usize, R::Move)> = None;
        let mut best_score = -SCORE_INFINITY;
        let mut alpha = -SCORE_INFINITY;

        for (index, mv) in moves.iter().enumerate() {
            pos.apply(mv);
            let cost = self.ply_cost(pos);
            let landing = pos.identity();
            let mut score = -self.search(pos, -SCORE_INFINITY, -alpha, depth - cost);
            if self.recent.contains(landing) {
                score /= self.params.repetition_divisor;
            }
            pos.undo(mv);

            trace!("root move {index}: score {score}");
            if score > best_score {
                best_score = score;
                best = Some((index, *mv));
            }
            if score > alpha {
                alpha = score;
            }
        }

        let (index, chosen) = match best {
            Some(found) => found,
            None => (0, *moves.first()?),
        };

        pos.apply(&chosen);
        self.recent.record(pos.identity());
        pos.undo(&chosen);

        debug!(
            "depth {depth}: root move {index} of {} scores {best_score} \
             ({} nodes, {} qnodes, {}+{} cache hits)",
            moves.len(),
            self.stats.nodes,
            self.stats.qnodes,
            self.stats.cache_hits,
            self.stats.qcache_hits,
        );

        Some((chosen, best_score))
    }

    /// Ply budget charged for descending into the position just reached:
    /// forcing lines (side to move in check) cost one ply, quiet lines two.
    fn ply_cost<R: Rules>(&self, pos: &R) -> i32 {
        if pos.in_check() {
            self.params.check_ply_cost
        } else {
            self.params.quiet_ply_cost
        }
    }
}
