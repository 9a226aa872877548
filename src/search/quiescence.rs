//! Quiescence search: captures and promotions only.
//!
//! Stabilizes the evaluator against the horizon effect by refusing to
//! stand a node on a static score mid-exchange. Quiet moves are never
//! explored here, however good they might be.

use crate::eval::evaluate;
use crate::rules::Rules;

use super::Searcher;

impl Searcher {
    /// Tactical search within the fail-hard window `[alpha, beta]`.
    ///
    /// The static evaluation is the stand-pat baseline: the side to move
    /// may always decline to keep capturing. With `depth_left` exhausted
    /// the baseline is returned as-is — a hard ceiling regardless of how
    /// much tactical activity remains on the board.
    pub fn quiesce<R: Rules>(
        &mut self,
        pos: &mut R,
        mut alpha: i32,
        beta: i32,
        depth_left: i32,
    ) -> i32 {
        self.stats.qnodes += 1;

        let stand_pat = evaluate(pos);
        if depth_left <= 0 {
            return stand_pat;
        }
        if stand_pat >= beta {
            // Captures only improve on standing pat, so a static fail-high
            // needs no move loop.
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        for mv in pos.legal_moves(true) {
            pos.apply(&mv);
            let cost = self.ply_cost(pos);
            let landing = pos.identity();
            let score = match self.qcache.probe(landing) {
                Some(cached) => {
                    self.stats.qcache_hits += 1;
                    -cached
                }
                None => {
                    let child = self.quiesce(pos, -beta, -alpha, depth_left - cost);
                    self.qcache.store(landing, child);
                    -child
                }
            };
            pos.undo(&mv);

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}
