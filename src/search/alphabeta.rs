//! Full-width negamax search with fail-hard beta cutoffs.

use crate::rules::Rules;

use super::Searcher;

impl Searcher {
    /// Score `pos` from the side-to-move perspective within the fail-hard
    /// window `[alpha, beta]`, searching `depth_left` plies before handing
    /// over to quiescence.
    ///
    /// Child scores come from the search cache when the resulting identity
    /// has been scored before, otherwise from recursion with negated and
    /// swapped bounds; fresh scores are cached from the child's own
    /// perspective. A child whose negated score reaches `beta` cuts the
    /// node off at the bound.
    ///
    /// A position with no legal moves returns `alpha` unchanged: mate and
    /// stalemate are priced by the evaluator before a depth-exhausted
    /// leaf, not re-detected here.
    pub fn search<R: Rules>(
        &mut self,
        pos: &mut R,
        mut alpha: i32,
        beta: i32,
        depth_left: i32,
    ) -> i32 {
        if depth_left <= 0 {
            let budget = self.params.quiescence_depth;
            return self.quiesce(pos, alpha, beta, budget);
        }
        self.stats.nodes += 1;

        for mv in pos.legal_moves(false) {
            pos.apply(&mv);
            let cost = self.ply_cost(pos);
            let landing = pos.identity();
            let score = match self.cache.probe(landing) {
                Some(cached) => {
                    self.stats.cache_hits += 1;
                    -cached
                }
                None => {
                    let child = self.search(pos, -beta, -alpha, depth_left - cost);
                    self.cache.store(landing, child);
                    -child
                }
            };
            pos.undo(&mv);

            if score >= beta {
                // Fail hard: report the bound, not the true score.
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}
