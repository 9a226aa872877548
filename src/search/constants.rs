//! Score bounds shared across the search.

/// Window sentinel: strictly larger in magnitude than any reachable score,
/// including the evaluator's checkmate value. The root starts its running
/// alpha here so that any scored line replaces it.
pub const SCORE_INFINITY: i32 = 1_000_000;
