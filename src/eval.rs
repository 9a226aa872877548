//! Heuristic static evaluation.
//!
//! Scores a position from the side-to-move perspective (positive favors the
//! side to move) out of three ingredients: weighted mobility for both sides,
//! raw material from the twelve piece counts, and terminal/check status.
//! Pure function of the position snapshot — no recursion, no caching.

use crate::rules::{Rules, BLACK_COUNTS_OFFSET};

/// Material values ordered pawn, knight, bishop, rook, queen, king,
/// matching the [`Rules::piece_counts`] piece order.
pub const PIECE_VALUES: [i32; 6] = [100, 200, 230, 500, 900, 5000];

/// Weight per legal move in the mobility term.
pub const MOBILITY_WEIGHT: i32 = 5;

/// Additional weight per legal capturing move.
pub const CAPTURE_WEIGHT: i32 = 10;

/// Cost of being checkmated. Dwarfs any material and mobility sum.
pub const CHECKMATE_VALUE: i32 = 100_000;

/// Cost of having the own king in check.
pub const CHECK_PENALTY: i32 = 50;

/// Bonus for drawn positions: a draw beats a losing line without
/// outweighing a material edge.
pub const DRAW_BONUS: i32 = 150;

/// Weighted move and capture counts for the side currently to move.
fn mobility<R: Rules>(pos: &R) -> i32 {
    let moves = pos.legal_moves(false).len() as i32;
    let captures = pos.legal_moves(true).len() as i32;
    MOBILITY_WEIGHT * moves + CAPTURE_WEIGHT * captures
}

/// Evaluate `pos` from the side-to-move perspective.
///
/// The opponent's mobility is measured through a reversible turn skip. When
/// the rules engine refuses the skip (e.g. the side to move is in check),
/// only the side to move's mobility is scored.
pub fn evaluate<R: Rules>(pos: &mut R) -> i32 {
    let mut score = mobility(pos);
    if pos.try_skip_turn() {
        score -= mobility(pos);
        pos.undo_skip_turn();
    }

    // Material: white minus black, then flipped to the side actually to
    // move so the result is always "mine minus theirs".
    let counts = pos.piece_counts();
    let mut material = 0;
    for (piece, &value) in PIECE_VALUES.iter().enumerate() {
        material += value * counts[piece] as i32;
        material -= value * counts[piece + BLACK_COUNTS_OFFSET] as i32;
    }
    score += if pos.white_to_move() {
        material
    } else {
        -material
    };

    if pos.is_checkmate() {
        score -= CHECKMATE_VALUE;
    }
    if pos.in_check() {
        score -= CHECK_PENALTY;
    }
    if pos.is_draw() {
        score += DRAW_BONUS;
    }

    score
}
