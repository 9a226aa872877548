//! Contract consumed from the external rules engine.
//!
//! The search never implements chess rules itself. Everything it needs from
//! a position — move enumeration, make/unmake, status queries, piece counts,
//! a transposition-stable fingerprint — comes through this trait. The
//! position is mutated in place: every [`apply`](Rules::apply) on a search
//! path must be matched by exactly one [`undo`](Rules::undo) before control
//! returns to that path's caller, including on cutoff paths.

/// Index of the first black entry in [`Rules::piece_counts`].
pub const BLACK_COUNTS_OFFSET: usize = 6;

/// A chess rules engine driving one mutable position.
///
/// Implementations must report *full* legality (not pseudo-legality) from
/// [`legal_moves`](Rules::legal_moves).
pub trait Rules {
    /// Opaque move handle. Produced by the rules engine, never mutated here.
    type Move: Copy + PartialEq;

    /// All legal moves in the current position. With `captures_only` set,
    /// only captures and promotions.
    fn legal_moves(&self, captures_only: bool) -> Vec<Self::Move>;

    /// Play `mv` on the position, in place.
    fn apply(&mut self, mv: &Self::Move);

    /// Take back `mv`, restoring the position exactly.
    fn undo(&mut self, mv: &Self::Move);

    /// Is the side to move in check?
    fn in_check(&self) -> bool;

    /// Is the side to move checkmated?
    fn is_checkmate(&self) -> bool;

    /// Is the position drawn?
    fn is_draw(&self) -> bool;

    /// Is white the side to move?
    fn white_to_move(&self) -> bool;

    /// Piece counts ordered white pawn, knight, bishop, rook, queen, king,
    /// then the same six for black.
    fn piece_counts(&self) -> [u32; 12];

    /// 64-bit fingerprint of the position, stable under transposition:
    /// equal placement, side to move, and castling/en-passant rights give
    /// an equal identity. Collisions are assumed negligible.
    fn identity(&self) -> u64;

    /// Give the opponent the move without playing a piece. Returns `false`
    /// (leaving the position unchanged) when skipping is unavailable, e.g.
    /// while in check. A `true` return must be reverted with
    /// [`undo_skip_turn`](Rules::undo_skip_turn).
    fn try_skip_turn(&mut self) -> bool;

    /// Revert a successful [`try_skip_turn`](Rules::try_skip_turn).
    fn undo_skip_turn(&mut self);
}
