//! Rules-engine adapter over the `chess` crate, shared by the integration
//! tests and benches. The engine under test only ever sees the `Rules`
//! contract; this adapter supplies real chess behind it.

#![allow(dead_code)]

use std::str::FromStr;

use chess::{Board, BoardStatus, ChessMove, Color, MoveGen, Piece, EMPTY};

use skirmish::Rules;

/// Piece order matching the `Rules::piece_counts` contract.
const PIECES: [Piece; 6] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
    Piece::King,
];

/// Copy-make position: `apply` pushes the successor board, `undo` pops it.
pub struct ChessRules {
    stack: Vec<Board>,
}

impl ChessRules {
    /// Standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_fen(fen: &str) -> Self {
        Self::from_board(Board::from_str(fen).expect("valid FEN"))
    }

    fn from_board(board: Board) -> Self {
        ChessRules { stack: vec![board] }
    }

    pub fn board(&self) -> &Board {
        self.stack.last().expect("position stack never empty")
    }

    /// Capture if the destination is occupied, or a pawn leaves its file
    /// onto an empty square (en passant).
    fn is_capture(&self, mv: ChessMove) -> bool {
        let board = self.board();
        if board.piece_on(mv.get_dest()).is_some() {
            return true;
        }
        board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            && mv.get_source().get_file() != mv.get_dest().get_file()
    }
}

impl Rules for ChessRules {
    type Move = ChessMove;

    fn legal_moves(&self, captures_only: bool) -> Vec<ChessMove> {
        let moves = MoveGen::new_legal(self.board());
        if captures_only {
            moves
                .filter(|mv| self.is_capture(*mv) || mv.get_promotion().is_some())
                .collect()
        } else {
            moves.collect()
        }
    }

    fn apply(&mut self, mv: &ChessMove) {
        let next = self.board().make_move_new(*mv);
        self.stack.push(next);
    }

    fn undo(&mut self, _mv: &ChessMove) {
        self.stack.pop();
        assert!(!self.stack.is_empty(), "undo below the root position");
    }

    fn in_check(&self) -> bool {
        *self.board().checkers() != EMPTY
    }

    fn is_checkmate(&self) -> bool {
        self.board().status() == BoardStatus::Checkmate
    }

    fn is_draw(&self) -> bool {
        self.board().status() == BoardStatus::Stalemate
    }

    fn white_to_move(&self) -> bool {
        self.board().side_to_move() == Color::White
    }

    fn piece_counts(&self) -> [u32; 12] {
        let board = self.board();
        let mut counts = [0u32; 12];
        for (i, &piece) in PIECES.iter().enumerate() {
            counts[i] = (*board.pieces(piece) & *board.color_combined(Color::White)).popcnt();
            counts[i + 6] = (*board.pieces(piece) & *board.color_combined(Color::Black)).popcnt();
        }
        counts
    }

    fn identity(&self) -> u64 {
        self.board().get_hash()
    }

    fn try_skip_turn(&mut self) -> bool {
        match self.board().null_move() {
            Some(next) => {
                self.stack.push(next);
                true
            }
            None => false,
        }
    }

    fn undo_skip_turn(&mut self) {
        self.stack.pop();
        assert!(!self.stack.is_empty(), "undo below the root position");
    }
}
