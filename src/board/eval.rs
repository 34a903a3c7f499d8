//! Flat material evaluation, sufficient to drive a depth-limited search.
//!
//! No piece-square tables, no tapered middlegame/endgame blend: that belongs
//! to a search driver built on top of this crate, not to the core itself.

use crate::board::state::{Board, BoardState};
use crate::board::types::{Color, Piece};

const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 300;
const BISHOP_VALUE: i32 = 325;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;
const KING_VALUE: i32 = 10_000;

#[must_use]
const fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}

/// Stateless material scorer.
pub struct Evaluator;

impl Evaluator {
    /// Sum of piece values for `color`'s pieces on `board`.
    #[must_use]
    pub fn material(board: &Board, color: Color) -> i32 {
        [
            Piece::Pawn,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
            Piece::King,
        ]
        .into_iter()
        .map(|piece| board.piece_count(color, piece) as i32 * piece_value(piece))
        .sum()
    }

    /// Material score from the side to move's perspective.
    #[must_use]
    pub fn material_diff(board: &Board, state: &BoardState) -> i32 {
        let side = state.side_to_move();
        Evaluator::material(board, side) - Evaluator::material(board, side.opponent())
    }
}
