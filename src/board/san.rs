//! Standard Algebraic Notation (SAN) rendering.
//!
//! Rendering only — there is no SAN parser in scope, just `move_to_san`.

use crate::board::manager::{apply_move, BoardManager};
use crate::board::movegen::MoveGenerator;
use crate::board::state::{Board, BoardState};
use crate::board::types::{Color, HashedMove, Piece};

impl<'gen> BoardManager<'gen> {
    /// Render `m` (a move already produced by this manager, typically the
    /// second element of a `try_move` result) in Standard Algebraic Notation.
    #[must_use]
    pub fn move_to_san(&self, m: &HashedMove) -> String {
        let mut san = String::new();

        if m.is_castling() {
            san.push_str(if m.target().file() == 6 { "O-O" } else { "O-O-O" });
        } else {
            let (color, piece) = m.piece();

            if piece != Piece::Pawn {
                san.push(piece.to_char().to_ascii_uppercase());
                let (needs_file, needs_rank) = self.disambiguation(*m, color, piece);
                if needs_file {
                    san.push((b'a' + m.source().file() as u8) as char);
                }
                if needs_rank {
                    san.push((b'1' + m.source().rank() as u8) as char);
                }
            } else if m.is_capture() {
                san.push((b'a' + m.source().file() as u8) as char);
            }

            if m.is_capture() {
                san.push('x');
            }
            san.push_str(&m.target().to_string());

            if let Some((_, promoted)) = m.promoted() {
                san.push('=');
                san.push(promoted.to_char().to_ascii_uppercase());
            }
        }

        let mut board = *self.board();
        let mut state = *self.state();
        apply_move(&mut board, &mut state, *m);
        let opponent = state.side_to_move();

        if is_checkmate(self.generator(), &board, &state) {
            san.push('#');
        } else if is_in_check(self.generator(), &board, opponent) {
            san.push('+');
        }

        san
    }

    /// `(needs_file, needs_rank)` disambiguation for a non-pawn move, based
    /// on other pseudo-legal moves of the same piece kind to the same
    /// destination.
    fn disambiguation(&self, m: HashedMove, color: Color, piece: Piece) -> (bool, bool) {
        let others: Vec<HashedMove> = self
            .generator()
            .generate_moves(self.board(), self.state())
            .iter()
            .copied()
            .filter(|other| {
                other.target() == m.target()
                    && other.source() != m.source()
                    && other.piece() == (color, piece)
            })
            .collect();

        if others.is_empty() {
            return (false, false);
        }

        let same_file = others.iter().any(|o| o.source().file() == m.source().file());
        let same_rank = others.iter().any(|o| o.source().rank() == m.source().rank());

        match (same_file, same_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }
}

fn is_in_check(generator: &MoveGenerator, board: &Board, color: Color) -> bool {
    let king_square = board.king_square(color);
    generator.is_square_attacked(board, king_square, color.opponent())
}

fn is_checkmate(generator: &MoveGenerator, board: &Board, state: &BoardState) -> bool {
    let side = state.side_to_move();
    if !is_in_check(generator, board, side) {
        return false;
    }
    let pseudo_legal = generator.generate_moves(board, state);
    for &m in pseudo_legal.iter() {
        let mut b = *board;
        let mut s = *state;
        apply_move(&mut b, &mut s, m);
        if !is_in_check(generator, &b, side) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::manager::Move;

    fn mv(from: &str, to: &str) -> Move {
        Move {
            from: from.parse().unwrap(),
            to: to.parse().unwrap(),
            promoted_to: None,
        }
    }

    #[test]
    fn pawn_push_renders_without_piece_letter() {
        let generator = MoveGenerator::new();
        let mut manager = BoardManager::new(&generator);
        let (_, hashed) = manager.try_move(mv("e2", "e4"));
        assert_eq!(manager.move_to_san(&hashed), "e4");
    }

    #[test]
    fn knight_move_uses_piece_letter() {
        let generator = MoveGenerator::new();
        let mut manager = BoardManager::new(&generator);
        let (_, hashed) = manager.try_move(mv("g1", "f3"));
        assert_eq!(manager.move_to_san(&hashed), "Nf3");
    }

    #[test]
    fn castling_renders_as_o_o() {
        let generator = MoveGenerator::new();
        let mut manager =
            BoardManager::from_fen(&generator, "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let (_, hashed) = manager.try_move(mv("e1", "g1"));
        assert_eq!(manager.move_to_san(&hashed), "O-O");
    }

    #[test]
    fn capture_includes_file_for_pawns() {
        let generator = MoveGenerator::new();
        let mut manager = BoardManager::from_fen(
            &generator,
            "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2",
        )
        .unwrap();
        let (_, hashed) = manager.try_move(mv("e4", "d5"));
        assert_eq!(manager.move_to_san(&hashed), "exd5");
    }

    #[test]
    fn checkmating_move_gets_hash_suffix() {
        let generator = MoveGenerator::new();
        let mut manager = BoardManager::new(&generator);
        for (from, to) in [
            ("e2", "e4"),
            ("e7", "e5"),
            ("f1", "c4"),
            ("b8", "c6"),
            ("d1", "h5"),
            ("g8", "f6"),
        ] {
            manager.try_move(mv(from, to));
        }
        let (_, hashed) = manager.try_move(mv("h5", "f7"));
        assert_eq!(manager.move_to_san(&hashed), "Qxf7#");
    }

    #[test]
    fn disambiguates_rooks_sharing_a_destination() {
        let generator = MoveGenerator::new();
        let manager =
            BoardManager::from_fen(&generator, "3k4/8/8/8/R6R/8/8/4K3 w - - 0 1").unwrap();
        let moves = manager.generator().generate_moves(manager.board(), manager.state());
        let from_a4 = moves
            .iter()
            .find(|m| m.source() == "a4".parse().unwrap() && m.target() == "d4".parse().unwrap())
            .copied()
            .unwrap();
        assert_eq!(manager.move_to_san(&from_a4), "Rad4");
    }
}
