//! Board manager: owns the live position, applies moves, classifies results.

use crate::board::fen::{parse_fen, to_fen, STARTING_FEN};
use crate::board::movegen::MoveGenerator;
use crate::board::state::{Board, BoardState};
use crate::board::types::{Color, HashedMove, MoveList, Piece, Square};
use crate::board::error::FenError;

/// The outcome of an attempted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Illegal,
    Valid,
    Check,
    Checkmate,
    Stalemate,
    Draw,
}

/// A move as supplied by a caller, before it is resolved against the
/// pseudo-legal move list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promoted_to: Option<Piece>,
}

/// Owns one game's position and history. Mutated only through [`Self::try_move`]
/// and the reset methods. Cheap to clone the underlying board/state for
/// speculative legality checks.
#[derive(Clone)]
pub struct BoardManager<'gen> {
    generator: &'gen MoveGenerator,
    board: Board,
    state: BoardState,
    history: Vec<String>,
}

impl<'gen> BoardManager<'gen> {
    #[must_use]
    pub fn new(generator: &'gen MoveGenerator) -> Self {
        let board = Board::starting_position();
        let state = BoardState::starting();
        let history = vec![to_fen(&board, &state)];
        BoardManager {
            generator,
            board,
            state,
            history,
        }
    }

    pub fn from_fen(generator: &'gen MoveGenerator, fen: &str) -> Result<Self, FenError> {
        let (board, state) = parse_fen(fen)?;
        let history = vec![to_fen(&board, &state)];
        Ok(BoardManager {
            generator,
            board,
            state,
            history,
        })
    }

    pub fn reset(&mut self) {
        self.board = Board::starting_position();
        self.state = BoardState::starting();
        self.history = vec![STARTING_FEN.to_string()];
    }

    pub fn reset_from_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let (board, state) = parse_fen(fen)?;
        self.board = board;
        self.state = state;
        self.history = vec![to_fen(&self.board, &self.state)];
        Ok(())
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    #[must_use]
    pub fn half_move_clock(&self) -> u8 {
        self.state.half_move_clock()
    }

    #[must_use]
    pub fn full_move_count(&self) -> u16 {
        self.state.full_move_count()
    }

    #[must_use]
    pub fn castling_rights(&self) -> crate::board::types::CastlingRights {
        self.state.castling_rights()
    }

    #[must_use]
    pub fn piece_count(&self, color: Color, piece: Piece) -> u32 {
        self.board.piece_count(color, piece)
    }

    #[must_use]
    pub fn to_array(&self) -> [Option<(Color, Piece)>; 64] {
        self.board.to_array()
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        to_fen(&self.board, &self.state)
    }

    #[must_use]
    pub fn history_at(&self, index: usize) -> Option<String> {
        self.history.get(index).cloned()
    }

    #[must_use]
    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub(crate) fn state(&self) -> &BoardState {
        &self.state
    }

    /// Every square this side-to-move piece could move to, per the
    /// pseudo-legal generator. Duplicates (one per promotion piece) are
    /// intentionally left for the caller to de-duplicate.
    #[must_use]
    pub fn pseudo_legal_targets(&self, from: Square) -> Vec<Square> {
        self.generator
            .generate_moves(&self.board, &self.state)
            .iter()
            .filter(|m| m.source() == from)
            .map(HashedMove::target)
            .collect()
    }

    fn find_move(&self, from: Square, to: Square, promoted_to: Option<Piece>) -> Option<HashedMove> {
        self.generator
            .generate_moves(&self.board, &self.state)
            .iter()
            .find(|m| {
                m.source() == from
                    && m.target() == to
                    && m.promoted().map(|(_, p)| p) == promoted_to
            })
            .copied()
    }

    /// Attempt a user-supplied move. On success the board and history are
    /// committed; on `Illegal` nothing changes.
    pub fn try_move(&mut self, user_move: Move) -> (MoveResult, HashedMove) {
        let resolved = self.find_move(user_move.from, user_move.to, user_move.promoted_to);
        let Some(candidate) = resolved else {
            #[cfg(feature = "logging")]
            log::trace!("try_move({:?}) -> Illegal (no matching pseudo-legal move)", user_move);
            return (MoveResult::Illegal, HashedMove::NULL);
        };

        let mut speculative_board = self.board;
        let mut speculative_state = self.state;
        apply_move(&mut speculative_board, &mut speculative_state, candidate);

        let mover = candidate.piece().0;
        let king_square = speculative_board.king_square(mover);
        if self
            .generator
            .is_square_attacked(&speculative_board, king_square, mover.opponent())
        {
            #[cfg(feature = "logging")]
            log::trace!("try_move({:?}) -> Illegal (leaves own king in check)", user_move);
            return (MoveResult::Illegal, HashedMove::NULL);
        }

        self.board = speculative_board;
        self.state = speculative_state;
        self.history.push(to_fen(&self.board, &self.state));

        let result = self.classify();
        #[cfg(feature = "logging")]
        log::trace!("try_move({:?}) -> {:?} ({:?})", user_move, result, candidate);
        (result, candidate)
    }

    fn classify(&self) -> MoveResult {
        let opponent = self.state.side_to_move();
        let legal_replies = self.count_legal_moves(opponent);
        let opponent_in_check = self.is_in_check(opponent);

        if legal_replies == 0 {
            return if opponent_in_check {
                MoveResult::Checkmate
            } else {
                MoveResult::Stalemate
            };
        }
        if self.state.half_move_clock() >= 100 {
            return MoveResult::Draw;
        }
        if opponent_in_check {
            return MoveResult::Check;
        }
        MoveResult::Valid
    }

    #[must_use]
    pub(crate) fn is_in_check(&self, color: Color) -> bool {
        let king_square = self.board.king_square(color);
        self.generator
            .is_square_attacked(&self.board, king_square, color.opponent())
    }

    fn count_legal_moves(&self, color: Color) -> usize {
        self.legal_moves_for(color).len()
    }

    fn legal_moves_for(&self, color: Color) -> MoveList {
        debug_assert_eq!(self.state.side_to_move(), color);
        legal_moves(self.generator, &self.board, &self.state)
    }

    /// All legal moves for the side to move (used by [`crate::board::san`]).
    #[must_use]
    pub(crate) fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.state.side_to_move())
    }

    /// All legal moves for the side to move, converted to the caller-facing
    /// [`Move`] representation. Intended for driving a search or a perft walk
    /// from outside the crate.
    #[must_use]
    pub fn available_moves(&self) -> Vec<Move> {
        self.legal_moves()
            .iter()
            .map(|m| Move {
                from: m.source(),
                to: m.target(),
                promoted_to: m.promoted().map(|(_, p)| p),
            })
            .collect()
    }

    #[must_use]
    pub(crate) fn generator(&self) -> &MoveGenerator {
        self.generator
    }
}

/// Every legal move (pseudo-legal moves with king-left-in-check filtered
/// out) for the side to move in `state`.
pub(crate) fn legal_moves(generator: &MoveGenerator, board: &Board, state: &BoardState) -> MoveList {
    let side = state.side_to_move();
    let pseudo_legal = generator.generate_moves(board, state);
    let mut legal = MoveList::new();
    for &m in pseudo_legal.iter() {
        let mut b = *board;
        let mut s = *state;
        apply_move(&mut b, &mut s, m);
        let king_square = b.king_square(side);
        if !generator.is_square_attacked(&b, king_square, side.opponent()) {
            legal.push(m);
        }
    }
    legal
}

/// Apply a pseudo-legal move to `board`/`state` in place. No legality check
/// is performed here; the caller is responsible for rejecting moves that
/// leave the mover's king in check.
pub(crate) fn apply_move(board: &mut Board, state: &mut BoardState, m: HashedMove) {
    let (mover_color, piece) = m.piece();
    let enemy = mover_color.opponent();
    let src = m.source();
    let dst = m.target();
    let src_bit = 1u64 << src.index();
    let dst_bit = 1u64 << dst.index();

    *board.piece_bb_mut(mover_color, piece) &= !src_bit;
    *board.piece_bb_mut(mover_color, piece) |= dst_bit;

    let mut reset_clock = false;

    if m.is_capture() && !m.is_en_passant() {
        for enemy_piece in [
            Piece::Pawn,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
        ] {
            *board.piece_bb_mut(enemy, enemy_piece) &= !dst_bit;
        }
        reset_clock = true;
    }

    if m.is_en_passant() {
        let captured_sq = match mover_color {
            Color::White => Square::from_index(dst.index() - 8),
            Color::Black => Square::from_index(dst.index() + 8),
        };
        *board.piece_bb_mut(enemy, Piece::Pawn) &= !(1u64 << captured_sq.index());
        reset_clock = true;
    }

    if m.is_double_push() {
        let mid = (src.index() + dst.index()) / 2;
        state.en_passant_target = Some(Square::from_index(mid));
    } else {
        state.en_passant_target = None;
    }

    if let Some((_, promoted)) = m.promoted() {
        *board.piece_bb_mut(mover_color, Piece::Pawn) &= !dst_bit;
        *board.piece_bb_mut(mover_color, promoted) |= dst_bit;
    }

    if m.is_castling() {
        let home_rank = src.rank();
        if dst.file() == 6 {
            let rook_from = Square::new(home_rank, 7);
            let rook_to = Square::new(home_rank, 5);
            *board.piece_bb_mut(mover_color, Piece::Rook) &= !(1u64 << rook_from.index());
            *board.piece_bb_mut(mover_color, Piece::Rook) |= 1u64 << rook_to.index();
        } else {
            let rook_from = Square::new(home_rank, 0);
            let rook_to = Square::new(home_rank, 3);
            *board.piece_bb_mut(mover_color, Piece::Rook) &= !(1u64 << rook_from.index());
            *board.piece_bb_mut(mover_color, Piece::Rook) |= 1u64 << rook_to.index();
        }
        strip_castling_rights(state, mover_color);
    }

    if piece == Piece::King {
        strip_castling_rights(state, mover_color);
    }
    if piece == Piece::Rook {
        strip_rook_right(state, mover_color, src);
    }
    if m.is_capture() {
        strip_rook_right(state, enemy, dst);
    }

    if piece == Piece::Pawn {
        reset_clock = true;
    }

    if reset_clock {
        state.half_move_clock = 0;
    } else {
        state.half_move_clock = state.half_move_clock.saturating_add(1);
    }

    if state.side_to_move == Color::Black {
        state.full_move_count = state.full_move_count.saturating_add(1);
    }
    state.side_to_move = mover_color.opponent();

    board.recompute_occupancy();
}

fn strip_castling_rights(state: &mut BoardState, color: Color) {
    state.castling_rights.remove(color, true);
    state.castling_rights.remove(color, false);
}

fn strip_rook_right(state: &mut BoardState, color: Color, square: Square) {
    let home_rank = match color {
        Color::White => 0,
        Color::Black => 7,
    };
    if square.rank() != home_rank {
        return;
    }
    match square.file() {
        0 => state.castling_rights.remove(color, false),
        7 => state.castling_rights.remove(color, true),
        _ => {}
    }
}
