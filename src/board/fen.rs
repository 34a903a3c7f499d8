//! Forsyth-Edwards Notation encode/decode.

use crate::board::error::{FenError, FenField};
use crate::board::state::{Board, BoardState};
use crate::board::types::{CastlingRights, Color, Piece, Square};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Encode `board`/`state` as a FEN record.
#[must_use]
pub fn to_fen(board: &Board, state: &BoardState) -> String {
    let mut ranks = Vec::with_capacity(8);
    for rank in (0..8).rev() {
        let mut row = String::new();
        let mut empty_run = 0u32;
        for file in 0..8 {
            match board.piece_at(Square::new(rank, file)) {
                Some((color, piece)) => {
                    if empty_run > 0 {
                        row.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    row.push(piece.to_fen_char(color));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            row.push_str(&empty_run.to_string());
        }
        ranks.push(row);
    }
    let placement = ranks.join("/");

    let side = match state.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };

    let rights = state.castling_rights();
    let mut castling = String::new();
    if rights.has(Color::White, true) {
        castling.push('K');
    }
    if rights.has(Color::White, false) {
        castling.push('Q');
    }
    if rights.has(Color::Black, true) {
        castling.push('k');
    }
    if rights.has(Color::Black, false) {
        castling.push('q');
    }
    if castling.is_empty() {
        castling.push('-');
    }

    let ep = match state.en_passant_target() {
        Some(sq) => sq.to_string(),
        None => "-".to_string(),
    };

    format!(
        "{placement} {side} {castling} {ep} {} {}",
        state.half_move_clock(),
        state.full_move_count()
    )
}

/// Decode a FEN record into a `(Board, BoardState)` pair.
#[must_use]
pub fn parse_fen(fen: &str) -> Result<(Board, BoardState), FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::MalformedField(FenField::FieldCount));
    }

    let board = parse_placement(fields[0])?;

    let side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return Err(FenError::MalformedField(FenField::SideToMove)),
    };

    let castling_rights = parse_castling(fields[2])?;

    let en_passant_target = match fields[3] {
        "-" => None,
        s => Some(
            s.parse::<Square>()
                .map_err(|_| FenError::MalformedField(FenField::EnPassant))?,
        ),
    };

    let half_move_clock: u8 = fields[4]
        .parse()
        .map_err(|_| FenError::MalformedField(FenField::HalfmoveClock))?;

    let full_move_count: u16 = fields[5]
        .parse()
        .map_err(|_| FenError::MalformedField(FenField::FullmoveCount))?;

    let state = BoardState {
        castling_rights,
        half_move_clock,
        full_move_count,
        en_passant_target,
        side_to_move,
    };

    Ok((board, state))
}

fn parse_placement(field: &str) -> Result<Board, FenError> {
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::MalformedField(FenField::PiecePlacement));
    }

    let mut board = Board::empty();
    for (row_idx, row) in rows.iter().enumerate() {
        let rank = 7 - row_idx;
        let mut file = 0usize;
        for c in row.chars() {
            if let Some(run) = c.to_digit(10) {
                file += run as usize;
                if file > 8 {
                    return Err(FenError::MalformedField(FenField::PiecePlacement));
                }
                continue;
            }
            let piece =
                Piece::from_char(c).ok_or(FenError::MalformedField(FenField::PiecePlacement))?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            if file >= 8 {
                return Err(FenError::MalformedField(FenField::PiecePlacement));
            }
            board.set_piece(Square::new(rank, file), color, piece);
            file += 1;
        }
        if file != 8 {
            return Err(FenError::MalformedField(FenField::PiecePlacement));
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Result<CastlingRights, FenError> {
    if field == "-" {
        return Ok(CastlingRights::none());
    }
    let mut rights = CastlingRights::none();
    for c in field.chars() {
        match c {
            'K' => rights.set(Color::White, true),
            'Q' => rights.set(Color::White, false),
            'k' => rights.set(Color::Black, true),
            'q' => rights.set(Color::Black, false),
            _ => return Err(FenError::MalformedField(FenField::Castling)),
        }
    }
    Ok(rights)
}
