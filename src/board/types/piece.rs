//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types.
///
/// Deliberately just the six real piece kinds — no aggregate "all pieces of
/// a color" member and no "no piece" member. Those are derived data (on
/// `Board`) or `Option<Piece>`, not a seventh and eighth kind of piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    #[must_use]
    pub(crate) const fn from_index(i: usize) -> Piece {
        match i {
            0 => Piece::Pawn,
            1 => Piece::Knight,
            2 => Piece::Bishop,
            3 => Piece::Rook,
            4 => Piece::Queen,
            _ => Piece::King,
        }
    }

    /// Parse a piece from a lowercase character (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Convert piece to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Combined color+kind ordinal used by `HashedMove`'s packed `piece`/`promoted`
    /// fields: `WhitePawn..WhiteKing = 1..=6`, `BlackPawn..BlackKing = 7..=12`.
    #[inline]
    #[must_use]
    pub(crate) const fn ordinal(self, color: Color) -> u8 {
        let offset = match color {
            Color::White => 0,
            Color::Black => 6,
        };
        1 + offset + self.index() as u8
    }

    /// Inverse of [`Piece::ordinal`]. Returns `None` for ordinal `0` ("no piece").
    #[must_use]
    pub(crate) const fn from_ordinal(ordinal: u8) -> Option<(Color, Piece)> {
        if ordinal == 0 || ordinal > 12 {
            return None;
        }
        let (color, kind_index) = if ordinal <= 6 {
            (Color::White, ordinal - 1)
        } else {
            (Color::Black, ordinal - 7)
        };
        Some((color, Piece::from_index(kind_index as usize)))
    }
}

/// Ordinal reserved for "no piece" in `HashedMove`'s `promoted` field.
pub(crate) const NO_PIECE_ORDINAL: u8 = 0;

/// Promotion piece choices, queen first (the order the move generator emits them in).
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
