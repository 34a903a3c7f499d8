//! `HashedMove`: the 24-bit packed move representation generated by the
//! move generator and consumed by the board manager.
//!
//! The bit layout is externally visible — drivers may persist this value —
//! so it is preserved exactly rather than replaced with a more idiomatic
//! struct-of-fields:
//!
//! | bits  | field        |
//! |-------|--------------|
//! | 0-5   | source       |
//! | 6-11  | target       |
//! | 12-16 | piece        |
//! | 17-21 | promoted     |
//! | 22    | capture      |
//! | 23    | double_push  |
//! | 24    | enpassant    |
//! | 25    | castling     |

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece, NO_PIECE_ORDINAL};
use super::square::Square;

const SOURCE_SHIFT: u32 = 0;
const TARGET_SHIFT: u32 = 6;
const PIECE_SHIFT: u32 = 12;
const PROMOTED_SHIFT: u32 = 17;
const CAPTURE_BIT: u32 = 22;
const DOUBLE_PUSH_BIT: u32 = 23;
const ENPASSANT_BIT: u32 = 24;
const CASTLING_BIT: u32 = 25;

const SQUARE_MASK: u32 = 0x3F;
const PIECE_MASK: u32 = 0x1F;

/// A packed, 24-bit-significant move as produced by [`crate::board::MoveGenerator`].
///
/// Equality and hashing are defined on the raw 32-bit numeric form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HashedMove(u32);

impl HashedMove {
    /// The null move: zero source/target, no piece, no flags. Returned by
    /// `try_move` in place of a real move when the attempted move is illegal.
    pub const NULL: HashedMove = HashedMove(0);

    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub(crate) const fn new(
        source: Square,
        target: Square,
        piece: Piece,
        piece_color: Color,
        promoted: Option<Piece>,
        capture: bool,
        double_push: bool,
        enpassant: bool,
        castling: bool,
    ) -> Self {
        let promoted_ordinal = match promoted {
            Some(p) => p.ordinal(piece_color),
            None => NO_PIECE_ORDINAL,
        };
        let mut bits: u32 = (source.as_index() as u32 & SQUARE_MASK) << SOURCE_SHIFT;
        bits |= (target.as_index() as u32 & SQUARE_MASK) << TARGET_SHIFT;
        bits |= (piece.ordinal(piece_color) as u32 & PIECE_MASK) << PIECE_SHIFT;
        bits |= (promoted_ordinal as u32 & PIECE_MASK) << PROMOTED_SHIFT;
        if capture {
            bits |= 1 << CAPTURE_BIT;
        }
        if double_push {
            bits |= 1 << DOUBLE_PUSH_BIT;
        }
        if enpassant {
            bits |= 1 << ENPASSANT_BIT;
        }
        if castling {
            bits |= 1 << CASTLING_BIT;
        }
        HashedMove(bits)
    }

    #[inline]
    #[must_use]
    pub fn source(self) -> Square {
        Square::from_index(((self.0 >> SOURCE_SHIFT) & SQUARE_MASK) as usize)
    }

    #[inline]
    #[must_use]
    pub fn target(self) -> Square {
        Square::from_index(((self.0 >> TARGET_SHIFT) & SQUARE_MASK) as usize)
    }

    /// The moving piece's color and kind.
    ///
    /// # Panics
    /// Panics if this is [`HashedMove::NULL`], whose piece ordinal is 0.
    #[must_use]
    pub fn piece(self) -> (Color, Piece) {
        let ordinal = ((self.0 >> PIECE_SHIFT) & PIECE_MASK) as u8;
        Piece::from_ordinal(ordinal).expect("HashedMove piece field is never 0 for a real move")
    }

    /// The promoted-to piece, if this move is a promotion.
    #[must_use]
    pub fn promoted(self) -> Option<(Color, Piece)> {
        let ordinal = ((self.0 >> PROMOTED_SHIFT) & PIECE_MASK) as u8;
        Piece::from_ordinal(ordinal)
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        (self.0 >> CAPTURE_BIT) & 1 != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_double_push(self) -> bool {
        (self.0 >> DOUBLE_PUSH_BIT) & 1 != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        (self.0 >> ENPASSANT_BIT) & 1 != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        (self.0 >> CASTLING_BIT) & 1 != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        ((self.0 >> PROMOTED_SHIFT) & PIECE_MASK) != NO_PIECE_ORDINAL as u32
    }

    /// The raw 32-bit packed form (bits 26-31 are always zero).
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Reconstruct a `HashedMove` from its raw 32-bit packed form.
    #[inline]
    #[must_use]
    pub const fn from_u32(bits: u32) -> Self {
        HashedMove(bits)
    }
}

impl fmt::Debug for HashedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == HashedMove::NULL {
            return write!(f, "HashedMove(NULL)");
        }
        write!(
            f,
            "HashedMove({}{}{}{}{})",
            self.source(),
            self.target(),
            if self.is_capture() { "x" } else { "" },
            if self.is_en_passant() { " ep" } else { "" },
            if self.is_castling() { " O-O" } else { "" },
        )
    }
}

impl fmt::Display for HashedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source(), self.target())?;
        if let Some((color, promoted)) = self.promoted() {
            write!(f, "={}", promoted.to_fen_char(color).to_ascii_uppercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashedMove {
        HashedMove::new(
            Square::new(1, 4),
            Square::new(3, 4),
            Piece::Pawn,
            Color::White,
            None,
            false,
            true,
            false,
            false,
        )
    }

    #[test]
    fn pack_unpack_round_trip_is_identity() {
        let m = sample();
        let repacked = HashedMove::from_u32(m.as_u32());
        assert_eq!(m, repacked);
        assert_eq!(m.source(), Square::new(1, 4));
        assert_eq!(m.target(), Square::new(3, 4));
        assert_eq!(m.piece(), (Color::White, Piece::Pawn));
        assert!(m.is_double_push());
        assert!(!m.is_capture());
    }

    #[test]
    fn promotion_round_trips() {
        let m = HashedMove::new(
            Square::new(6, 0),
            Square::new(7, 0),
            Piece::Pawn,
            Color::White,
            Some(Piece::Queen),
            false,
            false,
            false,
            false,
        );
        assert_eq!(m.promoted(), Some((Color::White, Piece::Queen)));
        assert!(m.is_promotion());
        assert_eq!(HashedMove::from_u32(m.as_u32()), m);
    }

    #[test]
    fn no_promotion_ordinal_is_zero() {
        let m = sample();
        assert_eq!(m.promoted(), None);
        assert!(!m.is_promotion());
    }

    #[test]
    fn unused_bits_stay_zero() {
        let m = HashedMove::new(
            Square::from_index(63),
            Square::from_index(63),
            Piece::King,
            Color::Black,
            Some(Piece::Queen),
            true,
            true,
            true,
            true,
        );
        assert_eq!(m.as_u32() >> 26, 0);
    }

    #[test]
    fn null_move_has_no_piece_and_no_flags() {
        assert_eq!(HashedMove::NULL.as_u32(), 0);
        assert!(!HashedMove::NULL.is_capture());
        assert!(!HashedMove::NULL.is_castling());
    }
}
