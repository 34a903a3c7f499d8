//! Error types for the board module.
//!
//! Hand-rolled `Display`/`Error` impls, no `thiserror`: the error surface is
//! small and fixed, and this keeps the dependency graph exactly as wide as
//! the rest of the crate's error handling already is.

use std::fmt;

/// Which field of a FEN string failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FenField {
    FieldCount,
    PiecePlacement,
    SideToMove,
    Castling,
    EnPassant,
    HalfmoveClock,
    FullmoveCount,
}

impl fmt::Display for FenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FenField::FieldCount => "field count",
            FenField::PiecePlacement => "piece placement",
            FenField::SideToMove => "side to move",
            FenField::Castling => "castling rights",
            FenField::EnPassant => "en-passant target",
            FenField::HalfmoveClock => "half-move clock",
            FenField::FullmoveCount => "full-move count",
        };
        write!(f, "{name}")
    }
}

/// FEN parsing failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FenError {
    MalformedField(FenField),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::MalformedField(which) => write!(f, "malformed FEN: {which}"),
        }
    }
}

impl std::error::Error for FenError {}

/// A `Square` could not be parsed from algebraic notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SquareError {
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "invalid square notation: {notation:?}")
            }
        }
    }
}

impl std::error::Error for SquareError {}
