//! A bitboard-based chess engine core: position representation, pseudo-legal
//! move generation via magic bitboards, move application with full legality
//! classification, FEN encode/decode, and material evaluation.
//!
//! Search, opening books, transposition tables, and protocol adapters (UCI,
//! XBoard) are out of scope; this crate exposes the primitives a driver
//! needs to build those on top.

pub mod board;
