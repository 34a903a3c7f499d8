//! Precomputed attack tables for every piece type.
//!
//! Leaper tables (pawn/knight/king) are plain shift-and-mask lookups built
//! once at process start. Slider tables (bishop/rook) are magic-bitboard
//! perfect hashes, also built once — each one costs a few milliseconds to
//! search and is shared for the lifetime of the process via `Lazy`.

mod leapers;
mod magic;

use once_cell::sync::Lazy;

use crate::board::types::Color;

pub(crate) use magic::{bishop_attacks_slow, rook_attacks_slow};

struct LeaperTables {
    white_pawn: [u64; 64],
    black_pawn: [u64; 64],
    knight: [u64; 64],
    king: [u64; 64],
}

impl LeaperTables {
    fn new() -> Self {
        LeaperTables {
            white_pawn: leapers::build_white_pawn_attacks(),
            black_pawn: leapers::build_black_pawn_attacks(),
            knight: leapers::build_knight_attacks(),
            king: leapers::build_king_attacks(),
        }
    }
}

static LEAPERS: Lazy<LeaperTables> = Lazy::new(|| {
    #[cfg(feature = "logging")]
    log::debug!("building leaper attack tables (pawn/knight/king)");
    LeaperTables::new()
});

static MAGICS: Lazy<magic::MagicTables> = Lazy::new(|| {
    let tables = magic::MagicTables::new();
    #[cfg(feature = "logging")]
    log::debug!("built magic bitboard tables for bishops and rooks (64 squares each)");
    tables
});

/// Owns (indirectly, via shared statics) every precomputed attack table the
/// move generator needs. Cheap to construct — the tables themselves are
/// built once per process and shared.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AttackTables;

impl AttackTables {
    #[must_use]
    pub(crate) fn new() -> Self {
        // Force both statics to initialize eagerly rather than lazily on
        // first lookup, so the one-time cost is visible at a predictable
        // point (construction) rather than mid-search.
        Lazy::force(&LEAPERS);
        Lazy::force(&MAGICS);
        AttackTables
    }

    #[inline]
    #[must_use]
    pub(crate) fn pawn_attacks(&self, color: Color, square: usize) -> u64 {
        match color {
            Color::White => LEAPERS.white_pawn[square],
            Color::Black => LEAPERS.black_pawn[square],
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn knight_attacks(&self, square: usize) -> u64 {
        LEAPERS.knight[square]
    }

    #[inline]
    #[must_use]
    pub(crate) fn king_attacks(&self, square: usize) -> u64 {
        LEAPERS.king[square]
    }

    #[inline]
    #[must_use]
    pub(crate) fn bishop_attacks(&self, square: usize, occupancy: u64) -> u64 {
        MAGICS.bishop_attacks(square, occupancy)
    }

    #[inline]
    #[must_use]
    pub(crate) fn rook_attacks(&self, square: usize, occupancy: u64) -> u64 {
        MAGICS.rook_attacks(square, occupancy)
    }

    #[inline]
    #[must_use]
    pub(crate) fn queen_attacks(&self, square: usize, occupancy: u64) -> u64 {
        self.bishop_attacks(square, occupancy) | self.rook_attacks(square, occupancy)
    }
}
