//! Chess board representation, move generation, and game state management.
//!
//! Uses bitboards and magic-bitboard slider attack tables for move
//! generation, and a 24-bit packed move encoding (see [`HashedMove`]) for
//! the moves that encoding produces.
//!
//! # Example
//! ```
//! use chess_engine::board::{BoardManager, MoveGenerator};
//!
//! let generator = MoveGenerator::new();
//! let manager = BoardManager::new(&generator);
//! assert_eq!(manager.to_fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
//! ```

mod attack_tables;
mod error;
mod eval;
mod fen;
mod manager;
mod movegen;
mod perft;
mod san;
mod state;
mod types;

pub use error::{FenError, FenField, SquareError};
pub use eval::Evaluator;
pub use fen::{parse_fen, to_fen, STARTING_FEN};
pub use manager::{BoardManager, Move, MoveResult};
pub use movegen::MoveGenerator;
pub use perft::perft;
pub use state::{Board, BoardState};
pub use types::{CastlingRights, Color, HashedMove, MoveList, MoveListIntoIter, Piece, Square};
