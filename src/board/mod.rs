//! Chess board representation and move generation.
//!
//! Uses bitboards for position storage and a pin-aware legal move generator.
//! Covers the full rule set needed to play a legal game: castling (through
//! non-attacked squares), en passant (including the discovered-check edge
//! case), promotions, and the draw conditions that are a property of a single
//! position (fifty-move clock, insufficient material).
//!
//! # Example
//! ```
//! use chess_core::board::{Board, Color, Piece};
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod san;
mod state;
mod types;

// Public API - types users need
pub use attack_tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};
pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, SanError, SquareError};
pub use perft::perft;
pub use state::Board;
pub use types::{Bitboard, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square};

// Internal types exposed for advanced usage (undo records produced by
// `Board::make_move`), but not re-exported in the prelude.
pub use state::{NullMoveInfo, UnmakeInfo};

pub(crate) use attack_tables::{between, line_through, slider_attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};
pub(crate) use types::{
    bit_for_square, castle_bit, file_to_index, rank_to_index, CASTLE_BLACK_K, CASTLE_BLACK_Q,
    CASTLE_WHITE_K, CASTLE_WHITE_Q, PROMOTION_PIECES,
};
