//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//! ```

pub use super::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, perft, queen_attacks,
    rook_attacks, Bitboard, Board, BoardBuilder, CastlingRights, Color, FenError, Move, MoveList,
    MoveParseError, Piece, SanError, Square, SquareError, UnmakeInfo,
};
