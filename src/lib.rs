//! `chess_core`: bitboard position representation and legal move generation.
//!
//! This crate is the foundation layer for chess tools: it owns the board
//! state, attack tables, pin-aware legal move generator, make/unmake with
//! full undo, and FEN/SAN/UCI notation I/O. It does not evaluate positions,
//! search for moves, or parse PGN game records — those are built on top of
//! this crate, not inside it.
//!
//! # Example
//! ```
//! use chess_core::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let mv = board.parse_move("e2e4").unwrap();
//! let undo = board.make_move(mv);
//! assert!(!board.white_to_move());
//! board.unmake_move(mv, undo);
//! assert!(board.white_to_move());
//! ```

pub mod board;
pub(crate) mod zobrist;
