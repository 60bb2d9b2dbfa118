//! Serialization round-trip coverage for the `serde` feature. Only compiled
//! when that feature is enabled (`cargo test --features serde`).

#![cfg(feature = "serde")]

use chess_core::board::{Bitboard, CastlingRights, Color, Move, Piece, Square};

#[test]
fn square_round_trips_through_json() {
    let sq = Square::new(3, 4);
    let json = serde_json::to_string(&sq).unwrap();
    let back: Square = serde_json::from_str(&json).unwrap();
    assert_eq!(sq, back);
}

#[test]
fn piece_and_color_round_trip_through_json() {
    for piece in [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ] {
        let json = serde_json::to_string(&piece).unwrap();
        let back: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, back);
    }

    for color in [Color::White, Color::Black] {
        let json = serde_json::to_string(&color).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(color, back);
    }
}

#[test]
fn move_round_trips_through_json() {
    let mv = Move::new_promotion_capture(Square::new(6, 1), Square::new(7, 0), Piece::Queen);
    let json = serde_json::to_string(&mv).unwrap();
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(mv, back);
    assert_eq!(back.promotion(), Some(Piece::Queen));
}

#[test]
fn bitboard_and_castling_rights_round_trip_through_json() {
    let bb = Bitboard::RANK_1.or(Bitboard::FILE_A);
    let json = serde_json::to_string(&bb).unwrap();
    let back: Bitboard = serde_json::from_str(&json).unwrap();
    assert_eq!(bb, back);

    let rights = CastlingRights::all();
    let json = serde_json::to_string(&rights).unwrap();
    let back: CastlingRights = serde_json::from_str(&json).unwrap();
    assert_eq!(rights, back);
}
