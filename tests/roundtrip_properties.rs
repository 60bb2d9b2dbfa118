//! Property-style coverage for the round-trip and invariant-preservation
//! guarantees a conforming move generator/board must satisfy.

use chess_core::board::Board;
use proptest::prelude::*;

/// Walk `plies` random legal moves from the start position, recording the
/// hash before each move so repetition-style checks have material to work
/// with. Uses `rng_seed` to pick deterministically among the legal moves at
/// each ply (no `rand` dependency needed here beyond simple modular
/// selection, since proptest already supplies the randomness).
fn random_walk(rng_seed: u64, plies: usize) -> Board {
    let mut board = Board::new();
    let mut seed = rng_seed;
    for _ in 0..plies {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        // xorshift-ish mix, good enough to decorrelate successive picks
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        let idx = (seed as usize) % moves.len();
        let mv = moves.get(idx).unwrap();
        board.make_move(mv);
    }
    board
}

proptest! {
    #[test]
    fn make_unmake_round_trip(seed in any::<u64>(), plies in 0usize..40) {
        let mut board = random_walk(seed, plies);
        let before_fen = board.to_fen();
        let before_hash = board.hash();

        let moves = board.legal_moves();
        for mv in moves.iter() {
            let undo = board.make_move(*mv);
            board.unmake_move(*mv, undo);
            prop_assert_eq!(board.to_fen(), before_fen.clone());
            prop_assert_eq!(board.hash(), before_hash);
        }
    }

    #[test]
    fn fen_round_trip(seed in any::<u64>(), plies in 0usize..40) {
        let board = random_walk(seed, plies);
        let fen = board.to_fen();
        let reparsed = Board::from_fen(&fen);
        prop_assert_eq!(reparsed.to_fen(), fen);
        prop_assert_eq!(reparsed.hash(), board.hash());
    }

    #[test]
    fn uci_round_trip(seed in any::<u64>(), plies in 0usize..40) {
        let mut board = random_walk(seed, plies);
        let moves = board.legal_moves();
        for mv in moves.iter() {
            let uci = mv.to_string();
            let parsed = board.parse_move(&uci).unwrap();
            prop_assert_eq!(parsed.from(), mv.from());
            prop_assert_eq!(parsed.to(), mv.to());
            prop_assert_eq!(parsed.promotion(), mv.promotion());
        }
    }

    #[test]
    fn san_round_trip(seed in any::<u64>(), plies in 0usize..40) {
        let mut board = random_walk(seed, plies);
        let moves = board.legal_moves();
        for mv in moves.iter() {
            let san = board.move_to_san(mv);
            let parsed = board.parse_san(&san).unwrap();
            prop_assert_eq!(parsed.from(), mv.from());
            prop_assert_eq!(parsed.to(), mv.to());
        }
    }

    #[test]
    fn legality_closure_king_never_left_in_check(seed in any::<u64>(), plies in 0usize..40) {
        let mut board = random_walk(seed, plies);
        let mover = board.side_to_move();
        let moves = board.legal_moves();
        for mv in moves.iter() {
            let undo = board.make_move(*mv);
            prop_assert!(!board.is_in_check(mover));
            board.unmake_move(*mv, undo);
        }
    }

    #[test]
    fn invariants_hold_after_make_and_unmake(seed in any::<u64>(), plies in 0usize..40) {
        let mut board = random_walk(seed, plies);
        let moves = board.legal_moves();
        for mv in moves.iter() {
            let before = board.to_fen();
            let undo = board.make_move(*mv);

            // invariant 2/3: occupancy is disjoint and exactly one king per side
            prop_assert_eq!(board.piece_at_count_kings(), (1, 1));

            board.unmake_move(*mv, undo);
            prop_assert_eq!(board.to_fen(), before);
        }
    }

    #[test]
    fn terminal_consistency(seed in any::<u64>(), plies in 0usize..60) {
        let board = random_walk(seed, plies);
        if board.is_checkmate() {
            prop_assert!(board.is_check());
            prop_assert!(board.legal_moves().is_empty());
        }
        if board.is_stalemate() {
            prop_assert!(!board.is_check());
            prop_assert!(board.legal_moves().is_empty());
        }
    }
}
