//! Perft: recursive leaf-node counting used to validate move generation
//! against known-correct counts for standard test positions.

use super::Board;

/// Count the number of leaf positions reachable from `board` after exactly
/// `depth` plies of legal play.
///
/// `depth == 0` counts the current position itself (one leaf). Uses
/// make/unmake rather than cloning, so no allocation happens on the hot path
/// beyond the fixed-capacity move lists already used by `generate_moves`.
#[must_use]
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves.iter() {
        let undo = board.make_move(*mv);
        nodes += perft(board, depth - 1);
        board.unmake_move(*mv, undo);
    }
    nodes
}

/// Per-move leaf counts at `depth - 1` below each legal move at the root,
/// commonly called "divide" in perft tooling — useful for isolating which
/// branch of a move generator disagrees with a reference count.
#[must_use]
pub fn perft_divide(board: &mut Board, depth: u32) -> Vec<(super::Move, u64)> {
    let moves = board.legal_moves();
    let mut results = Vec::with_capacity(moves.len());
    for mv in moves.iter() {
        let undo = board.make_move(*mv);
        let count = perft(board, depth.saturating_sub(1));
        board.unmake_move(*mv, undo);
        results.push((*mv, count));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_perft_start_position_depth_1_to_4() {
        let mut board = Board::new();
        assert_eq!(perft(&mut board, 1), 20);
        assert_eq!(perft(&mut board, 2), 400);
        assert_eq!(perft(&mut board, 3), 8902);
        assert_eq!(perft(&mut board, 4), 197281);
    }

    #[test]
    fn test_perft_start_position_depth_5() {
        let mut board = Board::new();
        assert_eq!(perft(&mut board, 5), 4865609);
    }

    #[test]
    fn test_perft_kiwipete_depth_1_to_3() {
        let mut board = Board::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        );
        assert_eq!(perft(&mut board, 1), 48);
        assert_eq!(perft(&mut board, 2), 2039);
        assert_eq!(perft(&mut board, 3), 97862);
    }

    #[test]
    fn test_perft_zero_depth_is_one() {
        let mut board = Board::new();
        assert_eq!(perft(&mut board, 0), 1);
    }

    #[test]
    fn test_perft_leaves_board_unchanged() {
        let mut board = Board::new();
        let before = board.to_fen();
        perft(&mut board, 3);
        assert_eq!(board.to_fen(), before);
    }
}
