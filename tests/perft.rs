//! Perft end-to-end scenarios, exercised through the public crate API only.

use chess_engine::board::{parse_fen, perft, Board, BoardState, MoveGenerator};

#[test]
fn starting_position_matches_known_node_counts() {
    let generator = MoveGenerator::new();
    let board = Board::starting_position();
    let state = BoardState::starting();

    assert_eq!(perft(&generator, &board, &state, 1), 20);
    assert_eq!(perft(&generator, &board, &state, 2), 400);
    assert_eq!(perft(&generator, &board, &state, 3), 8_902);
    assert_eq!(perft(&generator, &board, &state, 4), 197_281);
}

#[test]
fn kiwipete_matches_known_node_counts() {
    let generator = MoveGenerator::new();
    let (board, state) =
        parse_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("valid fen");

    assert_eq!(perft(&generator, &board, &state, 1), 48);
    assert_eq!(perft(&generator, &board, &state, 2), 2_039);
    assert_eq!(perft(&generator, &board, &state, 3), 97_862);
}

#[test]
fn castling_rights_position_matches_known_node_counts() {
    let generator = MoveGenerator::new();
    let (board, state) = parse_fen("r3k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("valid fen");

    assert_eq!(perft(&generator, &board, &state, 1), 26);
    assert_eq!(perft(&generator, &board, &state, 2), 331);
    assert_eq!(perft(&generator, &board, &state, 3), 8_337);
}

#[test]
fn promotion_position_matches_known_node_counts() {
    let generator = MoveGenerator::new();
    let (board, state) = parse_fen("n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1").expect("valid fen");

    assert_eq!(perft(&generator, &board, &state, 1), 24);
    assert_eq!(perft(&generator, &board, &state, 2), 496);
}

#[test]
fn perft_zero_is_one_by_convention() {
    let generator = MoveGenerator::new();
    let board = Board::starting_position();
    let state = BoardState::starting();
    assert_eq!(perft(&generator, &board, &state, 0), 1);
}
