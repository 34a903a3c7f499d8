//! End-to-end scenarios against the public `BoardManager` API.

use chess_engine::board::{BoardManager, CastlingRights, Color, Move, MoveGenerator, MoveResult, Piece};

fn mv(from: &str, to: &str) -> Move {
    Move {
        from: from.parse().unwrap(),
        to: to.parse().unwrap(),
        promoted_to: None,
    }
}

#[test]
fn scholars_mate() {
    let generator = MoveGenerator::new();
    let mut manager = BoardManager::new(&generator);
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
    ] {
        let (result, _) = manager.try_move(mv(from, to));
        assert_ne!(result, MoveResult::Illegal);
    }
    let (result, hashed) = manager.try_move(mv("h5", "f7"));
    assert_eq!(result, MoveResult::Checkmate);
    assert!(hashed.is_capture());
    assert_eq!(hashed.piece(), (Color::White, Piece::Queen));
}

#[test]
fn castling_rights_loss_on_rook_move() {
    let generator = MoveGenerator::new();
    let mut manager = BoardManager::new(&generator);
    for (from, to) in [
        ("g1", "f3"),
        ("g8", "f6"),
        ("h2", "h4"),
        ("h7", "h5"),
        ("h1", "h3"),
    ] {
        let (result, _) = manager.try_move(mv(from, to));
        assert_ne!(result, MoveResult::Illegal);
    }
    assert!(!manager.to_fen().contains('K'));
    assert!(manager.to_fen().split(' ').nth(2).unwrap().contains('Q'));
}

#[test]
fn en_passant_capture() {
    let generator = MoveGenerator::new();
    let mut manager = BoardManager::from_fen(
        &generator,
        "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
    )
    .unwrap();
    let (result, hashed) = manager.try_move(mv("e5", "d6"));
    assert_eq!(result, MoveResult::Valid);
    assert!(hashed.is_en_passant());
    assert!(hashed.is_capture());
    assert!(!manager.to_fen().contains(" d6 "));
}

#[test]
fn promotion_delivers_check() {
    let generator = MoveGenerator::new();
    let mut manager = BoardManager::from_fen(&generator, "8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
    let (result, _) = manager.try_move(Move {
        from: "a7".parse().unwrap(),
        to: "a8".parse().unwrap(),
        promoted_to: Some(Piece::Queen),
    });
    assert_eq!(result, MoveResult::Check);
    assert_eq!(manager.piece_count(Color::White, Piece::Queen), 1);
    assert_eq!(manager.piece_count(Color::White, Piece::Pawn), 0);
}

#[test]
fn stalemate_without_calling_try_move() {
    let generator = MoveGenerator::new();
    let manager =
        BoardManager::from_fen(&generator, "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(manager.available_moves().is_empty());
    let (result, _) = manager.clone().try_move(mv("h8", "h7"));
    assert_eq!(result, MoveResult::Illegal);
}

#[test]
fn fifty_move_rule_triggers_draw() {
    let generator = MoveGenerator::new();
    let mut manager =
        BoardManager::from_fen(&generator, "7k/8/8/4K3/8/8/8/8 w - - 99 50").unwrap();
    let (result, _) = manager.try_move(mv("e5", "e6"));
    assert_eq!(result, MoveResult::Draw);
}

#[test]
fn castling_rights_never_increase_across_a_game() {
    let generator = MoveGenerator::new();
    let mut manager =
        BoardManager::from_fen(&generator, "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mut seen: Vec<CastlingRights> = vec![manager.castling_rights()];
    for (from, to) in [("e1", "g1"), ("e8", "g8")] {
        manager.try_move(mv(from, to));
        seen.push(manager.castling_rights());
    }
    for pair in seen.windows(2) {
        let (before, after) = (pair[0].as_u8(), pair[1].as_u8());
        assert_eq!(after & before, after, "rights must only be lost, never gained");
    }
}
