//! Benchmarks for the move-generation hot path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_engine::board::{parse_fen, perft, Board, BoardManager, BoardState, MoveGenerator};

fn bench_move_generator_construction(c: &mut Criterion) {
    c.bench_function("movegen_construction", |b| {
        b.iter(MoveGenerator::new);
    });
}

fn bench_perft(c: &mut Criterion) {
    let generator = MoveGenerator::new();
    let board = Board::starting_position();
    let state = BoardState::starting();

    let mut group = c.benchmark_group("perft_startpos");
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            b.iter(|| perft(&generator, black_box(&board), black_box(&state), depth));
        });
    }
    group.finish();
}

fn bench_perft_kiwipete(c: &mut Criterion) {
    let generator = MoveGenerator::new();
    let (board, state) =
        parse_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("valid fen");

    let mut group = c.benchmark_group("perft_kiwipete");
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            b.iter(|| perft(&generator, black_box(&board), black_box(&state), depth));
        });
    }
    group.finish();
}

fn bench_available_moves(c: &mut Criterion) {
    let generator = MoveGenerator::new();
    let manager = BoardManager::new(&generator);
    c.bench_function("available_moves_startpos", |b| {
        b.iter(|| black_box(manager.available_moves()));
    });
}

criterion_group!(
    benches,
    bench_move_generator_construction,
    bench_perft,
    bench_perft_kiwipete,
    bench_available_moves
);
criterion_main!(benches);
