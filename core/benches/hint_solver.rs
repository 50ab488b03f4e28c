use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minehint_core::*;

/// Opens the board at its first zero cell so the frontier is non-trivial.
fn opened_board(size: (usize, usize), density: f64, seed: u64) -> Board {
    let config = BoardConfig::new(size.0, size.1, density).unwrap();
    let mut board = Board::new(config, seed);
    let (w, h) = board.size();
    let start = (0..w)
        .flat_map(|x| (0..h).map(move |y| (x, y)))
        .find(|&c| !board.is_bomb(c) && board.adjacent_mine_count(c) == 0);
    if let Some(start) = start {
        board.reveal_all(start);
    }
    board
}

fn bench_hints(c: &mut Criterion) {
    let mut group = c.benchmark_group("hints");
    for (name, size, density) in [
        ("beginner", (9, 9), 0.12),
        ("intermediate", (16, 16), 0.15),
    ] {
        let board = opened_board(size, density, 7);
        group.bench_with_input(BenchmarkId::from_parameter(name), &board, |b, board| {
            b.iter(|| black_box(board.hints()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hints);
criterion_main!(benches);
