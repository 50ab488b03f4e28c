use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use minehint_core::*;

fn bench_generate(c: &mut Criterion) {
    let config = BoardConfig::new(255, 255, 0.15).unwrap();
    c.bench_function("generate_255x255", |b| {
        b.iter(|| black_box(Board::new(config, black_box(11))))
    });
}

fn bench_flood(c: &mut Criterion) {
    let config = BoardConfig::new(255, 255, 0.0).unwrap();
    let board = Board::new(config, 0);
    c.bench_function("flood_empty_255x255", |b| {
        b.iter_batched(
            || board.clone(),
            |mut board| black_box(board.reveal_all((127, 127))),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_generate, bench_flood);
criterion_main!(benches);
