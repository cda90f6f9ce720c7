use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_life::core::{seeded_rng, Board, Simulator};
use tui_life::term::encode_frame_into;

/// A board the size of a typical 200x50 terminal.
fn seeded_board() -> Board {
    let (mut rng, _) = seeded_rng(Some(12345));
    let mut board = Board::new(100, 50).unwrap();
    board.seed_random(0.1, &mut rng).unwrap();
    board
}

fn bench_step(c: &mut Criterion) {
    let mut board = seeded_board();
    let mut sim = Simulator::new();

    c.bench_function("step_100x50", |b| {
        b.iter(|| {
            sim.step(black_box(&mut board));
        })
    });
}

fn bench_count_neighbors(c: &mut Criterion) {
    let board = seeded_board();

    c.bench_function("count_live_neighbors_edge", |b| {
        b.iter(|| board.count_live_neighbors(black_box(0), black_box(0)))
    });
}

fn bench_encode_frame(c: &mut Criterion) {
    let board = seeded_board();
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_frame_100x50", |b| {
        b.iter(|| {
            out.clear();
            encode_frame_into(black_box(&board), Some("frame 1.00 ms"), &mut out).unwrap();
        })
    });
}

fn bench_seed(c: &mut Criterion) {
    c.bench_function("seed_random_100x50", |b| {
        b.iter(|| seeded_board())
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_count_neighbors,
    bench_encode_frame,
    bench_seed
);
criterion_main!(benches);
