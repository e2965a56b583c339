use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use mazes::{
    generators,
    grid_dimensions::RectGridDimensions,
    units::{ColumnsCount, RowsCount},
};

fn bench_recursive_backtracker_maze_20(c: &mut Criterion) {
    let dims = RectGridDimensions::new(RowsCount(20), ColumnsCount(20)).unwrap();
    let mut rng = StdRng::seed_from_u64(20);

    c.bench_function("recursive_backtracker_maze_20", move |b| {
        b.iter(|| generators::recursive_backtracker(dims, &mut rng))
    });
}

fn bench_recursive_backtracker_maze_128(c: &mut Criterion) {
    let dims = RectGridDimensions::new(RowsCount(128), ColumnsCount(128)).unwrap();
    let mut rng = StdRng::seed_from_u64(128);

    c.bench_function("recursive_backtracker_maze_128", move |b| {
        b.iter(|| generators::recursive_backtracker(dims, &mut rng))
    });
}

fn bench_thread_rng_maze_32(c: &mut Criterion) {
    let dims = RectGridDimensions::new(RowsCount(32), ColumnsCount(32)).unwrap();
    c.bench_function("thread_rng_maze_32", move |b| {
        b.iter(|| generators::generate(dims))
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_20,
    bench_recursive_backtracker_maze_128,
    bench_thread_rng_maze_32
);
criterion_main!(benches);
