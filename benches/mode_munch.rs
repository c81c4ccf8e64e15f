/* Benchmarks for modemunch.  One group per mode string grammar, plus the
 * renderer */

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use modemunch::{apply_mode_spec, format_mode};

use std::time::Duration;

pub fn run_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("modemunch basics");

    // Default is 5s...
    group.measurement_time(Duration::from_secs(3));

    // Shorten the warm up time as well from 3s to this...
    group.warm_up_time(Duration::from_secs(1));

    group.bench_function("octal", |b| {
        b.iter(|| apply_mode_spec(black_box(0o644), black_box("4755")))
    });

    group.bench_function("rwxrwxrwx", |b| {
        b.iter(|| apply_mode_spec(black_box(0o644), black_box("rwsr-x---")))
    });

    group.bench_function("symbolic (1 clause)", |b| {
        b.iter(|| apply_mode_spec(black_box(0o644), black_box("go-w")))
    });

    group.bench_function("symbolic (3 clauses)", |b| {
        b.iter(|| apply_mode_spec(black_box(0o644), black_box("u=rwx,g=rx,o=")))
    });

    group.bench_function("format_mode", |b| b.iter(|| format_mode(black_box(0o4755))));

    group.finish();
}

criterion_group!(benches, run_benchmark);
criterion_main!(benches);
