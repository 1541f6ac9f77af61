use almanac_ffi_c::almanac_compute_internal;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn ffi_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ffi");
    group.bench_function("almanac_compute_internal", |b| {
        b.iter(|| almanac_compute_internal(black_box(2026), 1, 31, 8, 23))
    });
    group.finish();
}

criterion_group!(benches, ffi_bench);
criterion_main!(benches);
