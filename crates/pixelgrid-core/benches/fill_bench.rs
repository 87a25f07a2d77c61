use pixelgrid_core::palette::Pattern;
use pixelgrid_core::{GridSampler, Rgb};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_from_fn");
    group.bench_function("5x5_radial", |b| {
        let mut g = GridSampler::<Rgb, 5, 5>::new();
        let mut p = Pattern::spotlight();
        b.iter(|| {
            g.fill_with(&mut p);
            black_box(g.pixels());
        });
    });
    group.bench_function("64x64_closure", |b| {
        let mut g = GridSampler::<u32, 64, 64>::new();
        b.iter(|| {
            g.fill_from_fn(|x, y| ((x * x + y * y) * 1000.0) as u32);
            black_box(g.pixels());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_fill);
criterion_main!(benches);
