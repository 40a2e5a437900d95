//! Benchmarks for the gamut table generators.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gamutgrid::table::{self, TinyRgb, AB_SPAN, C_SPAN, H_SPAN, L_SPAN};

/// Benchmark the plane fills a picker redraws while a slider moves.
fn bench_planes(c: &mut Criterion) {
    let mut group = c.benchmark_group("planes");

    let mut ab_plane = Box::new([[TinyRgb::default(); AB_SPAN]; AB_SPAN]);
    group.throughput(Throughput::Elements((AB_SPAN * AB_SPAN) as u64));
    for lightness in [25, 50, 75] {
        group.bench_with_input(
            BenchmarkId::new("ab_for_l", lightness),
            &lightness,
            |b, &l| {
                b.iter(|| table::fill_ab_for_l(black_box(&mut ab_plane), black_box(l)));
            },
        );
    }

    let mut hc_plane = Box::new([[TinyRgb::default(); C_SPAN]; H_SPAN]);
    group.throughput(Throughput::Elements((H_SPAN * C_SPAN) as u64));
    group.bench_function("hc_for_l/50", |b| {
        b.iter(|| table::fill_hc_for_l(black_box(&mut hc_plane), black_box(50)));
    });

    let mut cl_plane = Box::new([[TinyRgb::default(); L_SPAN]; C_SPAN]);
    group.throughput(Throughput::Elements((C_SPAN * L_SPAN) as u64));
    group.bench_function("cl_for_h/120", |b| {
        b.iter(|| table::fill_cl_for_h(black_box(&mut cl_plane), black_box(120)));
    });

    group.finish();
}

/// Benchmark the line fills for the single-axis slider gradients.
fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");

    let mut l_line = [TinyRgb::default(); L_SPAN];
    group.throughput(Throughput::Elements(L_SPAN as u64));
    group.bench_function("l_for_ab", |b| {
        b.iter(|| table::fill_l_for_ab(black_box(&mut l_line), black_box(-25), black_box(43)));
    });

    let mut h_line = [TinyRgb::default(); H_SPAN];
    group.throughput(Throughput::Elements(H_SPAN as u64));
    group.bench_function("h_for_cl", |b| {
        b.iter(|| table::fill_h_for_cl(black_box(&mut h_line), black_box(50), black_box(50)));
    });

    group.finish();
}

criterion_group!(benches, bench_planes, bench_lines);
criterion_main!(benches);
