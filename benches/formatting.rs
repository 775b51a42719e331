use catlog::fmt::{Arg, LineTemplate, LineValues, arity, substitute};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_substitute(c: &mut Criterion) {
    let mut group = c.benchmark_group("substitute");

    let args = [Arg::from("eth0"), Arg::from(1500_u32), Arg::from(0.25_f64)];
    group.bench_function("sequential", |b| {
        b.iter(|| substitute(black_box("Link %s up, mtu %d, loss %.2f"), black_box(&args)));
    });
    group.bench_function("indexed", |b| {
        b.iter(|| substitute(black_box("%2$d on %1$s ({0})"), black_box(&args)));
    });
    let none: &[Arg] = &[];
    group.bench_function("no_tokens", |b| {
        b.iter(|| substitute(black_box("Connection established"), black_box(none)));
    });

    group.finish();
}

fn bench_arity(c: &mut Criterion) {
    c.bench_function("arity", |b| {
        b.iter(|| arity(black_box("%s %d %3$f {4} 100%%")));
    });
}

fn bench_line_template_render(c: &mut Criterion) {
    let template = LineTemplate::parse("{timestamp} {level} [{thread}] {category}: {msg}");
    let values = LineValues::new()
        .timestamp("2025-01-15 14:30:00.123")
        .level("INFO")
        .thread("main")
        .category("NET")
        .msg("Application started successfully");

    c.bench_function("LineTemplate::render", |b| {
        b.iter(|| template.render(black_box(&values)));
    });
}

criterion_group!(
    benches,
    bench_substitute,
    bench_arity,
    bench_line_template_render
);
criterion_main!(benches);
