use catlog::{Catalog, LogContext, ManualClock, MemoryTarget, NullTarget, Request, Target};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_log_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("Category::log");

    let memory = MemoryTarget::new("memory");
    let context = LogContext::builder()
        .catalog(Catalog::new().message("net.up", "Link %s up after %d ms"))
        .clock(ManualClock::new(0))
        .target(memory.clone())
        .build();
    let log = context.category("NET");

    group.bench_function("catalog_id", |b| {
        b.iter(|| {
            log.info(black_box(Request::id("net.up").arg("eth0").arg(12)));
            memory.clear();
        });
    });

    log.info_once("net.up");
    group.bench_function("once_hit", |b| {
        b.iter(|| log.info_once(black_box("net.up")));
    });

    group.finish();
}

fn bench_fan_out(c: &mut Criterion) {
    let context = LogContext::builder().clock(ManualClock::new(0)).build();
    for i in 0..8 {
        let target = NullTarget::new(format!("null-{i}"));
        target.set_threshold(catlog::Level::DEBUG2);
        let _ = context.add_target(target);
    }
    let log = context.category("FAN");
    let message = log.build_message(Request::text("fan-out"));

    c.bench_function("dispatch_8_targets", |b| {
        b.iter(|| log.log_message(black_box(&message)));
    });
}

criterion_group!(benches, bench_log_paths, bench_fan_out);
criterion_main!(benches);
