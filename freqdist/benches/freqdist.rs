use criterion::Throughput;
use criterion::{criterion_group, criterion_main, Criterion};
use freqdist::{Report, Sample};
use rand::Rng;

fn report(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let mut group = c.benchmark_group("report");

    for n in [36, 1_000, 100_000] {
        let values: Vec<f64> = (0..n).map(|_| rng.gen_range(0..50_000) as f64).collect();
        let sample = Sample::new(values).unwrap();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("new/{n}"), |b| b.iter(|| Report::new(&sample)));
    }

    group.finish();
}

fn lookup(c: &mut Criterion) {
    let values: Vec<f64> = (0..1_000).map(|v| (v * 37 % 4_000) as f64).collect();
    let report = freqdist::distribute(&values).unwrap();

    let mut group = c.benchmark_group("lookup");
    group.throughput(Throughput::Elements(1));
    group.bench_function("draw/1", |b| b.iter(|| report.lookup(1)));
    group.bench_function("draw/100", |b| b.iter(|| report.lookup(100)));
    group.finish();
}

criterion_group!(benches, report, lookup);
criterion_main!(benches);
