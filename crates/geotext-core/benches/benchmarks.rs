//! Throughput of `GeoText::read` over the bundled data set.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use geotext_core::{Gazetteer, GazetteerPaths, GeoText, ReadOptions};
use std::hint::black_box;
use std::sync::Arc;

const SENTENCE: &str = "Flights from New York and LA to London, Paris and Rio de Janeiro \
                        were delayed, said a German official in Düsseldorf. ";

fn bench_read(c: &mut Criterion) {
    let gazetteer = Arc::new(
        Gazetteer::build_from_paths(&GazetteerPaths::default(), 0).expect("bundled data"),
    );
    let mut geo = GeoText::new(gazetteer);

    let mut group = c.benchmark_group("read");
    for &repeat in &[1usize, 10, 100] {
        let text = SENTENCE.repeat(repeat);
        group.throughput(Throughput::Bytes(text.len() as u64));

        for (label, options) in [
            ("fuzzy", ReadOptions::default()),
            ("capitalized", ReadOptions::default().fuzzy(false)),
        ] {
            group.bench_with_input(BenchmarkId::new(label, repeat), &text, |b, text| {
                b.iter(|| geo.read(black_box(text), &options).cities().count())
            });
        }
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let paths = GazetteerPaths::default();
    c.bench_function("build_from_paths", |b| {
        b.iter(|| Gazetteer::build_from_paths(black_box(&paths), 0).expect("bundled data"))
    });
}

criterion_group!(benches, bench_read, bench_build);
criterion_main!(benches);
