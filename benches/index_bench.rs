//! Benchmarks for populating, probing, walking and releasing the index.
//!
//! Names are built from syllables so they spread across groups and blocks
//! the way real given names do, and the corpus is identical on every run.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hashblocks::{normalize, NameIndex};

// ============================================================================
// NAME CORPUS
// ============================================================================

const ONSETS: &[&str] = &[
    "B", "Br", "C", "Ch", "D", "El", "F", "G", "Gr", "H", "J", "K", "L", "M", "N", "P", "R",
    "S", "Sh", "T", "Tr", "V", "W", "Y", "Z",
];

const NUCLEI: &[&str] = &["a", "e", "i", "o", "u", "y", "ai", "ea"];

const CODAS: &[&str] = &[
    "n", "ll", "m", "ne", "ra", "lia", "son", "tt", "na", "rk", "x", "dy", "belle",
];

/// Corpus sizes to benchmark
const SIZES: &[usize] = &[100, 1_000, 10_000];

/// `count` names, deterministic, with some repeats once the syllables run out.
fn generate_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let onset = ONSETS[i % ONSETS.len()];
            let nucleus = NUCLEI[(i / ONSETS.len()) % NUCLEI.len()];
            let coda = CODAS[(i / (ONSETS.len() * NUCLEI.len())) % CODAS.len()];
            format!("{onset}{nucleus}{coda}")
        })
        .collect()
}

fn build(names: &[String]) -> NameIndex {
    let mut index = NameIndex::new();
    let errors = index.insert_all(names);
    assert!(errors.is_empty(), "corpus has invalid names: {errors:?}");
    index
}

// ============================================================================
// BENCHMARKS
// ============================================================================

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for input in ["Tim", "Lincoln", "Maximilianus", "R2D2"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), &input, |b, input| {
            b.iter(|| normalize(black_box(input)))
        });
    }
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &size in SIZES {
        let names = generate_names(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &names, |b, names| {
            b.iter(|| build(black_box(names)))
        });
    }
    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    for &size in SIZES {
        let names = generate_names(size);
        let index = build(&names);
        let hit = names[size / 2].as_str();

        group.bench_with_input(BenchmarkId::new("hit", size), &hit, |b, name| {
            b.iter(|| index.find(black_box(name)))
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &"Quentin", |b, name| {
            b.iter(|| index.find(black_box(name)))
        });
        group.bench_with_input(BenchmarkId::new("invalid", size), &"Q1", |b, name| {
            b.iter(|| index.find(black_box(name)))
        });
    }
    group.finish();
}

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");
    for &size in SIZES {
        let index = build(&generate_names(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &index, |b, index| {
            b.iter(|| black_box(index).enumerate().count())
        });
    }
    group.finish();
}

fn bench_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("release");
    for &size in SIZES {
        let names = generate_names(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &names, |b, names| {
            b.iter_batched(
                || build(names),
                |mut index| index.release(),
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_insert,
    bench_find,
    bench_enumerate,
    bench_release,
);

criterion_main!(benches);
