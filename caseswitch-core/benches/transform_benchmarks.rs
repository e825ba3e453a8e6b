//! Performance benchmarks for the transformation engine
//!
//! Run with: cargo bench --bench transform_benchmarks

use caseswitch_core::{transform, AcronymSet, Mode, MAX_TEXT_LENGTH};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base_sentence = "The quick brown fox jumps over the lazy dog: café_crème and NASA-style fooBar. ";
    let repeat_count = size / base_sentence.len() + 1;

    let mut text = base_sentence.repeat(repeat_count);
    let mut cut = size.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

/// Benchmark every mode on a medium-sized input
fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("modes");
    let text = generate_text(10_240);
    let acronyms = AcronymSet::new();

    group.throughput(Throughput::Bytes(text.len() as u64));
    for mode in Mode::ALL {
        group.bench_with_input(BenchmarkId::new("transform", mode.id()), &text, |b, text| {
            b.iter(|| transform(black_box(text), mode.id(), "en", &acronyms));
        });
    }

    group.finish();
}

/// Benchmark different text sizes up to the length cap
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let acronyms = AcronymSet::new();

    for size in [1024, 10_240, MAX_TEXT_LENGTH] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("titleCase", size), &text, |b, text| {
            b.iter(|| transform(black_box(text), "titleCase", "en", &acronyms));
        });
    }

    group.finish();
}

/// Benchmark acronym lookups with growing acronym lists
fn bench_acronym_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("acronym_counts");
    let text = generate_text(10_240);

    for count in [0usize, 10, 100] {
        let mut acronyms: AcronymSet = (0..count).map(|i| format!("AC{i}")).collect();
        acronyms.insert("NASA");

        group.bench_with_input(BenchmarkId::new("lowercase", count), &text, |b, text| {
            b.iter(|| transform(black_box(text), "lowercase", "en", &acronyms));
        });
    }

    group.finish();
}

/// Benchmark input that exceeds the length cap
fn bench_truncation(c: &mut Criterion) {
    let text = generate_text(MAX_TEXT_LENGTH * 2);
    let acronyms = AcronymSet::new();

    c.bench_function("truncated_uppercase", |b| {
        b.iter(|| transform(black_box(&text), "uppercase", "en", &acronyms));
    });
}

criterion_group!(
    benches,
    bench_modes,
    bench_text_sizes,
    bench_acronym_counts,
    bench_truncation
);
criterion_main!(benches);
