//! Classification benchmarks
//!
//! Run with: cargo bench --bench classifier_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use intent_core::language::default_tagger;
use intent_core::{classify_batch, IntentClassifier, NoopObserver, Tagger};
use std::hint::black_box;
use std::sync::Arc;

const COMMANDS: &[&str] = &[
    "Can you turn up the music",
    "turn on the kitchen light",
    "next song please",
    "play some music in the kitchen",
    "Send text to Nate pick up milk on your way home",
    "turn down the music in the sun room",
    "what is the weather",
    "stop playin this song",
];

/// Tagging alone, without the cascade
fn bench_tagging(c: &mut Criterion) {
    let tagger = default_tagger().unwrap();
    let tokens: Vec<Vec<String>> = COMMANDS
        .iter()
        .map(|text| tagger.tokenize(&text.to_lowercase()))
        .collect();

    c.bench_function("tag_commands", |b| {
        b.iter(|| {
            for sentence in &tokens {
                black_box(tagger.tag(black_box(sentence)));
            }
        });
    });
}

/// Full classification of single sentences
fn bench_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_single");
    let tagger = default_tagger().unwrap();

    for text in [COMMANDS[0], COMMANDS[4]] {
        group.bench_with_input(BenchmarkId::from_parameter(text), &text, |b, text| {
            b.iter(|| {
                let classifier = IntentClassifier::with_tagger(
                    black_box(text),
                    tagger.as_ref(),
                    Arc::new(NoopObserver),
                )
                .unwrap();
                black_box(classifier.get())
            });
        });
    }

    group.finish();
}

/// Batch classification at increasing sizes
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_batch");
    let tagger = default_tagger().unwrap();

    for size in [8, 128, 2048] {
        let sentences: Vec<&str> = COMMANDS.iter().copied().cycle().take(size).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &sentences, |b, sentences| {
            b.iter(|| black_box(classify_batch(sentences, tagger.as_ref()).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tagging, bench_single, bench_batch);
criterion_main!(benches);
