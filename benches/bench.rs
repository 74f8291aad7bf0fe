//! Criterion benchmarks for thesaurus construction and text swapping.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use simplifier::thesaurus::Thesaurus;

/// Generate a dictionary of `count` canonical words.
fn generate_dictionary(count: usize) -> String {
    (0..count)
        .map(|i| format!("word{i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate one synonym group per dictionary word, with the anchor in the middle.
fn generate_word_list(count: usize) -> String {
    (0..count)
        .map(|i| format!("syn{i}a,syn{i}b,word{i},syn{i}c"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn generate_text(words: usize) -> String {
    (0..words)
        .map(|i| {
            if i % 3 == 0 {
                format!("syn{}b", i % 1000)
            } else {
                format!("filler{i}")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("thesaurus_build");

    for size in [100, 1_000, 10_000] {
        let dictionary = generate_dictionary(size);
        let word_list = generate_word_list(size);

        group.throughput(Throughput::Bytes((dictionary.len() + word_list.len()) as u64));
        group.bench_function(format!("from_sources_{size}"), |b| {
            b.iter(|| Thesaurus::from_sources(black_box(&dictionary), black_box(&word_list)))
        });
    }

    group.finish();
}

fn bench_swap_text(c: &mut Criterion) {
    let thesaurus = Thesaurus::from_sources(&generate_dictionary(1_000), &generate_word_list(1_000));
    let text = generate_text(1_000);

    let mut group = c.benchmark_group("swap_text");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("swap_text_1000_words", |b| {
        b.iter(|| thesaurus.swap_text(black_box(&text)))
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_swap_text);
criterion_main!(benches);
