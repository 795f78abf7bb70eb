use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordcheck::spelling::dictionary::WordDictionary;
use wordcheck::spelling::index::OrderedWordIndex;
use wordcheck::spelling::scorer::{SuggestionScorer, lcs_length};

fn generate_words(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let len = rng.random_range(3..11);
            (0..len)
                .map(|_| char::from(b'a' + rng.random_range(0..26u8)))
                .collect()
        })
        .collect()
}

fn bench_scorer(c: &mut Criterion) {
    let words = generate_words(5000);
    let mut dictionary = WordDictionary::default();
    for word in &words {
        dictionary.add(word);
    }
    let scorer = SuggestionScorer::new();

    let mut group = c.benchmark_group("suggestion_scorer");

    group.bench_function("lcs_length", |b| {
        b.iter(|| lcs_length(black_box("misspeling"), black_box("misspelling")))
    });

    group.bench_function("best_suggestion_5000", |b| {
        b.iter(|| scorer.best_suggestion(black_box("recieve"), dictionary.entries()))
    });

    group.finish();
}

fn bench_index(c: &mut Criterion) {
    let words = generate_words(5000);

    c.bench_function("index_insert_then_drain_5000", |b| {
        b.iter(|| {
            let mut index = OrderedWordIndex::new();
            for word in &words {
                index.insert(black_box(word));
            }
            for word in &words {
                index.delete(word).unwrap();
            }
            index
        })
    });
}

criterion_group!(benches, bench_scorer, bench_index);
criterion_main!(benches);
