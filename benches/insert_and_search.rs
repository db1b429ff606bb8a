use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dictionary_search::{TrieStore, MAX_WORD_LENGTH};


fn random_words(rng: &mut StdRng, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=MAX_WORD_LENGTH);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x7121e);
    let words = random_words(&mut rng, 10_000);
    let probes = random_words(&mut rng, 10_000);

    let mut trie = TrieStore::new();
    trie.insert_all(words.iter().map(String::as_str)).unwrap();

    {
        let mut group = c.benchmark_group("insert");
        group.sample_size(20);
        group.bench_function("10k random words", |b| b.iter_batched(
            TrieStore::new,
            |mut fresh| fresh.insert_all(words.iter().map(String::as_str)).unwrap(),
            BatchSize::LargeInput,
        ));
    }

    {
        let mut group = c.benchmark_group("contains");
        group.bench_function("10k inserted words", |b| b.iter(||
            words.iter().filter(|w| trie.contains(w).unwrap()).count()));
        group.bench_function("10k random probes", |b| b.iter(||
            probes.iter().filter(|w| trie.contains(w).unwrap()).count()));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
