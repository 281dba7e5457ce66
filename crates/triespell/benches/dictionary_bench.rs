// Criterion benchmarks for the dictionary lifecycle.
//
// The word list is generated deterministically so the benchmarks need no
// external data. Set TRIESPELL_DICTIONARY to a word-list path to also
// benchmark loading a real dictionary.
//
// Run:
//   cargo bench -p triespell
//   TRIESPELL_DICTIONARY=/path/to/large cargo bench -p triespell

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use triespell::Dictionary;

// ---------------------------------------------------------------------------
// Word generation
// ---------------------------------------------------------------------------

/// 20 000 pseudo-random lowercase words of 2 to 12 letters, newline separated.
fn generated_word_list() -> String {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    let mut list = String::new();
    for _ in 0..20_000 {
        let len = 2 + (next() % 11) as usize;
        for _ in 0..len {
            list.push((b'a' + (next() % 26) as u8) as char);
        }
        list.push('\n');
    }
    list
}

fn loaded(list: &str) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.load_from_reader(list.as_bytes())
        .expect("generated word list loads");
    dict
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_load(c: &mut Criterion) {
    let list = generated_word_list();
    c.bench_function("load_20k_words", |b| {
        b.iter_batched(
            Dictionary::new,
            |mut dict| {
                dict.load_from_reader(black_box(list.as_bytes())).unwrap();
                dict
            },
            BatchSize::SmallInput,
        );
    });

    let Ok(path) = std::env::var("TRIESPELL_DICTIONARY") else {
        eprintln!("[bench_load] TRIESPELL_DICTIONARY not set, skipping file load");
        return;
    };
    c.bench_function("load_dictionary_file", |b| {
        b.iter_batched(
            Dictionary::new,
            |mut dict| {
                dict.load(black_box(&path)).expect("TRIESPELL_DICTIONARY loads");
                dict
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_check(c: &mut Criterion) {
    let list = generated_word_list();
    let dict = loaded(&list);
    let hits: Vec<&str> = list.lines().take(1_000).collect();
    let misses: Vec<String> = hits.iter().map(|w| format!("{w}q'")).collect();

    c.bench_function("check_1000_hits", |b| {
        b.iter(|| {
            for word in &hits {
                black_box(dict.check(black_box(word)));
            }
        });
    });

    c.bench_function("check_1000_misses", |b| {
        b.iter(|| {
            for word in &misses {
                black_box(dict.check(black_box(word)));
            }
        });
    });
}

fn bench_size(c: &mut Criterion) {
    let dict = loaded(&generated_word_list());
    c.bench_function("size_20k_words", |b| b.iter(|| black_box(dict.size())));
}

fn bench_unload(c: &mut Criterion) {
    let list = generated_word_list();
    c.bench_function("unload_20k_words", |b| {
        b.iter_batched(
            || loaded(&list),
            |mut dict| black_box(dict.unload()),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_load, bench_check, bench_size, bench_unload);
criterion_main!(benches);
