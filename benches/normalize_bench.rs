// Criterion benchmark for the key normalizer.
// Run with `cargo bench --bench normalize_bench`.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use babelkey::normalize;

const INPUTS: &[(&str, &str)] = &[
    ("ascii_clean", "serbo-croatian"),
    ("ascii_mixed_case", "Mandarin  Chinese!"),
    ("latin_accents", "Français, Türkçe, Việt"),
    ("ligatures_fullwidth", "ﬁnnish Ｅｎｇｌｉｓｈ"),
    ("cyrillic", "Русский язык"),
    ("cjk", "普通话 / 日本語 / 한국어"),
];

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for (name, input) in INPUTS {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(*name, |b| b.iter(|| normalize(black_box(input))));
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
