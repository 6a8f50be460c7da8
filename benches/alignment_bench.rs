// ===== readalign/benches/alignment_bench.rs =====
use criterion::{criterion_group, criterion_main, Criterion};
use readalign::align::{Analyzer, SpokenWord};
use readalign::config::Config;
use std::hint::black_box;

const PASSAGE: &str = "once upon a time there was a small fox who lived at the \
edge of a quiet forest every morning the fox would run down to the river and \
watch the water slide over the smooth grey stones the other animals thought \
the fox was strange but the fox did not mind strange at all";

fn setup_inputs() -> (Vec<String>, Vec<SpokenWord>) {
    // Repeat the passage to a few hundred words, the upper end of a
    // single reading selection.
    let mut reference: Vec<String> = Vec::new();
    while reference.len() < 240 {
        reference.extend(PASSAGE.split_whitespace().map(|w| w.to_string()));
    }

    // A realistic reading: occasional fillers, stutters, one word in
    // twelve dropped, one in ten mangled.
    let mut spoken = Vec::new();
    for (i, word) in reference.iter().enumerate() {
        if i % 12 == 5 {
            continue;
        }
        if i % 17 == 3 {
            spoken.push(SpokenWord::new("um"));
        }
        if i % 23 == 7 {
            spoken.push(SpokenWord::new(word.clone()));
        }
        let text = if i % 10 == 4 {
            let mut mangled = word.clone();
            mangled.push('s');
            mangled
        } else {
            word.clone()
        };
        spoken.push(SpokenWord::with_timing(
            text,
            i as f64 * 0.4,
            i as f64 * 0.4 + 0.3,
        ));
    }
    (reference, spoken)
}

fn criterion_benchmark(c: &mut Criterion) {
    let analyzer = Analyzer::new(Config::default());
    let (reference, spoken) = setup_inputs();

    c.bench_function("analyze (240-word passage)", |b| {
        b.iter(|| analyzer.analyze(black_box(&reference), black_box(&spoken)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
