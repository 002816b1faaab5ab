use criterion::{criterion_group, criterion_main, Criterion};
use seqcover::SuffixTree;

const BASES: [i64; 4] = [0, 1, 2, 3];

/// Deterministic pseudo-codon sequence, length `len`, seeded by `seed`. Not
/// cryptographic, just enough spread to avoid trivially degenerate trees.
fn pseudo_sequence(seed: u64, len: usize) -> Vec<i64> {
    let mut state = seed.wrapping_mul(2_862_933_555_777_941_757).wrapping_add(1);
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
            BASES[((state >> 33) % 4) as usize]
        })
        .collect()
}

fn setup() -> Vec<Vec<i64>> {
    (0..6).map(|seed| pseudo_sequence(seed, 2_000)).collect()
}

fn compute(sequences: Vec<Vec<i64>>) {
    let tree = SuffixTree::build(&sequences).unwrap();
    let _ = tree.lcs(None);
}

fn benchmark(c: &mut Criterion) {
    c.bench_function("lcs over codon-like sequences", move |b| {
        b.iter_with_large_setup(setup, compute);
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark
}

criterion_main!(benches);
