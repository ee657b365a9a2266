use criterion::{black_box, criterion_group, criterion_main, Criterion};
use onceseq::{
    concat, filter, fold, key_by, map, maximum_by, pairwise, slice, sum, to_array, OnceIteratorExt,
};

fn make_values(n: usize) -> Vec<i64> {
    (0..n as i64).map(|i| (i * 7919) % 1000).collect()
}

fn bench_transform_chain(c: &mut Criterion) {
    let values = make_values(10_000);
    c.bench_function("filter_map_slice_sum", |b| {
        b.iter(|| {
            let chain = slice(
                map(filter(values.iter().copied(), |n, _| n % 3 != 0), |n, i| {
                    n + i as i64
                }),
                100,
                Some(9_000),
            );
            black_box(sum(chain))
        })
    });
    c.bench_function("method_chain_pairwise", |b| {
        b.iter(|| {
            let diffs = values
                .iter()
                .copied()
                .drop_n(1)
                .pairwise()
                .map_indexed(|(a, b), _| b - a);
            black_box(fold(diffs, |acc, d, _| acc.max(d), i64::MIN))
        })
    });
}

fn bench_terminals(c: &mut Criterion) {
    let values = make_values(10_000);
    let nested: Vec<Vec<i64>> = values.chunks(64).map(|c| c.to_vec()).collect();
    c.bench_function("concat_to_array", |b| {
        b.iter(|| black_box(to_array(concat(nested.iter().cloned()))))
    });
    c.bench_function("maximum_by", |b| {
        b.iter(|| black_box(maximum_by(values.iter(), |n, _| **n % 97)))
    });
    c.bench_function("key_by", |b| {
        b.iter(|| black_box(key_by(values.iter().copied(), |n, _| n % 16)))
    });
}

criterion_group!(sequences, bench_transform_chain, bench_terminals);
criterion_main!(sequences);
