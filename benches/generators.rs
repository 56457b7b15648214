use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use explore::{generate_bag, generate_epsilon_greedy, generate_softmax};
use std::hint::black_box;

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for &n in &[4usize, 64, 1024] {
        // Deterministic, mildly spread scores and votes.
        let scores: Vec<f32> = (0..n).map(|i| ((i * 37 + 11) % 101) as f32 / 10.0).collect();
        let votes: Vec<u32> = (0..n).map(|i| ((i * 17 + 3) % 7) as u32).collect();
        let mut pdf = vec![0.0f32; n];

        group.bench_with_input(BenchmarkId::new("epsilon_greedy", n), &n, |b, &n| {
            b.iter(|| {
                generate_epsilon_greedy(0.1, black_box(n as u32 / 2), &mut pdf).unwrap();
                black_box(&pdf);
            })
        });

        group.bench_with_input(BenchmarkId::new("softmax", n), &n, |b, &_n| {
            b.iter(|| {
                generate_softmax(2.0, black_box(&scores), &mut pdf).unwrap();
                black_box(&pdf);
            })
        });

        group.bench_with_input(BenchmarkId::new("bag", n), &n, |b, &_n| {
            b.iter(|| {
                generate_bag(black_box(&votes), &mut pdf).unwrap();
                black_box(&pdf);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generators);
criterion_main!(benches);
