use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ordtree::Map;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

// Every insertion rebalances the whole tree, so sizes stay small.
const SIZES: [usize; 2] = [100, 1_000];

fn insert_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_rand");

    for n in SIZES {
        let mut map = Map::new();
        // setup
        let mut rng = StdRng::seed_from_u64(n as u64);

        for _ in 0..n {
            let i = rng.gen_range(0..n);
            map.set(i, i);
        }

        // measure
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let k = rng.gen_range(0..n);
                map.set(k, k);
            });
        });

        black_box(map);
    }

    group.finish();
}

fn insert_seq(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_seq");

    for n in SIZES {
        let mut map = Map::new();
        // setup
        for i in 0..n {
            map.set(i * 2, i * 2);
        }

        // measure
        let mut i = 1;
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                map.set(i, i);
                i = (i + 2) % n;
            });
        });

        black_box(map);
    }

    group.finish();
}

fn find_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_rand");

    for n in SIZES {
        let mut map = Map::new();
        // setup
        let mut rng = StdRng::seed_from_u64(n as u64);
        let mut keys: Vec<_> = (0..n).map(|_| rng.gen_range(0..n)).collect();

        for &k in &keys {
            map.set(k, k);
        }

        keys.shuffle(&mut rng);

        // measure
        let mut i = 0;
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let t = map.get(&keys[i]);
                i = (i + 1) % n;
                black_box(t);
            });
        });
    }

    group.finish();
}

fn find_seq(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_seq");

    for n in SIZES {
        let mut map = Map::new();
        // setup
        for i in 0..n {
            map.set(i, i);
        }

        // measure
        let mut i = 0;
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let x = map.get(&i);
                i = (i + 1) % n;
                black_box(x);
            });
        });
    }

    group.finish();
}

fn iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");

    for n in SIZES {
        let mut map = Map::<u32, u32>::new();
        let mut rng = StdRng::seed_from_u64(n as u64);

        for _ in 0..n {
            map.set(rng.gen(), rng.gen());
        }

        group.bench_with_input(BenchmarkId::from_parameter(n), &map, |b, map| {
            b.iter(|| {
                for entry in map.iter() {
                    black_box(entry);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, insert_rand, insert_seq, find_rand, find_seq, iter);
criterion_main!(benches);
