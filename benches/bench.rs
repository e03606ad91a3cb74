use criterion::{criterion_group, criterion_main, Bencher, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rb_tree::RbTree;
use std::hint::black_box;

struct KeyGenerator {
    rng: StdRng,
    limit: u32,
}
impl KeyGenerator {
    fn new() -> Self {
        const LIMIT: u32 = 1_000_000;
        Self {
            rng: StdRng::from_seed([0; 32]),
            limit: LIMIT,
        }
    }

    fn next(&mut self) -> u32 {
        self.rng.gen_range(0..self.limit)
    }
}

fn keys(count: usize) -> Vec<u32> {
    let mut gen = KeyGenerator::new();
    std::iter::repeat_with(|| gen.next()).take(count).collect()
}

// insert helper fn
fn rb_tree_insert(count: usize, bench: &mut Bencher) {
    let keys = keys(count);
    bench.iter(|| {
        let mut tree = RbTree::new();
        for k in keys.iter().copied() {
            black_box(tree.insert(k));
        }
    });
}

// insert and remove helper fn
fn rb_tree_insert_remove(count: usize, bench: &mut Bencher) {
    let keys = keys(count);
    bench.iter(|| {
        let mut tree = RbTree::new();
        for k in keys.iter().copied() {
            black_box(tree.insert(k));
        }
        for k in &keys {
            black_box(tree.remove(k));
        }
    });
}

// find helper fn
fn rb_tree_find(count: usize, bench: &mut Bencher) {
    let keys = keys(count);
    let tree: RbTree<u32> = keys.iter().copied().collect();
    bench.iter(|| {
        for k in &keys {
            black_box(tree.find(k));
        }
    });
}

// sorted export helper fn
fn rb_tree_to_sorted_vec(count: usize, bench: &mut Bencher) {
    let tree: RbTree<u32> = keys(count).into_iter().collect();
    bench.iter(|| black_box(tree.to_sorted_vec(count)));
}

fn bench_rb_tree_insert(c: &mut Criterion) {
    c.bench_function("bench_rb_tree_insert_100", |b| rb_tree_insert(100, b));
    c.bench_function("bench_rb_tree_insert_1000", |b| rb_tree_insert(1000, b));
    c.bench_function("bench_rb_tree_insert_10,000", |b| {
        rb_tree_insert(10_000, b)
    });
    c.bench_function("bench_rb_tree_insert_100,000", |b| {
        rb_tree_insert(100_000, b)
    });
}

fn bench_rb_tree_insert_remove(c: &mut Criterion) {
    c.bench_function("bench_rb_tree_insert_remove_100", |b| {
        rb_tree_insert_remove(100, b)
    });
    c.bench_function("bench_rb_tree_insert_remove_1000", |b| {
        rb_tree_insert_remove(1000, b)
    });
    c.bench_function("bench_rb_tree_insert_remove_10,000", |b| {
        rb_tree_insert_remove(10_000, b)
    });
    c.bench_function("bench_rb_tree_insert_remove_100,000", |b| {
        rb_tree_insert_remove(100_000, b)
    });
}

fn bench_rb_tree_query(c: &mut Criterion) {
    c.bench_function("bench_rb_tree_find_1000", |b| rb_tree_find(1000, b));
    c.bench_function("bench_rb_tree_find_100,000", |b| {
        rb_tree_find(100_000, b)
    });
    c.bench_function("bench_rb_tree_to_sorted_vec_1000", |b| {
        rb_tree_to_sorted_vec(1000, b)
    });
    c.bench_function("bench_rb_tree_to_sorted_vec_100,000", |b| {
        rb_tree_to_sorted_vec(100_000, b)
    });
}

fn criterion_config() -> Criterion {
    Criterion::default().configure_from_args().without_plots()
}

criterion_group! {
    name = benches_basic_op;
    config = criterion_config();
    targets = bench_rb_tree_insert, bench_rb_tree_insert_remove,
}

criterion_group! {
    name = benches_query;
    config = criterion_config();
    targets = bench_rb_tree_query
}

criterion_main!(benches_basic_op, benches_query);
