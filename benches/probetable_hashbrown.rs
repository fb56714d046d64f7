/* Benchmarks from `hashbrown` (https://github.com/rust-lang/hashbrown),
 * adapted to probetable for comparison:
 *
 * This benchmark suite contains some benchmarks along a set of dimensions:
 *   Int key distribution: low bit heavy, top bit heavy, and random.
 *   Task: basic functionality: insert, insert_erase, lookup, lookup_fail, iter
 *
 * For the associated license information, please refer to hashbrown.LICENSE.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use probetable::{Dictionary, ProbingTable};

const SIZE: usize = 1000;

#[derive(Clone, Copy)]
struct RandomKeys {
    state: usize,
}

impl RandomKeys {
    fn new() -> Self {
        RandomKeys { state: 0 }
    }
}

impl Iterator for RandomKeys {
    type Item = usize;
    fn next(&mut self) -> Option<usize> {
        // Add 1 then multiply by some 32 bit prime.
        self.state = self.state.wrapping_add(1).wrapping_mul(3_787_392_781);
        Some(self.state)
    }
}

macro_rules! bench_suite {
    ($bench_macro:ident, $bench_fn_name:ident, $group_name:expr $(,)?) => {
        fn $bench_fn_name(c: &mut Criterion) {
            let mut group = c.benchmark_group($group_name);
            group.throughput(Throughput::Elements(SIZE as u64));

            $bench_macro!(group, 0.., "low");
            $bench_macro!(group, (0..).map(usize::swap_bytes), "high");
            $bench_macro!(group, RandomKeys::new(), "random");

            group.finish();
        }
    };
}

macro_rules! bench_insert {
    ($group:ident, $keydist:expr, $bench_id: expr) => {
        $group.bench_function(BenchmarkId::from_parameter($bench_id), |b| {
            let mut dict: Dictionary<_, _> = Dictionary::with_capacity(SIZE * 2);
            b.iter(|| {
                dict.clear();
                ($keydist).take(SIZE).for_each(|i| {
                    dict.insert(i, i);
                });
                black_box(&mut dict);
            });
        });
    };
}

bench_suite!(
    bench_insert,
    insert_probetable_hashbrown,
    "insert_probetable_hashbrown",
);

macro_rules! bench_insert_erase {
    ($group:ident, $keydist:expr, $bench_id: expr) => {
        let mut base: Dictionary<_, _> = Dictionary::with_capacity(SIZE * 2);
        ($keydist).take(SIZE).for_each(|i| {
            base.insert(i, i);
        });
        let skip = ($keydist).take(SIZE);

        $group.bench_function(BenchmarkId::from_parameter($bench_id), |b| {
            b.iter(|| {
                let mut dict = base.clone();
                let mut add_iter = skip.clone();
                let mut remove_iter = $keydist;

                // While keeping the size constant,
                // replace the first keydist with the second.
                (&mut add_iter)
                    .zip(&mut remove_iter)
                    .take(SIZE)
                    .for_each(|(add, remove)| {
                        dict.insert(add, add);
                        black_box(dict.remove(&remove));
                    });
                black_box(&mut dict);
            });
        });
    };
}

bench_suite!(
    bench_insert_erase,
    insert_erase_probetable_hashbrown,
    "insert_erase_probetable_hashbrown",
);

/// A raw table holding the first `SIZE` keys of a distribution, each mapped to itself.
fn filled(keys: impl Iterator<Item = usize>) -> ProbingTable<usize, usize> {
    let mut table = ProbingTable::with_capacity(SIZE * 2);
    table.extend(keys.take(SIZE).map(|i| (i, i)));
    table
}

macro_rules! bench_find {
    ($group:ident, $keydist:expr, $bench_id: expr) => {
        let table = filled($keydist);

        $group.bench_function(BenchmarkId::from_parameter($bench_id), |b| {
            b.iter(|| {
                ($keydist).take(SIZE).for_each(|i| {
                    black_box(table.find(&i));
                });
            });
        });
    };
}

bench_suite!(
    bench_find,
    find_probetable_hashbrown,
    "find_probetable_hashbrown",
);

macro_rules! bench_contains_absent {
    ($group:ident, $keydist:expr, $bench_id: expr) => {
        let mut iter = $keydist;
        let table = filled(&mut iter);

        // misses walk the whole run up to the next empty slot
        $group.bench_function(BenchmarkId::from_parameter($bench_id), |b| {
            b.iter(|| {
                (&mut iter).take(SIZE).for_each(|i| {
                    black_box(table.contains(&i));
                });
            });
        });
    };
}

bench_suite!(
    bench_contains_absent,
    contains_absent_probetable_hashbrown,
    "contains_absent_probetable_hashbrown",
);

macro_rules! bench_slot_order_iter {
    ($group:ident, $keydist:expr, $bench_id: expr) => {
        let table = filled($keydist);

        $group.bench_function(BenchmarkId::from_parameter($bench_id), |b| {
            b.iter(|| black_box(table.values().fold(0usize, |acc, v| acc.wrapping_add(*v))));
        });
    };
}

bench_suite!(
    bench_slot_order_iter,
    iter_probetable_hashbrown,
    "iter_probetable_hashbrown",
);

criterion_group!(
    benches,
    insert_probetable_hashbrown,
    insert_erase_probetable_hashbrown,
    find_probetable_hashbrown,
    contains_absent_probetable_hashbrown,
    iter_probetable_hashbrown,
);
criterion_main!(benches);
