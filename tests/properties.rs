use probetable::{Config, Dictionary, ProbingTable, Set};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, BuildHasherDefault};

use hasher::ZeroHasher;

type Zero = BuildHasherDefault<ZeroHasher>;

fn under_max<K, V, S>(table: &ProbingTable<K, V, S>) -> bool {
    table.load_factor() <= table.max_load_factor()
}

fn over_min<K, V, S>(table: &ProbingTable<K, V, S>) -> bool {
    table.is_empty()
        || table.load_factor() >= table.min_load_factor()
        || table.capacity() / 2 < table.min_capacity()
}

#[quickcheck]
fn inserted_keys_are_found(keys: HashSet<u16>) -> bool {
    let mut table = ProbingTable::with_capacity(1);
    keys.iter().all(|&k| {
        table.insert(k, ());
        table.contains(&k)
    }) && keys.iter().all(|k| table.contains(k))
}

#[quickcheck]
fn load_factor_stays_in_bounds(ops: Vec<(u8, bool)>) -> bool {
    let mut dict = Dictionary::new();
    ops.into_iter().all(|(key, insert)| {
        if insert {
            dict.insert(key, ());
            under_max(dict.as_table())
        } else if dict.remove(&key).is_some() {
            under_max(dict.as_table()) && over_min(dict.as_table())
        } else {
            true
        }
    })
}

#[quickcheck]
fn count_is_inserts_minus_erases(keys: HashSet<u32>, erase: usize) -> TestResult {
    if erase > keys.len() {
        return TestResult::discard();
    }
    let mut table = ProbingTable::new();
    for &k in &keys {
        table.insert(k, k);
    }
    for k in keys.iter().take(erase) {
        if table.erase(k).is_none() {
            return TestResult::failed();
        }
    }
    TestResult::from_bool(table.len() == keys.len() - erase)
}

#[quickcheck]
fn iteration_yields_len_entries(ops: Vec<(u8, bool)>) -> bool {
    let mut set = Set::new();
    for (value, insert) in ops {
        if insert {
            set.insert(value);
        } else {
            set.remove(&value);
        }
    }
    let table = set.as_table();
    table.iter().count() == table.len() && set.iter().len() == set.len()
}

fn matches_model<S: BuildHasher>(ops: Vec<(u8, bool)>, mut dict: Dictionary<u8, usize, S>) -> bool {
    let mut model = HashMap::new();
    for (i, (key, insert)) in ops.into_iter().enumerate() {
        if insert {
            if dict.insert(key, i) != model.insert(key, i) {
                return false;
            }
        } else if dict.remove(&key) != model.remove(&key) {
            return false;
        }
    }
    dict.len() == model.len() && model.iter().all(|(k, v)| dict.get(k) == Some(v))
}

#[quickcheck]
fn rehash_keeps_every_key(ops: Vec<(u8, bool)>) -> bool {
    matches_model(ops, Dictionary::with_capacity(1))
}

#[quickcheck]
fn rehash_keeps_every_key_under_tight_bounds(ops: Vec<(u8, bool)>) -> bool {
    let config = Config::default()
        .with_initial_capacity(2)
        .with_max_load_factor(0.9)
        .with_min_load_factor(0.45);
    matches_model(ops, Dictionary::with_config(config).unwrap())
}

#[quickcheck]
fn constant_hash_keeps_tail_reachable(n: u8, keep: u8) -> TestResult {
    if keep > n {
        return TestResult::discard();
    }
    let mut table = ProbingTable::<u8, (), Zero>::default();
    for k in 0..n {
        table.insert(k, ());
    }
    for k in 0..(n - keep) {
        table.erase(&k);
    }
    let tail = (n - keep)..n;
    TestResult::from_bool(
        table.len() == usize::from(keep)
            && (0..n).all(|k| table.contains(&k) == tail.contains(&k)),
    )
}

#[test]
fn ten_inserts_double_capacity_once() {
    let config = Config::default()
        .with_initial_capacity(10)
        .with_max_load_factor(0.7);
    let mut table = ProbingTable::with_config(config).unwrap();
    for i in 0..10 {
        table.insert(i, ());
        if i == 6 {
            assert_eq!(table.capacity(), 10);
        }
    }
    assert_eq!(table.capacity(), 20);
    assert!((0..10).all(|i| table.contains(&i)));
}

#[test]
fn erase_from_full_colliding_table() {
    let config = Config::default()
        .with_initial_capacity(10)
        .with_max_load_factor(1.0);
    let mut table =
        ProbingTable::<i32, (), Zero>::with_config_and_hasher(config, Zero::default()).unwrap();
    for i in 0..10 {
        table.insert(i, ());
    }
    assert_eq!(table.capacity(), 10);
    assert!((0..10).all(|i| table.is_occupied(i as usize) == Ok(true)));

    for i in 0..5 {
        assert_eq!(table.erase(&i), Some((i, ())));
    }
    assert!((5..10).all(|i| table.contains(&i)));
    assert!((0..5).all(|i| !table.contains(&i)));
    assert_eq!(table.capacity(), 10);
}
