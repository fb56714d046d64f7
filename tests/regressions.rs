use probetable::*;
use rand::{thread_rng, Rng};
use std::collections::HashMap;

#[test]
fn random_insert_erase_workload() {
    #[cfg(not(miri))]
    const ITERATIONS: usize = 100_000;
    #[cfg(miri)]
    const ITERATIONS: usize = 100;

    let mut rng = thread_rng();
    let mut dict = Dictionary::with_capacity(1);
    let mut model = HashMap::new();
    for i in 0..ITERATIONS {
        let el = rng.gen_range(0..1000);
        if rng.gen_bool(0.6) {
            assert_eq!(dict.insert(el, i), model.insert(el, i));
        } else {
            assert_eq!(dict.remove(&el), model.remove(&el));
        }
        assert_eq!(dict.len(), model.len());
    }
    for (k, v) in &model {
        assert_eq!(dict.get(k), Some(v));
    }
}

#[test]
fn erase_in_wrapped_run() {
    // keys whose home slots sit at the end of the array and wrap to the front
    let mut dict = Dictionary::with_config_and_hasher(
        Config::default()
            .with_initial_capacity(8)
            .with_max_load_factor(1.0)
            .with_min_load_factor(0.0),
        std::hash::BuildHasherDefault::<Identity>::default(),
    )
    .unwrap();
    for k in [6u64, 7, 14, 15, 22] {
        dict.insert(k, k);
    }
    assert_eq!(dict.capacity(), 8);

    assert_eq!(dict.remove(&6), Some(6));
    for k in [7u64, 14, 15, 22] {
        assert_eq!(dict.get(&k), Some(&k));
    }
    assert_eq!(dict.remove(&15), Some(15));
    for k in [7u64, 14, 22] {
        assert_eq!(dict.get(&k), Some(&k));
    }
}

#[derive(Default)]
struct Identity(u64);

impl std::hash::Hasher for Identity {
    fn finish(&self) -> u64 {
        self.0
    }
    fn write(&mut self, _: &[u8]) {
        unimplemented!()
    }
    fn write_u64(&mut self, n: u64) {
        self.0 = n;
    }
}
