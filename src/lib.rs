//! A hash table with open addressing and linear probing.
//!
//! [`ProbingTable`] stores its entries directly in a fixed-size slot array. A key's home slot
//! is its hash modulo the capacity; on collision the table scans forward one slot at a time,
//! wrapping around at the end, until it finds the key or an empty slot. Removal shifts the
//! rest of the probe run backwards into the hole, so lookups never need tombstones.
//!
//! The table keeps its load factor (entries divided by slots) within bounds:
//!
//!  - an insert that would take the load factor above the maximum first doubles the
//!    capacity, as many times as needed;
//!  - a removal that leaves the load factor below the minimum halves the capacity, as many
//!    times as the bounds allow.
//!
//! Both bounds, the initial capacity and a floor under shrinking are set through a
//! [`Config`]. The defaults are 10 slots and load factors between 0.2 and 0.7.
//!
//! [`ProbingTable::insert`] is a blind insert: it never checks whether the key is already
//! present. The two adapters built on top of it do:
//!
//!  - [`Dictionary`] maps each key to one value; inserting an existing key overwrites it.
//!  - [`Set`] holds each value once; inserting an existing value is a no-op.
//!
//! # Hashing
//!
//! The hash function is a [`BuildHasher`](std::hash::BuildHasher) chosen when the table is
//! created. By default this is [`DefaultHashBuilder`]. The [`hash`] module has deterministic
//! alternatives, and any `BuildHasher` works, including one that hashes every key to the
//! same value (every operation is then a linear scan, but still correct).
//!
//! ```
//! use probetable::{Config, Dictionary, Djb2BuildHasher};
//!
//! let config = Config::default().with_initial_capacity(4).with_max_load_factor(0.5);
//! let mut words = Dictionary::with_config_and_hasher(config, Djb2BuildHasher).unwrap();
//!
//! for word in "a rose is a rose is a rose".split(' ') {
//!     *words.entry_or_insert_with(word, || 0) += 1;
//! }
//!
//! assert_eq!(words["rose"], 3);
//! assert_eq!(words.len(), 3);
//! assert_eq!(words.capacity(), 8);
//! ```
//!
//! # Logging
//!
//! Every rehash is logged at `debug` level through the [`log`] crate, and every entry moved
//! by a removal at `trace` level. Nothing is logged unless the application installs a logger.
//!
//! # Optional features
//!
//!  - `serde`: `Serialize` and `Deserialize` for [`Dictionary`] (as a map) and [`Set`] (as a
//!    sequence).
//!  - `rayon`: `ParallelExtend` and `FromParallelIterator` for [`Dictionary`] and [`Set`].

mod config;
mod dictionary;
mod error;
pub mod hash;
pub mod iter;
mod node;
mod raw;
mod set;
mod table;

#[cfg(feature = "rayon")]
mod rayon_impls;

#[cfg(feature = "serde")]
mod serde_impls;

pub use config::{
    Config, DEFAULT_CAPACITY, DEFAULT_MAX_LOAD_FACTOR, DEFAULT_MIN_CAPACITY,
    DEFAULT_MIN_LOAD_FACTOR,
};
pub use dictionary::Dictionary;
pub use error::Error;
pub use hash::{Djb2BuildHasher, Fnv1aBuildHasher, MurmurBuildHasher};
pub use set::Set;
pub use table::{ProbingTable, Resize};

/// Default hasher for [`ProbingTable`], [`Dictionary`] and [`Set`].
pub type DefaultHashBuilder = ahash::RandomState;
