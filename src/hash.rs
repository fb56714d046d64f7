//! Hash functions for [`ProbingTable`](crate::ProbingTable).
//!
//! A table takes its hash function as a [`BuildHasher`]. The default is
//! [`DefaultHashBuilder`](crate::DefaultHashBuilder) (`ahash`). The builders in this module
//! are small deterministic alternatives: the same key hashes to the same value in every
//! process, which makes slot placement reproducible.

use std::hash::{BuildHasher, Hasher};

/// Daniel J. Bernstein's `h * 33 + byte` string hash, seeded with 5381.
#[derive(Debug, Clone, Copy)]
pub struct Djb2Hasher(u64);

impl Default for Djb2Hasher {
    fn default() -> Self {
        Djb2Hasher(5381)
    }
}

impl Hasher for Djb2Hasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 << 5).wrapping_add(self.0).wrapping_add(u64::from(b));
        }
    }
}

/// 64-bit FNV-1a.
#[derive(Debug, Clone, Copy)]
pub struct Fnv1aHasher(u64);

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Fnv1aHasher(FNV_OFFSET_BASIS)
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= u64::from(b);
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }
}

/// A multiplicative hash in the style of MurmurHash2, fed one byte at a time and finished
/// with Murmur's avalanche step.
#[derive(Debug, Clone, Copy)]
pub struct MurmurHasher(u64);

const MURMUR_SEED: u64 = 0x8445_d61a_4e77_4912;
const MURMUR_M: u64 = 0xc6a4_a793_5bd1_e995;
const MURMUR_R: u32 = 47;

impl Default for MurmurHasher {
    fn default() -> Self {
        MurmurHasher(MURMUR_SEED)
    }
}

impl Hasher for MurmurHasher {
    fn finish(&self) -> u64 {
        let mut h = self.0;
        h ^= h >> MURMUR_R;
        h = h.wrapping_mul(MURMUR_M);
        h ^= h >> MURMUR_R;
        h
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= u64::from(b);
            self.0 = self.0.wrapping_mul(MURMUR_M);
        }
    }
}

macro_rules! build_hasher {
    ($($(#[$attr:meta])* $builder:ident => $hasher:ident),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
            pub struct $builder;

            impl BuildHasher for $builder {
                type Hasher = $hasher;

                fn build_hasher(&self) -> $hasher {
                    $hasher::default()
                }
            }
        )*
    };
}

build_hasher!(
    /// Builds [`Djb2Hasher`]s.
    Djb2BuildHasher => Djb2Hasher,
    /// Builds [`Fnv1aHasher`]s.
    Fnv1aBuildHasher => Fnv1aHasher,
    /// Builds [`MurmurHasher`]s.
    MurmurBuildHasher => MurmurHasher,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::Hash;

    fn hash<S: BuildHasher, T: Hash + ?Sized>(s: &S, value: &T) -> u64 {
        let mut h = s.build_hasher();
        value.hash(&mut h);
        h.finish()
    }

    #[test]
    fn djb2_known_value() {
        let mut h = Djb2Hasher::default();
        h.write(b"a");
        assert_eq!(h.finish(), 5381 * 33 + 97);
    }

    #[test]
    fn fnv1a_known_value() {
        let mut h = Fnv1aHasher::default();
        h.write(b"a");
        assert_eq!(h.finish(), 0xaf63_dc4c_8601_ec8c);
    }

    #[test]
    fn deterministic() {
        assert_eq!(hash(&Djb2BuildHasher, "key"), hash(&Djb2BuildHasher, "key"));
        assert_eq!(hash(&Fnv1aBuildHasher, &42u64), hash(&Fnv1aBuildHasher, &42u64));
        assert_eq!(hash(&MurmurBuildHasher, &[1, 2, 3]), hash(&MurmurBuildHasher, &[1, 2, 3]));
    }

    #[test]
    fn spreads_small_integers() {
        let mut slots = std::collections::HashSet::new();
        for i in 0u32..64 {
            slots.insert(hash(&MurmurBuildHasher, &i) % 64);
        }
        assert!(slots.len() > 32);
    }
}
