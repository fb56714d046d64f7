//! A key-value map backed by [`ProbingTable`].

use crate::config::Config;
use crate::error::{Error, KeyNotFound};
use crate::iter::{Drain, IntoIter, IntoKeys, Iter, IterMut, Keys, Values, ValuesMut};
use crate::ProbingTable;
use snafu::OptionExt;
use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;
use std::ops::Index;

/// A hash map with one value per key, stored in a [`ProbingTable`].
///
/// # Examples
///
/// ```
/// use probetable::Dictionary;
///
/// let mut dict = Dictionary::new();
/// dict.insert(1, "one");
/// dict.insert(2, "two");
/// dict.insert(11, "eleven");
///
/// assert_eq!(dict[&1], "one");
/// assert_eq!(dict.get(&11), Some(&"eleven"));
/// assert!(dict.try_get(&3).is_err());
///
/// dict.remove(&1);
/// assert!(!dict.contains_key(&1));
///
/// dict.insert(1, "one again");
/// assert_eq!(dict.get(&1), Some(&"one again"));
/// ```
pub struct Dictionary<K, V, S = crate::DefaultHashBuilder> {
    table: ProbingTable<K, V, S>,
}

impl<K, V> Dictionary<K, V, crate::DefaultHashBuilder> {
    /// Creates an empty `Dictionary` with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `Dictionary` with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, crate::DefaultHashBuilder::default())
    }

    /// Creates an empty `Dictionary` sized and bounded by `config`.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        Self::with_config_and_hasher(config, crate::DefaultHashBuilder::default())
    }
}

impl<K, V, S> Default for Dictionary<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> Dictionary<K, V, S> {
    /// Creates an empty `Dictionary` which will use `hash_builder` to hash keys.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: ProbingTable::with_hasher(hash_builder),
        }
    }

    /// Creates an empty `Dictionary` with `capacity` slots, using `hash_builder` to hash the
    /// keys.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: ProbingTable::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Creates an empty `Dictionary` sized and bounded by `config`, using `hash_builder` to
    /// hash the keys.
    pub fn with_config_and_hasher(config: Config, hash_builder: S) -> Result<Self, Error> {
        Ok(Self {
            table: ProbingTable::with_config_and_hasher(config, hash_builder)?,
        })
    }

    /// Returns the number of entries in the dictionary.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of slots in the underlying table.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Makes room for at least `additional` more entries without a grow-rehash.
    pub fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    /// Shrinks the underlying table as far as the load factor bounds allow.
    pub fn shrink_to_fit(&mut self) {
        self.table.shrink_to_fit();
    }

    /// Returns a reference to the underlying table.
    pub fn as_table(&self) -> &ProbingTable<K, V, S> {
        &self.table
    }

    /// Returns a reference to the dictionary's [`BuildHasher`].
    pub fn hasher(&self) -> &S {
        self.table.hasher()
    }

    /// An iterator visiting all key-value pairs in arbitrary order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.table.iter()
    }

    /// An iterator visiting all key-value pairs in arbitrary order, with mutable references
    /// to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.table.iter_mut()
    }

    /// An iterator visiting all keys in arbitrary order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        self.table.keys()
    }

    /// Consumes the dictionary, yielding its keys in arbitrary order.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        self.table.into_keys()
    }

    /// An iterator visiting all values in arbitrary order.
    pub fn values(&self) -> Values<'_, K, V> {
        self.table.values()
    }

    /// An iterator visiting all values mutably in arbitrary order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        self.table.values_mut()
    }

    /// Removes every entry, yielding them in arbitrary order.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        self.table.drain()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Keeps only the entries for which `f` returns `true`.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.table.retain(f);
    }
}

impl<K, V, S> Dictionary<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Maps `key` to `value`.
    ///
    /// If the key was already present, its value is overwritten in place and the old value
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::Dictionary;
    ///
    /// let mut dict = Dictionary::new();
    /// assert_eq!(dict.insert(37, "a"), None);
    /// assert_eq!(dict.insert(37, "b"), Some("a"));
    /// assert_eq!(dict[&37], "b");
    /// assert_eq!(dict.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.table.find_mut(&key) {
            Some(current) => Some(std::mem::replace(current, value)),
            None => {
                self.table.insert(key, value);
                None
            }
        }
    }

    /// Returns the value for `key`, inserting `default()` first if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::Dictionary;
    ///
    /// let mut words = Dictionary::new();
    /// for word in "the cat and the hat".split(' ') {
    ///     *words.entry_or_insert_with(word, || 0) += 1;
    /// }
    /// assert_eq!(words["the"], 2);
    /// assert_eq!(words["hat"], 1);
    /// ```
    pub fn entry_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        match self.table.find_index(&key) {
            Some(index) => self.table.value_at_mut(index),
            None => self.table.insert(key, default()),
        }
    }

    /// Returns `true` if the dictionary holds a value for `key`.
    ///
    /// The key may be any borrowed form of the dictionary's key type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the key type.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.contains(key)
    }

    /// Returns a reference to the value for `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.find(key)
    }

    /// Same as [`get`](Dictionary::get).
    #[inline]
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(key)
    }

    /// Returns a mutable reference to the value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.find_mut(key)
    }

    /// Returns the key-value pair for `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.get_key_value(key)
    }

    /// Returns a reference to the value for `key`, or [`Error::KeyNotFound`].
    ///
    /// This is the fallible form of indexing with `dict[&key]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::{Dictionary, Error};
    ///
    /// let mut dict = Dictionary::new();
    /// dict.insert("a", 1);
    /// assert_eq!(dict.try_get("a"), Ok(&1));
    /// assert_eq!(dict.try_get("b"), Err(Error::KeyNotFound));
    /// ```
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.find(key).context(KeyNotFound)
    }

    /// Returns a mutable reference to the value for `key`, or [`Error::KeyNotFound`].
    pub fn try_get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, Error>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.find_mut(key).context(KeyNotFound)
    }

    /// Removes `key` from the dictionary, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Same as [`remove`](Dictionary::remove).
    pub fn erase<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove(key)
    }

    /// Removes `key` from the dictionary, returning the stored key and value if it was
    /// present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.erase(key)
    }
}

impl<K, Q, V, S> Index<&'_ Q> for Dictionary<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: ?Sized + Hash + Eq,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<K, V, S> PartialEq for Dictionary<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl<K, V, S> Eq for Dictionary<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Debug for Dictionary<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> Clone for Dictionary<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<K, V, S> Extend<(K, V)> for Dictionary<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        // from `hashbrown::HashMap::extend`:
        // Keys may be already present or show multiple times in the iterator.
        // Reserve the entire hint lower bound if the map is empty.
        // Otherwise reserve half the hint (rounded up), so the map
        // will only resize twice in the worst case.
        let iter = iter.into_iter();
        let reserve = if self.is_empty() {
            iter.size_hint().0
        } else {
            (iter.size_hint().0 + 1) / 2
        };
        self.table.reserve(reserve);
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for Dictionary<K, V, S>
where
    K: Copy + Hash + Eq,
    V: Copy,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        self.extend(iter.into_iter().map(|(&key, &value)| (key, value)));
    }
}

impl<K, V, S> FromIterator<(K, V)> for Dictionary<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut dict = Self::default();
        dict.extend(iter);
        dict
    }
}

impl<K, V, S> IntoIterator for Dictionary<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.into_iter()
    }
}

impl<'d, K, V, S> IntoIterator for &'d Dictionary<K, V, S> {
    type Item = (&'d K, &'d V);
    type IntoIter = Iter<'d, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'d, K, V, S> IntoIterator for &'d mut Dictionary<K, V, S> {
    type Item = (&'d K, &'d mut V);
    type IntoIter = IterMut<'d, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
