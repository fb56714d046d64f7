use crate::config::Config;
use crate::error::{Error, SlotOutOfRange};
use crate::iter::*;
use crate::node::Node;
use crate::raw::Table;
use log::debug;
use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::FromIterator;

/// Which way a rehash resizes the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resize {
    /// Double the capacity.
    Grow,
    /// Halve the capacity, never below the minimum capacity.
    Shrink,
}

/// An open-addressing hash table with linear probing.
///
/// Every entry lives directly in a flat array of slots. An entry is placed at
/// `hash(key) % capacity`, or in the first free slot after it. The table doubles when an
/// insert would push the load factor above `max_load_factor`, and halves when an erase
/// drops it below `min_load_factor`.
///
/// `ProbingTable` is the raw container: [`insert`](ProbingTable::insert) does not look for
/// an existing entry with the same key. Use [`Dictionary`](crate::Dictionary) or
/// [`Set`](crate::Set) for map and set semantics.
///
/// Removal closes the gap it leaves by shifting the following entries back, so lookups never
/// need tombstones and every present key stays reachable from its home slot.
///
/// # Examples
///
/// ```
/// use probetable::ProbingTable;
///
/// let mut table = ProbingTable::with_capacity(10);
/// for i in 0..10 {
///     table.insert(i, i * i);
/// }
/// assert_eq!(table.capacity(), 20);
/// assert_eq!(table.find(&3), Some(&9));
///
/// table.erase(&3);
/// assert!(!table.contains(&3));
/// ```
pub struct ProbingTable<K, V = (), S = crate::DefaultHashBuilder> {
    /// The slot array. Replaced wholesale on every rehash.
    table: Table<K, V>,

    /// Number of occupied slots.
    count: usize,

    max_load_factor: f64,
    min_load_factor: f64,
    min_capacity: usize,

    build_hasher: S,
}

impl<K, V> ProbingTable<K, V, crate::DefaultHashBuilder> {
    /// Creates an empty table with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::ProbingTable;
    /// let table: ProbingTable<&str, i32> = ProbingTable::new();
    /// assert_eq!(table.capacity(), 10);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with `capacity` slots.
    ///
    /// A capacity of 0 is raised to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::ProbingTable;
    /// let table: ProbingTable<&str, i32> = ProbingTable::with_capacity(32);
    /// assert_eq!(table.capacity(), 32);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, crate::DefaultHashBuilder::default())
    }

    /// Creates an empty table sized and bounded by `config`.
    ///
    /// Fails if the configuration does not [validate](Config::validate).
    pub fn with_config(config: Config) -> Result<Self, Error> {
        Self::with_config_and_hasher(config, crate::DefaultHashBuilder::default())
    }
}

impl<K, V, S> Default for ProbingTable<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> ProbingTable<K, V, S> {
    /// Creates an empty table which will use `hash_builder` to hash keys.
    ///
    /// The hash builder is the table's hash function. It must hash equal keys to equal
    /// values for the lifetime of the table. A builder that hashes everything to the same
    /// value is allowed; every operation then degrades to a linear scan.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::{ProbingTable, Fnv1aBuildHasher};
    ///
    /// let mut table = ProbingTable::with_hasher(Fnv1aBuildHasher);
    /// table.insert(1, 2);
    /// assert_eq!(table.find(&1), Some(&2));
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::from_parts(Config::default(), hash_builder)
    }

    /// Creates an empty table with `capacity` slots, using `hash_builder` to hash the keys.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self::from_parts(
            Config::default().with_initial_capacity(capacity),
            hash_builder,
        )
    }

    /// Creates an empty table sized and bounded by `config`, using `hash_builder` to hash
    /// the keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::{Config, Error, ProbingTable, DefaultHashBuilder};
    ///
    /// let config = Config::default().with_min_load_factor(0.5);
    /// let table = ProbingTable::<u8, u8, _>::with_config_and_hasher(config, DefaultHashBuilder::default());
    /// assert!(matches!(table, Err(Error::InvalidLoadFactors { .. })));
    /// ```
    pub fn with_config_and_hasher(config: Config, hash_builder: S) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::from_parts(config, hash_builder))
    }

    pub(crate) fn from_parts(config: Config, build_hasher: S) -> Self {
        Self {
            table: Table::new(config.initial_capacity()),
            count: 0,
            max_load_factor: config.max_load_factor(),
            min_load_factor: config.min_load_factor(),
            min_capacity: config.min_capacity(),
            build_hasher,
        }
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of slots in the backing array.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    pub fn min_load_factor(&self) -> f64 {
        self.min_load_factor
    }

    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Returns a reference to the table's [`BuildHasher`].
    pub fn hasher(&self) -> &S {
        &self.build_hasher
    }

    /// The configuration this table was built with, with its current capacity as the
    /// initial capacity.
    pub fn config(&self) -> Config {
        Config::default()
            .with_initial_capacity(self.capacity())
            .with_max_load_factor(self.max_load_factor)
            .with_min_load_factor(self.min_load_factor)
            .with_min_capacity(self.min_capacity)
    }

    /// Returns `true` if the slot at `index` holds an entry.
    ///
    /// Fails with [`Error::SlotOutOfRange`] if `index >= capacity`.
    pub fn is_occupied(&self, index: usize) -> Result<bool, Error> {
        Ok(self.slot(index)?.is_some())
    }

    /// Returns the entry stored in the slot at `index`, if any.
    ///
    /// Fails with [`Error::SlotOutOfRange`] if `index >= capacity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::ProbingTable;
    ///
    /// let mut table = ProbingTable::with_capacity(4);
    /// table.insert("a", 1);
    /// let index = table.find_index("a").unwrap();
    /// assert_eq!(table.slot(index), Ok(Some((&"a", &1))));
    /// assert!(table.slot(4).is_err());
    /// ```
    pub fn slot(&self, index: usize) -> Result<Option<(&K, &V)>, Error> {
        let capacity = self.capacity();
        snafu::ensure!(index < capacity, SlotOutOfRange { index, capacity });
        Ok(self.table.get(index).map(|node| (&node.key, &node.value)))
    }

    /// An iterator visiting all key-value pairs in slot order.
    ///
    /// The iterator element type is `(&K, &V)`.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            node_iter: NodeIter::new(self.table.slots(), self.count),
        }
    }

    /// An iterator visiting all keys in slot order.
    ///
    /// The iterator element type is `&K`.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            node_iter: NodeIter::new(self.table.slots(), self.count),
        }
    }

    /// An iterator visiting all values in slot order.
    ///
    /// The iterator element type is `&V`.
    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            node_iter: NodeIter::new(self.table.slots(), self.count),
        }
    }

    /// An iterator visiting all key-value pairs in slot order, with mutable references to
    /// the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            node_iter: NodeIterMut::new(self.table.slots_mut(), self.count),
        }
    }

    /// An iterator visiting all values mutably in slot order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            node_iter: NodeIterMut::new(self.table.slots_mut(), self.count),
        }
    }

    /// Consumes the table, yielding its keys in slot order.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys {
            inner: self.into_iter(),
        }
    }

    /// Removes every entry, yielding them in slot order. The capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::ProbingTable;
    ///
    /// let mut table = ProbingTable::new();
    /// table.insert(1, "a");
    /// table.insert(2, "b");
    ///
    /// let mut drained: Vec<_> = table.drain().collect();
    /// drained.sort();
    /// assert_eq!(drained, vec![(1, "a"), (2, "b")]);
    /// assert!(table.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            slots: self.table.slots_mut().iter_mut(),
            count: &mut self.count,
        }
    }

    /// Removes every entry. The capacity is kept.
    pub fn clear(&mut self) {
        self.table.clear();
        self.count = 0;
    }

    /// Whether `count` entries in `capacity` slots exceed the maximum load factor.
    #[inline]
    fn overloaded(&self, count: usize, capacity: usize) -> bool {
        count as f64 / capacity as f64 > self.max_load_factor
    }

    /// Whether `count` entries in `capacity` slots fall short of the minimum load factor.
    #[inline]
    fn underloaded(&self, count: usize, capacity: usize) -> bool {
        count > 0 && (count as f64 / capacity as f64) < self.min_load_factor
    }

    /// The smallest capacity that holds `count` entries without exceeding the maximum load
    /// factor, and is at least the minimum capacity.
    fn capacity_for(&self, count: usize) -> usize {
        let mut capacity = ((count as f64 / self.max_load_factor) as usize)
            .max(self.min_capacity)
            .max(1);
        while self.overloaded(count, capacity) {
            capacity += 1;
        }
        capacity
    }

    /// Rebuilds the slot array with `capacity` slots, reinserting every entry in the slot
    /// order of the old array.
    fn resize(&mut self, capacity: usize) {
        debug!(
            "rehashing {} entries from {} to {} slots",
            self.count,
            self.capacity(),
            capacity
        );
        let old = std::mem::replace(&mut self.table, Table::new(capacity));
        for node in old.into_slots().into_iter().flatten() {
            self.table.insert(node);
        }
    }

    /// Rehashes the table into a new slot array.
    ///
    /// [`Resize::Grow`] doubles the capacity. [`Resize::Shrink`] halves it, but never below
    /// the minimum capacity. A shrink that would push the current entries over the maximum
    /// load factor does nothing.
    ///
    /// Inserts and erases rehash on their own; calling this is only needed to resize the
    /// table ahead of time.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::{ProbingTable, Resize};
    ///
    /// let mut table = ProbingTable::with_capacity(8);
    /// table.insert(1, ());
    /// table.rehash(Resize::Grow);
    /// assert_eq!(table.capacity(), 16);
    /// table.rehash(Resize::Shrink);
    /// assert_eq!(table.capacity(), 8);
    /// assert!(table.contains(&1));
    /// ```
    pub fn rehash(&mut self, direction: Resize) {
        let capacity = match direction {
            Resize::Grow => self
                .capacity()
                .checked_mul(2)
                .expect("capacity overflow"),
            Resize::Shrink => (self.capacity() / 2).max(self.min_capacity),
        };
        if capacity != self.capacity() && !self.overloaded(self.count, capacity) {
            self.resize(capacity);
        }
    }

    /// Grows the table until `count` entries fit within the maximum load factor.
    fn grow_for(&mut self, count: usize) {
        let mut capacity = self.capacity();
        while self.overloaded(count, capacity) {
            capacity = capacity.checked_mul(2).expect("capacity overflow");
        }
        if capacity != self.capacity() {
            self.resize(capacity);
        }
    }

    /// Halves the table while it is under its minimum load factor.
    ///
    /// A halving is skipped if it would go below the minimum capacity or push the table
    /// over its maximum load factor. An empty table is never shrunk.
    fn shrink_if_underloaded(&mut self) {
        let mut capacity = self.capacity();
        while self.underloaded(self.count, capacity) {
            let half = capacity / 2;
            if half < self.min_capacity || self.overloaded(self.count, half) {
                break;
            }
            capacity = half;
        }
        if capacity != self.capacity() {
            self.resize(capacity);
        }
    }

    /// Makes room for at least `additional` more entries without a grow-rehash.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::ProbingTable;
    ///
    /// let mut table: ProbingTable<u32, ()> = ProbingTable::with_capacity(10);
    /// table.reserve(100);
    /// assert!(table.capacity() as f64 * table.max_load_factor() >= 100.0);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        let count = self.count.checked_add(additional).expect("capacity overflow");
        self.grow_for(count);
    }

    /// Shrinks the table to the smallest capacity that holds its entries within the
    /// maximum load factor.
    pub fn shrink_to_fit(&mut self) {
        self.rehash_to(0);
    }

    /// Rehashes the table into exactly `capacity` slots.
    ///
    /// A `capacity` too small to hold the current entries within the maximum load factor,
    /// or below the minimum capacity, is raised to the smallest one that is not.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::ProbingTable;
    ///
    /// let mut table = ProbingTable::new();
    /// for i in 0..7 {
    ///     table.insert(i, ());
    /// }
    /// table.rehash_to(100);
    /// assert_eq!(table.capacity(), 100);
    /// table.rehash_to(1);
    /// assert_eq!(table.capacity(), 10);
    /// ```
    pub fn rehash_to(&mut self, capacity: usize) {
        let capacity = capacity.max(self.capacity_for(self.count));
        if capacity != self.capacity() {
            self.resize(capacity);
        }
    }

    /// Keeps only the entries for which `f` returns `true`.
    ///
    /// The table is rebuilt at its current capacity and then shrunk once if it ends up
    /// under its minimum load factor. If `f` panics, the entries not yet visited are
    /// dropped and the table keeps the ones already retained.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let capacity = self.capacity();
        let old = std::mem::replace(&mut self.table, Table::new(capacity));
        self.count = 0;
        for mut node in old.into_slots().into_iter().flatten() {
            if f(&node.key, &mut node.value) {
                self.table.insert(node);
                self.count += 1;
            }
        }
        self.shrink_if_underloaded();
    }

    /// The value in the slot at `index`, which must be occupied.
    pub(crate) fn value_at_mut(&mut self, index: usize) -> &mut V {
        match self.table.get_mut(index) {
            Some(node) => &mut node.value,
            None => panic!("slot {} is not occupied", index),
        }
    }
}

impl<K, V, S> ProbingTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn hash<Q: ?Sized + Hash>(&self, key: &Q) -> u64 {
        let mut h = self.build_hasher.build_hasher();
        key.hash(&mut h);
        h.finish()
    }

    /// Inserts an entry without checking whether `key` is already present.
    ///
    /// The entry goes into the first empty slot at or after `hash(key) % capacity`. If the
    /// new entry would push the load factor above `max_load_factor`, the table is first
    /// doubled (as often as needed), so the bound holds when this returns.
    ///
    /// Inserting a key that is already present stores a second entry for it; lookups and
    /// erases then see whichever comes first on the probe sequence. Use
    /// [`Dictionary::insert`](crate::Dictionary::insert) for upserts.
    ///
    /// Returns a mutable reference to the stored value.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::ProbingTable;
    ///
    /// let mut table = ProbingTable::new();
    /// *table.insert("apples", 1) += 2;
    /// assert_eq!(table.find("apples"), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> &mut V {
        let hash = self.hash(&key);
        self.grow_for(self.count + 1);
        self.count += 1;
        &mut self.table.insert(Node::new(hash, key, value)).value
    }

    /// Returns the slot index holding `key`, if it is present.
    ///
    /// The key may be any borrowed form of the table's key type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the key type.
    pub fn find_index<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.find(self.hash(key), key)
    }

    /// Returns `true` if the table holds an entry for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::ProbingTable;
    ///
    /// let mut table = ProbingTable::new();
    /// table.insert(1, "a");
    /// assert_eq!(table.contains(&1), true);
    /// assert_eq!(table.contains(&2), false);
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find_index(key).is_some()
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::ProbingTable;
    ///
    /// let mut table = ProbingTable::new();
    /// table.insert(1, "a");
    /// assert_eq!(table.find(&1), Some(&"a"));
    /// assert_eq!(table.find(&2), None);
    /// ```
    #[inline]
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = self.find_index(key)?;
        self.table.get_mut(index).map(|node| &mut node.value)
    }

    /// Returns the key-value pair stored for `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = self.find_index(key)?;
        self.table.get(index).map(|node| (&node.key, &node.value))
    }

    /// Removes the entry for `key` and returns it. A missing key is a no-op.
    ///
    /// The entries that follow the removed one on its probe run are shifted back to close
    /// the gap. If the table is left non-empty and under `min_load_factor`, it is halved (as
    /// often as needed and allowed).
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::ProbingTable;
    ///
    /// let mut table = ProbingTable::new();
    /// table.insert(1, "a");
    /// assert_eq!(table.erase(&1), Some((1, "a")));
    /// assert_eq!(table.erase(&1), None);
    /// ```
    pub fn erase<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = self.find_index(key)?;
        let node = self.table.take(index)?;
        self.count -= 1;
        self.shrink_if_underloaded();
        Some(node.into_pair())
    }
}

/// Two tables are equal if they hold the same key/value pairs, whatever their capacity
/// or layout.
impl<K, V, S> PartialEq for ProbingTable<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter()
            .all(|(key, value)| other.find(key).map_or(false, |v| *value == *v))
    }
}

impl<K, V, S> Eq for ProbingTable<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> Extend<(K, V)> for ProbingTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Blind-inserts every pair, so each one becomes a new entry.
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        // every item is stored, so the whole hint lower bound can be reserved up front
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for ProbingTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}

impl<K, V, S> IntoIterator for ProbingTable<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.count,
            slots: self.table.into_slots().into_iter(),
        }
    }
}

impl<'t, K, V, S> IntoIterator for &'t ProbingTable<K, V, S> {
    type Item = (&'t K, &'t V);
    type IntoIter = Iter<'t, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'t, K, V, S> IntoIterator for &'t mut ProbingTable<K, V, S> {
    type Item = (&'t K, &'t mut V);
    type IntoIter = IterMut<'t, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> Clone for ProbingTable<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            count: self.count,
            max_load_factor: self.max_load_factor,
            min_load_factor: self.min_load_factor,
            min_capacity: self.min_capacity,
            build_hasher: self.build_hasher.clone(),
        }
    }
}

impl<K, V, S> Debug for ProbingTable<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
