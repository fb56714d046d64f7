//! A hash set backed by [`ProbingTable`].

use crate::config::Config;
use crate::error::Error;
use crate::iter::{IntoKeys, Keys};
use crate::ProbingTable;
use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

/// A hash set implemented as a [`ProbingTable`] where the value is `()`.
///
/// # Examples
///
/// ```
/// use probetable::Set;
///
/// // Initialize a new hash set.
/// let mut books = Set::new();
///
/// // Add some books
/// books.insert("Fight Club");
/// books.insert("Three Men In A Raft");
/// books.insert("The Book of Dust");
/// books.insert("The Dry");
///
/// // Check for a specific one.
/// if !books.contains(&"The Drunken Botanist") {
///     println!("We don't have The Drunken Botanist.");
/// }
///
/// // Remove a book.
/// books.remove(&"Three Men In A Raft");
///
/// // Iterate over everything.
/// for book in books.iter() {
///     println!("{}", book);
/// }
/// ```
pub struct Set<T, S = crate::DefaultHashBuilder> {
    table: ProbingTable<T, (), S>,
}

impl<T> Set<T, crate::DefaultHashBuilder> {
    /// Creates an empty `Set` with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::Set;
    /// let set: Set<i32> = Set::new();
    /// assert_eq!(set.capacity(), 10);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `Set` with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, crate::DefaultHashBuilder::default())
    }

    /// Creates an empty `Set` sized and bounded by `config`.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        Self::with_config_and_hasher(config, crate::DefaultHashBuilder::default())
    }
}

impl<T, S> Default for Set<T, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set which will use `hash_builder` to hash values.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::{Set, Fnv1aBuildHasher};
    ///
    /// let mut set = Set::with_hasher(Fnv1aBuildHasher);
    /// set.insert(1);
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: ProbingTable::with_hasher(hash_builder),
        }
    }

    /// Creates an empty set with `capacity` slots, using `hash_builder` to hash the values.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: ProbingTable::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Creates an empty set sized and bounded by `config`, using `hash_builder` to hash the
    /// values.
    pub fn with_config_and_hasher(config: Config, hash_builder: S) -> Result<Self, Error> {
        Ok(Self {
            table: ProbingTable::with_config_and_hasher(config, hash_builder)?,
        })
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of slots in the underlying table.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Makes room for at least `additional` more elements without a grow-rehash.
    pub fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    /// Shrinks the underlying table as far as the load factor bounds allow.
    pub fn shrink_to_fit(&mut self) {
        self.table.shrink_to_fit();
    }

    /// Returns a reference to the underlying table.
    pub fn as_table(&self) -> &ProbingTable<T, (), S> {
        &self.table
    }

    /// Returns a reference to the set's [`BuildHasher`].
    pub fn hasher(&self) -> &S {
        self.table.hasher()
    }

    /// An iterator visiting all values in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::Set;
    ///
    /// let mut set = Set::new();
    /// set.insert("a");
    /// set.insert("b");
    ///
    /// for x in set.iter() {
    ///     println!("{}", x);
    /// }
    /// ```
    pub fn iter(&self) -> Keys<'_, T, ()> {
        self.table.keys()
    }

    /// Removes every element, yielding them in arbitrary order.
    ///
    /// Elements that are not consumed are dropped along with the iterator.
    pub fn drain(&mut self) -> impl ExactSizeIterator<Item = T> + '_ {
        self.table.drain().map(|(value, ())| value)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Keeps only the elements for which `f` returns `true`.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.table.retain(|value, _| f(value));
    }
}

impl<T, S> Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Adds a value to the set.
    ///
    /// If the set did not have this value present, `true` is returned.
    ///
    /// If the set did have this value present, `false` is returned and the set is left
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::Set;
    ///
    /// let mut set = Set::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        if self.table.contains(&value) {
            return false;
        }
        self.table.insert(value, ());
        true
    }

    /// Returns `true` if the set contains the specified value.
    ///
    /// The value may be any borrowed form of the set's value type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the value type.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.contains(value)
    }

    /// Returns a reference to the stored value equal to `value`, if any.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.get_key_value(value).map(|(k, _)| k)
    }

    /// Removes a value from the set.
    ///
    /// If the value was present, `true` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::Set;
    ///
    /// let mut set = Set::new();
    /// set.insert(2);
    ///
    /// assert_eq!(set.remove(&2), true);
    /// assert!(!set.contains(&2));
    /// assert_eq!(set.remove(&2), false);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.take(value).is_some()
    }

    /// Same as [`remove`](Set::remove).
    pub fn erase<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.remove(value)
    }

    /// Removes and returns the stored value equal to `value`, if any.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.table.erase(value).map(|(k, ())| k)
    }

    /// Returns `true` if `self` has no elements in common with `other`.
    pub fn is_disjoint<S2>(&self, other: &Set<T, S2>) -> bool
    where
        S2: BuildHasher,
    {
        if self.len() <= other.len() {
            self.iter().all(|value| !other.contains(value))
        } else {
            other.iter().all(|value| !self.contains(value))
        }
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::Set;
    ///
    /// let sup: Set<_> = (1..=3).collect();
    /// let mut set = Set::new();
    ///
    /// assert!(set.is_subset(&sup));
    /// set.insert(2);
    /// assert!(set.is_subset(&sup));
    /// set.insert(4);
    /// assert!(!set.is_subset(&sup));
    /// ```
    pub fn is_subset<S2>(&self, other: &Set<T, S2>) -> bool
    where
        S2: BuildHasher,
    {
        self.len() <= other.len() && self.iter().all(|value| other.contains(value))
    }

    /// Returns `true` if every element of `other` is in `self`.
    pub fn is_superset<S2>(&self, other: &Set<T, S2>) -> bool
    where
        S2: BuildHasher,
    {
        other.is_subset(self)
    }
}

impl<T, S> Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    fn empty_like(&self) -> Self {
        let config = self.table.config();
        Self {
            table: ProbingTable::from_parts(
                config.with_initial_capacity(config.min_capacity()),
                self.hasher().clone(),
            ),
        }
    }

    /// Returns a new set with the elements that are in `self`, `other`, or both.
    ///
    /// The result uses `self`'s hasher and load factors.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::Set;
    ///
    /// let a: Set<_> = [1, 2, 3].iter().copied().collect();
    /// let b: Set<_> = [4, 2, 3, 4].iter().copied().collect();
    ///
    /// let union = a.union(&b);
    /// assert_eq!(union, [1, 2, 3, 4].iter().copied().collect());
    /// ```
    pub fn union<S2>(&self, other: &Set<T, S2>) -> Self
    where
        S2: BuildHasher,
    {
        let mut result = self.clone();
        result.extend(other.iter().cloned());
        result
    }

    /// Returns a new set with the elements that are in both `self` and `other`.
    pub fn intersection<S2>(&self, other: &Set<T, S2>) -> Self
    where
        S2: BuildHasher,
    {
        let mut result = self.empty_like();
        result.extend(self.iter().filter(|value| other.contains(*value)).cloned());
        result
    }

    /// Returns a new set with the elements that are in `self` but not in `other`.
    pub fn difference<S2>(&self, other: &Set<T, S2>) -> Self
    where
        S2: BuildHasher,
    {
        let mut result = self.empty_like();
        result.extend(self.iter().filter(|value| !other.contains(*value)).cloned());
        result
    }

    /// Returns a new set with the elements that are in exactly one of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use probetable::Set;
    ///
    /// let a: Set<_> = [1, 2, 3].iter().copied().collect();
    /// let b: Set<_> = [4, 2, 3, 4].iter().copied().collect();
    ///
    /// let diff = a.symmetric_difference(&b);
    /// assert_eq!(diff, [1, 4].iter().copied().collect());
    /// ```
    pub fn symmetric_difference<S2>(&self, other: &Set<T, S2>) -> Self
    where
        S2: BuildHasher,
    {
        let mut result = self.difference(other);
        result.extend(other.iter().filter(|value| !self.contains(*value)).cloned());
        result
    }
}

impl<T, S> PartialEq for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T, S> Eq for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T, S> Debug for Set<T, S>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> Clone for Set<T, S>
where
    T: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<T, S> Extend<T> for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let reserve = if self.is_empty() {
            iter.size_hint().0
        } else {
            (iter.size_hint().0 + 1) / 2
        };
        self.table.reserve(reserve);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for Set<T, S>
where
    T: Hash + Eq + Copy,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, S> FromIterator<T> for Set<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, S> IntoIterator for Set<T, S> {
    type Item = T;
    type IntoIter = IntoKeys<T, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.into_keys()
    }
}

impl<'s, T, S> IntoIterator for &'s Set<T, S> {
    type Item = &'s T;
    type IntoIter = Keys<'s, T, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
