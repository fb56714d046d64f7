use std::borrow::Borrow;

/// Slot in the backing array.
///
/// `None` is a slot that holds nothing. There are no tombstones: removal closes the gap
/// instead (see [`Table::take`](crate::raw::Table::take)).
pub(crate) type Slot<K, V> = Option<Node<K, V>>;

/// An occupied slot.
///
/// The hash is kept next to the key so that probing can skip most key comparisons and so
/// that moving a node (backward shift, rehash) never has to call the hasher again.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) hash: u64,
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(hash: u64, key: K, value: V) -> Self {
        Self { hash, key, value }
    }

    #[inline]
    pub(crate) fn matches<Q>(&self, hash: u64, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.hash == hash && self.key.borrow() == key
    }

    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
