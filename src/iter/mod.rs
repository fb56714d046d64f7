mod traverser;
pub(crate) use traverser::{NodeIter, NodeIterMut};

use crate::node::Slot;
use std::iter::FusedIterator;

/// An iterator over a table's entries.
///
/// See [`ProbingTable::iter`](crate::ProbingTable::iter) for details.
#[derive(Debug)]
pub struct Iter<'t, K, V> {
    pub(crate) node_iter: NodeIter<'t, K, V>,
}

impl<'t, K, V> Iterator for Iter<'t, K, V> {
    type Item = (&'t K, &'t V);
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node_iter.next()?;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.node_iter.size_hint()
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            node_iter: self.node_iter.clone(),
        }
    }
}

/// An iterator over a table's keys.
///
/// See [`ProbingTable::keys`](crate::ProbingTable::keys) for details.
#[derive(Debug)]
pub struct Keys<'t, K, V> {
    pub(crate) node_iter: NodeIter<'t, K, V>,
}

impl<'t, K, V> Iterator for Keys<'t, K, V> {
    type Item = &'t K;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node_iter.next()?;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.node_iter.size_hint()
    }
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            node_iter: self.node_iter.clone(),
        }
    }
}

/// An iterator over a table's values.
///
/// See [`ProbingTable::values`](crate::ProbingTable::values) for details.
#[derive(Debug)]
pub struct Values<'t, K, V> {
    pub(crate) node_iter: NodeIter<'t, K, V>,
}

impl<'t, K, V> Iterator for Values<'t, K, V> {
    type Item = &'t V;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node_iter.next()?;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.node_iter.size_hint()
    }
}

/// A mutable iterator over a table's entries.
///
/// See [`ProbingTable::iter_mut`](crate::ProbingTable::iter_mut) for details.
#[derive(Debug)]
pub struct IterMut<'t, K, V> {
    pub(crate) node_iter: NodeIterMut<'t, K, V>,
}

impl<'t, K, V> Iterator for IterMut<'t, K, V> {
    type Item = (&'t K, &'t mut V);
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node_iter.next()?;
        Some((&node.key, &mut node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.node_iter.size_hint()
    }
}

/// A mutable iterator over a table's values.
///
/// See [`ProbingTable::values_mut`](crate::ProbingTable::values_mut) for details.
#[derive(Debug)]
pub struct ValuesMut<'t, K, V> {
    pub(crate) node_iter: NodeIterMut<'t, K, V>,
}

impl<'t, K, V> Iterator for ValuesMut<'t, K, V> {
    type Item = &'t mut V;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node_iter.next()?;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.node_iter.size_hint()
    }
}

/// An owning iterator over a table's entries.
///
/// Returned by the [`IntoIterator`] implementation of
/// [`ProbingTable`](crate::ProbingTable).
#[derive(Debug)]
pub struct IntoIter<K, V> {
    pub(crate) slots: std::vec::IntoIter<Slot<K, V>>,
    pub(crate) remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slots.find_map(|slot| slot)?;
        self.remaining -= 1;
        Some(node.into_pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// An owning iterator over a table's keys.
///
/// See [`ProbingTable::into_keys`](crate::ProbingTable::into_keys) for details.
#[derive(Debug)]
pub struct IntoKeys<K, V> {
    pub(crate) inner: IntoIter<K, V>,
}

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// A draining iterator over a table's entries.
///
/// See [`ProbingTable::drain`](crate::ProbingTable::drain) for details. Entries that are
/// not consumed are dropped along with the iterator. If the iterator is leaked instead,
/// they stay in the table.
#[derive(Debug)]
pub struct Drain<'t, K, V> {
    pub(crate) slots: std::slice::IterMut<'t, Slot<K, V>>,

    /// The table's entry count, kept equal to the occupied slots left behind.
    pub(crate) count: &'t mut usize,
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slots.by_ref().find_map(Option::take)?;
        *self.count -= 1;
        Some(node.into_pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (*self.count, Some(*self.count))
    }
}

impl<K, V> Drop for Drain<'_, K, V> {
    fn drop(&mut self) {
        for slot in self.slots.by_ref() {
            *slot = None;
        }
        *self.count = 0;
    }
}

macro_rules! exact_size {
    ($($iter:ident<$($lt:lifetime,)? K, V>),* $(,)?) => {
        $(
            impl<$($lt,)? K, V> ExactSizeIterator for $iter<$($lt,)? K, V> {}
            impl<$($lt,)? K, V> FusedIterator for $iter<$($lt,)? K, V> {}
        )*
    };
}

exact_size!(
    Iter<'t, K, V>,
    Keys<'t, K, V>,
    Values<'t, K, V>,
    IterMut<'t, K, V>,
    ValuesMut<'t, K, V>,
    IntoIter<K, V>,
    IntoKeys<K, V>,
    Drain<'t, K, V>,
);

#[cfg(test)]
mod tests {
    use crate::ProbingTable;
    use std::collections::HashSet;
    use std::iter::FromIterator;

    fn table() -> ProbingTable<usize, usize> {
        let mut table = ProbingTable::new();
        table.insert(1, 42);
        table.insert(2, 84);
        table
    }

    #[test]
    fn iter() {
        let table = table();
        assert_eq!(
            table.iter().collect::<HashSet<(&usize, &usize)>>(),
            HashSet::from_iter(vec![(&1, &42), (&2, &84)])
        );
    }

    #[test]
    fn keys() {
        let table = table();
        assert_eq!(
            table.keys().collect::<HashSet<&usize>>(),
            HashSet::from_iter(vec![&1, &2])
        );
    }

    #[test]
    fn values() {
        let table = table();
        assert_eq!(
            table.values().collect::<HashSet<&usize>>(),
            HashSet::from_iter(vec![&42, &84])
        );
    }

    #[test]
    fn values_mut() {
        let mut table = table();
        for value in table.values_mut() {
            *value += 1;
        }
        assert_eq!(table.find(&1), Some(&43));
        assert_eq!(table.find(&2), Some(&85));
    }

    #[test]
    fn into_iter() {
        let table = table();
        let iter = table.into_iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(
            iter.collect::<HashSet<(usize, usize)>>(),
            HashSet::from_iter(vec![(1, 42), (2, 84)])
        );
    }

    #[test]
    fn exact_size_while_consuming() {
        let table = table();
        let mut iter = table.iter();
        assert_eq!(iter.len(), 2);
        iter.next();
        assert_eq!(iter.len(), 1);
        iter.next();
        assert_eq!(iter.len(), 0);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn drain_dropped_early_empties_table() {
        let mut table = table();
        let capacity = table.capacity();
        {
            let mut drain = table.drain();
            assert!(drain.next().is_some());
        }
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
        assert_eq!(table.capacity(), capacity);
    }
}
