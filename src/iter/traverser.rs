use crate::node::{Node, Slot};

/// Cursor over the occupied slots of a table, in increasing slot order.
#[derive(Debug)]
pub(crate) struct NodeIter<'t, K, V> {
    slots: &'t [Slot<K, V>],

    /// Index of the slot to look at next
    index: usize,

    /// Occupied slots not yet yielded
    remaining: usize,
}

impl<'t, K, V> NodeIter<'t, K, V> {
    pub(crate) fn new(slots: &'t [Slot<K, V>], len: usize) -> Self {
        Self {
            slots,
            index: 0,
            remaining: len,
        }
    }
}

impl<K, V> Clone for NodeIter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            index: self.index,
            remaining: self.remaining,
        }
    }
}

impl<'t, K, V> Iterator for NodeIter<'t, K, V> {
    type Item = &'t Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.slots.len() {
            let slot = &self.slots[self.index];
            self.index += 1;
            if let Some(node) = slot {
                self.remaining -= 1;
                return Some(node);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Mutable cursor over the occupied slots of a table.
#[derive(Debug)]
pub(crate) struct NodeIterMut<'t, K, V> {
    /// Slots not yet visited
    slots: &'t mut [Slot<K, V>],
    remaining: usize,
}

impl<'t, K, V> NodeIterMut<'t, K, V> {
    pub(crate) fn new(slots: &'t mut [Slot<K, V>], len: usize) -> Self {
        Self {
            slots,
            remaining: len,
        }
    }
}

impl<'t, K, V> Iterator for NodeIterMut<'t, K, V> {
    type Item = &'t mut Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let slots = std::mem::take(&mut self.slots);
            let (first, rest) = slots.split_first_mut()?;
            self.slots = rest;
            if let Some(node) = first {
                self.remaining -= 1;
                return Some(node);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
