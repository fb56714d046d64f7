use crate::node::{Node, Slot};
use log::trace;
use std::borrow::Borrow;

/// The backing array of a [`ProbingTable`](crate::ProbingTable).
///
/// A `Table` only knows how to place, find and remove nodes by their stored hash. It never
/// resizes itself and does not track how many slots are occupied; both are the job of the
/// owning table.
#[derive(Debug, Clone)]
pub(crate) struct Table<K, V> {
    slots: Box<[Slot<K, V>]>,
}

impl<K, V> Table<K, V> {
    pub(crate) fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "a table needs at least one slot");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots: slots.into_boxed_slice(),
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The index at which probing for `hash` starts.
    #[inline]
    pub(crate) fn home(&self, hash: u64) -> usize {
        (hash % self.slots.len() as u64) as usize
    }

    #[inline]
    fn next(&self, index: usize) -> usize {
        if index + 1 == self.slots.len() {
            0
        } else {
            index + 1
        }
    }

    /// How many steps the probe sequence takes to get from `from` to `to`.
    #[inline]
    fn distance(&self, from: usize, to: usize) -> usize {
        if to >= from {
            to - from
        } else {
            to + self.slots.len() - from
        }
    }

    pub(crate) fn slots(&self) -> &[Slot<K, V>] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Slot<K, V>] {
        &mut self.slots
    }

    pub(crate) fn into_slots(self) -> Vec<Slot<K, V>> {
        self.slots.into_vec()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Node<K, V>> {
        self.slots.get(index)?.as_ref()
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Node<K, V>> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Returns the index of the node holding `key`.
    ///
    /// The scan stops at the first empty slot, or once it has gone all the way around a
    /// table that has no empty slot at all.
    pub(crate) fn find<Q>(&self, hash: u64, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let start = self.home(hash);
        let mut index = start;
        loop {
            match self.slots[index] {
                None => return None,
                Some(ref node) if node.matches(hash, key) => return Some(index),
                Some(_) => {}
            }
            index = self.next(index);
            if index == start {
                return None;
            }
        }
    }

    /// Places `node` in the first empty slot of its probe sequence.
    ///
    /// Duplicate keys are not looked for. The caller must make sure there is an empty slot.
    pub(crate) fn insert(&mut self, node: Node<K, V>) -> &mut Node<K, V> {
        let mut index = self.home(node.hash);
        for _ in 0..self.slots.len() {
            if self.slots[index].is_none() {
                return self.slots[index].insert(node);
            }
            index = self.next(index);
        }
        unreachable!("insert into a table with no empty slot");
    }

    /// Removes the node at `index` and closes the gap it leaves.
    ///
    /// Every node in the run that follows the removed one is moved back into the hole if the
    /// hole lies between its home slot and its current slot, so that no node ever ends up
    /// behind an empty slot on its own probe sequence.
    pub(crate) fn take(&mut self, index: usize) -> Option<Node<K, V>> {
        let removed = self.slots.get_mut(index)?.take()?;

        let mut hole = index;
        let mut next = self.next(index);
        while let Some(ref node) = self.slots[next] {
            let home = self.home(node.hash);
            if self.distance(home, hole) < self.distance(home, next) {
                trace!("shifting slot {} back to {}", next, hole);
                self.slots.swap(hole, next);
                hole = next;
            }
            next = self.next(next);
        }

        Some(removed)
    }

    pub(crate) fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }
}
