//! Contiguous buffers holding the entries of a container.
//!
//! Containers keep their entries in a [`Storage`] implementer. The storage
//! does not know about ordering: it is a dumb indexed buffer of key/value
//! entries, and the container decides where entries go.
//!
//! Two layouts are provided:
//! * [`PairBuffer`] keeps entries in a single `Vec<(K, V)>`,
//! * [`SplitBuffer`] keeps keys and values in two vectors sharing the
//! same indices. Binary searches only touch the keys buffer.
//!
//! [`LayoutBuffer`] is either one of them, chosen at runtime.
//!
//! A [`StorageLayout`] is a factory of storages. It is how the storage
//! strategy of a container is injected at construction time, for instance
//! with a [builder](../builder/index.html).

use crate::iter::{Slices, SlicesMut};
use std::ops::Range;

/// Indexed contiguous buffer of key/value entries.
///
/// Indices are positions in `0..len()`. Implementers must keep keys and
/// values associated by index through every operation.
/// Methods taking an index panic if the index is out of bounds, like the
/// matching [`Vec`] methods. Containers check bounds before calling them.
pub trait Storage<K, V> {
    /// Number of entries in the storage.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries the storage can hold without reallocating.
    fn capacity(&self) -> usize;

    /// Reserve room for at least `additional` more entries.
    fn reserve(&mut self, additional: usize);

    /// Release unused capacity.
    fn shrink_to_fit(&mut self);

    /// Insert an entry at `index`, shifting the following entries up.
    fn insert(&mut self, index: usize, key: K, value: V);

    /// Append an entry after the last one.
    fn push(&mut self, key: K, value: V);

    /// Remove the entry at `index`, shifting the following entries down.
    fn remove(&mut self, index: usize) -> (K, V);

    /// Remove the entries in `range` in one pass.
    fn remove_range(&mut self, range: Range<usize>);

    /// Drop every entry. Capacity is kept.
    fn clear(&mut self);

    /// Keep only the entries for which `keep` returns true.
    /// `keep` is called once per entry, in index order.
    fn retain(&mut self, keep: &mut dyn FnMut(&K, &mut V) -> bool);

    /// Move every entry out of the storage, in index order.
    fn take_entries(&mut self) -> Vec<(K, V)>;

    /// Append entries, in order, after the last one.
    fn append(&mut self, entries: Vec<(K, V)>) {
        self.reserve(entries.len());
        for (k, v) in entries {
            self.push(k, v);
        }
    }

    /// Read-only view over the entries.
    fn slices(&self) -> Slices<'_, K, V>;

    /// View over the entries with mutable values.
    fn slices_mut(&mut self) -> SlicesMut<'_, K, V>;
}

/// Factory of [`Storage`].
pub trait StorageLayout<K, V> {
    type Storage: Storage<K, V>;

    /// Create an empty storage with room for `capacity` entries.
    fn allocate(&self, capacity: usize) -> Self::Storage;
}

mod pairs;
pub use pairs::{PairBuffer, PairLayout};
mod split;
pub use split::{SplitBuffer, SplitLayout};
mod layout;
pub use layout::{Layout, LayoutBuffer};

#[cfg(test)]
pub(crate) mod tests {
    use super::Storage;

    /// Check the [`Storage`] contract on an empty storage.
    pub fn test_storage<S: Storage<u32, String>>(mut s: S) {
        assert!(s.is_empty());
        s.reserve(4);
        assert!(s.capacity() >= 4);

        s.push(1, String::from("one"));
        s.push(3, String::from("three"));
        s.insert(1, 2, String::from("two"));
        s.insert(0, 0, String::from("zero"));
        s.insert(4, 4, String::from("four"));
        assert_eq!(s.len(), 5);
        for i in 0..5 {
            assert_eq!(s.slices().key(i), &(i as u32));
        }
        assert_eq!(s.slices().value(2), "two");

        assert_eq!(s.remove(0), (0, String::from("zero")));
        assert_eq!(s.slices().key(0), &1);

        s.remove_range(1..3);
        assert_eq!(s.len(), 2);
        assert_eq!(s.slices().get(1), Some((&4, &String::from("four"))));

        if let Some((_, v)) = s.slices_mut().get_mut(0) {
            v.push('!');
        }
        assert_eq!(s.slices().value(0), "one!");

        s.append(vec![(5, String::from("five")), (6, String::from("six"))]);
        s.retain(&mut |k, v| {
            v.make_ascii_uppercase();
            k % 2 == 0
        });
        let keys: Vec<u32> = s.slices().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![4, 6]);
        assert_eq!(s.slices().value(1), "SIX");

        let capacity = s.capacity();
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.capacity(), capacity);

        s.push(7, String::from("seven"));
        assert_eq!(s.take_entries(), vec![(7, String::from("seven"))]);
        assert!(s.is_empty());
    }
}
