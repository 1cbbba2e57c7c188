use super::{Storage, StorageLayout};
use crate::iter::{Slices, SlicesMut};
use std::ops::Range;

/// [`Storage`] keeping entries in a single buffer of key/value pairs.
///
/// A key and its value sit next to each other in memory, which makes
/// iteration over entries and access to a found value cheap. Binary
/// searches stride over values as well as keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PairBuffer<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> PairBuffer<K, V> {
    pub fn new() -> Self {
        PairBuffer {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PairBuffer {
            entries: Vec::with_capacity(capacity),
        }
    }
}

impl<K, V> Default for PairBuffer<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Storage<K, V> for PairBuffer<K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional)
    }

    fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit()
    }

    fn insert(&mut self, index: usize, key: K, value: V) {
        self.entries.insert(index, (key, value))
    }

    fn push(&mut self, key: K, value: V) {
        self.entries.push((key, value))
    }

    fn remove(&mut self, index: usize) -> (K, V) {
        self.entries.remove(index)
    }

    fn remove_range(&mut self, range: Range<usize>) {
        self.entries.drain(range);
    }

    fn clear(&mut self) {
        self.entries.clear()
    }

    fn retain(&mut self, keep: &mut dyn FnMut(&K, &mut V) -> bool) {
        self.entries.retain_mut(|(k, v)| keep(k, v))
    }

    fn take_entries(&mut self) -> Vec<(K, V)> {
        std::mem::take(&mut self.entries)
    }

    fn append(&mut self, mut entries: Vec<(K, V)>) {
        self.entries.append(&mut entries)
    }

    fn slices(&self) -> Slices<'_, K, V> {
        Slices::Pairs(&self.entries)
    }

    fn slices_mut(&mut self) -> SlicesMut<'_, K, V> {
        SlicesMut::Pairs(&mut self.entries)
    }
}

/// [`StorageLayout`] of [`PairBuffer`] storages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairLayout;

impl<K, V> StorageLayout<K, V> for PairLayout {
    type Storage = PairBuffer<K, V>;

    fn allocate(&self, capacity: usize) -> Self::Storage {
        PairBuffer::with_capacity(capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::{PairBuffer, PairLayout};
    use crate::storage::tests::test_storage;
    use crate::storage::{Storage, StorageLayout};

    #[test]
    fn storage() {
        test_storage(PairBuffer::new());
        test_storage(PairBuffer::with_capacity(16));
    }

    #[test]
    fn layout_allocates() {
        let s: PairBuffer<u8, u8> = PairLayout.allocate(10);
        assert!(s.capacity() >= 10);
        assert!(s.is_empty());
    }
}
