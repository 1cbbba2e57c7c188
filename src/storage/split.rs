use super::{Storage, StorageLayout};
use crate::iter::{Slices, SlicesMut};
use std::ops::Range;

/// [`Storage`] keeping keys and values in two parallel buffers.
///
/// The key at index `i` is associated with the value at index `i`.
/// Binary searches only walk the keys buffer, which packs more keys per
/// cache line than a buffer of pairs when values are large.
/// Insertion and removal shift both buffers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SplitBuffer<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> SplitBuffer<K, V> {
    pub fn new() -> Self {
        SplitBuffer {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SplitBuffer {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }
}

impl<K, V> Default for SplitBuffer<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Storage<K, V> for SplitBuffer<K, V> {
    fn len(&self) -> usize {
        self.keys.len()
    }

    fn capacity(&self) -> usize {
        self.keys.capacity().min(self.values.capacity())
    }

    fn reserve(&mut self, additional: usize) {
        self.keys.reserve(additional);
        self.values.reserve(additional);
    }

    fn shrink_to_fit(&mut self) {
        self.keys.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    fn insert(&mut self, index: usize, key: K, value: V) {
        self.keys.insert(index, key);
        self.values.insert(index, value);
    }

    fn push(&mut self, key: K, value: V) {
        self.keys.push(key);
        self.values.push(value);
    }

    fn remove(&mut self, index: usize) -> (K, V) {
        (self.keys.remove(index), self.values.remove(index))
    }

    fn remove_range(&mut self, range: Range<usize>) {
        self.keys.drain(range.clone());
        self.values.drain(range);
    }

    fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    fn retain(&mut self, keep: &mut dyn FnMut(&K, &mut V) -> bool) {
        // Vec::retain visits elements once, in order: replay the decisions
        // made on the pairs on each buffer.
        let kept: Vec<bool> = self
            .keys
            .iter()
            .zip(self.values.iter_mut())
            .map(|(k, v)| keep(k, v))
            .collect();
        let mut decisions = kept.iter();
        self.keys.retain(|_| decisions.next().copied().unwrap_or(true));
        let mut decisions = kept.iter();
        self.values.retain(|_| decisions.next().copied().unwrap_or(true));
    }

    fn take_entries(&mut self) -> Vec<(K, V)> {
        let keys = std::mem::take(&mut self.keys);
        let values = std::mem::take(&mut self.values);
        keys.into_iter().zip(values).collect()
    }

    fn slices(&self) -> Slices<'_, K, V> {
        Slices::Split(&self.keys, &self.values)
    }

    fn slices_mut(&mut self) -> SlicesMut<'_, K, V> {
        SlicesMut::Split(&self.keys, &mut self.values)
    }
}

/// [`StorageLayout`] of [`SplitBuffer`] storages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SplitLayout;

impl<K, V> StorageLayout<K, V> for SplitLayout {
    type Storage = SplitBuffer<K, V>;

    fn allocate(&self, capacity: usize) -> Self::Storage {
        SplitBuffer::with_capacity(capacity)
    }
}
