use super::{PairBuffer, SplitBuffer, Storage, StorageLayout};
use crate::iter::{Slices, SlicesMut};
use std::ops::Range;

/// Storage layout chosen at runtime.
///
/// This is the [`StorageLayout`] of containers built from a
/// [configuration](../config/index.html) or from a
/// [builder](../builder/index.html) when the layout is only known at
/// runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Layout {
    /// One buffer of key/value pairs. See [`PairBuffer`].
    #[default]
    Pairs,
    /// Two parallel buffers of keys and values. See [`SplitBuffer`].
    Split,
}

/// [`Storage`] which layout is chosen at runtime. See [`Layout`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutBuffer<K, V> {
    Pairs(PairBuffer<K, V>),
    Split(SplitBuffer<K, V>),
}

impl<K, V> LayoutBuffer<K, V> {
    pub fn layout(&self) -> Layout {
        match self {
            LayoutBuffer::Pairs(_) => Layout::Pairs,
            LayoutBuffer::Split(_) => Layout::Split,
        }
    }
}

impl<K, V> Default for LayoutBuffer<K, V> {
    fn default() -> Self {
        LayoutBuffer::Pairs(PairBuffer::new())
    }
}

macro_rules! dispatch {
    ($self:ident, $s:ident => $e:expr) => {
        match $self {
            LayoutBuffer::Pairs($s) => $e,
            LayoutBuffer::Split($s) => $e,
        }
    };
}

impl<K, V> Storage<K, V> for LayoutBuffer<K, V> {
    fn len(&self) -> usize {
        dispatch!(self, s => s.len())
    }

    fn capacity(&self) -> usize {
        dispatch!(self, s => s.capacity())
    }

    fn reserve(&mut self, additional: usize) {
        dispatch!(self, s => s.reserve(additional))
    }

    fn shrink_to_fit(&mut self) {
        dispatch!(self, s => s.shrink_to_fit())
    }

    fn insert(&mut self, index: usize, key: K, value: V) {
        dispatch!(self, s => s.insert(index, key, value))
    }

    fn push(&mut self, key: K, value: V) {
        dispatch!(self, s => s.push(key, value))
    }

    fn remove(&mut self, index: usize) -> (K, V) {
        dispatch!(self, s => s.remove(index))
    }

    fn remove_range(&mut self, range: Range<usize>) {
        dispatch!(self, s => s.remove_range(range))
    }

    fn clear(&mut self) {
        dispatch!(self, s => s.clear())
    }

    fn retain(&mut self, keep: &mut dyn FnMut(&K, &mut V) -> bool) {
        dispatch!(self, s => s.retain(keep))
    }

    fn take_entries(&mut self) -> Vec<(K, V)> {
        dispatch!(self, s => s.take_entries())
    }

    fn append(&mut self, entries: Vec<(K, V)>) {
        dispatch!(self, s => s.append(entries))
    }

    fn slices(&self) -> Slices<'_, K, V> {
        dispatch!(self, s => s.slices())
    }

    fn slices_mut(&mut self) -> SlicesMut<'_, K, V> {
        dispatch!(self, s => s.slices_mut())
    }
}

impl<K, V> StorageLayout<K, V> for Layout {
    type Storage = LayoutBuffer<K, V>;

    fn allocate(&self, capacity: usize) -> Self::Storage {
        match self {
            Layout::Pairs => {
                LayoutBuffer::Pairs(PairBuffer::with_capacity(capacity))
            }
            Layout::Split => {
                LayoutBuffer::Split(SplitBuffer::with_capacity(capacity))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Layout, LayoutBuffer};
    use crate::storage::tests::test_storage;
    use crate::storage::StorageLayout;

    #[test]
    fn storage() {
        test_storage(Layout::Pairs.allocate(0));
        test_storage(Layout::Split.allocate(8));
        test_storage(LayoutBuffer::default());
    }

    #[test]
    fn allocate_matches_layout() {
        let pairs: LayoutBuffer<u8, u8> = Layout::Pairs.allocate(1);
        let split: LayoutBuffer<u8, u8> = Layout::Split.allocate(1);
        assert_eq!(pairs.layout(), Layout::Pairs);
        assert_eq!(split.layout(), Layout::Split);
    }
}
