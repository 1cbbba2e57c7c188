use crate::iter::{Cursor, Iter, IterMut, Slices, SlicesMut};
use crate::storage::{Storage, StorageLayout};
use std::marker::PhantomData;

/// Storage kept sorted by key under the comparator `C`.
///
/// Between two method calls, the keys of `storage` are in non-decreasing
/// order under `compare`. Whether equivalent keys may coexist is decided
/// by the caller, which picks the unique or multi flavor of the insertion
/// and bulk methods.
pub(crate) struct Flat<K, V, C, S> {
    pub(super) storage: S,
    pub(super) compare: C,
    unused: PhantomData<(K, V)>,
}

impl<K, V, C, S> Flat<K, V, C, S>
where
    S: Storage<K, V>,
{
    /// Wrap an already sorted storage.
    pub(crate) fn from_sorted(storage: S, compare: C) -> Self {
        Flat {
            storage,
            compare,
            unused: PhantomData,
        }
    }

    /// Empty engine with a storage obtained from `layout`.
    pub fn with_layout<L>(layout: &L, capacity: usize, compare: C) -> Self
    where
        L: StorageLayout<K, V, Storage = S>,
    {
        Self::from_sorted(layout.allocate(capacity), compare)
    }

    pub fn compare(&self) -> &C {
        &self.compare
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional)
    }

    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }

    pub fn slices(&self) -> Slices<'_, K, V> {
        self.storage.slices()
    }

    pub fn slices_mut(&mut self) -> SlicesMut<'_, K, V> {
        self.storage.slices_mut()
    }

    pub fn at(&self, index: usize) -> Option<(&K, &V)> {
        self.storage.slices().get(index)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<(&K, &mut V)> {
        self.storage.slices_mut().get_mut(index)
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.at(0)
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.len().checked_sub(1).and_then(|i| self.at(i))
    }

    /// Cursor at `index`, `None` past the end position.
    pub fn cursor_at(&self, index: usize) -> Option<Cursor<'_, K, V>> {
        if index > self.len() {
            None
        } else {
            Some(Cursor::new(self.slices(), index))
        }
    }

    pub fn begin(&self) -> Cursor<'_, K, V> {
        Cursor::new(self.slices(), 0)
    }

    pub fn end(&self) -> Cursor<'_, K, V> {
        Cursor::end(self.slices())
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.storage.slices().iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.storage.slices_mut().iter_mut()
    }
}

impl<K, V, C: Clone, S: Clone> Clone for Flat<K, V, C, S> {
    fn clone(&self) -> Self {
        Flat {
            storage: self.storage.clone(),
            compare: self.compare.clone(),
            unused: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Flat;
    use crate::compare::Ascending;
    use crate::storage::{Layout, PairLayout, SplitLayout};

    #[test]
    fn positional_access() {
        for layout in [Layout::Pairs, Layout::Split] {
            let mut flat = Flat::with_layout(&layout, 4, Ascending);
            assert!(flat.is_empty());
            assert!(flat.capacity() >= 4);
            assert_eq!(flat.first(), None);
            assert_eq!(flat.last(), None);
            assert!(flat.begin() == flat.end());

            flat.insert_multi(2u8, 'b');
            flat.insert_multi(1u8, 'a');
            assert_eq!(flat.first(), Some((&1, &'a')));
            assert_eq!(flat.last(), Some((&2, &'b')));
            assert_eq!(flat.at(2), None);
            if let Some((_, v)) = flat.at_mut(1) {
                *v = 'c';
            }
            assert_eq!(flat.at(1), Some((&2, &'c')));
            assert!(flat.cursor_at(2).map(|c| c.is_end()).unwrap_or(false));
            assert!(flat.cursor_at(3).is_none());
        }
    }

    #[test]
    fn static_layouts() {
        let pairs = Flat::<u8, u8, _, _>::with_layout(&PairLayout, 2, Ascending);
        let split = Flat::<u8, u8, _, _>::with_layout(&SplitLayout, 2, Ascending);
        assert_eq!(pairs.iter().count(), 0);
        assert_eq!(split.iter().count(), 0);
    }
}
