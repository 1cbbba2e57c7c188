use super::{Iter, IterMut};
use std::ops::Range;

/// Read-only view over the entries of a storage.
///
/// The view hides which layout the storage uses: one buffer of key/value
/// pairs, or two buffers of keys and values sharing the same indices.
/// Accessors build an `(&K, &V)` view of an entry from either layout.
#[derive(Debug)]
pub enum Slices<'a, K, V> {
    /// Entries stored as a single buffer of pairs.
    Pairs(&'a [(K, V)]),
    /// Keys and values stored in two buffers of the same length.
    Split(&'a [K], &'a [V]),
}

impl<'a, K, V> Clone for Slices<'a, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V> Copy for Slices<'a, K, V> {}

impl<'a, K, V> Slices<'a, K, V> {
    pub fn len(&self) -> usize {
        match self {
            Slices::Pairs(entries) => entries.len(),
            Slices::Split(keys, _) => keys.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Key at `index`.
    ///
    /// ## Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn key(&self, index: usize) -> &'a K {
        match *self {
            Slices::Pairs(entries) => &entries[index].0,
            Slices::Split(keys, _) => &keys[index],
        }
    }

    /// Value at `index`.
    ///
    /// ## Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn value(&self, index: usize) -> &'a V {
        match *self {
            Slices::Pairs(entries) => &entries[index].1,
            Slices::Split(_, values) => &values[index],
        }
    }

    /// Entry at `index` or `None` if `index` is out of bounds.
    pub fn get(&self, index: usize) -> Option<(&'a K, &'a V)> {
        match *self {
            Slices::Pairs(entries) => entries.get(index).map(|(k, v)| (k, v)),
            Slices::Split(keys, values) => keys.get(index).zip(values.get(index)),
        }
    }

    /// Sub-view of the entries in `range`.
    ///
    /// ## Panics
    ///
    /// Panics if `range` is out of bounds.
    pub fn slice(self, range: Range<usize>) -> Self {
        match self {
            Slices::Pairs(entries) => Slices::Pairs(&entries[range]),
            Slices::Split(keys, values) => {
                Slices::Split(&keys[range.clone()], &values[range])
            }
        }
    }

    /// Index of the first key for which `pred` returns false, assuming
    /// that `pred` returns true for a prefix of the keys only.
    pub fn partition_point<P>(&self, mut pred: P) -> usize
    where
        P: FnMut(&K) -> bool,
    {
        match *self {
            Slices::Pairs(entries) => entries.partition_point(|(k, _)| pred(k)),
            Slices::Split(keys, _) => keys.partition_point(pred),
        }
    }

    /// Iterator over the entries of the view, in storage order.
    pub fn iter(self) -> Iter<'a, K, V> {
        Iter::new(self)
    }
}

/// View over the entries of a storage with mutable values.
///
/// Keys are never handed out mutably: mutating a key in place could break
/// the sort order of the container.
#[derive(Debug)]
pub enum SlicesMut<'a, K, V> {
    Pairs(&'a mut [(K, V)]),
    Split(&'a [K], &'a mut [V]),
}

impl<'a, K, V> SlicesMut<'a, K, V> {
    pub fn len(&self) -> usize {
        match self {
            SlicesMut::Pairs(entries) => entries.len(),
            SlicesMut::Split(keys, _) => keys.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry at `index` with a mutable value, or `None` if `index` is out of
    /// bounds.
    pub fn get_mut(self, index: usize) -> Option<(&'a K, &'a mut V)> {
        match self {
            SlicesMut::Pairs(entries) => {
                entries.get_mut(index).map(|(k, v)| (&*k, v))
            }
            SlicesMut::Split(keys, values) => {
                keys.get(index).zip(values.get_mut(index))
            }
        }
    }

    /// Mutable value at `index`.
    ///
    /// ## Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn value_mut(self, index: usize) -> &'a mut V {
        match self {
            SlicesMut::Pairs(entries) => &mut entries[index].1,
            SlicesMut::Split(_, values) => &mut values[index],
        }
    }

    /// Sub-view of the entries in `range`.
    ///
    /// ## Panics
    ///
    /// Panics if `range` is out of bounds.
    pub fn slice(self, range: Range<usize>) -> Self {
        match self {
            SlicesMut::Pairs(entries) => SlicesMut::Pairs(&mut entries[range]),
            SlicesMut::Split(keys, values) => SlicesMut::Split(
                &keys[range.clone()],
                &mut values[range],
            ),
        }
    }

    pub fn iter_mut(self) -> IterMut<'a, K, V> {
        IterMut::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Slices, SlicesMut};

    #[test]
    fn both_layouts_agree() {
        let pairs = vec![(1, 'a'), (3, 'b'), (5, 'c')];
        let keys = vec![1, 3, 5];
        let values = vec!['a', 'b', 'c'];
        let views = [
            Slices::Pairs(pairs.as_slice()),
            Slices::Split(keys.as_slice(), values.as_slice()),
        ];

        for view in views {
            assert_eq!(view.len(), 3);
            assert_eq!(view.key(1), &3);
            assert_eq!(view.value(2), &'c');
            assert_eq!(view.get(0), Some((&1, &'a')));
            assert_eq!(view.get(3), None);
            assert_eq!(view.partition_point(|k| *k < 4), 2);
            assert_eq!(view.slice(1..3).key(0), &3);
        }
    }

    #[test]
    fn mutable_values() {
        let mut pairs = vec![(1, 10), (2, 20)];
        let keys = vec![1, 2];
        let mut values = vec![10, 20];

        if let Some((_, v)) = SlicesMut::Pairs(pairs.as_mut_slice()).get_mut(1) {
            *v += 1;
        }
        if let Some((_, v)) =
            SlicesMut::Split(keys.as_slice(), values.as_mut_slice()).get_mut(1)
        {
            *v += 1;
        }
        assert_eq!(pairs[1].1, 21);
        assert_eq!(values[1], 21);
        assert!(SlicesMut::Split(keys.as_slice(), values.as_mut_slice())
            .get_mut(2)
            .is_none());
    }
}
