use super::FlatMultiMap;
use crate::compare::Compare;
use crate::engine::Flat;
use crate::iter::{IntoIter, Iter, IterMut};
use crate::storage::Storage;
use std::fmt;

impl<K, V, C, S> Default for FlatMultiMap<K, V, C, S>
where
    C: Default,
    S: Storage<K, V> + Default,
{
    fn default() -> Self {
        FlatMultiMap {
            flat: Flat::from_sorted(S::default(), C::default()),
        }
    }
}

impl<K, V, C: Clone, S: Clone> Clone for FlatMultiMap<K, V, C, S> {
    fn clone(&self) -> Self {
        FlatMultiMap {
            flat: self.flat.clone(),
        }
    }
}

impl<K, V, C, S> fmt::Debug for FlatMultiMap<K, V, C, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
    S: Storage<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K, V, C, S, C2, S2> PartialEq<FlatMultiMap<K, V, C2, S2>>
    for FlatMultiMap<K, V, C, S>
where
    K: PartialEq,
    V: PartialEq,
    S: Storage<K, V>,
    S2: Storage<K, V>,
{
    fn eq(&self, other: &FlatMultiMap<K, V, C2, S2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C, S: Storage<K, V>> Eq for FlatMultiMap<K, V, C, S> {}

/// Build a multimap from entries in insertion order.
impl<K, V, C, S> FromIterator<(K, V)> for FlatMultiMap<K, V, C, S>
where
    C: Compare<K> + Default,
    S: Storage<K, V> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FlatMultiMap {
            flat: Flat::from_multi(
                iter.into_iter().collect(),
                C::default(),
                S::default(),
            ),
        }
    }
}

impl<K, V, C, S> Extend<(K, V)> for FlatMultiMap<K, V, C, S>
where
    C: Compare<K>,
    S: Storage<K, V>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.flat.extend_multi(iter)
    }
}

impl<K, V, C, S, const N: usize> From<[(K, V); N]> for FlatMultiMap<K, V, C, S>
where
    C: Compare<K> + Default,
    S: Storage<K, V> + Default,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V, C, S: Storage<K, V>> IntoIterator for FlatMultiMap<K, V, C, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut storage = self.flat.into_storage();
        IntoIter::new(storage.take_entries())
    }
}

impl<'a, K, V, C, S: Storage<K, V>> IntoIterator for &'a FlatMultiMap<K, V, C, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, C, S: Storage<K, V>> IntoIterator
    for &'a mut FlatMultiMap<K, V, C, S>
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
