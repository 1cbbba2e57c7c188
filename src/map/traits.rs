use super::FlatMap;
use crate::compare::Compare;
use crate::engine::Flat;
use crate::iter::{IntoIter, Iter, IterMut};
use crate::storage::Storage;
use std::borrow::Borrow;
use std::fmt;
use std::ops::Index;

impl<K, V, C, S> Default for FlatMap<K, V, C, S>
where
    C: Default,
    S: Storage<K, V> + Default,
{
    fn default() -> Self {
        FlatMap {
            flat: Flat::from_sorted(S::default(), C::default()),
        }
    }
}

impl<K, V, C: Clone, S: Clone> Clone for FlatMap<K, V, C, S> {
    fn clone(&self) -> Self {
        FlatMap {
            flat: self.flat.clone(),
        }
    }
}

impl<K, V, C, S> fmt::Debug for FlatMap<K, V, C, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
    S: Storage<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Maps are equal when they hold equal entries in the same order.
/// Comparators and storage layouts are not compared.
impl<K, V, C, S, C2, S2> PartialEq<FlatMap<K, V, C2, S2>> for FlatMap<K, V, C, S>
where
    K: PartialEq,
    V: PartialEq,
    S: Storage<K, V>,
    S2: Storage<K, V>,
{
    fn eq(&self, other: &FlatMap<K, V, C2, S2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C, S: Storage<K, V>> Eq for FlatMap<K, V, C, S> {}

/// Build a map from entries in insertion order.
/// The first of several equivalent keys wins.
impl<K, V, C, S> FromIterator<(K, V)> for FlatMap<K, V, C, S>
where
    C: Compare<K> + Default,
    S: Storage<K, V> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FlatMap {
            flat: Flat::from_unique(
                iter.into_iter().collect(),
                C::default(),
                S::default(),
            ),
        }
    }
}

/// Insert entries in order. Keys already stored keep their value.
impl<K, V, C, S> Extend<(K, V)> for FlatMap<K, V, C, S>
where
    C: Compare<K>,
    S: Storage<K, V>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.flat.extend_unique(iter)
    }
}

impl<'a, K, V, C, S> Extend<(&'a K, &'a V)> for FlatMap<K, V, C, S>
where
    K: Copy + 'a,
    V: Copy + 'a,
    C: Compare<K>,
    S: Storage<K, V>,
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        self.flat
            .extend_unique(iter.into_iter().map(|(k, v)| (*k, *v)))
    }
}

impl<K, V, C, S, const N: usize> From<[(K, V); N]> for FlatMap<K, V, C, S>
where
    C: Compare<K> + Default,
    S: Storage<K, V> + Default,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V, C, S: Storage<K, V>> IntoIterator for FlatMap<K, V, C, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut storage = self.flat.into_storage();
        IntoIter::new(storage.take_entries())
    }
}

impl<'a, K, V, C, S: Storage<K, V>> IntoIterator for &'a FlatMap<K, V, C, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, C, S: Storage<K, V>> IntoIterator for &'a mut FlatMap<K, V, C, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Value stored under a key.
///
/// ## Panics
///
/// Panics if the key is not in the map. Use
/// [`get_or_insert_default()`](struct.FlatMap.html#method.get_or_insert_default)
/// to insert missing keys.
impl<K, V, C, S, Q> Index<&Q> for FlatMap<K, V, C, S>
where
    Q: ?Sized,
    K: Borrow<Q>,
    C: Compare<Q>,
    S: Storage<K, V>,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(v) => v,
            None => panic!("key not found in FlatMap"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FlatMap;
    use crate::compare::{Ascending, Descending};
    use crate::storage::SplitBuffer;

    #[test]
    fn collect_keeps_first_duplicate() {
        let m: FlatMap<u8, char> =
            vec![(2, 'a'), (1, 'b'), (2, 'c')].into_iter().collect();
        assert_eq!(format!("{:?}", m), "{1: 'b', 2: 'a'}");
    }

    #[test]
    fn extend_keeps_stored_values() {
        let mut m: FlatMap<u32, u32, Descending, SplitBuffer<u32, u32>> =
            FlatMap::from([(1, 1), (2, 2)]);
        m.extend((0..40).map(|k| (k, 100)));
        m.extend([(&50, &0)]);
        assert_eq!(m.len(), 41);
        assert_eq!(m[&1], 1);
        assert_eq!(m[&39], 100);
        assert_eq!(m.first(), Some((&50, &0)));
    }

    #[test]
    fn equality_ignores_layout() {
        let pairs: FlatMap<u8, u8> = FlatMap::from([(1, 1), (2, 2)]);
        let split: FlatMap<u8, u8, Ascending, SplitBuffer<u8, u8>> =
            FlatMap::from([(2, 2), (1, 1)]);
        assert!(pairs == split);
        let mut other = pairs.clone();
        other.insert(3, 3);
        assert!(pairs != other);
    }

    #[test]
    fn into_iterators() {
        let mut m: FlatMap<u8, u8> = FlatMap::from([(3, 0), (1, 0)]);
        for (k, v) in &mut m {
            *v = *k * 2;
        }
        let borrowed: Vec<_> = (&m).into_iter().collect();
        assert_eq!(borrowed, vec![(&1, &2), (&3, &6)]);
        let owned: Vec<_> = m.into_iter().rev().collect();
        assert_eq!(owned, vec![(3, 6), (1, 2)]);
    }

    #[test]
    #[should_panic]
    fn index_missing_key() {
        let m: FlatMap<u8, u8> = FlatMap::default();
        assert_eq!(m[&0], 0);
    }
}
