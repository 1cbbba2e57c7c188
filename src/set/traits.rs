use super::{FlatSet, IntoIter, Iter};
use crate::compare::Compare;
use crate::engine::Flat;
use crate::iter::IntoKeys;
use crate::storage::Storage;
use std::fmt;

impl<T, C, S> Default for FlatSet<T, C, S>
where
    C: Default,
    S: Storage<T, ()> + Default,
{
    fn default() -> Self {
        FlatSet {
            flat: Flat::from_sorted(S::default(), C::default()),
        }
    }
}

impl<T, C: Clone, S: Clone> Clone for FlatSet<T, C, S> {
    fn clone(&self) -> Self {
        FlatSet {
            flat: self.flat.clone(),
        }
    }
}

impl<T: fmt::Debug, C, S: Storage<T, ()>> fmt::Debug for FlatSet<T, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C, S, C2, S2> PartialEq<FlatSet<T, C2, S2>> for FlatSet<T, C, S>
where
    T: PartialEq,
    S: Storage<T, ()>,
    S2: Storage<T, ()>,
{
    fn eq(&self, other: &FlatSet<T, C2, S2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C, S: Storage<T, ()>> Eq for FlatSet<T, C, S> {}

/// Build a set from elements in insertion order.
/// The first of several equivalent elements wins.
impl<T, C, S> FromIterator<T> for FlatSet<T, C, S>
where
    C: Compare<T> + Default,
    S: Storage<T, ()> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FlatSet {
            flat: Flat::from_unique(
                iter.into_iter().map(|t| (t, ())).collect(),
                C::default(),
                S::default(),
            ),
        }
    }
}

impl<T, C, S> Extend<T> for FlatSet<T, C, S>
where
    C: Compare<T>,
    S: Storage<T, ()>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.flat.extend_unique(iter.into_iter().map(|t| (t, ())))
    }
}

impl<'a, T, C, S> Extend<&'a T> for FlatSet<T, C, S>
where
    T: Copy + 'a,
    C: Compare<T>,
    S: Storage<T, ()>,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.flat.extend_unique(iter.into_iter().map(|t| (*t, ())))
    }
}

impl<T, C, S, const N: usize> From<[T; N]> for FlatSet<T, C, S>
where
    C: Compare<T> + Default,
    S: Storage<T, ()> + Default,
{
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T, C, S: Storage<T, ()>> IntoIterator for FlatSet<T, C, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut storage = self.flat.into_storage();
        IntoKeys {
            inner: crate::iter::IntoIter::new(storage.take_entries()),
        }
    }
}

impl<'a, T, C, S: Storage<T, ()>> IntoIterator for &'a FlatSet<T, C, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
