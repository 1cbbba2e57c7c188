use super::{Slices, SlicesMut};
use std::iter::{FusedIterator, Zip};
use std::slice;

enum Inner<'a, K, V> {
    Pairs(slice::Iter<'a, (K, V)>),
    Split(Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>),
}

impl<'a, K, V> Clone for Inner<'a, K, V> {
    fn clone(&self) -> Self {
        match self {
            Inner::Pairs(it) => Inner::Pairs(it.clone()),
            Inner::Split(it) => Inner::Split(it.clone()),
        }
    }
}

/// Iterator over the `(&K, &V)` entries of a container in sort order.
pub struct Iter<'a, K, V> {
    inner: Inner<'a, K, V>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(slices: Slices<'a, K, V>) -> Self {
        let inner = match slices {
            Slices::Pairs(entries) => Inner::Pairs(entries.iter()),
            Slices::Split(keys, values) => {
                Inner::Split(keys.iter().zip(values.iter()))
            }
        };
        Iter { inner }
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Pairs(it) => it.next().map(|(k, v)| (k, v)),
            Inner::Split(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Pairs(it) => it.size_hint(),
            Inner::Split(it) => it.size_hint(),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Pairs(it) => it.nth(n).map(|(k, v)| (k, v)),
            Inner::Split(it) => it.nth(n),
        }
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Pairs(it) => it.next_back().map(|(k, v)| (k, v)),
            Inner::Split(it) => it.next_back(),
        }
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

enum InnerMut<'a, K, V> {
    Pairs(slice::IterMut<'a, (K, V)>),
    Split(Zip<slice::Iter<'a, K>, slice::IterMut<'a, V>>),
}

/// Iterator over the `(&K, &mut V)` entries of a map in sort order.
pub struct IterMut<'a, K, V> {
    inner: InnerMut<'a, K, V>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(slices: SlicesMut<'a, K, V>) -> Self {
        let inner = match slices {
            SlicesMut::Pairs(entries) => InnerMut::Pairs(entries.iter_mut()),
            SlicesMut::Split(keys, values) => {
                InnerMut::Split(keys.iter().zip(values.iter_mut()))
            }
        };
        IterMut { inner }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            InnerMut::Pairs(it) => it.next().map(|(k, v)| (&*k, v)),
            InnerMut::Split(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            InnerMut::Pairs(it) => it.size_hint(),
            InnerMut::Split(it) => it.size_hint(),
        }
    }
}

impl<'a, K, V> DoubleEndedIterator for IterMut<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            InnerMut::Pairs(it) => it.next_back().map(|(k, v)| (&*k, v)),
            InnerMut::Split(it) => it.next_back(),
        }
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}
impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

/// Owning iterator over the `(K, V)` entries of a container in sort order.
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(entries: Vec<(K, V)>) -> Self {
        IntoIter {
            inner: entries.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

// Projections of the entry iterators.
macro_rules! projection {
    ($(#[$doc:meta])* $name:ident<$($lt:lifetime,)? $k:ident, $v:ident>,
     $inner:ty, $item:ty, |$e:pat_param| $project:expr) => {
        $(#[$doc])*
        pub struct $name<$($lt,)? $k, $v> {
            pub(crate) inner: $inner,
        }

        impl<$($lt,)? $k, $v> Iterator for $name<$($lt,)? $k, $v> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next().map(|$e| $project)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$($lt,)? $k, $v> DoubleEndedIterator for $name<$($lt,)? $k, $v> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back().map(|$e| $project)
            }
        }

        impl<$($lt,)? $k, $v> ExactSizeIterator for $name<$($lt,)? $k, $v> {}
        impl<$($lt,)? $k, $v> FusedIterator for $name<$($lt,)? $k, $v> {}
    };
}

projection!(
    /// Iterator over the keys of a container in sort order.
    Keys<'a, K, V>, Iter<'a, K, V>, &'a K, |(k, _)| k
);
projection!(
    /// Iterator over the values of a map in key order.
    Values<'a, K, V>, Iter<'a, K, V>, &'a V, |(_, v)| v
);
projection!(
    /// Iterator over the mutable values of a map in key order.
    ValuesMut<'a, K, V>, IterMut<'a, K, V>, &'a mut V, |(_, v)| v
);
projection!(
    /// Owning iterator over the keys of a container in sort order.
    IntoKeys<K, V>, IntoIter<K, V>, K, |(k, _)| k
);
projection!(
    /// Owning iterator over the values of a map in key order.
    IntoValues<K, V>, IntoIter<K, V>, V, |(_, v)| v
);

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{IntoIter, Iter, IterMut, Keys, Values};
    use crate::iter::{Slices, SlicesMut};

    #[test]
    fn double_ended_over_split() {
        let keys = vec![1, 2, 3];
        let values = vec!["a", "b", "c"];
        let mut it = Iter::new(Slices::Split(&keys, &values));
        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back(), Some((&3, &"c")));
        assert_eq!(it.next(), Some((&1, &"a")));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some((&2, &"b")));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn projections() {
        let pairs = vec![(1, 'x'), (2, 'y')];
        let keys: Vec<_> = Keys {
            inner: Iter::new(Slices::Pairs(&pairs)),
        }
        .collect();
        let values: Vec<_> = Values {
            inner: Iter::new(Slices::Pairs(&pairs)),
        }
        .rev()
        .collect();
        assert_eq!(keys, vec![&1, &2]);
        assert_eq!(values, vec![&'y', &'x']);
    }

    #[test]
    fn mutate_through_iter_mut() {
        let mut pairs = vec![(1, 1), (2, 2)];
        for (k, v) in IterMut::new(SlicesMut::Pairs(&mut pairs)) {
            *v += *k;
        }
        assert_eq!(pairs, vec![(1, 2), (2, 4)]);

        let owned: Vec<_> = IntoIter::new(pairs).rev().collect();
        assert_eq!(owned, vec![(2, 4), (1, 2)]);
    }
}
