use super::Flat;
use crate::compare::Compare;
use crate::storage::Storage;
use std::borrow::Borrow;
use std::ops::Range;

impl<K, V, C, S> Flat<K, V, C, S>
where
    S: Storage<K, V>,
{
    /// Position of the first key not ordered before `key`.
    pub fn lower_bound<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.storage
            .slices()
            .partition_point(|k| self.compare.less(k.borrow(), key))
    }

    /// Position of the first key ordered after `key`.
    pub fn upper_bound<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.storage
            .slices()
            .partition_point(|k| !self.compare.less(key, k.borrow()))
    }

    /// Positions of the run of keys equivalent to `key`.
    /// The range is empty, at the insertion point of `key`, on a miss.
    pub fn equal_range<Q>(&self, key: &Q) -> Range<usize>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        let slices = self.storage.slices();
        let lo = self.lower_bound(key);
        let hi = lo
            + slices
                .slice(lo..slices.len())
                .partition_point(|k| !self.compare.less(key, k.borrow()));
        lo..hi
    }

    /// Position of the first key equivalent to `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        let index = self.lower_bound(key);
        // Keys at and after `index` are not ordered before `key`:
        // the key at `index` is equivalent iff `key` is not ordered before it.
        if index < self.len()
            && !self
                .compare
                .less(key, self.storage.slices().key(index).borrow())
        {
            Some(index)
        } else {
            None
        }
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.find(key).is_some()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.find(key).and_then(|i| self.at(i))
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        match self.find(key) {
            Some(i) => self.at_mut(i).map(|(_, v)| v),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::compare::{Ascending, Descending};
    use crate::engine::Flat;
    use crate::storage::Layout;

    fn flat(layout: Layout) -> Flat<u32, u32, Ascending, crate::storage::LayoutBuffer<u32, u32>> {
        let mut flat = Flat::with_layout(&layout, 0, Ascending);
        for (k, v) in [(1, 0), (3, 0), (3, 1), (3, 2), (7, 0)] {
            flat.insert_multi(k, v);
        }
        flat
    }

    #[test]
    fn bounds() {
        for layout in [Layout::Pairs, Layout::Split] {
            let f = flat(layout);
            assert_eq!(f.lower_bound(&0), 0);
            assert_eq!(f.upper_bound(&0), 0);
            assert_eq!(f.lower_bound(&3), 1);
            assert_eq!(f.upper_bound(&3), 4);
            assert_eq!(f.lower_bound(&5), 4);
            assert_eq!(f.upper_bound(&5), 4);
            assert_eq!(f.lower_bound(&8), 5);
            assert_eq!(f.equal_range(&3), 1..4);
            assert_eq!(f.equal_range(&4), 4..4);
            assert_eq!(f.equal_range(&9), 5..5);
        }
    }

    #[test]
    fn find_first_of_run() {
        for layout in [Layout::Pairs, Layout::Split] {
            let f = flat(layout);
            assert_eq!(f.find(&1), Some(0));
            assert_eq!(f.find(&3), Some(1));
            assert_eq!(f.find(&7), Some(4));
            assert_eq!(f.find(&2), None);
            assert_eq!(f.find(&100), None);
            assert!(f.contains(&3));
            assert_eq!(f.get(&7), Some((&7, &0)));
        }
    }

    #[test]
    fn empty_searches() {
        let f: Flat<u32, (), _, _> = Flat::with_layout(&Layout::Pairs, 0, Descending);
        assert_eq!(f.find(&1), None);
        assert_eq!(f.equal_range(&1), 0..0);
        assert_eq!(f.lower_bound(&1), 0);
    }

    #[test]
    fn heterogeneous_lookup() {
        let mut f = Flat::with_layout(&Layout::Split, 0, Ascending);
        f.insert_multi(String::from("b"), 2);
        f.insert_multi(String::from("a"), 1);
        assert_eq!(f.find("a"), Some(0));
        assert_eq!(f.find("c"), None);
        if let Some(v) = f.get_mut("b") {
            *v = 20;
        }
        assert_eq!(f.get("b").map(|(_, v)| *v), Some(20));
    }
}
