use super::Flat;
use crate::compare::Compare;
use crate::storage::Storage;
use log::trace;
use std::borrow::Borrow;
use std::ops::{Bound, Range, RangeBounds};

/// Resolve `range` against a container of `len` entries.
///
/// ## Panics
///
/// Panics if the range is decreasing or ends past `len`, like slice
/// indexing does.
fn resolve<R: RangeBounds<usize>>(range: R, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s
            .checked_add(1)
            .unwrap_or_else(|| panic!("range start overflows usize")),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e
            .checked_add(1)
            .unwrap_or_else(|| panic!("range end overflows usize")),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    if start > end {
        panic!("range starts at {} but ends at {}", start, end);
    }
    if end > len {
        panic!("range end {} out of range for length {}", end, len);
    }
    start..end
}

impl<K, V, C, S> Flat<K, V, C, S>
where
    S: Storage<K, V>,
{
    fn insert_at(&mut self, index: usize, key: K, value: V) -> &mut V {
        if self.storage.len() == self.storage.capacity() {
            trace!(
                "flat storage full at {} entries, growing on insertion",
                self.storage.len()
            );
        }
        self.storage.insert(index, key, value);
        self.storage.slices_mut().value_mut(index)
    }

    /// Insert `key` unless an equivalent key is stored.
    ///
    /// `value` is only called once the key is known to be missing.
    /// Returns the position of the stored key and whether an insertion
    /// happened.
    pub fn insert_unique_with<F>(&mut self, key: K, value: F) -> (usize, bool)
    where
        C: Compare<K>,
        F: FnOnce() -> V,
    {
        let index = self.lower_bound(&key);
        if index < self.len()
            && !self.compare.less(&key, self.storage.slices().key(index))
        {
            return (index, false);
        }
        self.insert_at(index, key, value());
        (index, true)
    }

    /// Value of the first key equivalent to `key`, inserting `value()` at
    /// the low end of the would-be run of `key` if there is none.
    pub fn get_or_insert_with<F>(&mut self, key: K, value: F) -> &mut V
    where
        C: Compare<K>,
        F: FnOnce() -> V,
    {
        let (index, _) = self.insert_unique_with(key, value);
        self.storage.slices_mut().value_mut(index)
    }

    /// Insert `key` before any equivalent key already stored.
    pub fn insert_multi(&mut self, key: K, value: V) -> usize
    where
        C: Compare<K>,
    {
        let index = self.lower_bound(&key);
        self.insert_at(index, key, value);
        index
    }

    /// Remove the entry at `index`. The next entry, if any, takes its
    /// position.
    pub fn remove_at(&mut self, index: usize) -> Option<(K, V)> {
        if index < self.len() {
            Some(self.storage.remove(index))
        } else {
            None
        }
    }

    /// Remove the entries at positions in `range` and return how many
    /// were removed.
    ///
    /// ## Panics
    ///
    /// Panics if `range` is decreasing or ends past the last entry.
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        let range = resolve(range, self.len());
        let removed = range.len();
        if removed > 0 {
            self.storage.remove_range(range);
        }
        removed
    }

    /// Remove every key equivalent to `key` and return how many were
    /// removed.
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        let range = self.equal_range(key);
        let removed = range.len();
        if removed > 0 {
            self.storage.remove_range(range);
        }
        removed
    }

    /// Remove and return the first entry equivalent to `key`.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.find(key).map(|i| self.storage.remove(i))
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.remove_at(0)
    }

    pub fn pop_last(&mut self) -> Option<(K, V)> {
        match self.len() {
            0 => None,
            n => self.remove_at(n - 1),
        }
    }

    /// Keep the entries for which `keep` returns true, in order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.storage.retain(&mut keep)
    }

    pub fn clear(&mut self) {
        self.storage.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::compare::Ascending;
    use crate::engine::Flat;
    use crate::storage::{Layout, LayoutBuffer};

    type TestFlat = Flat<u32, char, Ascending, LayoutBuffer<u32, char>>;

    fn keys(f: &TestFlat) -> Vec<u32> {
        f.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn resolve_ranges() {
        assert_eq!(resolve(.., 4), 0..4);
        assert_eq!(resolve(1..=2, 4), 1..3);
        assert_eq!(resolve(2.., 4), 2..4);
        assert_eq!(resolve(..0, 4), 0..0);
    }

    #[test]
    #[should_panic]
    fn resolve_out_of_bounds() {
        resolve(0..5, 4);
    }

    #[test]
    fn unique_insertion_constructs_after_check() {
        for layout in [Layout::Pairs, Layout::Split] {
            let mut f: TestFlat = Flat::with_layout(&layout, 0, Ascending);
            assert_eq!(f.insert_unique_with(5, || 'a'), (0, true));
            assert_eq!(f.insert_unique_with(1, || 'b'), (0, true));
            assert_eq!(
                f.insert_unique_with(5, || panic!("constructed on a hit")),
                (1, false)
            );
            assert_eq!(f.get(&5), Some((&5, &'a')));
            *f.get_or_insert_with(3, || 'c') = 'd';
            assert_eq!(keys(&f), vec![1, 3, 5]);
            assert_eq!(f.get(&3), Some((&3, &'d')));
        }
    }

    #[test]
    fn multi_insertion_goes_to_low_end() {
        for layout in [Layout::Pairs, Layout::Split] {
            let mut f: TestFlat = Flat::with_layout(&layout, 0, Ascending);
            assert_eq!(f.insert_multi(2, 'a'), 0);
            assert_eq!(f.insert_multi(2, 'b'), 0);
            assert_eq!(f.insert_multi(3, 'c'), 2);
            assert_eq!(f.insert_multi(2, 'd'), 0);
            let values: Vec<char> = f.iter().map(|(_, v)| *v).collect();
            assert_eq!(values, vec!['d', 'b', 'a', 'c']);
        }
    }

    #[test]
    fn removals() {
        for layout in [Layout::Pairs, Layout::Split] {
            let mut f: TestFlat = Flat::with_layout(&layout, 0, Ascending);
            for (k, v) in [(1, 'a'), (2, 'b'), (2, 'c'), (4, 'd'), (5, 'e')] {
                f.insert_multi(k, v);
            }
            assert_eq!(f.erase(&2), 2);
            assert_eq!(f.erase(&2), 0);
            assert_eq!(keys(&f), vec![1, 4, 5]);
            assert_eq!(f.remove_at(1), Some((4, 'd')));
            assert_eq!(f.remove_at(2), None);
            assert_eq!(f.remove(&5), Some((5, 'e')));
            assert_eq!(f.remove(&5), None);

            for k in 10..15 {
                f.insert_multi(k, 'x');
            }
            assert_eq!(f.erase_range(1..3), 2);
            assert_eq!(keys(&f), vec![1, 12, 13, 14]);
            assert_eq!(f.erase_range(2..2), 0);
            assert_eq!(f.pop_last(), Some((14, 'x')));
            assert_eq!(f.pop_first(), Some((1, 'a')));

            f.retain(|k, _| k % 2 == 0);
            assert_eq!(keys(&f), vec![12]);
            f.clear();
            assert!(f.is_empty());
            assert_eq!(f.pop_last(), None);
            assert_eq!(f.erase_range(..), 0);
        }
    }
}
