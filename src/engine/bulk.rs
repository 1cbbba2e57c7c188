use super::Flat;
use crate::compare::Compare;
use crate::storage::Storage;
use log::trace;

/// Batches up to this size are inserted one entry at a time.
/// Larger batches are merged with a single sort of the whole storage.
pub(crate) const BULK_THRESHOLD: usize = 16;

/// Stable top-down merge sort of `entries` by key.
///
/// Equivalent keys keep their relative order. Every step only asks
/// whether one key is ordered before another, so a comparator that is
/// not a strict weak order yields an unspecified order but never a panic.
fn sort_entries<K, V, C: Compare<K>>(mut entries: Vec<(K, V)>, compare: &C) -> Vec<(K, V)> {
    if entries.len() <= 1 {
        return entries;
    }
    let right = entries.split_off(entries.len() / 2);
    let left = sort_entries(entries, compare);
    let right = sort_entries(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // Ties go left.
        let from_right = match (left.peek(), right.peek()) {
            (Some((l, _)), Some((r, _))) => compare.less(r, l),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if from_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged
}

fn dedup_entries<K, V, C: Compare<K>>(entries: &mut Vec<(K, V)>, compare: &C) {
    // `dedup_by` drops the later of two equivalent neighbours.
    entries.dedup_by(|(later, _), (kept, _)| compare.equivalent(kept, later));
}

impl<K, V, C, S> Flat<K, V, C, S>
where
    S: Storage<K, V>,
    C: Compare<K>,
{
    /// Build a unique-key engine from `entries` given in insertion order.
    /// The first of several equivalent keys wins.
    pub fn from_unique(entries: Vec<(K, V)>, compare: C, mut storage: S) -> Self {
        storage.clear();
        let mut entries = sort_entries(entries, &compare);
        dedup_entries(&mut entries, &compare);
        storage.append(entries);
        Self::from_sorted(storage, compare)
    }

    /// Build a multi-key engine from `entries` given in insertion order.
    /// Equivalent keys end up in reverse insertion order, as if inserted
    /// one by one.
    pub fn from_multi(mut entries: Vec<(K, V)>, compare: C, mut storage: S) -> Self {
        storage.clear();
        entries.reverse();
        let entries = sort_entries(entries, &compare);
        storage.append(entries);
        Self::from_sorted(storage, compare)
    }

    /// Adopt the entries of `storage`, taken in index order as insertion
    /// order, keeping unique keys.
    pub fn adopt_unique(mut storage: S, compare: C) -> Self {
        let entries = storage.take_entries();
        Self::from_unique(entries, compare, storage)
    }

    /// Adopt the entries of `storage`, taken in index order as insertion
    /// order, keeping duplicate keys.
    pub fn adopt_multi(mut storage: S, compare: C) -> Self {
        let entries = storage.take_entries();
        Self::from_multi(entries, compare, storage)
    }

    /// Insert `entries`, in order, skipping keys already stored.
    /// Same outcome as calling `insert_unique_with` on each entry.
    pub fn extend_unique<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let incoming: Vec<(K, V)> = entries.into_iter().collect();
        if incoming.len() <= BULK_THRESHOLD {
            for (k, v) in incoming {
                self.insert_unique_with(k, || v);
            }
            return;
        }

        trace!(
            "merging {} entries into {} unique entries",
            incoming.len(),
            self.len()
        );
        // Stored entries come first and win over incoming duplicates.
        let mut all = self.storage.take_entries();
        all.extend(incoming);
        let mut all = sort_entries(all, &self.compare);
        dedup_entries(&mut all, &self.compare);
        self.storage.append(all);
    }

    /// Insert `entries`, in order, keeping duplicate keys.
    /// Same outcome as calling `insert_multi` on each entry.
    pub fn extend_multi<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut incoming: Vec<(K, V)> = entries.into_iter().collect();
        if incoming.len() <= BULK_THRESHOLD {
            for (k, v) in incoming {
                self.insert_multi(k, v);
            }
            return;
        }

        trace!(
            "merging {} entries into {} entries",
            incoming.len(),
            self.len()
        );
        // Later insertions go before earlier ones and before stored keys.
        incoming.reverse();
        incoming.append(&mut self.storage.take_entries());
        let sorted = sort_entries(incoming, &self.compare);
        self.storage.append(sorted);
    }
}

#[cfg(test)]
mod tests {
    use super::{sort_entries, BULK_THRESHOLD};
    use crate::compare::{Ascending, Descending};
    use crate::engine::Flat;
    use crate::storage::{Layout, PairBuffer, SplitBuffer, StorageLayout};
    use std::cell::Cell;
    use std::cmp::Ordering;

    /// Comparator answering Less, Equal or Greater at random.
    fn noisy(seed: u64) -> impl Fn(&u32, &u32) -> Ordering {
        let state = Cell::new(seed | 1);
        move |_: &u32, _: &u32| {
            // xorshift64
            let mut x = state.get();
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            state.set(x);
            match x % 3 {
                0 => Ordering::Less,
                1 => Ordering::Equal,
                _ => Ordering::Greater,
            }
        }
    }

    #[test]
    fn merge_sort_is_stable() {
        let entries = vec![(2, 'a'), (1, 'b'), (2, 'c'), (0, 'd'), (1, 'e'), (2, 'f')];
        let sorted = sort_entries(entries, &Ascending);
        assert_eq!(
            sorted,
            vec![(0, 'd'), (1, 'b'), (1, 'e'), (2, 'a'), (2, 'c'), (2, 'f')]
        );
        assert!(sort_entries(Vec::<(u8, ())>::new(), &Ascending).is_empty());
    }

    #[test]
    fn invalid_comparator_never_panics() {
        let n = BULK_THRESHOLD as u32 * 64;
        for layout in [Layout::Pairs, Layout::Split] {
            let compare = noisy(0x9e37_79b9_7f4a_7c15);

            let mut unique = Flat::with_layout(&layout, 0, &compare);
            for k in 0..n {
                unique.insert_unique_with(k, || k);
            }
            unique.extend_unique((0..n).map(|k| (k, k)));
            assert!(unique.len() <= 2 * n as usize);

            let mut multi = Flat::with_layout(&layout, 0, &compare);
            for k in 0..n {
                multi.insert_multi(k, k);
            }
            multi.extend_multi((0..n).map(|k| (k, k)));
            assert_eq!(multi.len(), 2 * n as usize);

            let collected = Flat::from_unique(
                (0..n).map(|k| (k, k)).collect(),
                &compare,
                StorageLayout::<u32, u32>::allocate(&layout, 0),
            );
            assert!(collected.len() <= n as usize);
            let mut adopted = Flat::adopt_multi(multi.into_storage(), &compare);
            assert_eq!(adopted.len(), 2 * n as usize);

            for k in 0..n {
                let _ = unique.find(&k);
                let _ = unique.equal_range(&k);
                unique.erase(&k);
            }
            let len = adopted.len();
            assert_eq!(adopted.erase_range(len / 4..len / 2), len / 2 - len / 4);
        }
    }

    #[test]
    fn unique_keeps_first() {
        let f = Flat::from_unique(
            vec![(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')],
            Ascending,
            PairBuffer::new(),
        );
        let entries: Vec<_> = f.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(entries, vec![(1, 'b'), (2, 'd'), (3, 'a')]);
    }

    #[test]
    fn multi_reverses_runs() {
        let f = Flat::from_multi(
            vec![(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')],
            Descending,
            SplitBuffer::new(),
        );
        let entries: Vec<_> = f.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(
            entries,
            vec![(3, 'c'), (3, 'a'), (2, 'd'), (1, 'e'), (1, 'b')]
        );
    }

    #[test]
    fn adopt_sorts_storage() {
        let mut storage = SplitBuffer::new();
        crate::storage::Storage::append(&mut storage, vec![(2, 'x'), (1, 'y'), (2, 'z')]);
        let f = Flat::adopt_unique(storage, Ascending);
        let keys: Vec<_> = f.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(keys, vec![(1, 'y'), (2, 'x')]);
    }

    fn batches() -> Vec<Vec<(u32, u32)>> {
        let n = BULK_THRESHOLD as u32 * 3;
        vec![
            (0..4).map(|i| (i % 3, i)).collect(),
            (0..n).map(|i| ((i * 7) % 11, 100 + i)).collect(),
        ]
    }

    #[test]
    fn extend_unique_matches_repeated_insertion() {
        for batch in batches() {
            let mut bulk =
                Flat::from_unique(vec![(5, 0), (1, 0)], Ascending, PairBuffer::new());
            let mut one_by_one = bulk.clone();
            bulk.extend_unique(batch.clone());
            for (k, v) in batch {
                one_by_one.insert_unique_with(k, || v);
            }
            assert!(bulk.iter().eq(one_by_one.iter()));
        }
    }

    #[test]
    fn extend_multi_matches_repeated_insertion() {
        for batch in batches() {
            let mut bulk =
                Flat::from_multi(vec![(5, 0), (1, 0)], Ascending, SplitBuffer::new());
            let mut one_by_one = bulk.clone();
            bulk.extend_multi(batch.clone());
            for (k, v) in batch {
                one_by_one.insert_multi(k, v);
            }
            assert!(bulk.iter().eq(one_by_one.iter()));
        }
    }
}
