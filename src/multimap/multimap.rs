use crate::compare::{Ascending, Compare};
use crate::engine::Flat;
use crate::iter::{
    Cursor, IntoKeys, IntoValues, Iter, IterMut, Keys, Slices, Values,
    ValuesMut,
};
use crate::storage::{PairBuffer, PairLayout, Storage, StorageLayout};
use std::borrow::Borrow;
use std::ops::{Range, RangeBounds};

/// Ordered map accepting duplicate keys, stored in sorted contiguous
/// memory.
///
/// Entries with equivalent keys form a contiguous run. A new entry is
/// inserted at the low end of the run of its key: within a run, entries
/// are in reverse insertion order. Bulk construction and [`Extend`]
/// produce the same order as inserting entries one by one.
///
/// Complexities are those of [`FlatMap`](crate::FlatMap).
///
/// ## Examples
///
/// ```
/// use flatstore::FlatMultiMap;
///
/// let mut m = FlatMultiMap::new();
/// m.insert(2, "two");
/// m.insert(1, "one");
/// m.insert(2, "deux");
///
/// assert_eq!(m.count(&2), 2);
/// let twos: Vec<&str> = m.equal_range(&2).map(|(_, v)| *v).collect();
/// assert_eq!(twos, vec!["deux", "two"]);
/// assert_eq!(m.get(&2), Some(&"deux"));
///
/// assert_eq!(m.erase(&2), 2);
/// assert_eq!(m.len(), 1);
/// ```
pub struct FlatMultiMap<K, V, C = Ascending, S = PairBuffer<K, V>> {
    pub(crate) flat: Flat<K, V, C, S>,
}

impl<K, V> FlatMultiMap<K, V> {
    pub fn new() -> Self {
        Self::with_compare(Ascending)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FlatMultiMap {
            flat: Flat::with_layout(&PairLayout, capacity, Ascending),
        }
    }
}

impl<K, V, C> FlatMultiMap<K, V, C> {
    pub fn with_compare(compare: C) -> Self {
        FlatMultiMap {
            flat: Flat::with_layout(&PairLayout, 0, compare),
        }
    }
}

impl<K, V, C, S> FlatMultiMap<K, V, C, S>
where
    S: Storage<K, V>,
{
    pub fn with_layout<L>(layout: &L, capacity: usize, compare: C) -> Self
    where
        L: StorageLayout<K, V, Storage = S>,
    {
        FlatMultiMap {
            flat: Flat::with_layout(layout, capacity, compare),
        }
    }

    /// Multimap sorted by `compare` using `storage`. Entries already in
    /// `storage` are kept, taken in index order as insertion order.
    pub fn with_storage(storage: S, compare: C) -> Self
    where
        C: Compare<K>,
    {
        FlatMultiMap {
            flat: Flat::adopt_multi(storage, compare),
        }
    }

    pub fn compare(&self) -> &C {
        self.flat.compare()
    }

    pub fn storage(&self) -> &S {
        self.flat.storage()
    }

    pub fn into_storage(self) -> S {
        self.flat.into_storage()
    }

    pub fn len(&self) -> usize {
        self.flat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.flat.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.flat.reserve(additional)
    }

    pub fn shrink_to_fit(&mut self) {
        self.flat.shrink_to_fit()
    }

    pub fn clear(&mut self) {
        self.flat.clear()
    }

    pub fn at(&self, index: usize) -> Option<(&K, &V)> {
        self.flat.at(index)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<(&K, &mut V)> {
        self.flat.at_mut(index)
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.flat.first()
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.flat.last()
    }

    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.flat.pop_first()
    }

    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.flat.pop_last()
    }

    pub fn begin(&self) -> Cursor<'_, K, V> {
        self.flat.begin()
    }

    pub fn end(&self) -> Cursor<'_, K, V> {
        self.flat.end()
    }

    pub fn cursor_at(&self, index: usize) -> Option<Cursor<'_, K, V>> {
        self.flat.cursor_at(index)
    }

    pub fn as_slices(&self) -> Slices<'_, K, V> {
        self.flat.slices()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.flat.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.flat.iter_mut()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.iter_mut(),
        }
    }

    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys {
            inner: self.into_iter(),
        }
    }

    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues {
            inner: self.into_iter(),
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<(K, V)> {
        self.flat.remove_at(index)
    }

    /// Remove the entries at positions in `range` and return how many
    /// were removed.
    ///
    /// ## Panics
    ///
    /// Panics if `range` is decreasing or ends past `len()`.
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        self.flat.erase_range(range)
    }

    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.flat.retain(keep)
    }
}

impl<K, V, C, S> FlatMultiMap<K, V, C, S>
where
    S: Storage<K, V>,
{
    /// Cursor on the first entry with key `key`, or the end cursor.
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, K, V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        match self.flat.find(key) {
            Some(i) => Cursor::new(self.flat.slices(), i),
            None => self.flat.end(),
        }
    }

    /// Position of the first entry with key `key`.
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.find(key)
    }

    pub fn lower_bound<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.lower_bound(key)
    }

    pub fn upper_bound<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.upper_bound(key)
    }

    /// Entries of the run of keys equivalent to `key`.
    pub fn equal_range<Q>(&self, key: &Q) -> Iter<'_, K, V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.slices().slice(self.flat.equal_range(key)).iter()
    }

    /// Entries of the run of keys equivalent to `key`, values mutable.
    pub fn equal_range_mut<Q>(&mut self, key: &Q) -> IterMut<'_, K, V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        let range = self.flat.equal_range(key);
        self.flat.slices_mut().slice(range).iter_mut()
    }

    /// Positions of the run of keys equivalent to `key`.
    pub fn position_range<Q>(&self, key: &Q) -> Range<usize>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.equal_range(key)
    }

    /// Number of entries with a key equivalent to `key`.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.equal_range(key).len()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.contains(key)
    }

    /// Value of the first entry with key `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.get(key).map(|(_, v)| v)
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.get_mut(key)
    }

    /// Remove the first entry with key `key` and return its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.remove(key).map(|(_, v)| v)
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.remove(key)
    }

    /// Remove every entry with a key equivalent to `key` and return how
    /// many were removed.
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.erase(key)
    }
}

impl<K, V, C, S> FlatMultiMap<K, V, C, S>
where
    S: Storage<K, V>,
    C: Compare<K>,
{
    /// Insert an entry before every entry with an equivalent key and
    /// return its position. Always succeeds.
    pub fn insert(&mut self, key: K, value: V) -> usize {
        self.flat.insert_multi(key, value)
    }

    pub fn emplace<A>(&mut self, key: K, args: A) -> usize
    where
        V: From<A>,
    {
        self.flat.insert_multi(key, V::from(args))
    }

    pub fn emplace_with<F>(&mut self, key: K, make: F) -> usize
    where
        F: FnOnce() -> V,
    {
        self.flat.insert_multi(key, make())
    }

    /// Value of the first entry with key `key`, inserting the value
    /// returned by `make` first if there is none.
    pub fn get_or_insert_with<F>(&mut self, key: K, make: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.flat.get_or_insert_with(key, make)
    }

    /// Value of the first entry with key `key`, inserting a default value
    /// first if there is none.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.flat.get_or_insert_with(key, V::default)
    }
}
