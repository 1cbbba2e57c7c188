use crate::compare::{Ascending, Compare};
use crate::engine::Flat;
use crate::iter::{
    Cursor, IntoKeys, IntoValues, Iter, IterMut, Keys, Slices, Values,
    ValuesMut,
};
use crate::storage::{PairBuffer, Storage, StorageLayout};
use std::borrow::Borrow;
use std::ops::{Range, RangeBounds};

/// Ordered map with unique keys stored in sorted contiguous memory.
///
/// [`FlatMap`] keeps its entries in a [`Storage`], sorted by key under the
/// comparator `C`. Lookups are binary searches over contiguous keys, and
/// iteration walks memory linearly.
///
/// * Lookup complexity is `$O(log(n))$`.
/// * Insertion complexity is `$O(log(n))$` comparisons plus `$O(n)$` moves
/// to make room for the new entry.
/// * Removal complexity is `$O(log(n))$` comparisons plus `$O(n)$` moves.
/// * Iteration is a linear walk of one or two buffers.
///
/// Keys are unique: inserting a key equivalent to a stored one leaves the
/// stored entry untouched (first insert wins). Equivalence is derived from
/// the comparator, never from [`Eq`].
///
/// Positions returned by insertion methods are plain indices into the
/// sorted entries. Any insertion or removal may shift entries, and
/// positions obtained before it must not be trusted after it.
///
/// The storage layout is the type parameter `S`: [`PairBuffer`] (the
/// default) or [`SplitBuffer`](crate::storage::SplitBuffer), or a
/// [`LayoutBuffer`](crate::storage::LayoutBuffer) chosen at runtime.
///
/// ## Examples
///
/// ```
/// use flatstore::FlatMap;
///
/// let mut m = FlatMap::new();
/// m.insert(1, 2);
/// m.insert(7, 8);
/// m.insert(3, 4);
/// *m.get_or_insert_default(5) = 6;
///
/// let entries: Vec<(i32, i32)> = m.iter().map(|(k, v)| (*k, *v)).collect();
/// assert_eq!(entries, vec![(1, 2), (3, 4), (5, 6), (7, 8)]);
///
/// // Insertion of a stored key is rejected.
/// assert_eq!(m.insert(3, 40), (1, false));
/// assert_eq!(m[&3], 4);
///
/// assert_eq!(m.erase(&3), 1);
/// assert_eq!(m.erase(&3), 0);
/// assert!(m.find(&3).is_end());
/// ```
///
/// [`FlatMap`] can also be built with a [`Builder`](crate::builder::Builder)
/// or, with the `config` feature, from a TOML `MapConfig`.
pub struct FlatMap<K, V, C = Ascending, S = PairBuffer<K, V>> {
    pub(crate) flat: Flat<K, V, C, S>,
}

impl<K, V> FlatMap<K, V> {
    /// Empty map sorted in ascending key order.
    pub fn new() -> Self {
        Self::with_compare(Ascending)
    }

    /// Empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        FlatMap {
            flat: Flat::with_layout(
                &crate::storage::PairLayout,
                capacity,
                Ascending,
            ),
        }
    }
}

impl<K, V, C> FlatMap<K, V, C> {
    /// Empty map sorted by `compare`.
    pub fn with_compare(compare: C) -> Self {
        FlatMap {
            flat: Flat::with_layout(&crate::storage::PairLayout, 0, compare),
        }
    }
}

impl<K, V, C, S> FlatMap<K, V, C, S>
where
    S: Storage<K, V>,
{
    /// Empty map sorted by `compare` with a storage allocated by `layout`
    /// with room for `capacity` entries.
    pub fn with_layout<L>(layout: &L, capacity: usize, compare: C) -> Self
    where
        L: StorageLayout<K, V, Storage = S>,
    {
        FlatMap {
            flat: Flat::with_layout(layout, capacity, compare),
        }
    }

    /// Map sorted by `compare` using `storage`.
    ///
    /// Entries already in `storage` are taken in index order as insertion
    /// order: they are sorted and only the first of equivalent keys is kept.
    pub fn with_storage(storage: S, compare: C) -> Self
    where
        C: Compare<K>,
    {
        FlatMap {
            flat: Flat::adopt_unique(storage, compare),
        }
    }

    pub fn compare(&self) -> &C {
        self.flat.compare()
    }

    pub fn storage(&self) -> &S {
        self.flat.storage()
    }

    /// Give the storage back, entries sorted by key.
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

    /// Remove every entry. Capacity is kept.
    pub fn clear(&mut self) {
        self.flat.clear()
    }

    /// Entry at position `index` in key order, or `None` if `index` is
    /// out of bounds.
    pub fn at(&self, index: usize) -> Option<(&K, &V)> {
        self.flat.at(index)
    }

    /// Entry at position `index` with a mutable value, or `None` if
    /// `index` is out of bounds.
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

    /// Cursor on the first entry.
    pub fn begin(&self) -> Cursor<'_, K, V> {
        self.flat.begin()
    }

    /// Cursor one past the last entry.
    pub fn end(&self) -> Cursor<'_, K, V> {
        self.flat.end()
    }

    /// Cursor at `index`, which may be the end position `len()`.
    pub fn cursor_at(&self, index: usize) -> Option<Cursor<'_, K, V>> {
        self.flat.cursor_at(index)
    }

    /// Borrowed view of the sorted entries.
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

    /// Remove and return the entry at position `index`, or `None` if
    /// `index` is out of bounds.
    /// The following entry, if any, now sits at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<(K, V)> {
        self.flat.remove_at(index)
    }

    /// Remove the entries at positions in `range` in a single pass and
    /// return how many were removed.
    ///
    /// ## Panics
    ///
    /// Panics if `range` is decreasing or ends past `len()`.
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        self.flat.erase_range(range)
    }

    /// Keep only the entries for which `keep` returns true.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.flat.retain(keep)
    }
}

// Lookups. `Q` is any borrowed form of the key ordered by the comparator.
impl<K, V, C, S> FlatMap<K, V, C, S>
where
    S: Storage<K, V>,
{
    /// Cursor on the entry with key `key`, or the end cursor.
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

    /// Position of the entry with key `key`.
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.find(key)
    }

    /// Position of the first key not ordered before `key`.
    pub fn lower_bound<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.lower_bound(key)
    }

    /// Position of the first key ordered after `key`.
    pub fn upper_bound<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.upper_bound(key)
    }

    /// Entries with a key equivalent to `key`: zero or one entry.
    pub fn equal_range<Q>(&self, key: &Q) -> Iter<'_, K, V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.slices().slice(self.flat.equal_range(key)).iter()
    }

    /// Positions of the entries with a key equivalent to `key`.
    /// Empty, at the insertion point of `key`, if there is none.
    pub fn position_range<Q>(&self, key: &Q) -> Range<usize>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.equal_range(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.contains(key)
    }

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

    /// Remove the entry with key `key` and return its value.
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

    /// Remove the entry with key `key` and return how many entries were
    /// removed: 0 or 1.
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.erase(key)
    }
}

// Insertions.
impl<K, V, C, S> FlatMap<K, V, C, S>
where
    S: Storage<K, V>,
    C: Compare<K>,
{
    /// Insert `value` under `key` if `key` is not stored yet.
    ///
    /// Returns the position of the entry with key `key` and whether the
    /// insertion happened. A stored value is never overwritten.
    ///
    /// ```
    /// use flatstore::FlatMap;
    ///
    /// let mut m = FlatMap::new();
    /// assert_eq!(m.insert("b", 1), (0, true));
    /// assert_eq!(m.insert("a", 2), (0, true));
    /// assert_eq!(m.insert("b", 3), (1, false));
    /// assert_eq!(m.get("b"), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (usize, bool) {
        self.flat.insert_unique_with(key, || value)
    }

    /// Insert a value built from `args` under `key` if `key` is not
    /// stored yet.
    ///
    /// The value is only built after `key` was found missing.
    pub fn emplace<A>(&mut self, key: K, args: A) -> (usize, bool)
    where
        V: From<A>,
    {
        self.flat.insert_unique_with(key, || V::from(args))
    }

    /// Insert the value returned by `make` under `key` if `key` is not
    /// stored yet. `make` is not called otherwise.
    pub fn emplace_with<F>(&mut self, key: K, make: F) -> (usize, bool)
    where
        F: FnOnce() -> V,
    {
        self.flat.insert_unique_with(key, make)
    }

    /// Value stored under `key`, inserting the value returned by `make`
    /// first if `key` is missing.
    pub fn get_or_insert_with<F>(&mut self, key: K, make: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.flat.get_or_insert_with(key, make)
    }

    /// Value stored under `key`, inserting a default value first if `key`
    /// is missing.
    ///
    /// This modifies the map on a miss, like indexing a C++ `std::map`.
    /// Use [`get()`](#method.get) for a read-only lookup.
    ///
    /// ```
    /// use flatstore::FlatMap;
    ///
    /// let mut counts: FlatMap<&str, u32> = FlatMap::new();
    /// for word in ["b", "a", "b"] {
    ///     *counts.get_or_insert_default(word) += 1;
    /// }
    /// assert_eq!(counts.get("a"), Some(&1));
    /// assert_eq!(counts.get("b"), Some(&2));
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.flat.get_or_insert_with(key, V::default)
    }
}
