use crate::compare::{Ascending, Compare};
use crate::engine::Flat;
use crate::iter::{Cursor, IntoKeys, Keys};
use crate::storage::{PairBuffer, PairLayout, Storage, StorageLayout};
use std::borrow::Borrow;
use std::ops::{Range, RangeBounds};

/// Iterator over the elements of a [`FlatSet`] in sort order.
pub type Iter<'a, T> = Keys<'a, T, ()>;

/// Owning iterator over the elements of a [`FlatSet`] in sort order.
pub type IntoIter<T> = IntoKeys<T, ()>;

/// Ordered set stored in sorted contiguous memory.
///
/// [`FlatSet`] is a [`FlatMap`](crate::FlatMap) whose entries carry no
/// value. Elements are their own keys, sorted under the comparator `C`,
/// and no two elements are equivalent.
///
/// ## Examples
///
/// ```
/// use flatstore::FlatSet;
///
/// let mut s = FlatSet::new();
/// for x in [1, 7, 3, 5] {
///     s.insert(x);
/// }
/// assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 7]);
/// assert_eq!(s.insert(3), (1, false));
/// assert!(s.contains(&5));
/// assert_eq!(s.take(&5), Some(5));
/// assert_eq!(s.len(), 3);
/// ```
pub struct FlatSet<T, C = Ascending, S = PairBuffer<T, ()>> {
    pub(crate) flat: Flat<T, (), C, S>,
}

impl<T> FlatSet<T> {
    pub fn new() -> Self {
        Self::with_compare(Ascending)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FlatSet {
            flat: Flat::with_layout(&PairLayout, capacity, Ascending),
        }
    }
}

impl<T, C> FlatSet<T, C> {
    pub fn with_compare(compare: C) -> Self {
        FlatSet {
            flat: Flat::with_layout(&PairLayout, 0, compare),
        }
    }
}

impl<T, C, S> FlatSet<T, C, S>
where
    S: Storage<T, ()>,
{
    pub fn with_layout<L>(layout: &L, capacity: usize, compare: C) -> Self
    where
        L: StorageLayout<T, (), Storage = S>,
    {
        FlatSet {
            flat: Flat::with_layout(layout, capacity, compare),
        }
    }

    /// Set sorted by `compare` using `storage`. Elements already in
    /// `storage` are taken in index order as insertion order, and only
    /// the first of equivalent elements is kept.
    pub fn with_storage(storage: S, compare: C) -> Self
    where
        C: Compare<T>,
    {
        FlatSet {
            flat: Flat::adopt_unique(storage, compare),
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

    /// Element at position `index` in sort order.
    pub fn at(&self, index: usize) -> Option<&T> {
        self.flat.at(index).map(|(t, _)| t)
    }

    pub fn first(&self) -> Option<&T> {
        self.flat.first().map(|(t, _)| t)
    }

    pub fn last(&self) -> Option<&T> {
        self.flat.last().map(|(t, _)| t)
    }

    pub fn pop_first(&mut self) -> Option<T> {
        self.flat.pop_first().map(|(t, _)| t)
    }

    pub fn pop_last(&mut self) -> Option<T> {
        self.flat.pop_last().map(|(t, _)| t)
    }

    /// Cursor on the first element. Elements are the cursor keys.
    pub fn begin(&self) -> Cursor<'_, T, ()> {
        self.flat.begin()
    }

    pub fn end(&self) -> Cursor<'_, T, ()> {
        self.flat.end()
    }

    pub fn cursor_at(&self, index: usize) -> Option<Cursor<'_, T, ()>> {
        self.flat.cursor_at(index)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Keys {
            inner: self.flat.iter(),
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        self.flat.remove_at(index).map(|(t, _)| t)
    }

    /// Remove the elements at positions in `range` and return how many
    /// were removed.
    ///
    /// ## Panics
    ///
    /// Panics if `range` is decreasing or ends past `len()`.
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        self.flat.erase_range(range)
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.flat.retain(|t, _| keep(t))
    }
}

impl<T, C, S> FlatSet<T, C, S>
where
    S: Storage<T, ()>,
{
    /// Cursor on the element equivalent to `value`, or the end cursor.
    pub fn find<Q>(&self, value: &Q) -> Cursor<'_, T, ()>
    where
        Q: ?Sized,
        T: Borrow<Q>,
        C: Compare<Q>,
    {
        match self.flat.find(value) {
            Some(i) => Cursor::new(self.flat.slices(), i),
            None => self.flat.end(),
        }
    }

    pub fn position<Q>(&self, value: &Q) -> Option<usize>
    where
        Q: ?Sized,
        T: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.find(value)
    }

    pub fn lower_bound<Q>(&self, value: &Q) -> usize
    where
        Q: ?Sized,
        T: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.lower_bound(value)
    }

    pub fn upper_bound<Q>(&self, value: &Q) -> usize
    where
        Q: ?Sized,
        T: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.upper_bound(value)
    }

    /// Positions of the elements equivalent to `value`: empty or a single
    /// position.
    pub fn position_range<Q>(&self, value: &Q) -> Range<usize>
    where
        Q: ?Sized,
        T: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.equal_range(value)
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized,
        T: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.contains(value)
    }

    /// Stored element equivalent to `value`.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        Q: ?Sized,
        T: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.get(value).map(|(t, _)| t)
    }

    /// Remove the element equivalent to `value` and return how many
    /// elements were removed: 0 or 1.
    pub fn erase<Q>(&mut self, value: &Q) -> usize
    where
        Q: ?Sized,
        T: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.erase(value)
    }

    /// Remove the element equivalent to `value`. Returns whether there
    /// was one.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        Q: ?Sized,
        T: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.erase(value) > 0
    }

    /// Remove and return the element equivalent to `value`.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        Q: ?Sized,
        T: Borrow<Q>,
        C: Compare<Q>,
    {
        self.flat.remove(value).map(|(t, _)| t)
    }
}

impl<T, C, S> FlatSet<T, C, S>
where
    S: Storage<T, ()>,
    C: Compare<T>,
{
    /// Insert `value` unless an equivalent element is stored.
    ///
    /// Returns the position of the element equivalent to `value` and
    /// whether the insertion happened. A stored element is never replaced.
    pub fn insert(&mut self, value: T) -> (usize, bool) {
        self.flat.insert_unique_with(value, || ())
    }

    /// Build an element from `args` and insert it unless an equivalent
    /// element is stored.
    ///
    /// The element has to be built to be compared: it is dropped if an
    /// equivalent element is stored. Use
    /// [`get_or_insert_with()`](#method.get_or_insert_with) to build only
    /// on a miss.
    pub fn emplace<A>(&mut self, args: A) -> (usize, bool)
    where
        T: From<A>,
    {
        self.insert(T::from(args))
    }

    /// Stored element equivalent to `value`, inserting `make(value)`
    /// first if there is none. `make` is only called on a miss and must
    /// return an element equivalent to `value`.
    ///
    /// ```
    /// use flatstore::FlatSet;
    ///
    /// let mut names: FlatSet<String> = FlatSet::new();
    /// names.get_or_insert_with("bob", str::to_owned);
    /// let stored = names.get_or_insert_with("bob", |_| unreachable!());
    /// assert_eq!(stored, "bob");
    /// ```
    pub fn get_or_insert_with<Q, F>(&mut self, value: &Q, make: F) -> &T
    where
        Q: ?Sized,
        T: Borrow<Q>,
        C: Compare<Q>,
        F: FnOnce(&Q) -> T,
    {
        let index = match self.flat.find(value) {
            Some(index) => index,
            None => self.flat.insert_unique_with(make(value), || ()).0,
        };
        self.flat.slices().key(index)
    }
}
