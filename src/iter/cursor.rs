use super::{Iter, Slices};
use std::cmp::Ordering;

/// Random access position inside a container.
///
/// A [`Cursor`] is an index into the entries of a container together with a
/// borrowed view of these entries. It never owns storage. Because it borrows
/// the container, the compiler rejects any use of a cursor after the
/// container has been modified. Positions that must survive a modification
/// are plain `usize` indices, as returned by insertion methods, and can be
/// turned back into a cursor with `cursor_at()`.
///
/// A cursor may sit one past the last entry, the *end* position, which is
/// where lookups of missing keys land.
///
/// Cursors compare by index. Comparing cursors of different containers is
/// meaningless.
///
/// ## Examples
///
/// ```
/// use flatstore::FlatMap;
///
/// let map: FlatMap<u32, &str> =
///     vec![(1, "a"), (3, "c"), (5, "e")].into_iter().collect();
///
/// let mut cursor = map.find(&3);
/// assert_eq!(cursor.get(), Some((&3, &"c")));
/// cursor.move_next();
/// assert_eq!(cursor.key(), Some(&5));
/// cursor.move_next();
/// assert!(cursor.is_end());
/// assert!(map.find(&4).is_end());
/// ```
pub struct Cursor<'a, K, V> {
    slices: Slices<'a, K, V>,
    index: usize,
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) fn new(slices: Slices<'a, K, V>, index: usize) -> Self {
        let index = index.min(slices.len());
        Cursor { slices, index }
    }

    pub(crate) fn end(slices: Slices<'a, K, V>) -> Self {
        let index = slices.len();
        Cursor { slices, index }
    }

    /// Position of the cursor. Equals the container length at the end.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_end(&self) -> bool {
        self.index == self.slices.len()
    }

    /// Entry under the cursor, `None` at the end position.
    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        self.slices.get(self.index)
    }

    pub fn key(&self) -> Option<&'a K> {
        self.get().map(|(k, _)| k)
    }

    pub fn value(&self) -> Option<&'a V> {
        self.get().map(|(_, v)| v)
    }

    /// Move to the next entry. Stays at the end position once reached.
    pub fn move_next(&mut self) {
        if self.index < self.slices.len() {
            self.index += 1;
        }
    }

    /// Move to the previous entry.
    /// Returns false, without moving, if the cursor is on the first entry.
    pub fn move_prev(&mut self) -> bool {
        if self.index == 0 {
            false
        } else {
            self.index -= 1;
            true
        }
    }

    /// Move to `index`, or to the end position if `index` is out of bounds.
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.slices.len());
    }

    /// Cursor `delta` entries away from this one.
    /// Returns `None` if the target is before the first entry or after the
    /// end position.
    pub fn offset(&self, delta: isize) -> Option<Self> {
        let index = if delta < 0 {
            self.index.checked_sub(delta.unsigned_abs())?
        } else {
            self.index.checked_add(delta as usize)?
        };
        if index > self.slices.len() {
            None
        } else {
            Some(Cursor {
                slices: self.slices,
                index,
            })
        }
    }

    /// Signed number of entries from `other` to this cursor.
    pub fn distance_from(&self, other: &Self) -> isize {
        self.index as isize - other.index as isize
    }

    /// Iterator over the entries from the cursor to the end.
    pub fn iter(&self) -> Iter<'a, K, V> {
        self.slices.slice(self.index..self.slices.len()).iter()
    }
}

impl<'a, K, V> Clone for Cursor<'a, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V> Copy for Cursor<'a, K, V> {}

impl<'a, K, V> PartialEq for Cursor<'a, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<'a, K, V> Eq for Cursor<'a, K, V> {}

impl<'a, K, V> PartialOrd for Cursor<'a, K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, K, V> Ord for Cursor<'a, K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<'a, K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug
    for Cursor<'a, K, V>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("entry", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;
    use crate::iter::Slices;

    #[test]
    fn walk_and_compare() {
        let pairs = vec![(1, 'a'), (2, 'b'), (3, 'c')];
        let begin = Cursor::new(Slices::Pairs(&pairs), 0);
        let end = Cursor::end(Slices::Pairs(&pairs));

        let mut c = begin;
        assert!(!c.move_prev());
        c.move_next();
        assert_eq!(c.get(), Some((&2, &'b')));
        assert!(begin < c && c < end);
        assert_eq!(end.distance_from(&c), 2);

        assert_eq!(c.offset(2), Some(end));
        assert_eq!(c.offset(3), None);
        assert_eq!(c.offset(-1), Some(begin));
        assert_eq!(c.offset(-2), None);

        c.seek(10);
        assert!(c.is_end());
        assert_eq!(c.get(), None);
        c.move_next();
        assert_eq!(c, end);
        assert!(c.move_prev());
        assert_eq!(c.key(), Some(&3));
    }

    #[test]
    fn iter_from_cursor() {
        let keys = vec![1, 2, 3];
        let values = vec![10, 20, 30];
        let c = Cursor::new(Slices::Split(&keys, &values), 1);
        let rest: Vec<_> = c.iter().map(|(k, v)| k + v).collect();
        assert_eq!(rest, vec![22, 33]);
        assert_eq!(Cursor::new(Slices::Split(&keys, &values), 7).index(), 3);
    }
}
