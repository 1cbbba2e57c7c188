use std::cmp::Ordering;

/// Strict weak order used to sort the keys of a container.
///
/// A comparator returns how its left operand orders against its right
/// operand. Two keys are equivalent when the comparator returns
/// [`Ordering::Equal`]. Containers never use [`Eq`] or [`PartialEq`] on
/// keys: equivalence is always derived from the comparator so that
/// ordering and lookup cannot disagree.
///
/// The type parameter is the type being compared. Containers storing keys
/// of type `K` require `Compare<K>` to insert, and `Compare<Q>` to look up
/// with a borrowed form `Q` of `K` (`K: Borrow<Q>`). This is how lookups
/// with a `&str` work on a container of `String` keys.
///
/// Any closure `Fn(&T, &T) -> Ordering` is a comparator.
///
/// If the implementation is not a strict weak order, containers will
/// store keys in an unspecified order and lookups may miss keys. No
/// container operation panics because of it.
///
/// ## Examples
///
/// ```
/// use flatstore::compare::{Compare, Descending};
/// use std::cmp::Ordering;
///
/// assert_eq!(Descending.compare(&1, &2), Ordering::Greater);
/// assert!(Descending.less(&2, &1));
/// assert!(Descending.equivalent(&3, &3));
/// ```
pub trait Compare<T: ?Sized> {
    fn compare(&self, l: &T, r: &T) -> Ordering;

    /// Whether `l` is strictly ordered before `r`.
    fn less(&self, l: &T, r: &T) -> bool {
        self.compare(l, r) == Ordering::Less
    }

    /// Whether neither of `l` and `r` is ordered before the other.
    fn equivalent(&self, l: &T, r: &T) -> bool {
        self.compare(l, r) == Ordering::Equal
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, l: &T, r: &T) -> Ordering {
        self(l, r)
    }
}

/// Ascending order of [`Ord`] types. Default comparator of containers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ascending;

impl<T: Ord + ?Sized> Compare<T> for Ascending {
    fn compare(&self, l: &T, r: &T) -> Ordering {
        l.cmp(r)
    }
}

/// Descending order of [`Ord`] types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Descending;

impl<T: Ord + ?Sized> Compare<T> for Descending {
    fn compare(&self, l: &T, r: &T) -> Ordering {
        r.cmp(l)
    }
}

/// Order of [`Ord`] types chosen at runtime.
///
/// This is the comparator of containers built from a
/// [configuration](../config/index.html).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl<T: Ord + ?Sized> Compare<T> for Order {
    fn compare(&self, l: &T, r: &T) -> Ordering {
        match self {
            Order::Ascending => l.cmp(r),
            Order::Descending => r.cmp(l),
        }
    }
}

/// Comparator built from a "less than" predicate.
///
/// The predicate must be a strict weak order. The ordering of two keys
/// is derived with at most two calls to the predicate.
///
/// ```
/// use flatstore::compare::LessThan;
/// use flatstore::FlatSet;
///
/// let by_len = LessThan(|a: &&str, b: &&str| a.len() < b.len());
/// let mut set = FlatSet::with_compare(by_len);
/// set.insert("ccc");
/// set.insert("a");
/// // "b" is equivalent to "a" under this order.
/// assert!(!set.insert("b").1);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec!["a", "ccc"]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LessThan<F>(pub F);

impl<T: ?Sized, F> Compare<T> for LessThan<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn compare(&self, l: &T, r: &T) -> Ordering {
        if (self.0)(l, r) {
            Ordering::Less
        } else if (self.0)(r, l) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn less(&self, l: &T, r: &T) -> bool {
        (self.0)(l, r)
    }
}
