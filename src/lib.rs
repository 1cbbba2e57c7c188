//! Ordered associative containers stored in sorted contiguous memory.
//!
//! This library provides three containers sharing one sorted-buffer
//! engine:
//! * [`FlatMap`]: ordered map with unique keys,
//! * [`FlatMultiMap`]: ordered map accepting duplicate keys,
//! * [`FlatSet`]: ordered set.
//!
//! Entries are kept sorted in a contiguous [storage](storage/index.html).
//! Lookups are binary searches, iteration is a linear walk of memory, and
//! insertions and removals shift the entries following the affected
//! position. These containers are a good fit for data that is read far
//! more often than it is modified, or that is built in bulk.
//!
//! Keys are ordered by a [comparator](compare/index.html) chosen at
//! compile time, and equivalence of keys is derived from that same
//! comparator. The storage layout is chosen with a type parameter:
//! entries as `(key, value)` pairs, or keys and values in separate
//! buffers.
//!
//! ```
//! use flatstore::{FlatMap, FlatMultiMap, FlatSet};
//!
//! let mut map = FlatMap::new();
//! map.insert(1, 2);
//! map.insert(7, 8);
//! map.insert(3, 4);
//! *map.get_or_insert_default(5) = 6;
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 3, 5, 7]);
//!
//! let set: FlatSet<_> = [1, 7, 3, 5].into_iter().collect();
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 7]);
//!
//! let mut multimap = FlatMultiMap::new();
//! multimap.insert(2, 'a');
//! multimap.insert(2, 'b');
//! assert_eq!(multimap.equal_range(&2).len(), 2);
//! ```
//!
//! ## Features
//!
//! * `serde`: `Serialize` and `Deserialize` for the containers and the
//! runtime settings [`compare::Order`] and [`storage::Layout`].
//! * `config`: build containers from a toml configuration (see
//! `config` module).

/// Orders of keys.
///
/// Containers sort their keys with a [`Compare`](compare/trait.Compare.html)
/// implementer. The default comparator is
/// [`Ascending`](compare/struct.Ascending.html).
pub mod compare;

pub mod storage;

/// Iterators, views and cursors over the sorted entries of a container.
pub mod iter;

mod engine;

/// [`FlatMap`](struct.FlatMap.html): ordered map with unique keys.
pub mod map;
pub use map::FlatMap;

/// [`FlatMultiMap`](struct.FlatMultiMap.html): ordered map with duplicate
/// keys.
pub mod multimap;
pub use multimap::FlatMultiMap;

/// [`FlatSet`](struct.FlatSet.html): ordered set.
pub mod set;
pub use set::FlatSet;

pub use iter::Cursor;

pub mod builder;

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "serde")]
mod serialize;

/// Test helpers shared by the unit tests of every container.
#[cfg(test)]
mod tests;
