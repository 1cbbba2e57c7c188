//! Build containers from a chain of settings.
//!
//! A builder collects the initial capacity, the comparator and the storage
//! layout of a container, and is consumed with [`Build::build()`] into a
//! [`FlatMap`](crate::FlatMap), a [`FlatMultiMap`](crate::FlatMultiMap) or
//! a [`FlatSet`](crate::FlatSet). The container type is picked by type
//! annotation.
//!
//! ## Examples
//!
//! ```
//! use flatstore::builder::{Build, Builder};
//! use flatstore::compare::Descending;
//! use flatstore::storage::SplitBuffer;
//! use flatstore::{FlatMap, FlatSet};
//!
//! let mut map: FlatMap<u32, String, Descending, SplitBuffer<u32, String>> =
//!     Builder::new().capacity(64).compare(Descending).split().build();
//! map.insert(1, String::from("one"));
//! assert!(map.capacity() >= 64);
//!
//! let set: FlatSet<u8> = Builder::new().build();
//! assert!(set.is_empty());
//! ```

/// Consume a builder into a container.
pub trait Build<C> {
    fn build(self) -> C;
}

#[allow(clippy::module_inception)]
mod builder;
pub use builder::{Builder, FlatBuilder};
