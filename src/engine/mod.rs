//! Sorted contiguous storage shared by every container.
//!
//! [`Flat`] owns a [`Storage`](crate::storage::Storage) and a comparator
//! and keeps the storage sorted by key. It implements binary searches
//! (`lower_bound`, `upper_bound`, `equal_range`, `find`), insertion at a
//! searched position and removal of single entries, ranges and runs of
//! equivalent keys. Containers only decide whether duplicate keys are
//! accepted and what they hand out to users.

#[allow(clippy::module_inception)]
mod flat;
pub(crate) use flat::Flat;
mod search;
mod mutate;
mod bulk;
