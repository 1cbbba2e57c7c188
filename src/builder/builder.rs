use super::Build;
use crate::compare::Ascending;
use crate::storage::{PairLayout, SplitLayout, StorageLayout};
use crate::{FlatMap, FlatMultiMap, FlatSet};
use log::debug;
use std::any::type_name;

/// Entry point of a builder chain.
pub struct Builder {}

impl Builder {
    /// Start a builder with no initial capacity, the [`Ascending`]
    /// comparator and the [`PairLayout`].
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> FlatBuilder<Ascending, PairLayout> {
        FlatBuilder {
            capacity: 0,
            compare: Ascending,
            layout: PairLayout,
        }
    }
}

/// Settings of a flat container: initial capacity, comparator `C` and
/// storage layout `L`.
///
/// See the [module documentation](index.html) for an example.
#[derive(Clone, Debug)]
pub struct FlatBuilder<C, L> {
    pub(crate) capacity: usize,
    pub(crate) compare: C,
    pub(crate) layout: L,
}

impl<C, L> FlatBuilder<C, L> {
    /// Reserve room for `capacity` entries at construction.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sort keys with `compare`.
    pub fn compare<C2>(self, compare: C2) -> FlatBuilder<C2, L> {
        FlatBuilder {
            capacity: self.capacity,
            compare,
            layout: self.layout,
        }
    }

    /// Allocate storage with `layout`.
    pub fn layout<L2>(self, layout: L2) -> FlatBuilder<C, L2> {
        FlatBuilder {
            capacity: self.capacity,
            compare: self.compare,
            layout,
        }
    }

    /// Store keys and values together.
    pub fn pairs(self) -> FlatBuilder<C, PairLayout> {
        self.layout(PairLayout)
    }

    /// Store keys and values in separate buffers.
    pub fn split(self) -> FlatBuilder<C, SplitLayout> {
        self.layout(SplitLayout)
    }

    fn log_build(&self, container: &str) {
        debug!(
            "building {} with capacity {}, comparator {} and layout {}",
            container,
            self.capacity,
            type_name::<C>(),
            type_name::<L>()
        );
    }
}

impl<K, V, C, L> Build<FlatMap<K, V, C, L::Storage>> for FlatBuilder<C, L>
where
    L: StorageLayout<K, V>,
{
    fn build(self) -> FlatMap<K, V, C, L::Storage> {
        self.log_build("FlatMap");
        FlatMap::with_layout(&self.layout, self.capacity, self.compare)
    }
}

impl<K, V, C, L> Build<FlatMultiMap<K, V, C, L::Storage>> for FlatBuilder<C, L>
where
    L: StorageLayout<K, V>,
{
    fn build(self) -> FlatMultiMap<K, V, C, L::Storage> {
        self.log_build("FlatMultiMap");
        FlatMultiMap::with_layout(&self.layout, self.capacity, self.compare)
    }
}

impl<T, C, L> Build<FlatSet<T, C, L::Storage>> for FlatBuilder<C, L>
where
    L: StorageLayout<T, ()>,
{
    fn build(self) -> FlatSet<T, C, L::Storage> {
        self.log_build("FlatSet");
        FlatSet::with_layout(&self.layout, self.capacity, self.compare)
    }
}
