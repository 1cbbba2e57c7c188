use super::{parse_table, ConfigError, ConfigInstance, IntoConfig};
use crate::builder::{Build, FlatBuilder};
use crate::compare::Order;
use crate::storage::{Layout, LayoutBuffer};
use crate::{FlatMap, FlatMultiMap, FlatSet};
use serde::{Deserialize, Serialize};

macro_rules! flat_config {
    ($(#[$doc:meta])* $name:ident, $id:literal) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
        pub struct $name {
            id: String,
            #[serde(default)]
            pub capacity: usize,
            #[serde(default)]
            pub layout: Layout,
            #[serde(default)]
            pub order: Order,
        }

        impl $name {
            pub fn new(capacity: usize, layout: Layout, order: Order) -> Self {
                $name {
                    id: String::from($id),
                    capacity,
                    layout,
                    order,
                }
            }

            fn into_builder(self) -> FlatBuilder<Order, Layout> {
                FlatBuilder {
                    capacity: self.capacity,
                    compare: self.order,
                    layout: self.layout,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(0, Layout::default(), Order::default())
            }
        }

        impl ConfigInstance for $name {
            fn id() -> &'static str {
                $id
            }

            fn from_toml(value: &toml::Value) -> Result<Self, ConfigError> {
                parse_table(value)
            }
        }

        impl IntoConfig<$name> for FlatBuilder<Order, Layout> {
            fn into_config(&self) -> $name {
                $name::new(self.capacity, self.layout, self.compare)
            }
        }
    };
}

flat_config!(
    /// Configuration of a [`FlatMap`].
    ///
    /// ```
    /// use flatstore::builder::Build;
    /// use flatstore::compare::Order;
    /// use flatstore::config::{ConfigInstance, MapConfig};
    /// use flatstore::storage::LayoutBuffer;
    /// use flatstore::FlatMap;
    ///
    /// let config = MapConfig::from_string("id = 'FlatMapConfig'").unwrap();
    /// let map: FlatMap<u64, u64, Order, LayoutBuffer<u64, u64>> = config.build();
    /// assert!(map.is_empty());
    /// ```
    MapConfig,
    "FlatMapConfig"
);

flat_config!(
    /// Configuration of a [`FlatMultiMap`].
    MultiMapConfig,
    "FlatMultiMapConfig"
);

flat_config!(
    /// Configuration of a [`FlatSet`].
    SetConfig,
    "FlatSetConfig"
);

impl<K: Ord, V> Build<FlatMap<K, V, Order, LayoutBuffer<K, V>>> for MapConfig {
    fn build(self) -> FlatMap<K, V, Order, LayoutBuffer<K, V>> {
        self.into_builder().build()
    }
}

impl<K: Ord, V> Build<FlatMultiMap<K, V, Order, LayoutBuffer<K, V>>>
    for MultiMapConfig
{
    fn build(self) -> FlatMultiMap<K, V, Order, LayoutBuffer<K, V>> {
        self.into_builder().build()
    }
}

impl<T: Ord> Build<FlatSet<T, Order, LayoutBuffer<T, ()>>> for SetConfig {
    fn build(self) -> FlatSet<T, Order, LayoutBuffer<T, ()>> {
        self.into_builder().build()
    }
}
