//! Build containers from a configuration file.
//!
//! Configurations describe containers using the
//! [`toml`](https://toml.io/en/) format. A configuration is a toml table
//! with an `id` field naming the kind of container, and optional
//! settings:
//! * `capacity = <int>`: initial capacity, 0 by default,
//! * `layout = 'Pairs' | 'Split'`: storage layout, `'Pairs'` by default,
//! * `order = 'Ascending' | 'Descending'`: key order, `'Ascending'` by
//! default.
//!
//! | id                     | configuration      | container          |
//! |------------------------|--------------------|--------------------|
//! | `'FlatMapConfig'`      | [`MapConfig`]      | [`FlatMap`](crate::FlatMap) |
//! | `'FlatMultiMapConfig'` | [`MultiMapConfig`] | [`FlatMultiMap`](crate::FlatMultiMap) |
//! | `'FlatSetConfig'`      | [`SetConfig`]      | [`FlatSet`](crate::FlatSet) |
//!
//! Containers built from a configuration use the runtime comparator
//! [`Order`](crate::compare::Order) and the runtime storage
//! [`LayoutBuffer`](crate::storage::LayoutBuffer).
//!
//! ```
//! use flatstore::builder::Build;
//! use flatstore::compare::Order;
//! use flatstore::config::{ConfigInstance, MapConfig};
//! use flatstore::storage::LayoutBuffer;
//! use flatstore::FlatMap;
//!
//! let config = MapConfig::from_string("
//! id = 'FlatMapConfig'
//! capacity = 16
//! layout = 'Split'
//! order = 'Descending'
//! ").unwrap();
//! let mut map: FlatMap<u64, u64, Order, LayoutBuffer<u64, u64>> = config.build();
//! map.insert(1, 2);
//! map.insert(3, 4);
//! assert_eq!(map.first(), Some((&3, &4)));
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// A configuration read from toml.
pub trait ConfigInstance: Sized {
    /// Value of the `id` field of this configuration.
    fn id() -> &'static str;

    /// Parse a configuration from a toml value.
    ///
    /// The value must be a table whose `id` field matches [`Self::id()`].
    fn from_toml(value: &toml::Value) -> Result<Self, ConfigError>;

    /// Parse a configuration from a string in the toml format.
    fn from_string(s: &str) -> Result<Self, ConfigError> {
        let value: toml::Value = toml::from_str(s)?;
        Self::from_toml(&value)
    }

    /// Parse a configuration from a file in the toml format.
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path)?;
        Self::from_string(&s)
    }

    /// Render this configuration as a toml string.
    fn to_toml_string_pretty(&self) -> Result<String, ConfigError>
    where
        Self: Serialize,
    {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ConfigFormatError(e.to_string()))
    }
}

/// Conversion of a builder into the configuration it describes.
pub trait IntoConfig<C: ConfigInstance> {
    fn into_config(&self) -> C;
}

/// Check that `value` is a table with the `id` of `C`, then deserialize
/// it.
fn parse_table<C>(value: &toml::Value) -> Result<C, ConfigError>
where
    C: ConfigInstance + DeserializeOwned,
{
    let table = match value {
        toml::Value::Table(t) => t,
        _ => {
            return Err(ConfigError::ConfigFormatError(String::from(
                "Configuration must be a toml table.",
            )))
        }
    };

    match table.get("id") {
        None => {
            return Err(ConfigError::ConfigFormatError(String::from(
                "Configuration must have an 'id' field.",
            )))
        }
        Some(toml::Value::String(id)) if id == C::id() => {}
        Some(toml::Value::String(id)) => {
            return Err(ConfigError::ConfigFormatError(format!(
                "Invalid id {}, expected {}.",
                id,
                C::id()
            )))
        }
        Some(_) => {
            return Err(ConfigError::ConfigFormatError(String::from(
                "Invalid id type, must be a string.",
            )))
        }
    }

    value.clone().try_into().map_err(|e| {
        ConfigError::ConfigFormatError(format!("Invalid {}: {}", C::id(), e))
    })
}

mod error;
pub use error::ConfigError;
mod configs;
pub use configs::{MapConfig, MultiMapConfig, SetConfig};
#[cfg(test)]
pub(crate) mod tests;
