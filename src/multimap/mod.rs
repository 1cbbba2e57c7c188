#[allow(clippy::module_inception)]
mod multimap;
pub use multimap::FlatMultiMap;
mod traits;
