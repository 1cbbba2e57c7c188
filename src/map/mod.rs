#[allow(clippy::module_inception)]
mod map;
pub use map::FlatMap;
mod traits;
