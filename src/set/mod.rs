#[allow(clippy::module_inception)]
mod set;
pub use set::{FlatSet, IntoIter, Iter};
mod traits;
