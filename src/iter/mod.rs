mod slices;
pub use slices::{Slices, SlicesMut};
mod cursor;
pub use cursor::Cursor;
#[allow(clippy::module_inception)]
mod iter;
pub use iter::{
    IntoIter, IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut,
};
