pub mod category;
pub mod entry;
pub mod transform;

pub use category::Category;
pub use entry::Entry;
pub use transform::{Point, ZoomTransform};
