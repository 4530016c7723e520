pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::{escape_xml, px};
pub use time::format_minutes;
