pub mod axis;
pub mod classify;
pub mod loader;
pub mod palette;
pub mod render;
pub mod scale;
pub mod view;
pub mod zoom;

pub use loader::Dataset;
pub use scale::{ChartGeometry, Scales};
pub use view::{Redraw, TimelineView, ViewEvent, ViewState, VisibilitySet};
