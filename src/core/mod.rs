pub mod axis;
pub mod bars;
pub mod measure;
pub mod types;

pub use axis::{AxisGrid, GridLine};
pub use bars::{BarLabelSlot, BarSlot, bar_gap_px, bar_height_px};
pub use measure::{HeuristicTextMeasurer, TextExtents, TextMeasurer, axis_label_margin_px};
pub use types::{Density, GraphItem, Viewport};
