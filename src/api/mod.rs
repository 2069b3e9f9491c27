mod chart_config;
mod frame_builder;
mod layout;
mod widget;

pub use chart_config::{BarChartConfig, CONFIG_JSON_SCHEMA_V1, TextStyle};
pub use frame_builder::build_render_frame;
pub use layout::{AXIS_LABEL_LEFT_INSET_DP, AxisLabelSlot, ChartLayout, compute_layout};
pub use widget::BarChart;
