//! barchart-rs: a reusable vertical bar-chart widget core.
//!
//! This crate keeps a strict architectural split between pure geometry and
//! drawing: `compute_layout` turns configuration plus data into a
//! deterministic [`api::ChartLayout`], a frame builder turns that layout into
//! a backend-agnostic [`render::RenderFrame`], and a [`render::Renderer`]
//! backend draws the frame. The same inputs always produce a bit-identical
//! frame, so the whole pipeline is unit-testable without a drawing surface.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{BarChart, BarChartConfig};
pub use crate::core::{Density, GraphItem, Viewport};
pub use error::{ChartError, ChartResult};
