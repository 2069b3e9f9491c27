use crate::core::{AxisGrid, Density, GraphItem, TextMeasurer, Viewport};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{BarChartConfig, ChartLayout, build_render_frame, compute_layout};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Composite widget facade: owns the renderer, configuration, and item
/// sequence, and drives the two-phase pipeline for each pass.
///
/// Every render is a pure function of current inputs. There is no persisted
/// or transitional state and no cross-frame caching; a pass either completes
/// synchronously or its error propagates to the host.
pub struct BarChart<R: Renderer> {
    renderer: R,
    config: BarChartConfig,
    items: Vec<GraphItem>,
}

impl<R: Renderer> BarChart<R> {
    pub fn new(renderer: R, config: BarChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            items: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BarChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn items(&self) -> &[GraphItem] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<GraphItem>) {
        self.items = items;
    }

    /// Convenience for hosts holding raw magnitudes.
    pub fn set_values(&mut self, values: &[u32]) {
        self.items = values.iter().copied().map(GraphItem::new).collect();
    }

    /// Overall chart pixel height implied by the current axis configuration.
    /// Hosts use this to size the widget's bounding box.
    pub fn chart_height_px(&self, density: Density) -> ChartResult<f64> {
        let grid = AxisGrid::compute(
            self.config.y_max,
            self.config.y_unit,
            self.config.grid_line_spacing,
            density,
        )?;
        Ok(grid.chart_height_px)
    }

    /// Phase 1 only: resolved geometry without drawing.
    pub fn layout(
        &self,
        viewport: Viewport,
        density: Density,
        measurer: &dyn TextMeasurer,
    ) -> ChartResult<ChartLayout> {
        compute_layout(&self.config, &self.items, viewport, density, measurer)
    }

    /// One complete synchronous render pass.
    pub fn render(
        &mut self,
        viewport: Viewport,
        density: Density,
        measurer: &dyn TextMeasurer,
    ) -> ChartResult<()> {
        let layout = self.layout(viewport, density, measurer)?;
        let frame = build_render_frame(&layout, &self.config, density)?;
        tracing::debug!(
            bars = layout.bars.len(),
            grid_lines = layout.grid.line_count(),
            texts = frame.texts.len(),
            axis_margin_px = layout.axis_margin_px,
            "bar chart render pass"
        );
        self.renderer.render(&frame)
    }

    /// Renders the pass into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        viewport: Viewport,
        density: Density,
        measurer: &dyn TextMeasurer,
    ) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let layout = self.layout(viewport, density, measurer)?;
        let frame = build_render_frame(&layout, &self.config, density)?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
