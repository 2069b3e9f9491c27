use gtk4 as gtk;

use std::cell::RefCell;
use std::rc::Rc;

use gtk::prelude::*;

use crate::api::BarChart;
use crate::core::{Density, HeuristicTextMeasurer, Viewport};
use crate::render::{CairoContextRenderer, Renderer};

/// Bridges a `BarChart` into a GTK `DrawingArea` draw callback.
pub struct GtkBarChartAdapter<R: Renderer + CairoContextRenderer + 'static> {
    chart: Rc<RefCell<BarChart<R>>>,
    density: Density,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkBarChartAdapter<R> {
    #[must_use]
    pub fn new(chart: BarChart<R>, density: Density) -> Self {
        Self {
            chart: Rc::new(RefCell::new(chart)),
            density,
        }
    }

    /// Shared handle for hosts that push new data between draws.
    #[must_use]
    pub fn chart(&self) -> Rc<RefCell<BarChart<R>>> {
        Rc::clone(&self.chart)
    }

    /// Installs the draw callback on `area`. The widget redraws whenever GTK
    /// invalidates the area; hosts call `queue_draw` after changing inputs.
    pub fn install(&self, area: &gtk::DrawingArea) {
        let chart = Rc::clone(&self.chart);
        let density = self.density;
        area.set_draw_func(move |_, context, width, height| {
            if width <= 0 || height <= 0 {
                return;
            }
            let viewport = Viewport::new(width as u32, height as u32);
            let measurer = HeuristicTextMeasurer;
            if let Err(error) =
                chart
                    .borrow_mut()
                    .render_on_cairo_context(context, viewport, density, &measurer)
            {
                tracing::warn!(%error, "bar chart draw callback failed");
            }
        });
    }
}
