use crate::core::bars::BAR_LABEL_BOTTOM_INSET_DP;
use crate::core::{
    AxisGrid, BarLabelSlot, BarSlot, Density, GraphItem, TextMeasurer, Viewport, axis_label_margin_px,
    bar_gap_px, bar_height_px,
};
use crate::error::{ChartError, ChartResult};

use super::BarChartConfig;

/// Left inset of axis label text inside the reserved margin, in dp.
pub const AXIS_LABEL_LEFT_INSET_DP: f64 = 4.0;

/// Placement of one axis label, anchored just above its gridline.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabelSlot {
    pub text: String,
    pub x_px: f64,
    pub y_px: f64,
}

/// Fully resolved geometry for one render pass.
///
/// Derived, never persisted: computed fresh for every pass and owned
/// transiently by the caller. Identical inputs produce bit-identical layouts.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub chart_height_px: f64,
    /// Width reserved on the left for axis labels; zero when hidden.
    pub axis_margin_px: i32,
    pub grid: AxisGrid,
    pub axis_labels: Vec<AxisLabelSlot>,
    pub bars: Vec<BarSlot>,
}

/// Phase 1 of the render pipeline: pure geometry, no drawing.
pub fn compute_layout(
    config: &BarChartConfig,
    items: &[GraphItem],
    viewport: Viewport,
    density: Density,
    measurer: &dyn TextMeasurer,
) -> ChartResult<ChartLayout> {
    config.validate()?;
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let grid = AxisGrid::compute(config.y_max, config.y_unit, config.grid_line_spacing, density)?;

    // The margin must resolve before bar layout: bars distribute across the
    // width that remains to its right.
    let axis_margin_px = axis_label_margin_px(
        config.show_y_axis_unit,
        config.y_max,
        config.y_text_style.font_size,
        density,
        measurer,
    );

    let axis_labels = if config.show_y_axis_unit {
        let font_px = density.px(config.y_text_style.font_size);
        let x_px = density.px(AXIS_LABEL_LEFT_INSET_DP);
        grid.lines
            .iter()
            .map(|line| {
                let text = line.value.to_string();
                let extents = measurer.measure(&text, font_px);
                AxisLabelSlot {
                    text,
                    x_px,
                    y_px: line.y_px - extents.height,
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let usable_width_px = viewport.width as i32 - axis_margin_px;
    let bar_width_px = density.round_px(config.bar_width);
    let gap_px = bar_gap_px(items.len(), bar_width_px, usable_width_px);
    let sub_unit_step_px = density.px(config.sub_unit_step);
    let label_inset_px = f64::from(density.round_px(BAR_LABEL_BOTTOM_INSET_DP));
    let bar_font_px = density.px(config.bar_text_style.font_size);

    let mut bars = Vec::with_capacity(items.len());
    let mut x_px = axis_margin_px + gap_px;
    for item in items {
        let height_px = bar_height_px(item.value, config.y_unit, grid.spacing_px, sub_unit_step_px)?;

        let label = if config.show_bar_value {
            let text = item.value.to_string();
            let extents = measurer.measure(&text, bar_font_px);
            let fits =
                extents.width <= f64::from(bar_width_px) && extents.height + label_inset_px <= height_px;
            fits.then(|| BarLabelSlot {
                x_px: f64::from(x_px) + (f64::from(bar_width_px) - extents.width) / 2.0,
                y_px: grid.chart_height_px - extents.height - label_inset_px,
                text,
            })
        } else {
            None
        };

        bars.push(BarSlot {
            x_px,
            width_px: bar_width_px,
            height_px,
            value: item.value,
            label,
        });
        x_px += bar_width_px + gap_px;
    }

    Ok(ChartLayout {
        viewport,
        chart_height_px: grid.chart_height_px,
        axis_margin_px,
        grid,
        axis_labels,
        bars,
    })
}
