use smallvec::SmallVec;

use crate::core::Density;
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, RectFill, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::{BarChartConfig, ChartLayout};

// Fixed visual policy for the grid layer: solid baseline at higher opacity,
// dashed lines above at lower opacity. Not configurable.
const GRID_BASELINE_ALPHA: f64 = 51.0 / 255.0;
const GRID_LINE_ALPHA: f64 = 26.0 / 255.0;
const GRID_DASH_ON_PX: f64 = 8.0;
const GRID_DASH_OFF_PX: f64 = 4.0;

/// Phase 2 of the render pipeline: turns a resolved layout into a
/// backend-agnostic frame. Z-order is gridlines, then bars, then labels.
pub fn build_render_frame(
    layout: &ChartLayout,
    config: &BarChartConfig,
    density: Density,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(layout.viewport);

    let stroke_px = density.px(config.grid_line_stroke_width);
    let full_width = f64::from(layout.viewport.width);
    for line in &layout.grid.lines {
        let (color, style) = if line.is_baseline {
            (
                Color::rgba(0.0, 0.0, 0.0, GRID_BASELINE_ALPHA),
                LineStrokeStyle::Solid,
            )
        } else {
            (
                Color::rgba(0.0, 0.0, 0.0, GRID_LINE_ALPHA),
                LineStrokeStyle::Dashed {
                    on_px: GRID_DASH_ON_PX,
                    off_px: GRID_DASH_OFF_PX,
                },
            )
        };
        frame.lines.push(LinePrimitive::new(
            0.0, line.y_px, full_width, line.y_px, stroke_px, style, color,
        ));
    }

    let fill = bar_fill(&config.bar_colors);
    let corners_px = config.corner_radii.scaled(density.scale());
    for bar in &layout.bars {
        frame.rects.push(
            RectPrimitive::new(
                f64::from(bar.x_px),
                layout.chart_height_px - bar.height_px,
                f64::from(bar.width_px),
                bar.height_px,
                fill.clone(),
            )
            .with_corners(corners_px),
        );
    }

    let axis_font_px = density.px(config.y_text_style.font_size);
    for label in &layout.axis_labels {
        frame.texts.push(TextPrimitive::new(
            label.text.clone(),
            label.x_px,
            label.y_px,
            axis_font_px,
            config.y_text_style.color,
            TextHAlign::Left,
        ));
    }

    let bar_font_px = density.px(config.bar_text_style.font_size);
    for bar in &layout.bars {
        if let Some(label) = &bar.label {
            frame.texts.push(TextPrimitive::new(
                label.text.clone(),
                label.x_px,
                label.y_px,
                bar_font_px,
                config.bar_text_style.color,
                TextHAlign::Left,
            ));
        }
    }

    frame.validate()?;
    Ok(frame)
}

fn bar_fill(colors: &[Color]) -> RectFill {
    if colors.len() == 1 {
        RectFill::Solid(colors[0])
    } else {
        RectFill::VerticalGradient(SmallVec::from_slice(colors))
    }
}
