use crate::core::types::Density;

/// Fixed padding reserved between the widest axis label and the bar area.
pub const AXIS_LABEL_PADDING_DP: f64 = 8.0;

/// Measured pixel extents of one rendered text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
}

/// Text-measurement capability required by the layout engine.
///
/// The core depends on this contract only; backends provide pixel-exact
/// implementations (for example Pango under the Cairo backend).
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtents;
}

/// Deterministic, backend-independent measurer used by tests and headless
/// layout. Widths come from a coarse per-glyph advance table; height is a
/// fixed line-height factor of the font size.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicTextMeasurer;

const LINE_HEIGHT_FACTOR: f64 = 1.2;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64) -> TextExtents {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        TextExtents {
            width: (units * font_size_px).max(font_size_px),
            height: font_size_px * LINE_HEIGHT_FACTOR,
        }
    }
}

/// Left margin reserved for axis labels, in whole pixels.
///
/// Measures the string form of `y_max` (the widest label) under the axis
/// font, adds [`AXIS_LABEL_PADDING_DP`], and rounds. Zero when labels are
/// hidden. Must run once per render pass before bar layout, which needs the
/// remaining usable width.
#[must_use]
pub fn axis_label_margin_px(
    show_y_axis_unit: bool,
    y_max: u32,
    font_size_dp: f64,
    density: Density,
    measurer: &dyn TextMeasurer,
) -> i32 {
    if !show_y_axis_unit {
        return 0;
    }
    let widest = y_max.to_string();
    let extents = measurer.measure(&widest, density.px(font_size_dp));
    (extents.width + density.px(AXIS_LABEL_PADDING_DP)).round() as i32
}
