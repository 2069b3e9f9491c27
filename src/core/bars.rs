use crate::error::{ChartError, ChartResult};

/// Default sub-unit height increment per remainder step, in dp.
///
/// The remainder of `value / y_unit` contributes this much extra height per
/// step, letting bars that round to the same gridline still differ. The value
/// is preserved from the original visual design and is overridable through
/// `BarChartConfig::sub_unit_step`.
pub const SUB_UNIT_STEP_DP: f64 = 4.5;

/// Fixed inset between an in-bar value label and the chart baseline, in dp.
pub const BAR_LABEL_BOTTOM_INSET_DP: f64 = 6.0;

/// Placement of the value label centered inside one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLabelSlot {
    pub text: String,
    /// Left edge of the text run, already centered within the bar.
    pub x_px: f64,
    /// Top edge of the text run.
    pub y_px: f64,
}

/// Geometry of one placed bar, bottom-aligned to the chart baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSlot {
    pub x_px: i32,
    pub width_px: i32,
    pub height_px: f64,
    pub value: u32,
    /// Present only when value labels are enabled and the label fits.
    pub label: Option<BarLabelSlot>,
}

/// Pixel height encoding one magnitude.
///
/// Whole units map to full gridline spacings; the sub-unit remainder adds
/// `sub_unit_step_px` per step. Height is therefore not strictly linear in
/// the value unless the step equals `spacing_px / y_unit` — an intentional
/// approximation carried over from the original design. A zero value yields
/// zero height.
pub fn bar_height_px(
    value: u32,
    y_unit: u32,
    spacing_px: f64,
    sub_unit_step_px: f64,
) -> ChartResult<f64> {
    if y_unit == 0 {
        return Err(ChartError::InvalidConfig(
            "y unit must be > 0".to_owned(),
        ));
    }
    Ok(f64::from(value / y_unit) * spacing_px + f64::from(value % y_unit) * sub_unit_step_px)
}

/// Uniform gap between bars (and at both edges), in whole pixels.
///
/// Truncating integer division, matching the original placement math. When
/// `bar_width_px × count` exceeds the usable width the gap goes negative and
/// bars overlap; that degenerate case is accepted, not guarded.
#[must_use]
pub fn bar_gap_px(count: usize, bar_width_px: i32, usable_width_px: i32) -> i32 {
    let count = count as i32;
    (usable_width_px - bar_width_px * count) / (count + 1)
}
