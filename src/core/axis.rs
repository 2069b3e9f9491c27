use crate::core::types::Density;
use crate::error::{ChartError, ChartResult};

/// One horizontal reference line, 0-indexed from the baseline upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    /// Axis value represented by this line (`index × y_unit`).
    pub value: u32,
    /// Vertical pixel position, measured from the chart top.
    pub y_px: f64,
    /// The baseline is drawn solid at higher opacity; all others dashed.
    pub is_baseline: bool,
}

/// Gridline geometry derived from the axis maximum, unit, and line spacing.
///
/// When `y_max` is not an exact multiple of `y_unit` the unit ratio truncates:
/// gridlines stop at the last full unit below `y_max` and the region above the
/// top line stays unlabeled.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGrid {
    pub chart_height_px: f64,
    pub spacing_px: f64,
    pub lines: Vec<GridLine>,
}

impl AxisGrid {
    pub fn compute(
        y_max: u32,
        y_unit: u32,
        grid_line_spacing_dp: f64,
        density: Density,
    ) -> ChartResult<Self> {
        if y_unit == 0 {
            return Err(ChartError::InvalidConfig(
                "y unit must be > 0".to_owned(),
            ));
        }
        if !grid_line_spacing_dp.is_finite() || grid_line_spacing_dp <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "grid line spacing must be finite and > 0".to_owned(),
            ));
        }

        let units = y_max / y_unit;
        let spacing_px = density.px(grid_line_spacing_dp);
        let chart_height_px = spacing_px * f64::from(units);

        let lines = (0..=units)
            .map(|i| GridLine {
                value: i * y_unit,
                y_px: chart_height_px - f64::from(i) * spacing_px,
                is_baseline: i == 0,
            })
            .collect();

        Ok(Self {
            chart_height_px,
            spacing_px,
            lines,
        })
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_is_unit_ratio_plus_one() {
        let grid = AxisGrid::compute(25, 5, 30.0, Density::ONE).expect("valid grid");
        assert_eq!(grid.line_count(), 6);
        assert_eq!(grid.chart_height_px, 150.0);
    }

    #[test]
    fn baseline_sits_at_chart_bottom() {
        let grid = AxisGrid::compute(25, 5, 30.0, Density::ONE).expect("valid grid");
        let baseline = grid.lines.first().expect("baseline present");
        assert!(baseline.is_baseline);
        assert_eq!(baseline.value, 0);
        assert_eq!(baseline.y_px, grid.chart_height_px);

        let top = grid.lines.last().expect("top line present");
        assert!(!top.is_baseline);
        assert_eq!(top.value, 25);
        assert_eq!(top.y_px, 0.0);
    }

    #[test]
    fn non_multiple_max_truncates() {
        let grid = AxisGrid::compute(23, 5, 30.0, Density::ONE).expect("valid grid");
        assert_eq!(grid.line_count(), 5);
        assert_eq!(grid.lines.last().expect("top line").value, 20);
        assert_eq!(grid.chart_height_px, 120.0);
    }

    #[test]
    fn zero_unit_is_rejected() {
        assert!(AxisGrid::compute(25, 0, 30.0, Density::ONE).is_err());
    }
}
