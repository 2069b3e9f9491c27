use serde::{Deserialize, Serialize};

use crate::core::bars::SUB_UNIT_STEP_DP;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, CornerRadii};

pub const CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Font size (dp) and color for one class of labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f64,
    pub color: Color,
}

impl TextStyle {
    #[must_use]
    pub const fn new(font_size: f64, color: Color) -> Self {
        Self { font_size, color }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "text style font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate().map_err(remap_as_config)
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0, Color::rgb(0.0, 0.0, 0.0))
    }
}

/// Public widget configuration bundle. Length-valued fields are in dp and get
/// converted through the explicit `Density` at layout time.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format; every field carries a serde
/// default so partial documents stay loadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BarChartConfig {
    /// Distance between horizontal gridlines.
    #[serde(default = "default_grid_line_spacing")]
    pub grid_line_spacing: f64,
    /// Thickness of the gridlines.
    #[serde(default = "default_grid_line_stroke_width")]
    pub grid_line_stroke_width: f64,
    /// Maximum value of the Y axis.
    #[serde(default = "default_y_max")]
    pub y_max: u32,
    /// Value represented by one gridline spacing interval. Must be > 0.
    #[serde(default = "default_y_unit")]
    pub y_unit: u32,
    /// Fixed width of every bar.
    #[serde(default = "default_bar_width")]
    pub bar_width: f64,
    /// Visibility of the unit numbers on the Y axis.
    #[serde(default)]
    pub show_y_axis_unit: bool,
    /// Visibility of the value text displayed inside each bar.
    #[serde(default)]
    pub show_bar_value: bool,
    /// Ordered fill stops: one color renders solid, two or more render a
    /// vertical gradient.
    #[serde(default = "default_bar_colors")]
    pub bar_colors: Vec<Color>,
    /// Per-corner radii for the bar tops, in dp.
    #[serde(default)]
    pub corner_radii: CornerRadii,
    #[serde(default)]
    pub y_text_style: TextStyle,
    #[serde(default)]
    pub bar_text_style: TextStyle,
    /// Extra height per sub-unit remainder step. The default preserves the
    /// original visual design's increment.
    #[serde(default = "default_sub_unit_step")]
    pub sub_unit_step: f64,
}

impl BarChartConfig {
    #[must_use]
    pub fn with_axis(mut self, y_max: u32, y_unit: u32) -> Self {
        self.y_max = y_max;
        self.y_unit = y_unit;
        self
    }

    #[must_use]
    pub fn with_grid_line_spacing(mut self, spacing_dp: f64) -> Self {
        self.grid_line_spacing = spacing_dp;
        self
    }

    #[must_use]
    pub fn with_bar_width(mut self, bar_width_dp: f64) -> Self {
        self.bar_width = bar_width_dp;
        self
    }

    #[must_use]
    pub fn with_bar_colors(mut self, colors: Vec<Color>) -> Self {
        self.bar_colors = colors;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, show_y_axis_unit: bool, show_bar_value: bool) -> Self {
        self.show_y_axis_unit = show_y_axis_unit;
        self.show_bar_value = show_bar_value;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.y_unit == 0 {
            return Err(ChartError::InvalidConfig(
                "y unit must be > 0".to_owned(),
            ));
        }
        for (field, value) in [
            ("grid_line_spacing", self.grid_line_spacing),
            ("grid_line_stroke_width", self.grid_line_stroke_width),
            ("bar_width", self.bar_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{field}` must be finite and > 0"
                )));
            }
        }
        if !self.sub_unit_step.is_finite() || self.sub_unit_step < 0.0 {
            return Err(ChartError::InvalidConfig(
                "`sub_unit_step` must be finite and >= 0".to_owned(),
            ));
        }
        if self.bar_colors.is_empty() {
            return Err(ChartError::InvalidConfig(
                "`bar_colors` must contain at least one color".to_owned(),
            ));
        }
        for color in &self.bar_colors {
            color.validate().map_err(remap_as_config)?;
        }
        self.corner_radii.validate().map_err(remap_as_config)?;
        self.y_text_style.validate()?;
        self.bar_text_style.validate()
    }
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            grid_line_spacing: default_grid_line_spacing(),
            grid_line_stroke_width: default_grid_line_stroke_width(),
            y_max: default_y_max(),
            y_unit: default_y_unit(),
            bar_width: default_bar_width(),
            show_y_axis_unit: false,
            show_bar_value: false,
            bar_colors: default_bar_colors(),
            corner_radii: CornerRadii::ZERO,
            y_text_style: TextStyle::default(),
            bar_text_style: TextStyle::default(),
            sub_unit_step: default_sub_unit_step(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct BarChartConfigJsonContractV1 {
    schema_version: u32,
    config: BarChartConfig,
}

impl BarChartConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = BarChartConfigJsonContractV1 {
            schema_version: CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts both a bare config document and the versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(config) = serde_json::from_str::<Self>(input) {
            return Ok(config);
        }
        let payload: BarChartConfigJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        if payload.schema_version != CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidConfig(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}

fn default_grid_line_spacing() -> f64 {
    30.0
}

fn default_grid_line_stroke_width() -> f64 {
    1.0
}

fn default_y_max() -> u32 {
    25
}

fn default_y_unit() -> u32 {
    5
}

fn default_bar_width() -> f64 {
    20.0
}

fn default_bar_colors() -> Vec<Color> {
    vec![Color::rgb(1.0, 1.0, 0.0), Color::rgb(0.0, 1.0, 1.0)]
}

fn default_sub_unit_step() -> f64 {
    SUB_UNIT_STEP_DP
}

fn remap_as_config(err: ChartError) -> ChartError {
    ChartError::InvalidConfig(err.to_string())
}
