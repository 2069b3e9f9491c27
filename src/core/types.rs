use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One immutable non-negative magnitude, one per bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphItem {
    pub value: u32,
}

impl GraphItem {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }
}

/// Explicit density-independent-pixel conversion context.
///
/// Hosts pass this into every layout entry point instead of relying on an
/// ambient toolkit density. `scale` is physical pixels per dp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    scale: f64,
}

impl Density {
    /// 1:1 dp-to-pixel mapping.
    pub const ONE: Self = Self { scale: 1.0 };

    pub fn new(scale: f64) -> ChartResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "density scale must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { scale })
    }

    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn px(self, dp: f64) -> f64 {
        dp * self.scale
    }

    /// Converts dp to a whole pixel count, rounding half away from zero.
    #[must_use]
    pub fn round_px(self, dp: f64) -> i32 {
        (dp * self.scale).round() as i32
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::ONE
    }
}
