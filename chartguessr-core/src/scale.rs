//! Affine map from price to pixel-Y.
//!
//! The pixel range is `[height - margin, margin]`: the domain minimum sits
//! near the bottom edge and the maximum near the top, so a higher price
//! always maps to a smaller Y.
//!
//! Two domain rules exist:
//! - **fitted**: lowest low minus padding up to highest high plus padding,
//!   used once the round's data is loaded;
//! - **symmetric**: widened so the pivot close sits mid-chart, with an extra
//!   buffer below, used for the provisional frame before the initial load.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::ScaleConfig;
use crate::domain::Bar;

/// Smallest plot span kept between the two margins.
pub const MIN_PLOT_SPAN_PX: f64 = 20.0;

/// Default number of gridline ticks requested by renderers.
pub const DEFAULT_TICK_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("cannot fit a scale to zero bars")]
    NoBars,

    #[error("scale domain must be finite and non-empty: [{min}, {max}]")]
    InvalidDomain { min: f64, max: f64 },
}

/// Which domain rule a scale was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleBasis {
    /// Pre-load: symmetric around the pivot close.
    Symmetric,
    /// Post-load: fitted to the visible bars.
    Fitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    domain_min: f64,
    domain_max: f64,
    /// Pixel Y of `domain_min`.
    y_bottom: f64,
    /// Pixel Y of `domain_max`.
    y_top: f64,
}

/// Smallest chart height that leaves [`MIN_PLOT_SPAN_PX`] between margins.
pub fn min_pixel_height(margin_px: f64) -> f64 {
    2.0 * margin_px + MIN_PLOT_SPAN_PX
}

/// Clamp a chart height to the usable minimum.
///
/// Zero, negative and NaN heights are a caller precondition violation; they
/// are replaced rather than reported. Scales are rebuilt every frame, so this
/// only logs at `debug`; callers that own the viewport warn once per change.
pub fn clamp_pixel_height(pixel_height: f64, margin_px: f64) -> f64 {
    let min = min_pixel_height(margin_px);
    if is_usable_height(pixel_height, margin_px) {
        pixel_height
    } else {
        debug!(pixel_height, min, "chart height below minimum, clamping");
        min
    }
}

/// True when `pixel_height` needs no clamping.
pub fn is_usable_height(pixel_height: f64, margin_px: f64) -> bool {
    pixel_height.is_finite() && pixel_height >= min_pixel_height(margin_px)
}

impl PriceScale {
    pub fn new(
        domain_min: f64,
        domain_max: f64,
        pixel_height: f64,
        margin_px: f64,
    ) -> Result<Self, ScaleError> {
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_min >= domain_max {
            return Err(ScaleError::InvalidDomain {
                min: domain_min,
                max: domain_max,
            });
        }
        let height = clamp_pixel_height(pixel_height, margin_px);
        Ok(Self {
            domain_min,
            domain_max,
            y_bottom: height - margin_px,
            y_top: margin_px,
        })
    }

    pub fn domain_min(&self) -> f64 {
        self.domain_min
    }

    pub fn domain_max(&self) -> f64 {
        self.domain_max
    }

    /// `(y of domain_min, y of domain_max)`.
    pub fn pixel_range(&self) -> (f64, f64) {
        (self.y_bottom, self.y_top)
    }

    pub fn value_to_y(&self, value: f64) -> f64 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.y_bottom + t * (self.y_top - self.y_bottom)
    }

    /// Round tick values inside the domain, roughly `count` of them.
    ///
    /// Steps are 1, 2 or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_min, self.domain_max, count)
    }
}

/// Fitted scale over `bars`: `[min(low) - padding, max(high) + padding]`.
pub fn fitted_scale(
    bars: &[Bar],
    pixel_height: f64,
    config: &ScaleConfig,
) -> Result<PriceScale, ScaleError> {
    let (low, high) = price_extent(bars)?;
    PriceScale::new(
        low - config.fitted_padding,
        high + config.fitted_padding,
        pixel_height,
        config.margin_px,
    )
}

/// Symmetric scale centred on `pivot_close`.
///
/// The domain is widened so the pivot is equidistant from both ends, then a
/// buffer is added below only: `[min(raw_min, 2V - raw_max) - buffer,
/// max(raw_max, 2V - raw_min)]`.
pub fn symmetric_scale(
    bars: &[Bar],
    pivot_close: f64,
    pixel_height: f64,
    config: &ScaleConfig,
) -> Result<PriceScale, ScaleError> {
    let (raw_min, raw_max) = price_extent(bars)?;
    let y_min = raw_min.min(pivot_close - (raw_max - pivot_close));
    let y_max = raw_max.max(pivot_close + (pivot_close - raw_min));
    PriceScale::new(
        y_min - config.symmetric_buffer,
        y_max,
        pixel_height,
        config.margin_px,
    )
}

/// Fitted scale with the default padding and margins.
pub fn compute_scale(bars: &[Bar], pixel_height: f64) -> Result<PriceScale, ScaleError> {
    fitted_scale(bars, pixel_height, &ScaleConfig::default())
}

/// `(lowest low, highest high)` over `bars`.
fn price_extent(bars: &[Bar]) -> Result<(f64, f64), ScaleError> {
    if bars.is_empty() {
        return Err(ScaleError::NoBars);
    }
    let low = bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
    let high = bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
    if !low.is_finite() || !high.is_finite() {
        return Err(ScaleError::InvalidDomain {
            min: low,
            max: high,
        });
    }
    Ok((low, high))
}

fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() || stop <= start {
        return Vec::new();
    }
    let raw_step = (stop - start) / count as f64;
    let power = raw_step.log10().floor();
    let error = raw_step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    // Sub-unit steps divide by an integer inverse to keep ticks like 0.3 exact.
    if power >= 0.0 {
        let step = factor * 10f64.powf(power);
        let first = (start / step).ceil() as i64;
        let last = (stop / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    } else {
        let inverse = 10f64.powf(-power) / factor;
        let first = (start * inverse).ceil() as i64;
        let last = (stop * inverse).floor() as i64;
        (first..=last).map(|i| i as f64 / inverse).collect()
    }
}
