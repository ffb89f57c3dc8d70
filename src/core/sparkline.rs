//! Axis-less mini charts that fill their whole canvas.
//!
//! Sparklines scale against the series maximum (zero at the bottom edge)
//! and reserve no room for labels.

use serde::{Deserialize, Serialize};

use crate::core::layout::PixelPoint;
use crate::core::statistics;
use crate::core::types::Dimensions;
use crate::error::{ChartError, ChartResult};

/// Radius of the highlight marker.
pub const HIGHLIGHT_MARKER_SIZE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SparklineKind {
    #[default]
    Line,
    Bar,
}

/// Vertical stroke of a spark bar, from `top_y` down to the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparkBar {
    pub x: f64,
    pub top_y: f64,
    pub bottom_y: f64,
    pub stroke_width: f64,
}

/// Rows bounding an "acceptable range" band behind the sparkline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandRows {
    pub top_y: f64,
    pub bottom_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparklineLayout {
    pub kind: SparklineKind,
    pub width: f64,
    pub height: f64,
    pub step: f64,
    pub scale_max: f64,
    pub len: usize,
}

impl SparklineLayout {
    pub fn compute(
        dimensions: Dimensions,
        kind: SparklineKind,
        values: &[f64],
    ) -> ChartResult<Self> {
        let dimensions = dimensions.validate()?;
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "sparkline values must be finite".to_owned(),
            ));
        }
        let scale_max = statistics::max(values)?;

        let width = f64::from(dimensions.width);
        let step = match kind {
            SparklineKind::Line => width / values.len().saturating_sub(1).max(1) as f64,
            SparklineKind::Bar => width / values.len() as f64,
        };

        Ok(Self {
            kind,
            width,
            height: f64::from(dimensions.height),
            step,
            scale_max,
            len: values.len(),
        })
    }

    /// Pixel height for `value`; a non-positive maximum maps everything to `0`.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        if self.scale_max <= 0.0 {
            return 0.0;
        }
        self.height / self.scale_max * value
    }

    #[must_use]
    pub fn points(&self, values: &[f64]) -> Vec<PixelPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, value)| PixelPoint {
                x: i as f64 * self.step,
                y: self.height - self.normalize(*value),
            })
            .collect()
    }

    /// Bars leave a one-pixel gap once they are wider than two pixels.
    #[must_use]
    pub fn bar_stroke_width(&self) -> f64 {
        if self.step > 2.0 {
            self.step - 1.0
        } else {
            self.step
        }
    }

    #[must_use]
    pub fn bars(&self, values: &[f64]) -> Vec<SparkBar> {
        let stroke_width = self.bar_stroke_width();
        values
            .iter()
            .enumerate()
            .map(|(i, value)| SparkBar {
                x: stroke_width + i as f64 * self.step,
                top_y: self.height - self.normalize(*value),
                bottom_y: self.height,
                stroke_width,
            })
            .collect()
    }

    /// Marker position for sample `index`, or for the last sample when
    /// `index` is `None`. The last sample hugs the right edge.
    #[must_use]
    pub fn highlight(&self, values: &[f64], index: Option<usize>) -> Option<PixelPoint> {
        let last = values.len().checked_sub(1)?;
        let (i, x) = match index {
            Some(i) => (i, self.step * i as f64),
            None => (last, self.width - HIGHLIGHT_MARKER_SIZE),
        };
        let value = *values.get(i)?;
        Some(PixelPoint {
            x,
            y: self.height - (self.normalize(value) + HIGHLIGHT_MARKER_SIZE / 2.0),
        })
    }

    #[must_use]
    pub fn acceptable_band(&self, low: f64, high: f64) -> BandRows {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        BandRows {
            top_y: self.height - self.normalize(high),
            bottom_y: self.height - self.normalize(low),
        }
    }
}
