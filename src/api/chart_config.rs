use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, LayoutOptions, NormalizerTuning};
use crate::error::{ChartError, ChartResult};

/// Public chart configuration record.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Every field has a
/// default, so `{}` is a valid line-chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub kind: ChartKind,
    /// Preferred axis origin; bar kinds default to `0`.
    #[serde(default)]
    pub forced_start_value: Option<f64>,
    #[serde(flatten)]
    pub layout: LayoutOptions,
    /// When `false`, leading samples on the axis origin are not plotted.
    #[serde(default = "default_true")]
    pub start_at_zero: bool,
    /// Stacking request; only honored by kinds where stacking is optional.
    #[serde(default)]
    pub stacked: Option<bool>,
    #[serde(default = "default_true")]
    pub show_horizontal_labels: bool,
    /// Category names; defaults to `1..=n`.
    #[serde(default)]
    pub category_labels: Option<Vec<String>>,
    #[serde(default)]
    pub hide_empty_label_grid: bool,
    /// Adds a line at the mean of the plotted values to the frame.
    #[serde(default)]
    pub show_mean_line: bool,
    #[serde(default)]
    pub normalizer: NormalizerTuning,
}

fn default_true() -> bool {
    true
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(ChartKind::default())
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            forced_start_value: None,
            layout: LayoutOptions::default(),
            start_at_zero: true,
            stacked: None,
            show_horizontal_labels: true,
            category_labels: None,
            hide_empty_label_grid: false,
            show_mean_line: false,
            normalizer: NormalizerTuning::default(),
        }
    }

    #[must_use]
    pub fn with_forced_start_value(mut self, start: f64) -> Self {
        self.forced_start_value = Some(start);
        self
    }

    #[must_use]
    pub fn with_plot_padding(mut self, padding: f64) -> Self {
        self.layout.plot_padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.layout.font_size = font_size;
        self
    }

    #[must_use]
    pub fn with_left_padding(mut self, padding: f64) -> Self {
        self.layout.left_padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_y_padding_top(mut self, padding: f64) -> Self {
        self.layout.y_padding_top = padding;
        self
    }

    #[must_use]
    pub fn with_vertical_label_unit(mut self, unit: impl Into<String>) -> Self {
        self.layout.vertical_label_unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_vertical_labels(mut self, show: bool) -> Self {
        self.layout.show_vertical_labels = show;
        self
    }

    #[must_use]
    pub fn with_horizontal_labels(mut self, show: bool) -> Self {
        self.show_horizontal_labels = show;
        self
    }

    #[must_use]
    pub fn with_start_at_zero(mut self, start_at_zero: bool) -> Self {
        self.start_at_zero = start_at_zero;
        self
    }

    #[must_use]
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = Some(stacked);
        self
    }

    #[must_use]
    pub fn with_category_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_hidden_empty_label_grid(mut self, hide: bool) -> Self {
        self.hide_empty_label_grid = hide;
        self
    }

    #[must_use]
    pub fn with_mean_line(mut self, show: bool) -> Self {
        self.show_mean_line = show;
        self
    }

    #[must_use]
    pub fn with_normalizer_tuning(mut self, tuning: NormalizerTuning) -> Self {
        self.normalizer = tuning;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if let Some(start) = self.forced_start_value {
            if !start.is_finite() {
                return Err(ChartError::InvalidData(
                    "forced start value must be finite".to_owned(),
                ));
            }
        }
        self.layout.validate()?;
        self.normalizer.validate()?;
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }
}
