use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::chart_kind::{ChartKind, ChartKindPolicy, ValueAxisOrientation};
use crate::core::labels::{round_half_up, round_to_digits};
use crate::core::normalizer::NormalizationResult;
use crate::core::types::Dimensions;
use crate::error::{ChartError, ChartResult};

/// Fixed left margin before the value-axis label column.
pub const LEFT_PADDING_BASE: f64 = 10.0;
/// Extra left margin reserved when value labels carry a unit suffix.
pub const UNIT_SUFFIX_ALLOWANCE: f64 = 6.0;
/// Left margin before horizontal-bar category labels.
pub const CATEGORY_LABEL_PADDING_BASE: f64 = 20.0;
/// Bottom margin below the category-axis label row.
pub const BOTTOM_PADDING_BASE: f64 = 20.0;

/// Host-provided layout knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Overrides the kind's default plot padding (line and area kinds only).
    #[serde(default)]
    pub plot_padding: Option<f64>,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Replaces the computed left padding entirely.
    #[serde(default)]
    pub left_padding: Option<f64>,
    #[serde(default = "default_x_padding_right")]
    pub x_padding_right: f64,
    #[serde(default = "default_y_padding_top")]
    pub y_padding_top: f64,
    #[serde(default = "default_true")]
    pub show_vertical_labels: bool,
    #[serde(default)]
    pub vertical_label_unit: Option<String>,
}

fn default_font_size() -> f64 {
    10.0
}

fn default_x_padding_right() -> f64 {
    20.0
}

fn default_y_padding_top() -> f64 {
    20.0
}

fn default_true() -> bool {
    true
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            plot_padding: None,
            font_size: default_font_size(),
            left_padding: None,
            x_padding_right: default_x_padding_right(),
            y_padding_top: default_y_padding_top(),
            show_vertical_labels: true,
            vertical_label_unit: None,
        }
    }
}

impl LayoutOptions {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        let paddings = [
            ("plot padding", self.plot_padding),
            ("left padding", self.left_padding),
            ("right padding", Some(self.x_padding_right)),
            ("top padding", Some(self.y_padding_top)),
        ];
        for (name, value) in paddings {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(ChartError::InvalidData(format!(
                        "{name} must be finite and >= 0"
                    )));
                }
            }
        }
        Ok(())
    }

    fn has_unit(&self) -> bool {
        self.vertical_label_unit
            .as_deref()
            .is_some_and(|unit| !unit.is_empty())
    }
}

/// Category-axis facts needed before any point can be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAxis {
    /// Longest series length; categories beyond a shorter series stay empty.
    pub count: usize,
    /// Character count of the longest category label.
    pub longest_label_chars: usize,
}

impl CategoryAxis {
    #[must_use]
    pub fn new(count: usize, labels: &[String]) -> Self {
        Self {
            count,
            longest_label_chars: labels
                .iter()
                .map(|label| label.chars().count())
                .max()
                .unwrap_or(0),
        }
    }

    /// Categories labelled `1..=count`.
    #[must_use]
    pub fn numbered(count: usize) -> Self {
        Self {
            count,
            longest_label_chars: count.max(1).to_string().len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Immutable outcome of one layout pass.
///
/// `graph_width = width - x_padding_left - x_padding_right` and
/// `graph_height = height - y_padding_top - y_padding_bottom`, both > 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub kind: ChartKind,
    pub orientation: ValueAxisOrientation,
    pub width: f64,
    pub height: f64,
    pub x_padding_left: f64,
    pub x_padding_right: f64,
    pub y_padding_top: f64,
    pub y_padding_bottom: f64,
    pub graph_width: f64,
    pub graph_height: f64,
    pub plot_padding: f64,
    pub plot_step: f64,
    pub bar_padding: f64,
    pub bar_thickness: Option<f64>,
    pub series_len: usize,
    pub label_step: f64,
    pub label_count: usize,
    pub value_labels: SmallVec<[f64; 16]>,
    pub start_value: f64,
    pub range: f64,
    /// Value mapped to the full value-axis extent.
    pub scale_total: f64,
    pub flat_axis: bool,
}

impl LayoutResult {
    /// Topmost value label, or the origin when there is none.
    #[must_use]
    pub fn top_value(&self) -> f64 {
        self.value_labels.last().copied().unwrap_or(self.start_value)
    }

    /// Pixel length of the value axis.
    #[must_use]
    pub fn value_extent(&self) -> f64 {
        match self.orientation {
            ValueAxisOrientation::Vertical => self.graph_height,
            ValueAxisOrientation::Horizontal => self.graph_width,
        }
    }

    /// True when the value axis does not start at zero and is drawn truncated.
    #[must_use]
    pub fn axis_break(&self) -> bool {
        self.start_value != 0.0
    }

    /// Maps a value offset (relative to the origin) to a pixel offset.
    ///
    /// A flat axis has nothing to scale against and maps everything to `0`.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        if !self.has_scale() {
            return 0.0;
        }
        value / self.scale_total * self.value_extent()
    }

    /// Inverse of [`LayoutResult::normalize`].
    #[must_use]
    pub fn denormalize(&self, offset: f64) -> f64 {
        if !self.has_scale() {
            return 0.0;
        }
        offset / self.value_extent() * self.scale_total
    }

    /// Pixel coordinate of the value origin along the value axis.
    #[must_use]
    pub fn baseline(&self) -> f64 {
        match self.orientation {
            ValueAxisOrientation::Vertical => self.graph_height + self.y_padding_top,
            ValueAxisOrientation::Horizontal => self.x_padding_left + self.plot_padding,
        }
    }

    /// Pixel coordinate of category `index` along the category axis.
    #[must_use]
    pub fn category_position(&self, index: usize) -> f64 {
        let offset = index as f64 * self.plot_step;
        match self.orientation {
            ValueAxisOrientation::Vertical => self.x_padding_left + self.plot_padding + offset,
            ValueAxisOrientation::Horizontal => {
                let thickness = self.bar_thickness.unwrap_or(0.0);
                self.y_padding_top + thickness / 2.0 + self.bar_padding / 2.0 + offset
            }
        }
    }

    /// Pixel position of sample `value` at category `index`.
    #[must_use]
    pub fn map_point(&self, index: usize, value: f64) -> PixelPoint {
        let category = self.category_position(index);
        let offset = self.normalize(value - self.start_value);
        match self.orientation {
            ValueAxisOrientation::Vertical => PixelPoint {
                x: category,
                y: self.baseline() - offset,
            },
            ValueAxisOrientation::Horizontal => PixelPoint {
                x: self.baseline() + offset,
                y: category,
            },
        }
    }

    /// Value represented by a pixel position on the value axis.
    #[must_use]
    pub fn value_at(&self, point: PixelPoint) -> f64 {
        let offset = match self.orientation {
            ValueAxisOrientation::Vertical => self.baseline() - point.y,
            ValueAxisOrientation::Horizontal => point.x - self.baseline(),
        };
        self.start_value + self.denormalize(offset)
    }

    fn has_scale(&self) -> bool {
        self.scale_total.is_finite() && self.scale_total > 0.0 && self.value_extent() > 0.0
    }
}

/// Computes paddings, steps and value labels for one chart.
///
/// `longest_label_text` is the widest value label the data can produce and
/// stands in for real font metrics: every character is assumed to be
/// `font_size` wide.
pub fn compute_layout(
    dimensions: Dimensions,
    policy: ChartKindPolicy,
    normalization: &NormalizationResult,
    longest_label_text: &str,
    categories: CategoryAxis,
    options: &LayoutOptions,
) -> ChartResult<LayoutResult> {
    let dimensions = dimensions.validate()?;
    options.validate()?;
    if categories.count == 0 {
        return Err(ChartError::EmptyInput("layout requires at least one category"));
    }

    let width = f64::from(dimensions.width);
    let height = f64::from(dimensions.height);

    let x_padding_left = options.left_padding.unwrap_or_else(|| {
        computed_left_padding(policy, longest_label_text, categories, options)
    });
    let x_padding_right = options.x_padding_right;
    let y_padding_top = options.y_padding_top;
    let y_padding_bottom = BOTTOM_PADDING_BASE + options.font_size;

    let graph_width = width - x_padding_left - x_padding_right;
    let graph_height = height - y_padding_top - y_padding_bottom;
    if graph_width <= 0.0 || graph_height <= 0.0 {
        warn!(
            width,
            height, graph_width, graph_height, "padding leaves no room for the graph"
        );
        return Err(ChartError::DegenerateCanvas {
            graph_width,
            graph_height,
        });
    }

    let n = categories.count;
    let plot_padding = policy.plot_padding(graph_width, graph_height, n, options.plot_padding);
    let plot_step = policy.plot_step(graph_width, graph_height, plot_padding, n);
    let bar_thickness = policy.bar_thickness(graph_width, graph_height, n);

    let label_count = value_label_count(normalization);
    let value_labels: SmallVec<[f64; 16]> = (0..label_count)
        .map(|i| round_to_digits(normalization.start_value + (i + 1) as f64 * normalization.step, 3))
        .collect();
    let top_value = value_labels
        .last()
        .copied()
        .unwrap_or(normalization.start_value);
    let scale_total = if normalization.start_value == 0.0 {
        top_value
    } else {
        normalization.range
    };

    let layout = LayoutResult {
        kind: policy.kind,
        orientation: policy.orientation,
        width,
        height,
        x_padding_left,
        x_padding_right,
        y_padding_top,
        y_padding_bottom,
        graph_width,
        graph_height,
        plot_padding,
        plot_step,
        bar_padding: policy.bar_padding,
        bar_thickness,
        series_len: n,
        label_step: normalization.step,
        label_count,
        value_labels,
        start_value: normalization.start_value,
        range: normalization.range,
        scale_total,
        flat_axis: normalization.flat_axis,
    };
    debug!(
        kind = ?layout.kind,
        graph_width,
        graph_height,
        plot_step,
        label_count,
        scale_total,
        "computed layout"
    );
    Ok(layout)
}

fn computed_left_padding(
    policy: ChartKindPolicy,
    longest_label_text: &str,
    categories: CategoryAxis,
    options: &LayoutOptions,
) -> f64 {
    if policy.orientation == ValueAxisOrientation::Horizontal {
        // Category names sit left of horizontal bars; assume half-width glyphs.
        return CATEGORY_LABEL_PADDING_BASE
            + categories.longest_label_chars as f64 * (options.font_size / 2.0);
    }

    let label_offset = if options.show_vertical_labels {
        let chars = longest_label_text.chars().count();
        let chars = if chars > 2 { chars - 1 } else { chars };
        chars as f64 * options.font_size
    } else {
        0.0
    };
    let unit_offset = if options.has_unit() {
        UNIT_SUFFIX_ALLOWANCE
    } else {
        0.0
    };
    LEFT_PADDING_BASE + label_offset + unit_offset
}

/// Number of value labels needed so the largest sample is covered.
///
/// A flat axis still gets one label so the renderer has something to show.
fn value_label_count(normalization: &NormalizationResult) -> usize {
    let mut count = round_half_up(normalization.range / normalization.step).max(0.0) as usize;
    if normalization.min + count as f64 * normalization.step < normalization.max {
        count += 1;
    }
    if normalization.flat_axis {
        count = count.max(1);
    }
    count
}
