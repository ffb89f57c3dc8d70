//! Axis decoration outputs: label anchors, grid lines and the mean line.
//!
//! Positions are anchors on the axis itself; text alignment and glyph
//! offsets are left to the renderer.

use serde::{Deserialize, Serialize};

use crate::core::chart_kind::ValueAxisOrientation;
use crate::core::labels::value_label_text;
use crate::core::layout::LayoutResult;
use crate::core::statistics;
use crate::error::ChartResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Pixel positions of grid lines: `rows` are horizontal lines (y values),
/// `columns` vertical lines (x values).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridLines {
    pub rows: Vec<f64>,
    pub columns: Vec<f64>,
}

/// Default category labels `1..=count`.
#[must_use]
pub fn numbered_category_labels(count: usize) -> Vec<String> {
    (1..=count).map(|n| n.to_string()).collect()
}

/// Value-axis labels, evenly spaced so the last one meets the far edge.
#[must_use]
pub fn value_axis_labels(layout: &LayoutResult, unit: Option<&str>) -> Vec<AxisLabel> {
    if layout.label_count == 0 {
        return Vec::new();
    }

    let spacing = layout.value_extent() / layout.label_count as f64;
    layout
        .value_labels
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let offset = (i + 1) as f64 * spacing;
            match layout.orientation {
                ValueAxisOrientation::Vertical => AxisLabel {
                    text: value_label_text(*value, unit, " "),
                    x: layout.x_padding_left,
                    y: layout.baseline() - offset,
                },
                ValueAxisOrientation::Horizontal => AxisLabel {
                    text: value_label_text(*value, unit, ""),
                    x: layout.x_padding_left + offset,
                    y: layout.height - layout.y_padding_bottom,
                },
            }
        })
        .collect()
}

/// Category-axis labels.
///
/// Horizontal-bar charts list categories bottom-up in reverse, so the first
/// category lines up with the topmost bar.
#[must_use]
pub fn category_axis_labels(layout: &LayoutResult, labels: &[String]) -> Vec<AxisLabel> {
    match layout.orientation {
        ValueAxisOrientation::Vertical => {
            let bar_offset = if layout.bar_thickness.is_some() {
                layout.bar_padding
            } else {
                0.0
            };
            labels
                .iter()
                .enumerate()
                .map(|(i, text)| AxisLabel {
                    text: text.clone(),
                    x: layout.category_position(i) + bar_offset,
                    y: layout.baseline(),
                })
                .collect()
        }
        ValueAxisOrientation::Horizontal => {
            let origin_y = layout.height - layout.y_padding_bottom;
            labels
                .iter()
                .rev()
                .enumerate()
                .map(|(i, text)| AxisLabel {
                    text: text.clone(),
                    x: layout.x_padding_left,
                    y: origin_y - layout.plot_step / 2.0 - i as f64 * layout.plot_step,
                })
                .collect()
        }
    }
}

/// Grid lines for the plot area.
///
/// Value grid lines run at every value label plus the origin. Category grid
/// lines follow point positions for line-style charts and frame the plot
/// area for bar charts. With `hide_empty_labels`, categories whose label is
/// empty get no grid line.
#[must_use]
pub fn grid_lines(layout: &LayoutResult, labels: &[String], hide_empty_labels: bool) -> GridLines {
    let value_lines = value_grid_positions(layout);
    match layout.orientation {
        ValueAxisOrientation::Vertical => {
            let columns = if layout.bar_thickness.is_some() {
                vec![
                    layout.x_padding_left,
                    layout.x_padding_left + layout.graph_width,
                ]
            } else {
                labels
                    .iter()
                    .enumerate()
                    .filter(|(_, label)| !(hide_empty_labels && label.is_empty()))
                    .map(|(i, _)| layout.category_position(i))
                    .collect()
            };
            GridLines {
                rows: value_lines,
                columns,
            }
        }
        ValueAxisOrientation::Horizontal => GridLines {
            rows: vec![layout.y_padding_top],
            columns: value_lines,
        },
    }
}

fn value_grid_positions(layout: &LayoutResult) -> Vec<f64> {
    let count = layout.label_count.max(1);
    let spacing = layout.value_extent() / count as f64;
    (0..=count)
        .map(|i| match layout.orientation {
            ValueAxisOrientation::Vertical => layout.baseline() - i as f64 * spacing,
            ValueAxisOrientation::Horizontal => layout.x_padding_left + i as f64 * spacing,
        })
        .collect()
}

/// Position of the mean of `values` along the value axis (y for vertical
/// charts, x for horizontal ones).
pub fn mean_line_position(layout: &LayoutResult, values: &[f64]) -> ChartResult<f64> {
    let mean = statistics::mean(values)?;
    let offset = layout.normalize(mean - layout.start_value);
    Ok(match layout.orientation {
        ValueAxisOrientation::Vertical => layout.baseline() - offset,
        ValueAxisOrientation::Horizontal => layout.baseline() + offset,
    })
}
