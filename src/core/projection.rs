use serde::{Deserialize, Serialize};

use crate::core::chart_kind::ValueAxisOrientation;
use crate::core::layout::{LayoutResult, PixelPoint};
use crate::error::{ChartError, ChartResult};

/// Sample mapped into pixel space.
///
/// `index` is the position in the source series, which stays meaningful
/// after leading baseline samples have been trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub fn position(self) -> PixelPoint {
        PixelPoint {
            x: self.x,
            y: self.y,
        }
    }
}

/// Maps a series into pixel positions.
///
/// With `start_at_zero == false`, a leading run of two or more samples
/// sitting exactly on the axis origin is dropped so the line begins at the
/// first meaningful sample. A single origin sample is kept.
#[must_use]
pub fn project_series(layout: &LayoutResult, values: &[f64], start_at_zero: bool) -> Vec<PlotPoint> {
    let leading = values
        .iter()
        .take_while(|value| **value == layout.start_value)
        .count();
    let skip = if !start_at_zero && leading > 1 {
        leading
    } else {
        0
    };

    values
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(index, value)| {
            let point = layout.map_point(index, *value);
            PlotPoint {
                index,
                value: *value,
                x: point.x,
                y: point.y,
            }
        })
        .collect()
}

/// Line plus closed fill outline for area-style series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<PlotPoint>,
    pub fill_polygon: Vec<PixelPoint>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }
}

/// Projects an area series whose fill closes against the axis origin.
pub fn project_area(
    layout: &LayoutResult,
    values: &[f64],
    start_at_zero: bool,
) -> ChartResult<AreaGeometry> {
    if layout.orientation != ValueAxisOrientation::Vertical {
        return Err(ChartError::InvalidData(
            "area geometry requires a vertical value axis".to_owned(),
        ));
    }

    let line_points = project_series(layout, values, start_at_zero);
    let (Some(first), Some(last)) = (line_points.first(), line_points.last()) else {
        return Ok(AreaGeometry::empty());
    };

    let baseline_y = layout.baseline();
    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(PixelPoint {
        x: first.x,
        y: baseline_y,
    });
    fill_polygon.extend(line_points.iter().map(|point| point.position()));
    fill_polygon.push(PixelPoint {
        x: last.x,
        y: baseline_y,
    });
    // Repeat the first vertex so consumers do not need implicit closure rules.
    fill_polygon.push(PixelPoint {
        x: first.x,
        y: baseline_y,
    });

    Ok(AreaGeometry {
        line_points,
        fill_polygon,
    })
}

/// Axis-aligned bar rectangle; `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub index: usize,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Projects a series into upright bars growing from the axis origin.
///
/// Bars are centered half a bar-gap right of their category position.
pub fn project_vertical_bars(layout: &LayoutResult, values: &[f64]) -> ChartResult<Vec<BarRect>> {
    let width = bar_thickness(layout, ValueAxisOrientation::Vertical)?;
    let baseline_y = layout.baseline();

    Ok(values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let point = layout.map_point(index, *value);
            let center_x = point.x + layout.bar_padding;
            BarRect {
                index,
                value: *value,
                x: center_x - width / 2.0,
                y: point.y.min(baseline_y),
                width,
                height: (baseline_y - point.y).abs(),
            }
        })
        .collect())
}

/// Projects a series into bars growing rightwards from the axis origin.
pub fn project_horizontal_bars(
    layout: &LayoutResult,
    values: &[f64],
) -> ChartResult<Vec<BarRect>> {
    let height = bar_thickness(layout, ValueAxisOrientation::Horizontal)?;
    let baseline_x = layout.baseline();

    Ok(values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let point = layout.map_point(index, *value);
            BarRect {
                index,
                value: *value,
                x: point.x.min(baseline_x),
                y: point.y - height / 2.0,
                width: (point.x - baseline_x).abs(),
                height,
            }
        })
        .collect())
}

fn bar_thickness(layout: &LayoutResult, expected: ValueAxisOrientation) -> ChartResult<f64> {
    if layout.orientation != expected {
        return Err(ChartError::InvalidData(format!(
            "{:?} layout cannot produce {expected:?}-axis bars",
            layout.kind
        )));
    }
    match layout.bar_thickness {
        Some(thickness) if thickness.is_finite() && thickness > 0.0 => Ok(thickness),
        Some(thickness) => Err(ChartError::InvalidData(format!(
            "bar thickness must be > 0, got {thickness}"
        ))),
        None => Err(ChartError::InvalidData(format!(
            "{:?} layout has no bar geometry",
            layout.kind
        ))),
    }
}
