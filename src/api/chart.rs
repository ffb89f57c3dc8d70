use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::axis::{
    AxisLabel, GridLines, category_axis_labels, grid_lines, mean_line_position,
    numbered_category_labels, value_axis_labels,
};
use crate::core::labels::{longest_value_label, tooltip_value_text};
use crate::core::projection::{
    BarRect, PlotPoint, project_area, project_horizontal_bars, project_series,
    project_vertical_bars,
};
use crate::core::{
    CategoryAxis, ChartKind, DataSet, Dimensions, LayoutResult, NormalizationResult, Normalizer,
    NormalizerOptions, PixelPoint, Series, ValueAxisOrientation, compute_layout, stack,
};
use crate::error::ChartResult;

use super::ChartConfig;

/// A data set laid out on a canvas.
///
/// Building a chart runs the whole pipeline once: validation, optional
/// stacking, normalization and layout. The result is immutable; `resize`
/// replaces it with a freshly built one.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    config: ChartConfig,
    dimensions: Dimensions,
    original: DataSet,
    plotted: DataSet,
    stacked: bool,
    category_labels: Vec<String>,
    normalization: NormalizationResult,
    layout: LayoutResult,
}

impl Chart {
    pub fn build(data_set: DataSet, dimensions: Dimensions, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let dimensions = dimensions.validate()?;
        data_set.validate()?;
        debug!(
            kind = ?config.kind,
            series_count = data_set.len(),
            longest_series = data_set.longest_series_len(),
            width = dimensions.width,
            height = dimensions.height,
            "building chart"
        );

        let policy = config.kind.policy();
        let stacked = policy.uses_stacking(config.stacked);
        let plotted = if stacked {
            let (stacked_view, _) = stack(&data_set)?.into_parts();
            stacked_view
        } else {
            data_set.clone()
        };

        let flat = plotted.flatten();
        let options = NormalizerOptions {
            forced_start: config.forced_start_value.or(policy.forced_start),
        };
        let normalization = Normalizer::new(config.normalizer)?.normalize(&flat, options)?;
        let longest_label = longest_value_label(&flat);
        trace!(longest_label = %longest_label, "widest value label");

        let count = plotted.longest_series_len();
        let category_labels = resolve_category_labels(config.category_labels.as_deref(), count);
        let categories = CategoryAxis::new(count, &category_labels);

        let layout = compute_layout(
            dimensions,
            policy,
            &normalization,
            &longest_label,
            categories,
            &config.layout,
        )?;

        Ok(Self {
            config,
            dimensions,
            original: data_set,
            plotted,
            stacked,
            category_labels,
            normalization,
            layout,
        })
    }

    /// Rebuilds the chart for a new canvas size.
    ///
    /// On error the chart keeps its previous layout.
    pub fn resize(&mut self, dimensions: Dimensions) -> ChartResult<()> {
        if dimensions == self.dimensions {
            return Ok(());
        }
        *self = Self::build(self.original.clone(), dimensions, self.config.clone())?;
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.config.kind
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Data as supplied by the caller.
    #[must_use]
    pub fn data(&self) -> &DataSet {
        &self.original
    }

    /// Data as plotted: the cumulative view when stacking is active.
    #[must_use]
    pub fn plotted_data(&self) -> &DataSet {
        &self.plotted
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stacked
    }

    #[must_use]
    pub fn category_labels(&self) -> &[String] {
        &self.category_labels
    }

    #[must_use]
    pub fn normalization(&self) -> &NormalizationResult {
        &self.normalization
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Caller-supplied sample, never the stacked one.
    #[must_use]
    pub fn original_value(&self, label: &str, index: usize) -> Option<f64> {
        self.original.get(label)?.get(index)
    }

    /// Value under a pixel position on the value axis.
    #[must_use]
    pub fn value_at(&self, point: PixelPoint) -> f64 {
        self.layout.value_at(point)
    }

    /// Projects every series and decorates the axes.
    pub fn frame(&self) -> ChartResult<ChartFrame> {
        let entries: Vec<(&str, &Series)> = self.plotted.iter().collect();

        #[cfg(feature = "parallel-projection")]
        let series = {
            let projected: Vec<ChartResult<SeriesFrame>> = entries
                .par_iter()
                .map(|(label, series)| self.series_frame(label, series))
                .collect();
            projected.into_iter().collect::<ChartResult<Vec<_>>>()?
        };

        #[cfg(not(feature = "parallel-projection"))]
        let series = entries
            .iter()
            .map(|(label, series)| self.series_frame(label, series))
            .collect::<ChartResult<Vec<_>>>()?;

        let (show_value_labels, show_category_labels) = match self.layout.orientation {
            ValueAxisOrientation::Vertical => (
                self.config.layout.show_vertical_labels,
                self.config.show_horizontal_labels,
            ),
            ValueAxisOrientation::Horizontal => (
                self.config.show_horizontal_labels,
                self.config.layout.show_vertical_labels,
            ),
        };
        let value_labels = if show_value_labels {
            value_axis_labels(&self.layout, self.config.layout.vertical_label_unit.as_deref())
        } else {
            Vec::new()
        };
        let category_labels = if show_category_labels {
            category_axis_labels(&self.layout, &self.category_labels)
        } else {
            Vec::new()
        };

        let mean_line = if self.config.show_mean_line {
            Some(mean_line_position(&self.layout, &self.plotted.flatten())?)
        } else {
            None
        };

        Ok(ChartFrame {
            kind: self.layout.kind,
            dimensions: self.dimensions,
            layout: self.layout.clone(),
            series,
            value_labels,
            category_labels,
            grid: grid_lines(
                &self.layout,
                &self.category_labels,
                self.config.hide_empty_label_grid,
            ),
            mean_line,
            axis_break: self.layout.axis_break(),
        })
    }

    fn series_frame(&self, label: &str, series: &Series) -> ChartResult<SeriesFrame> {
        let values = series.values();
        let start_at_zero = self.config.start_at_zero;
        let mut frame = SeriesFrame {
            label: label.to_owned(),
            points: Vec::new(),
            fill_polygon: Vec::new(),
            bars: Vec::new(),
            tooltips: Vec::new(),
        };

        let samples: Vec<(usize, f64)> = match self.layout.kind {
            ChartKind::Line => {
                frame.points = project_series(&self.layout, values, start_at_zero);
                frame.points.iter().map(|p| (p.index, p.value)).collect()
            }
            ChartKind::Area | ChartKind::StackedArea => {
                let area = project_area(&self.layout, values, start_at_zero)?;
                frame.points = area.line_points;
                frame.fill_polygon = area.fill_polygon;
                frame.points.iter().map(|p| (p.index, p.value)).collect()
            }
            ChartKind::VerticalBar => {
                frame.bars = project_vertical_bars(&self.layout, values)?;
                frame.bars.iter().map(|b| (b.index, b.value)).collect()
            }
            ChartKind::HorizontalBar => {
                frame.bars = project_horizontal_bars(&self.layout, values)?;
                frame.bars.iter().map(|b| (b.index, b.value)).collect()
            }
        };

        let unit = self.config.layout.vertical_label_unit.as_deref();
        frame.tooltips = samples
            .into_iter()
            .map(|(index, plotted)| {
                let value = self.original_value(label, index).unwrap_or(plotted);
                tooltip_value_text(value, unit)
            })
            .collect();
        Ok(frame)
    }
}

/// Renderer-ready geometry of one series.
///
/// `tooltips[i]` belongs to `points[i]` (line and area kinds) or `bars[i]`
/// (bar kinds) and always shows the caller-supplied value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesFrame {
    pub label: String,
    pub points: Vec<PlotPoint>,
    pub fill_polygon: Vec<PixelPoint>,
    pub bars: Vec<BarRect>,
    pub tooltips: Vec<String>,
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub kind: ChartKind,
    pub dimensions: Dimensions,
    pub layout: LayoutResult,
    pub series: Vec<SeriesFrame>,
    pub value_labels: Vec<AxisLabel>,
    pub category_labels: Vec<AxisLabel>,
    pub grid: GridLines,
    /// Value-axis coordinate of the mean line, when requested.
    pub mean_line: Option<f64>,
    /// The value axis does not start at zero.
    pub axis_break: bool,
}

/// Caller labels padded with empty strings (or cut) to `count`; numbered
/// `1..=count` when none were given.
fn resolve_category_labels(labels: Option<&[String]>, count: usize) -> Vec<String> {
    match labels {
        Some(labels) => {
            let mut resolved: Vec<String> = labels.iter().take(count).cloned().collect();
            resolved.resize(count, String::new());
            resolved
        }
        None => numbered_category_labels(count),
    }
}
