use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Label used when a chart is built from a single unnamed series.
pub const ANONYMOUS_SERIES_LABEL: &str = "one";

/// Canvas size in pixels, owned by the host rendering context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Ordered numeric samples plotted along the shared horizontal axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<f64>);

impl Series {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.0
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Named series rendered together on one chart.
///
/// Insertion order is significant: it is the legend order and defines the
/// stacking order. `IndexMap` keeps it stable across clones and serde.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSet {
    series: IndexMap<String, Series>,
}

impl DataSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a single unnamed series under [`ANONYMOUS_SERIES_LABEL`].
    #[must_use]
    pub fn single(values: impl Into<Series>) -> Self {
        Self::new().with_series(ANONYMOUS_SERIES_LABEL, values)
    }

    #[must_use]
    pub fn with_series(mut self, label: impl Into<String>, values: impl Into<Series>) -> Self {
        self.insert(label, values);
        self
    }

    /// Inserts or replaces a series. Replacing keeps the original position.
    pub fn insert(&mut self, label: impl Into<String>, values: impl Into<Series>) -> Option<Series> {
        self.series.insert(label.into(), values.into())
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&Series> {
        self.series.get(label)
    }

    #[must_use]
    pub fn get_index(&self, position: usize) -> Option<(&str, &Series)> {
        self.series
            .get_index(position)
            .map(|(label, series)| (label.as_str(), series))
    }

    #[must_use]
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.series.get_index_of(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.series
            .iter()
            .map(|(label, series)| (label.as_str(), series))
    }

    pub(crate) fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = (&String, &mut Series)> {
        self.series.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// All values of all series, in insertion order.
    #[must_use]
    pub fn flatten(&self) -> Vec<f64> {
        let total = self.series.values().map(Series::len).sum();
        let mut flat = Vec::with_capacity(total);
        for series in self.series.values() {
            flat.extend_from_slice(series.values());
        }
        flat
    }

    /// Length of the longest series; shorter series stop early when plotted.
    #[must_use]
    pub fn longest_series_len(&self) -> usize {
        self.series.values().map(Series::len).max().unwrap_or(0)
    }

    /// Rejects empty data sets, data sets without any sample and non-finite values.
    pub fn validate(&self) -> ChartResult<()> {
        if self.is_empty() {
            return Err(ChartError::EmptyInput("data set has no series"));
        }
        if self.longest_series_len() == 0 {
            return Err(ChartError::EmptyInput("data set has no values"));
        }
        for (label, series) in &self.series {
            if let Some(position) = series.values().iter().position(|v| !v.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "series `{label}` has a non-finite value at index {position}"
                )));
            }
        }
        Ok(())
    }
}

impl<L: Into<String>, S: Into<Series>> FromIterator<(L, S)> for DataSet {
    fn from_iter<I: IntoIterator<Item = (L, S)>>(iter: I) -> Self {
        let mut data_set = Self::new();
        for (label, series) in iter {
            data_set.insert(label, series);
        }
        data_set
    }
}
