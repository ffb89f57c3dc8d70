use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::DataSet;
use crate::error::{ChartError, ChartResult};

/// Cumulative view of a [`DataSet`] together with the values it came from.
///
/// Series `i` of the stacked view holds the sum of series `i..n` of the
/// original at every index, so the first-inserted series ends up outermost.
/// Applying [`stack`] to `stacked()` again is not idempotent: every series
/// above the last one gets its lower neighbours added a second time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedDataSet {
    stacked: DataSet,
    original: DataSet,
}

impl StackedDataSet {
    #[must_use]
    pub fn stacked(&self) -> &DataSet {
        &self.stacked
    }

    #[must_use]
    pub fn original(&self) -> &DataSet {
        &self.original
    }

    /// Pre-stack sample at `index` of series `label`, e.g. for hover text.
    #[must_use]
    pub fn original_value(&self, label: &str, index: usize) -> Option<f64> {
        self.original.get(label)?.get(index)
    }

    /// Cumulative sample at `index` of series `label`.
    #[must_use]
    pub fn stacked_value(&self, label: &str, index: usize) -> Option<f64> {
        self.stacked.get(label)?.get(index)
    }

    #[must_use]
    pub fn into_parts(self) -> (DataSet, DataSet) {
        (self.stacked, self.original)
    }
}

/// Builds the cumulative series of `data_set`, preserving its order.
///
/// All series must have the same length: index `j` has to mean the same
/// category in every series. With non-negative inputs the stacked values at
/// any index are non-decreasing from the last series to the first; negative
/// inputs void that guarantee.
pub fn stack(data_set: &DataSet) -> ChartResult<StackedDataSet> {
    let Some((first_label, first)) = data_set.get_index(0) else {
        return Err(ChartError::EmptyInput("cannot stack an empty data set"));
    };
    let expected = first.len();
    for (label, series) in data_set.iter() {
        if series.len() != expected {
            debug!(
                reference = first_label,
                label,
                expected,
                actual = series.len(),
                "stack length mismatch"
            );
            return Err(ChartError::SeriesLengthMismatch {
                label: label.to_owned(),
                expected,
                actual: series.len(),
            });
        }
    }

    let mut stacked = data_set.clone();
    let mut running = vec![0.0; expected];
    for (_, series) in stacked.iter_mut().rev() {
        for (value, total) in series.values_mut().iter_mut().zip(running.iter_mut()) {
            *total += *value;
            *value = *total;
        }
    }

    debug!(
        series_count = data_set.len(),
        series_len = expected,
        "stacked data set"
    );
    Ok(StackedDataSet {
        stacked,
        original: data_set.clone(),
    })
}
