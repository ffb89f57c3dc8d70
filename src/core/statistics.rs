//! Descriptive statistics over explicit numeric slices.
//!
//! Variance and standard deviation use the sample (`n - 1`) divisor; origin
//! rounding in the normalizer is keyed off that value.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub fn mean(values: &[f64]) -> ChartResult<f64> {
    if values.is_empty() {
        return Err(ChartError::EmptyInput("mean requires at least one value"));
    }
    Ok(sum(values) / values.len() as f64)
}

/// Sample variance.
pub fn variance(values: &[f64]) -> ChartResult<f64> {
    if values.len() < 2 {
        return Err(ChartError::EmptyInput(
            "variance requires at least two values",
        ));
    }

    let mean = mean(values)?;
    let squared: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    Ok(squared / (values.len() - 1) as f64)
}

pub fn standard_deviation(values: &[f64]) -> ChartResult<f64> {
    variance(values).map(f64::sqrt)
}

pub fn min(values: &[f64]) -> ChartResult<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(ChartError::EmptyInput("min requires at least one value"))
}

pub fn max(values: &[f64]) -> ChartResult<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(ChartError::EmptyInput("max requires at least one value"))
}

/// One-pass summary consumed by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation; `0.0` for a single value, which has no spread.
    pub standard_deviation: f64,
}

impl SummaryStatistics {
    pub fn compute(values: &[f64]) -> ChartResult<Self> {
        if values.is_empty() {
            return Err(ChartError::EmptyInput(
                "statistics require at least one value",
            ));
        }
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "statistics input must be finite".to_owned(),
            ));
        }

        let standard_deviation = if values.len() < 2 {
            0.0
        } else {
            standard_deviation(values)?
        };

        Ok(Self {
            count: values.len(),
            min: min(values)?,
            max: max(values)?,
            mean: mean(values)?,
            standard_deviation,
        })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}
