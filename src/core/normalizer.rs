use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::labels::{round_half_up, round_to_digits};
use crate::core::statistics::SummaryStatistics;
use crate::error::{ChartError, ChartResult};

/// How the origin-rounding granularity evolves between retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OffsetProgression {
    /// Every retry rounds at the initial granularity.
    Fixed,
    /// Every retry rounds one power of ten coarser than the previous one.
    #[default]
    Widening,
}

/// Empirical constants used while deriving a value axis.
///
/// Defaults round the origin to tens and widen by a power of ten per retry,
/// give up after 20 retries, and triple the label step once more than 15
/// labels would be needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerTuning {
    pub max_rounding_iterations: usize,
    pub dense_label_threshold: f64,
    pub dense_step_multiplier: f64,
    /// Standard deviation at or below which the origin is left unrounded.
    pub spread_threshold: f64,
    /// Step used when the value span is zero.
    pub flat_axis_step: f64,
    /// Origin granularity as a power of ten (`1` rounds to tens).
    pub origin_granularity_exponent: i32,
    pub offset_progression: OffsetProgression,
}

impl Default for NormalizerTuning {
    fn default() -> Self {
        Self {
            max_rounding_iterations: 20,
            dense_label_threshold: 15.0,
            dense_step_multiplier: 3.0,
            spread_threshold: 0.1,
            flat_axis_step: f64::EPSILON,
            origin_granularity_exponent: 1,
            offset_progression: OffsetProgression::Widening,
        }
    }
}

impl NormalizerTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if self.max_rounding_iterations == 0 {
            return Err(ChartError::InvalidData(
                "normalizer rounding iterations must be > 0".to_owned(),
            ));
        }
        if !self.dense_label_threshold.is_finite() || self.dense_label_threshold <= 0.0 {
            return Err(ChartError::InvalidData(
                "normalizer dense label threshold must be finite and > 0".to_owned(),
            ));
        }
        if !self.dense_step_multiplier.is_finite() || self.dense_step_multiplier < 1.0 {
            return Err(ChartError::InvalidData(
                "normalizer dense step multiplier must be finite and >= 1".to_owned(),
            ));
        }
        if !self.spread_threshold.is_finite() || self.spread_threshold < 0.0 {
            return Err(ChartError::InvalidData(
                "normalizer spread threshold must be finite and >= 0".to_owned(),
            ));
        }
        if !self.flat_axis_step.is_finite() || self.flat_axis_step <= 0.0 {
            return Err(ChartError::InvalidData(
                "normalizer flat axis step must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizerOptions {
    /// Preferred axis origin. Ignored when the data has negative values.
    #[serde(default)]
    pub forced_start: Option<f64>,
}

impl NormalizerOptions {
    #[must_use]
    pub fn with_forced_start(start: f64) -> Self {
        Self {
            forced_start: Some(start),
        }
    }
}

/// Value-axis scale derived from a flat value set.
///
/// `range = max - start_value >= 0`, and `step > 0` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizationResult {
    pub min: f64,
    pub max: f64,
    pub stddev: f64,
    pub step: f64,
    pub start_value: f64,
    pub range: f64,
    /// Set when the span was zero and `step` is the flat-axis fallback.
    #[serde(default)]
    pub flat_axis: bool,
}

/// Label step for a value span: one power of ten below the span's magnitude.
///
/// Fails with [`ChartError::DegenerateRange`] when `value <= 0`, where the
/// logarithm is undefined.
pub fn label_step(value: f64) -> ChartResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::DegenerateRange { span: value });
    }
    let exponent = round_half_up(value.log10()) - 1.0;
    let step = 10f64.powi(exponent as i32);
    // Subnormal spans underflow to a zero step.
    if step <= 0.0 {
        return Err(ChartError::DegenerateRange { span: value });
    }
    Ok(step)
}

/// Derives axis origin, span and label step from raw values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Normalizer {
    tuning: NormalizerTuning,
}

impl Normalizer {
    pub fn new(tuning: NormalizerTuning) -> ChartResult<Self> {
        Ok(Self {
            tuning: tuning.validate()?,
        })
    }

    #[must_use]
    pub fn tuning(&self) -> NormalizerTuning {
        self.tuning
    }

    pub fn normalize(
        &self,
        values: &[f64],
        options: NormalizerOptions,
    ) -> ChartResult<NormalizationResult> {
        if let Some(start) = options.forced_start {
            if !start.is_finite() {
                return Err(ChartError::InvalidData(
                    "forced start value must be finite".to_owned(),
                ));
            }
        }

        let stats = SummaryStatistics::compute(values)?;
        let seed_step = label_step(stats.span()).unwrap_or(self.tuning.flat_axis_step);
        let start_value = self.calculate_start(stats, seed_step, options.forced_start)?;

        let range = stats.max - start_value;
        let (step, flat_axis) = match label_step(range) {
            Ok(step) if range / step > self.tuning.dense_label_threshold => {
                (step * self.tuning.dense_step_multiplier, false)
            }
            Ok(step) => (step, false),
            Err(ChartError::DegenerateRange { span }) => {
                debug!(
                    span,
                    fallback_step = self.tuning.flat_axis_step,
                    "flat value axis, using fallback label step"
                );
                (self.tuning.flat_axis_step, true)
            }
            Err(err) => return Err(err),
        };

        let result = NormalizationResult {
            min: stats.min,
            max: stats.max,
            stddev: stats.standard_deviation,
            step,
            start_value,
            range: range.max(0.0),
            flat_axis,
        };
        debug!(
            count = stats.count,
            min = result.min,
            max = result.max,
            start_value = result.start_value,
            step = result.step,
            "normalized value axis"
        );
        Ok(result)
    }

    fn calculate_start(
        &self,
        stats: SummaryStatistics,
        seed_step: f64,
        forced_start: Option<f64>,
    ) -> ChartResult<f64> {
        let candidate = match forced_start {
            Some(start) if stats.min >= 0.0 => start,
            _ => stats.min,
        };
        let mut start = self.round_origin(candidate, stats, seed_step)?;

        // An origin above the smallest positive sample would hide data.
        if stats.min > 0.0 && start > stats.min {
            start = 0.0;
        }
        // Non-negative data never gets a negative origin unless one was asked for.
        let negative_requested = forced_start.is_some_and(|start| start < 0.0);
        if stats.min >= 0.0 && start < 0.0 && !negative_requested {
            start = 0.0;
        }
        if start > stats.max {
            start = stats.min;
        }
        Ok(start)
    }

    /// Rounds `value` down to a "nice" origin at or below the data minimum.
    ///
    /// Each retry first tries half-up rounding at the current granularity,
    /// then the floor at that granularity. Half-up rounding alone never
    /// reaches a small negative minimum, since it rounds toward zero at
    /// every coarser granularity.
    fn round_origin(&self, value: f64, stats: SummaryStatistics, step: f64) -> ChartResult<f64> {
        if stats.standard_deviation <= self.tuning.spread_threshold {
            return Ok(value);
        }

        let mut candidate = value;
        let mut exponent = self.tuning.origin_granularity_exponent;
        for iteration in 0..self.tuning.max_rounding_iterations {
            let rounded = round_to_digits(candidate, -exponent);
            if rounded <= stats.min {
                trace!(iteration, rounded, "origin rounding converged");
                return Ok(rounded);
            }
            let granularity = 10f64.powi(exponent);
            if granularity.is_finite() && granularity > 0.0 {
                let floored = (candidate / granularity).floor() * granularity;
                if floored <= stats.min {
                    trace!(iteration, floored, "origin floored to granularity");
                    return Ok(floored);
                }
            }
            candidate -= step;
            if self.tuning.offset_progression == OffsetProgression::Widening {
                exponent = exponent.saturating_add(1);
            }
        }

        Err(ChartError::NonConvergentRounding {
            iterations: self.tuning.max_rounding_iterations,
        })
    }
}

/// Normalizes with default tuning.
pub fn normalize(values: &[f64], options: NormalizerOptions) -> ChartResult<NormalizationResult> {
    Normalizer::default().normalize(values, options)
}
