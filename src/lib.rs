//! chart-layout: value-axis normalization and layout for small charts.
//!
//! `core` holds the pure math (statistics, axis normalization, stacking,
//! per-kind policies, layout and projection). `api` wraps it in a
//! configuration-driven pipeline that turns a data set and a canvas size
//! into renderer-ready geometry. Nothing here draws.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{Chart, ChartConfig, ChartFrame};
pub use error::{ChartError, ChartResult};
