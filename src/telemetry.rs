//! Telemetry helpers for applications embedding `chart-layout`.
//!
//! Layout computation emits `tracing` events at its pipeline seams
//! (ingestion, stacking, normalization, layout). Subscriber setup stays
//! explicit and opt-in: hosts either call one of the helpers below or wire
//! their own subscriber and filters.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Initializes a compact `tracing` subscriber with [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_TRACING_FILTER)
}

/// Initializes a compact `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `fallback_filter` is used, e.g.
/// `"chart_layout=debug"` to see normalization and layout summaries.
#[must_use]
pub fn init_tracing_with_fallback(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
