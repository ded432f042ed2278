//! Opt-in log output for hosts that do not install their own subscriber.
//!
//! Events emitted by the crate, grouped by level:
//! - `debug`: point-set installs, plot resizes, viewport resets with the new
//!   zoom ceiling, gesture state changes, point cache hits and file loads.
//! - `trace`: every pointer event, pinch step, zoom and pan with the
//!   resulting scale and translation, and rejected zoom factors.
//! - `warn`: failed point loads, stale loads dropped by ticket, and loader
//!   threads whose receiver went away.
//!
//! Hosts with their own `tracing` setup can ignore this module and filter on
//! the `gridplot` target.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "gridplot=info";

/// Installs a compact global subscriber filtered by `RUST_LOG`, falling back
/// to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter,
/// e.g. `"gridplot::interaction=trace"` to follow gestures.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
