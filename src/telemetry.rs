//! Tracing setup for applications embedding `chart-legend`.
//!
//! The legend emits `debug!` per render pass and `trace!` per row. Hosts either
//! call `init_default_tracing` or install their own subscriber.

/// Default directive when `RUST_LOG` is unset: legend passes at `debug`, everything else at `info`.
pub const DEFAULT_LOG_FILTER: &str = "info,chart_legend=debug";

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG` (default [`DEFAULT_LOG_FILTER`]).
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_LOG_FILTER, init_default_tracing};

    #[test]
    fn default_filter_raises_legend_target_only() {
        assert!(DEFAULT_LOG_FILTER.starts_with("info,"));
        assert!(DEFAULT_LOG_FILTER.contains("chart_legend=debug"));
    }

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn init_is_a_no_op_without_telemetry_feature() {
        assert!(!init_default_tracing());
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_init_reports_existing_subscriber() {
        let _ = init_default_tracing();
        assert!(!init_default_tracing());
    }
}
