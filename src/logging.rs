//! Logging setup.
//!
//! The library only emits `tracing` events; hosts that have no subscriber of
//! their own can install the default one here. `RUST_LOG` overrides the
//! default filter.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "draggable=info";

/// Install a fmt subscriber. Returns `false` if a global subscriber was
/// already set, which makes repeated calls (e.g. from tests) harmless.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
