//! Tracing setup for the binary and ad-hoc debugging.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "animeku=info";

/// Installs a `fmt` subscriber filtered by `RUST_LOG`. Calling it again, or
/// after another subscriber was installed, is a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
