//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filter defaults to `info` and is overridable via `RUST_LOG`. The core
/// crates only ever emit events (`warn!` on skipped malformed codes,
/// `debug!` on document rendering); they never install a subscriber
/// themselves, so library consumers keep full control.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
