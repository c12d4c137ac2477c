//! Tracing setup for embedding applications.

/// Install a formatted tracing subscriber honoring `RUST_LOG`.
///
/// Falls back to `info` when no filter is set in the environment. Safe to
/// call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}
