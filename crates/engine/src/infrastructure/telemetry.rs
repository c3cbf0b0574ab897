//! Tracing bootstrap for embedding hosts.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG`; defaults to debug-level output for this crate.
/// Call once at process startup, before any use case runs.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arise_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
