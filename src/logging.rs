//! # Structured Logging
//!
//! Console tracing subscriber with environment-driven filtering. Installed
//! behind `try_init` so an embedding service that already set a global
//! subscriber keeps its own.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize structured logging for standalone use of this crate.
///
/// Filter defaults to `info` and honors `RUST_LOG`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_filter(filter),
    );

    if subscriber.try_init().is_err() {
        tracing::debug!("global tracing subscriber already initialized");
    }
}
