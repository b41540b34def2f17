//! Tracing initialization

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides the default `oneflow=info` filter. Safe to call
/// more than once; only the first call installs the subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("oneflow=info"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}
