//! One-shot `tracing` subscriber installer for hosts embedding the core.
//!
//! The core never installs a subscriber on its own — library code shouldn't
//! configure global state — but offers this helper so a CLI or test harness
//! wrapping it doesn't have to rediscover the env-filter incantation.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a `tracing_subscriber::fmt` subscriber reading its filter from
/// `RUST_LOG`, defaulting to `info` when unset. Safe to call more than
/// once; only the first call takes effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
