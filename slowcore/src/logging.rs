//! Logging for slowOS apps.
//!
//! Apps log through `tracing`; this installs a compact fmt subscriber once
//! per process. `RUST_LOG` wins over the filter passed in from config:
//!
//! ```bash
//! RUST_LOG=slowcalc=trace slowcalc
//! ```

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Default filter when neither config nor `RUST_LOG` say otherwise.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize logging. Only the first call takes effect.
pub fn init(filter: &str) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            build_filter(filter)
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .compact()
            .with_filter(filter);

        // try_init: a test harness may already own the global subscriber
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}

/// Parse a filter directive, falling back to [`DEFAULT_FILTER`] on garbage.
fn build_filter(directive: &str) -> EnvFilter {
    let directive = directive.trim();
    if directive.is_empty() {
        return EnvFilter::new(DEFAULT_FILTER);
    }
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
