//! Logging setup based on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,workbench_layout=debug";

/// Install a formatting subscriber.
///
/// Honours `RUST_LOG` when present, otherwise falls back to [`DEFAULT_FILTER`].
/// Calling this more than once keeps the first subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Install a formatting subscriber with explicit filter directives.
pub fn init_with_filter(directives: &str) {
    install(EnvFilter::new(directives));
}

fn install(filter: EnvFilter) {
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::trace!("global subscriber already installed");
    }
}
