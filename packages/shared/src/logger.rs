//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive for a binary.
///
/// Hyphens in crate names become underscores in module paths, so
/// `parlor-server` is filtered as `parlor_server`.
fn default_directive(crate_name: &str, level: &str) -> String {
    let target = crate_name.replace('-', "_");
    format!("{target}={level},parlor_shared={level},tower_http={level}")
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level` when it is set.
/// Calling this more than once is harmless; later calls are ignored.
pub fn setup_logger(crate_name: &str, level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(crate_name, level)));

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok()
    {
        tracing::debug!("Logger initialized for {}", crate_name);
    }
}
