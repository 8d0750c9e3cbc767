//! Tracing setup
//!
//! The host loads the plugin into an already running process, so the
//! global subscriber may be taken. Initialisation is therefore best-effort.

use blogpub_core::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber
///
/// `RUST_LOG` overrides `logging.level` when set.
///
/// # Returns
/// `false` if a subscriber was already installed
pub fn init_tracing(logging: &LoggingConfig) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.is_ok()
}
