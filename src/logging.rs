//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::storage::LoggingSettings;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Returns `false`
/// if a subscriber was already installed.
pub fn init_tracing(settings: &LoggingSettings) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Starting FlexiDesk v{}", env!("CARGO_PKG_VERSION"));
    }
    installed
}
