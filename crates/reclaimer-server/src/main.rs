//! Dashboard API server for the Bio-Nano Reclaimer.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `reclaimer-config.yaml` (defaults if absent)
//! 2. Initialize structured logging (tracing)
//! 3. Open the calculation history file
//! 4. Serve the API until `Ctrl-C`

mod error;

use std::path::Path;
use std::sync::Arc;

use reclaimer_api::AppState;
use reclaimer_core::ReclaimerConfig;
use reclaimer_core::config::CONFIG_FILE_NAME;
use reclaimer_store::HistoryStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ServiceError;

/// Application entry point for the dashboard server.
///
/// # Errors
///
/// Returns an error if configuration, the history file or the listener
/// cannot be set up, or if serving fails.
#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    // Config comes first so its log level can seed the filter.
    let config = ReclaimerConfig::load_or_default(Path::new(CONFIG_FILE_NAME))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        host = %config.server.host,
        port = config.server.port,
        history = %config.history.path.display(),
        "reclaimer-server starting"
    );

    let history = HistoryStore::open(&config.history.path).await?;
    info!(path = %history.path().display(), "History file ready");

    let state = Arc::new(AppState::with_builtin_catalog(
        config.conversion,
        Arc::new(history),
    ));

    reclaimer_api::start_server(&config.server, state).await?;

    info!("reclaimer-server exiting");
    Ok(())
}
