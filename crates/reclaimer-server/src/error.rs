//! Error types for the server binary.

/// Top-level error for the server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: reclaimer_core::ConfigError,
    },

    /// The history file could not be opened.
    #[error("history error: {source}")]
    History {
        /// The underlying store error.
        #[from]
        source: reclaimer_store::StoreError,
    },

    /// The HTTP server failed to start or stopped with an error.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: reclaimer_api::ServerError,
    },
}
