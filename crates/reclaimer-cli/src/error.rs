//! Error types for the interactive terminal.

/// Errors raised while talking to the operator.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Reading input or writing output failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
