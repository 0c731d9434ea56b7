use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("config error: {0}")]
    Config(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
