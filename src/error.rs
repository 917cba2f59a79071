use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for simulation setup, configuration and the driver.
///
/// The per-tick physics never fails; everything here is raised before the first
/// tick or outside the core entirely.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid particle or container parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Configuration parsed but is not usable.
    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
