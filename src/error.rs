//! Startup Errors
//!
//! List commands never fail; only loading config and installing the logger can.

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
