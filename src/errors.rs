use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read env file: {0}")]
    EnvFile(String),
    #[error("{0}")]
    Io(String),
    #[error("Invalid log filter: {0}")]
    Logging(String),
}
