use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Unknown thread priority: {0}")]
    UnknownPriority(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, SettingsError>;
