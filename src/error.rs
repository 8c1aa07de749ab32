use std::fmt;

#[derive(Debug)]
pub enum AppError {
    InvalidOverride(String),
    UnknownSection(String),
    UnknownMode(String),
    StrictCheckFailed(usize),
    Serialization(serde_json::Error),
    IoError(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidOverride(raw) => {
                write!(f, "Invalid override '{}': expected KEY=VALUE", raw)
            }
            AppError::UnknownSection(name) => {
                write!(f, "Unknown section '{}': expected all, plugins or server", name)
            }
            AppError::UnknownMode(name) => {
                write!(f, "Unknown mode '{}': expected production, development or test", name)
            }
            AppError::StrictCheckFailed(count) => {
                write!(f, "{} configuration issue(s) found", count)
            }
            AppError::Serialization(e) => write!(f, "Serialization error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::IoError(e)
    }
}
