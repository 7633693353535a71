// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Sift(#[from] xmlsift_core::SiftError),

    #[error("Failed to load config '{path}': {reason}")]
    Config {
        path: std::path::PathBuf,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;
