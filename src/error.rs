use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CityError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Source data file not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("Published dataset not found: {} (run `cityrank refresh` first)", .0.display())]
    DatasetNotFound(PathBuf),
    #[error("Invalid city #{position} ({name}): {reason}")]
    InvalidFact {
        position: usize,
        name: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CityError>;
