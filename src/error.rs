use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Count: {0}")]
    InvalidCount(String),

    #[error("Invalid Square Size: {0} (must be finite and > 0)")]
    InvalidSize(f64),

    #[error("Invalid Epsilon: {0} (must be finite and >= 0)")]
    InvalidEpsilon(f64),

    #[error("Invalid Placement: {0}")]
    InvalidPlacement(String),

    #[error("History is empty: seed the session before reading it")]
    EmptyHistory,

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type PackResult<T> = Result<T, PackError>;
