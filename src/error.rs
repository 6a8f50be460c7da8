use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadAlignError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type RaResult<T> = Result<T, ReadAlignError>;
