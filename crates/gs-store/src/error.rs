use gs_core::{GsError, LineId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("checkout line {0} does not exist")]
    LineNotFound(LineId),

    #[error("checkout line {0} has no customer to check out")]
    EmptyLine(LineId),

    #[error("store configuration error: {0}")]
    Config(String),

    #[error("store config parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for GsError {
    fn from(e: StoreError) -> GsError {
        match e {
            StoreError::LineNotFound(line) => GsError::LineNotFound(line),
            StoreError::EmptyLine(line) => GsError::EmptyLine(line),
            StoreError::Config(msg) => GsError::Config(msg),
            StoreError::Parse(msg) => GsError::Parse(msg),
            StoreError::Io(e) => GsError::Io(e),
        }
    }
}
