use gs_core::GsError;
use gs_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("event file line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("store rejected event: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EventResult<T> = Result<T, EventError>;

impl From<EventError> for GsError {
    fn from(e: EventError) -> GsError {
        match e {
            EventError::Parse { line, msg } => {
                GsError::Parse(format!("event file line {line}: {msg}"))
            }
            EventError::Store(e) => e.into(),
            EventError::Io(e) => GsError::Io(e),
        }
    }
}
