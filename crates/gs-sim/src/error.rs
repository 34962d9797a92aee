use gs_core::GsError;
use gs_events::EventError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("event execution failed: {0}")]
    Event(#[from] EventError),
}

pub type SimResult<T> = Result<T, SimError>;

impl From<SimError> for GsError {
    fn from(e: SimError) -> GsError {
        match e {
            SimError::Event(e) => e.into(),
        }
    }
}
