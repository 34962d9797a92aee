//! Workspace-base error type.
//!
//! Sub-crates define their own error enums and convert them into `GsError`
//! via `From` impls, or keep them separate and handle them locally.  Both
//! patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::LineId;

/// The top-level error type for the `gs-*` crates.
#[derive(Debug, Error)]
pub enum GsError {
    #[error("checkout line {0} not found")]
    LineNotFound(LineId),

    #[error("checkout line {0} has no customer to check out")]
    EmptyLine(LineId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for the `gs-*` crates.
pub type GsResult<T> = Result<T, GsError>;
