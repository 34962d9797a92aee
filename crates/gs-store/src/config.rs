//! JSON store configuration.
//!
//! # Format
//!
//! ```json
//! {
//!     "regular_count": 1,
//!     "express_count": 1,
//!     "self_serve_count": 1,
//!     "line_capacity": 10
//! }
//! ```
//!
//! All counts may be zero, but the store must end up with at least one line
//! and a capacity of at least one.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{StoreError, StoreResult};

/// How many lines of each kind the store opens with, and the shared
/// per-line capacity.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub regular_count:    u32,
    pub express_count:    u32,
    pub self_serve_count: u32,
    pub line_capacity:    u32,
}

impl StoreConfig {
    /// Parse a config from any `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`) as well as files.
    pub fn from_reader<R: Read>(reader: R) -> StoreResult<Self> {
        let config: StoreConfig =
            serde_json::from_reader(reader).map_err(|e| StoreError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a JSON file.
    pub fn from_path(path: &Path) -> StoreResult<Self> {
        let file = std::fs::File::open(path).map_err(StoreError::Io)?;
        Self::from_reader(file)
    }

    /// Total number of lines this config describes.
    ///
    /// Summed in `usize` so adversarially large counts cannot overflow
    /// before validation rejects them.
    pub fn total_lines(&self) -> usize {
        self.regular_count as usize
            + self.express_count as usize
            + self.self_serve_count as usize
    }

    pub(crate) fn validate(&self) -> StoreResult<()> {
        if self.total_lines() == 0 {
            return Err(StoreError::Config(
                "store must have at least one checkout line".into(),
            ));
        }
        if self.line_capacity == 0 {
            return Err(StoreError::Config("line_capacity must be at least 1".into()));
        }
        Ok(())
    }
}
