//! `gs-core` — foundational types for the grocery-sim workspace.
//!
//! This crate is a dependency of every other `gs-*` crate.  It intentionally
//! has no `gs-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `LineId`                                          |
//! | [`time`]  | `Timestamp`                                       |
//! | [`queue`] | `EventQueue<E>` (FIFO-tie-break priority queue)   |
//! | [`error`] | `GsError`, `GsResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.    |

pub mod error;
pub mod ids;
pub mod queue;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GsError, GsResult};
pub use ids::LineId;
pub use queue::EventQueue;
pub use time::Timestamp;
