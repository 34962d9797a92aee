//! `gs-events` — the discrete events that drive the simulation.
//!
//! # Crate layout
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`event`]  | `Event` (ordering + execution contract)    |
//! | [`loader`] | `load_events_str` / `_reader` / `_path`    |
//! | [`error`]  | `EventError`, `EventResult<T>`             |
//!
//! # Event contract (summary)
//!
//! Every event carries an immutable timestamp.  Ordering is by timestamp
//! alone for every variant; payloads never participate, so the event queue's
//! insertion-order tie-break is the one and only tie rule.  Executing an
//! event consumes it, mutates the store, and returns the events it causes:
//!
//! ```text
//! CustomerArrival ──► CheckoutStarted ──► CheckoutCompleted ──► CheckoutStarted …
//!        ▲
//!        └── CloseLine re-issues arrivals for displaced customers
//! ```

pub mod error;
pub mod event;
pub mod loader;


pub use error::{EventError, EventResult};
pub use event::Event;
pub use loader::{load_events_path, load_events_reader, load_events_str};
