//! `gs-sim` — the event drain loop.
//!
//! # Drain loop
//!
//! ```text
//! run(initial_events):
//!   reset statistics
//!   enqueue every initial event
//!   while the queue is non-empty:
//!     ① Remove   — pop the earliest event (timestamp order, FIFO ties).
//!     ② Fold     — update the per-customer ledger and "now".
//!     ③ Execute  — apply the event to the store.
//!     ④ Enqueue  — add every successor event it produced.
//!   finalize statistics (num_customers, total_time, max_wait)
//! ```
//!
//! The loop is single-threaded and synchronous: `run` executes to completion
//! in one pass.  It terminates only when the queue drains, so the caller's
//! initial events and store rules must guarantee successors eventually stop
//! (a documented precondition, not something the engine detects).

pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulation;
pub use stats::SimStats;
