//! Observer hooks for progress reporting and data collection.

use gs_events::Event;

use crate::SimStats;

/// Callbacks invoked by [`Simulation::run_with_observer`][crate::Simulation::run_with_observer]
/// at key points in the drain loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — event printer
///
/// ```rust,ignore
/// struct EventPrinter;
///
/// impl SimObserver for EventPrinter {
///     fn on_event(&mut self, event: &Event) {
///         println!("{}: {event:?}", event.timestamp());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once per dequeued event, just before it executes.
    fn on_event(&mut self, _event: &Event) {}

    /// Called once after the queue drains, with the finalized statistics.
    fn on_run_end(&mut self, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.  Used by [`Simulation::run`][crate::Simulation::run]
/// when no callbacks are wanted.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
