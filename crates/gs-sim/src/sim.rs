//! The `Simulation` driver and its drain loop.

use gs_core::EventQueue;
use gs_events::Event;
use gs_store::GroceryStore;

use crate::stats::StatsLedger;
use crate::{NoopObserver, SimObserver, SimResult, SimStats};

/// Owns the event queue and the store, and runs simulations to completion.
///
/// A `Simulation` is idle when constructed; [`run`][Self::run] executes one
/// full drain of the given initial events and leaves the statistics readable
/// via [`stats`][Self::stats].  A second `run` fully resets the statistics
/// but **not** the store: world-state mutations carry over, and resetting
/// them (by building a fresh `Simulation`) is the caller's responsibility.
pub struct Simulation {
    events: EventQueue<Event>,
    store:  GroceryStore,
    stats:  SimStats,
}

impl Simulation {
    /// Create an idle simulation over `store` with zeroed statistics.
    pub fn new(store: GroceryStore) -> Self {
        Self {
            events: EventQueue::new(),
            store,
            stats: SimStats::default(),
        }
    }

    /// Read-only view of the world state.
    pub fn store(&self) -> &GroceryStore {
        &self.store
    }

    /// Statistics from the most recent completed run (zeroes before any run).
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Run the simulation to completion on `initial_events`.
    pub fn run(&mut self, initial_events: Vec<Event>) -> SimResult<()> {
        self.run_with_observer(initial_events, &mut NoopObserver)
    }

    /// Like [`run`][Self::run], with observer callbacks per event and at
    /// the end of the run.
    pub fn run_with_observer<O: SimObserver>(
        &mut self,
        initial_events: Vec<Event>,
        observer: &mut O,
    ) -> SimResult<()> {
        self.stats = SimStats::default();
        // A failed previous run may have left events pending; a run always
        // starts from exactly its own initial batch.
        self.events = EventQueue::new();
        let mut ledger = StatsLedger::default();

        for event in initial_events {
            self.events.add(event);
        }

        while let Some(event) = self.events.remove() {
            // Fold before executing: execution consumes the event.
            ledger.observe(&event);
            observer.on_event(&event);

            for successor in event.execute(&mut self.store)? {
                self.events.add(successor);
            }
        }

        self.stats = ledger.finalize();
        observer.on_run_end(&self.stats);
        Ok(())
    }
}
