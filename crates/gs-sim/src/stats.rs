//! Run statistics and the per-customer ledger behind them.

use std::collections::HashMap;

use gs_core::Timestamp;
use gs_events::Event;

// ── SimStats ──────────────────────────────────────────────────────────────────

/// Summary statistics for one simulation run.
///
/// All fields reset to zero at the start of every run and are final once
/// the run returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Distinct customers observed via arrival events (re-arrivals of the
    /// same name count once).
    pub num_customers: usize,
    /// Timestamp of the last event executed — the simulation's "now" at
    /// termination.
    pub total_time: Timestamp,
    /// Longest arrival-to-checkout-completion span over customers who did
    /// both; 0 if nobody completed.
    pub max_wait: u64,
}

// ── Ledger ────────────────────────────────────────────────────────────────────

/// Arrival and (optional) completion timestamps for one customer.
#[derive(Debug, Clone)]
struct CustomerRecord {
    arrival:    Timestamp,
    completion: Option<Timestamp>,
}

/// Per-run bookkeeping that folds executed events into a [`SimStats`].
///
/// Keyed by customer name — an explicit identity key, never a mutable
/// domain object.  Rebuilt from scratch at the start of every run.
#[derive(Default)]
pub(crate) struct StatsLedger {
    records:        HashMap<String, CustomerRecord>,
    last_timestamp: Timestamp,
}

impl StatsLedger {
    /// Fold one dequeued event into the ledger.  Called exactly once per
    /// event, before execution consumes it.
    pub fn observe(&mut self, event: &Event) {
        self.last_timestamp = event.timestamp();
        match event {
            Event::CustomerArrival {
                timestamp,
                customer,
            } => {
                // First arrival wins: line closures re-issue arrivals for
                // displaced customers, and those must not reset the clock.
                self.records
                    .entry(customer.name.clone())
                    .or_insert(CustomerRecord {
                        arrival:    *timestamp,
                        completion: None,
                    });
            }
            Event::CheckoutCompleted {
                timestamp,
                customer_name,
                ..
            } => {
                // A completion with no recorded arrival means malformed
                // input; skip it rather than poison the run.
                if let Some(record) = self.records.get_mut(customer_name) {
                    record.completion = Some(*timestamp);
                }
            }
            Event::CheckoutStarted { .. } | Event::CloseLine { .. } => {}
        }
    }

    /// Compute the final statistics after the queue drains.
    pub fn finalize(&self) -> SimStats {
        let max_wait = self
            .records
            .values()
            .filter_map(|r| r.completion.map(|done| done.since(r.arrival)))
            .max()
            .unwrap_or(0);
        SimStats {
            num_customers: self.records.len(),
            total_time: self.last_timestamp,
            max_wait,
        }
    }
}
