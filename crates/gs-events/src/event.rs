//! The closed set of simulation events.
//!
//! A closed enum (rather than an open trait-object hierarchy) keeps the
//! event set auditable: ordering and execution are exhaustive matches, and
//! adding a variant is a compile-checked change everywhere it matters.

use std::cmp::Ordering;

use gs_core::{LineId, Timestamp};
use gs_store::{Customer, GroceryStore};

use crate::EventResult;

/// Something that happens at a specific simulated timestamp.
///
/// Events are immutable once enqueued.  The timestamp is fixed at creation;
/// execution consumes the event, so each instance runs at most once.
#[derive(Debug, Clone)]
pub enum Event {
    /// A customer walks in and tries to join a checkout line.
    CustomerArrival {
        timestamp: Timestamp,
        customer:  Customer,
    },

    /// The front customer of `line` begins checking out.
    CheckoutStarted {
        timestamp: Timestamp,
        line:      LineId,
    },

    /// The customer being served at `line` finishes and leaves the store.
    CheckoutCompleted {
        timestamp:     Timestamp,
        line:          LineId,
        customer_name: String,
    },

    /// `line` closes; everyone queued behind the front customer must find a
    /// new line.
    CloseLine {
        timestamp: Timestamp,
        line:      LineId,
    },
}

impl Event {
    /// When this event happens.
    pub fn timestamp(&self) -> Timestamp {
        match *self {
            Event::CustomerArrival { timestamp, .. }
            | Event::CheckoutStarted { timestamp, .. }
            | Event::CheckoutCompleted { timestamp, .. }
            | Event::CloseLine { timestamp, .. } => timestamp,
        }
    }

    /// Apply this event to the store and return the events it causes, in
    /// the order they should be enqueued.
    ///
    /// All effects are visible only through `store` and the returned
    /// successors.  Consuming `self` makes at-most-once execution a
    /// type-system fact rather than a runtime promise.
    pub fn execute(self, store: &mut GroceryStore) -> EventResult<Vec<Event>> {
        match self {
            Event::CustomerArrival {
                timestamp,
                customer,
            } => match store.enter_line(customer) {
                Ok(placement) if placement.first_in_line => Ok(vec![Event::CheckoutStarted {
                    timestamp,
                    line: placement.line,
                }]),
                Ok(_) => Ok(Vec::new()),
                // Every line is full, closed, or refuses this customer: try
                // again one time unit later.  Termination is the input's
                // responsibility (a store with no open regular line and a
                // big-basket customer will retry forever).
                Err(customer) => Ok(vec![Event::CustomerArrival {
                    timestamp: timestamp.offset(1),
                    customer,
                }]),
            },

            Event::CheckoutStarted { timestamp, line } => {
                let ticket = store.begin_checkout(line)?;
                Ok(vec![Event::CheckoutCompleted {
                    timestamp:     timestamp.offset(ticket.duration),
                    line,
                    customer_name: ticket.customer_name,
                }])
            }

            Event::CheckoutCompleted {
                timestamp, line, ..
            } => {
                let remaining = store.finish_checkout(line)?;
                if remaining > 0 {
                    Ok(vec![Event::CheckoutStarted { timestamp, line }])
                } else {
                    Ok(Vec::new())
                }
            }

            Event::CloseLine { timestamp, line } => {
                let displaced = store.close_line(line)?;
                // Re-arrivals at the same timestamp; the queue's FIFO
                // tie-break preserves their relative order, so customers
                // nearer the front of the closed line pick a new line first.
                Ok(displaced
                    .into_iter()
                    .map(|customer| Event::CustomerArrival {
                        timestamp,
                        customer,
                    })
                    .collect())
            }
        }
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────
//
// Every variant orders by timestamp alone.  Payloads never participate:
// two events at the same timestamp compare equal, and the event queue
// resolves the tie by insertion order.  Making payloads part of the order
// would silently override that FIFO contract.

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp() == other.timestamp()
    }
}

impl Eq for Event {}

impl PartialOrd for Event {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Event {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp().cmp(&other.timestamp())
    }
}
