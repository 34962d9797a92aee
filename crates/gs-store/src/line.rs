//! Checkout lines and their per-kind service rules.

use std::collections::VecDeque;

use crate::Customer;

/// Customers with this many items or more are refused by express lines.
pub const EXPRESS_ITEM_LIMIT: usize = 8;

// ── LineKind ──────────────────────────────────────────────────────────────────

/// The three kinds of checkout line a store can be configured with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Staffed register; accepts any customer.
    Regular,
    /// Staffed register restricted to customers with fewer than
    /// [`EXPRESS_ITEM_LIMIT`] items.
    Express,
    /// Unstaffed register; accepts any customer, but scanning your own items
    /// takes twice as long.
    SelfServe,
}

impl LineKind {
    /// Whether a line of this kind admits `customer` (capacity aside).
    pub fn admits(self, customer: &Customer) -> bool {
        match self {
            LineKind::Regular | LineKind::SelfServe => true,
            LineKind::Express => customer.num_items() < EXPRESS_ITEM_LIMIT,
        }
    }

    /// Checkout duration for `customer` at a line of this kind.
    pub fn checkout_duration(self, customer: &Customer) -> u64 {
        match self {
            LineKind::Regular | LineKind::Express => customer.item_time(),
            LineKind::SelfServe => 2 * customer.item_time(),
        }
    }
}

// ── CheckoutLine ──────────────────────────────────────────────────────────────

/// A single checkout line: a FIFO queue of customers with a capacity bound.
///
/// The customer at the front is the one currently being served.  A closed
/// line accepts no new customers but lets the front customer finish.
#[derive(Debug, Clone)]
pub struct CheckoutLine {
    pub kind: LineKind,
    capacity: usize,
    open:     bool,
    queue:    VecDeque<Customer>,
}

impl CheckoutLine {
    pub fn new(kind: LineKind, capacity: usize) -> Self {
        Self {
            kind,
            capacity,
            open: true,
            queue: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether `customer` may join this line right now.
    pub fn can_accept(&self, customer: &Customer) -> bool {
        self.open && self.queue.len() < self.capacity && self.kind.admits(customer)
    }

    /// The customer currently at the front, if any.
    pub fn front(&self) -> Option<&Customer> {
        self.queue.front()
    }

    /// Append `customer` at the back.  Returns `true` if they are now first
    /// in line (i.e. the line was empty).
    ///
    /// Callers must check [`can_accept`][Self::can_accept] first.
    pub(crate) fn join(&mut self, customer: Customer) -> bool {
        self.queue.push_back(customer);
        self.queue.len() == 1
    }

    /// Remove and return the front customer.
    pub(crate) fn pop_front(&mut self) -> Option<Customer> {
        self.queue.pop_front()
    }

    /// Close the line and drain everyone except the front customer, who is
    /// mid-checkout and allowed to finish.
    ///
    /// Displaced customers are returned in their original queue order.
    /// Closing an already-closed (or empty) line returns an empty vec.
    pub(crate) fn close(&mut self) -> Vec<Customer> {
        self.open = false;
        if self.queue.len() <= 1 {
            return Vec::new();
        }
        self.queue.split_off(1).into()
    }
}
