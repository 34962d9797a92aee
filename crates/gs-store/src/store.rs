//! The `GroceryStore` — line layout and the mutations events perform.

use std::io::Read;
use std::path::Path;

use gs_core::LineId;

use crate::{CheckoutLine, Customer, LineKind, StoreConfig, StoreError, StoreResult};

// ── Operation results ─────────────────────────────────────────────────────────

/// Where [`GroceryStore::enter_line`] placed a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePlacement {
    pub line: LineId,
    /// `true` if the customer is at the front (nobody ahead of them), which
    /// means a checkout can start immediately.
    pub first_in_line: bool,
}

/// What [`GroceryStore::begin_checkout`] reports about the customer now
/// being served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutTicket {
    pub customer_name: String,
    /// How long the checkout will take, per the line kind's service rule.
    pub duration: u64,
}

// ── GroceryStore ──────────────────────────────────────────────────────────────

/// The mutable world state: a fixed set of checkout lines.
///
/// Lines are ordered regular, then express, then self-serve; [`LineId`]
/// indexes this ordering.  The scheduling engine never inspects the store —
/// only event execution does.
pub struct GroceryStore {
    lines: Vec<CheckoutLine>,
}

impl GroceryStore {
    /// Build a store from a validated configuration.
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        config.validate()?;
        let capacity = config.line_capacity as usize;
        let mut lines = Vec::with_capacity(config.total_lines());
        for _ in 0..config.regular_count {
            lines.push(CheckoutLine::new(LineKind::Regular, capacity));
        }
        for _ in 0..config.express_count {
            lines.push(CheckoutLine::new(LineKind::Express, capacity));
        }
        for _ in 0..config.self_serve_count {
            lines.push(CheckoutLine::new(LineKind::SelfServe, capacity));
        }
        Ok(Self { lines })
    }

    /// Build a store from a JSON config on any `Read` source.
    pub fn from_reader<R: Read>(reader: R) -> StoreResult<Self> {
        Self::new(&StoreConfig::from_reader(reader)?)
    }

    /// Build a store from a JSON config file.
    pub fn from_path(path: &Path) -> StoreResult<Self> {
        Self::new(&StoreConfig::from_path(path)?)
    }

    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// Borrow a line for inspection.
    pub fn line(&self, line: LineId) -> StoreResult<&CheckoutLine> {
        self.lines
            .get(line.index())
            .ok_or(StoreError::LineNotFound(line))
    }

    fn line_mut(&mut self, line: LineId) -> StoreResult<&mut CheckoutLine> {
        self.lines
            .get_mut(line.index())
            .ok_or(StoreError::LineNotFound(line))
    }

    /// Iterate over all lines, in `LineId` order.
    pub fn lines(&self) -> impl Iterator<Item = (LineId, &CheckoutLine)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (LineId(i as u32), line))
    }

    // ── Mutations driven by events ────────────────────────────────────────

    /// Place `customer` in the shortest line that accepts them (open, has
    /// space, kind admits them); ties go to the lowest `LineId`.
    ///
    /// When no line accepts, the customer is handed back to the caller so
    /// the arrival can be retried later.
    pub fn enter_line(&mut self, customer: Customer) -> Result<LinePlacement, Customer> {
        let mut best: Option<(usize, usize)> = None; // (queue length, line index)
        for (i, line) in self.lines.iter().enumerate() {
            if !line.can_accept(&customer) {
                continue;
            }
            match best {
                Some((len, _)) if line.len() >= len => {}
                _ => best = Some((line.len(), i)),
            }
        }
        match best {
            None => Err(customer),
            Some((_, i)) => {
                let first_in_line = self.lines[i].join(customer);
                Ok(LinePlacement {
                    line: LineId(i as u32),
                    first_in_line,
                })
            }
        }
    }

    /// Start serving the front customer of `line`.
    ///
    /// The customer stays in the line until [`finish_checkout`][Self::finish_checkout];
    /// this only reads who they are and how long they will take.
    pub fn begin_checkout(&self, line: LineId) -> StoreResult<CheckoutTicket> {
        let l = self.line(line)?;
        let front = l.front().ok_or(StoreError::EmptyLine(line))?;
        Ok(CheckoutTicket {
            customer_name: front.name.clone(),
            duration:      l.kind.checkout_duration(front),
        })
    }

    /// Remove the front customer of `line` (their checkout is done) and
    /// return how many customers remain.
    pub fn finish_checkout(&mut self, line: LineId) -> StoreResult<usize> {
        let l = self.line_mut(line)?;
        l.pop_front().ok_or(StoreError::EmptyLine(line))?;
        Ok(l.len())
    }

    /// Close `line` and return the displaced customers (everyone except the
    /// front customer, who finishes their checkout), in original queue order.
    pub fn close_line(&mut self, line: LineId) -> StoreResult<Vec<Customer>> {
        Ok(self.line_mut(line)?.close())
    }
}
