//! Customers and the items they carry.

/// One grocery item: a display name and how long it takes to handle at a
/// register, in simulated seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub time: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, time: u32) -> Self {
        Self {
            name: name.into(),
            time,
        }
    }
}

/// A customer shopping at the store.
///
/// Identity is the `name`: statistics and re-arrival bookkeeping key on it,
/// so one simulation run must not contain two distinct customers sharing a
/// name.  Re-arrivals of the *same* customer (after a line closure) are
/// expected and handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name:  String,
    pub items: Vec<Item>,
}

impl Customer {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// How many items the customer is carrying.
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Total handling time across all items, in simulated seconds.
    pub fn item_time(&self) -> u64 {
        self.items.iter().map(|item| item.time as u64).sum()
    }
}
