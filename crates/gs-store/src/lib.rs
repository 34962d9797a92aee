//! `gs-store` — the world state that events act upon.
//!
//! # Crate layout
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`customer`] | `Customer`, `Item`                               |
//! | [`line`]     | `LineKind`, `CheckoutLine`, `EXPRESS_ITEM_LIMIT` |
//! | [`config`]   | `StoreConfig` (JSON loading)                     |
//! | [`store`]    | `GroceryStore`, `LinePlacement`, `CheckoutTicket`|
//! | [`error`]    | `StoreError`, `StoreResult<T>`                   |
//!
//! The scheduling engine never touches these types directly; it hands a
//! `&mut GroceryStore` to each event's execution and applies whatever
//! successor events come back.

pub mod config;
pub mod customer;
pub mod error;
pub mod line;
pub mod store;

#[cfg(test)]
mod tests;

pub use config::StoreConfig;
pub use customer::{Customer, Item};
pub use error::{StoreError, StoreResult};
pub use line::{CheckoutLine, LineKind, EXPRESS_ITEM_LIMIT};
pub use store::{CheckoutTicket, GroceryStore, LinePlacement};
