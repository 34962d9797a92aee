//! corner-store — smallest runnable example for the grocery-sim workspace.
//!
//! Simulates a corner store with two regular registers, one express lane,
//! and one self-serve kiosk.  The store config and event list are embedded
//! below; swap them for `GroceryStore::from_path` / `load_events_path` to
//! drive the simulation from real input files.

use std::io::Cursor;

use anyhow::Result;

use gs_events::{load_events_str, Event};
use gs_sim::{SimObserver, Simulation};
use gs_store::GroceryStore;

// ── Inputs ────────────────────────────────────────────────────────────────────

const STORE_CONFIG: &str = r#"{
    "regular_count": 2,
    "express_count": 1,
    "self_serve_count": 1,
    "line_capacity": 4
}"#;

// Lines 0–1 are regular, 2 is express, 3 is self-serve.
const EVENT_FILE: &str = "\
0 Arrive Tamara Bananas 7 Cheese 3
2 Arrive Jugo Milk 2
4 Arrive Bryan Eggs 4 Bread 3 Apples 2
6 Arrive Sol Gum 1
9 Close 0
";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints every event as it is dequeued.
struct EventPrinter;

impl SimObserver for EventPrinter {
    fn on_event(&mut self, event: &Event) {
        match event {
            Event::CustomerArrival { timestamp, customer } => {
                println!(
                    "  {timestamp}  {} arrives with {} item(s)",
                    customer.name,
                    customer.num_items()
                );
            }
            Event::CheckoutStarted { timestamp, line } => {
                println!("  {timestamp}  checkout starts at {line}");
            }
            Event::CheckoutCompleted {
                timestamp,
                line,
                customer_name,
            } => {
                println!("  {timestamp}  {customer_name} finishes at {line}");
            }
            Event::CloseLine { timestamp, line } => {
                println!("  {timestamp}  {line} closes");
            }
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let store = GroceryStore::from_reader(Cursor::new(STORE_CONFIG))?;
    let events = load_events_str(EVENT_FILE)?;
    println!(
        "corner-store: {} lines, {} initial events",
        store.num_lines(),
        events.len()
    );

    let mut sim = Simulation::new(store);
    sim.run_with_observer(events, &mut EventPrinter)?;

    let stats = sim.stats();
    println!("\nstatistics:");
    println!("  customers served : {}", stats.num_customers);
    println!("  total time       : {}", stats.total_time);
    println!("  max wait         : {}", stats.max_wait);

    println!("\nlines at close of play:");
    for (id, line) in sim.store().lines() {
        println!(
            "  {id}: {:?}, {}, {} customer(s) left",
            line.kind,
            if line.is_open() { "open" } else { "closed" },
            line.len()
        );
    }
    Ok(())
}
