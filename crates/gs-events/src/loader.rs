//! Event-file loader.
//!
//! # Format
//!
//! One event per line, whitespace-separated tokens; blank lines are ignored:
//!
//! ```text
//! 10 Arrive Tamara Bananas 7 Cheese 3
//! 30 Close 1
//! ```
//!
//! | Keyword  | Tokens                                                        |
//! |----------|---------------------------------------------------------------|
//! | `Arrive` | timestamp, `Arrive`, customer name, then (item name, item time) pairs |
//! | `Close`  | timestamp, `Close`, line index                                |
//!
//! A customer with no item pairs is legal (they check out instantly).

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use gs_core::{LineId, Timestamp};
use gs_store::{Customer, Item};

use crate::{Event, EventError, EventResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load events from a text file.
pub fn load_events_path(path: &Path) -> EventResult<Vec<Event>> {
    let file = std::fs::File::open(path).map_err(EventError::Io)?;
    load_events_reader(file)
}

/// Like [`load_events_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded event lists.
pub fn load_events_reader<R: Read>(reader: R) -> EventResult<Vec<Event>> {
    let mut events = Vec::new();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if let Some(event) = parse_line(&line, i + 1)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Load events from in-memory text.
pub fn load_events_str(text: &str) -> EventResult<Vec<Event>> {
    load_events_reader(std::io::Cursor::new(text))
}

// ── Line parsing ──────────────────────────────────────────────────────────────

fn parse_line(line: &str, lineno: usize) -> EventResult<Option<Event>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }

    let err = |msg: String| EventError::Parse { line: lineno, msg };

    if tokens.len() < 2 {
        return Err(err("expected `<timestamp> <keyword> ...`".into()));
    }

    let timestamp = tokens[0]
        .parse::<u64>()
        .map(Timestamp)
        .map_err(|_| err(format!("invalid timestamp {:?}", tokens[0])))?;

    match tokens[1] {
        "Arrive" => {
            let name = tokens
                .get(2)
                .ok_or_else(|| err("Arrive is missing the customer name".into()))?;
            let item_tokens = &tokens[3..];
            if item_tokens.len() % 2 != 0 {
                return Err(err(
                    "Arrive items must be (name, time) pairs; got an odd number of item tokens"
                        .into(),
                ));
            }
            let items = item_tokens
                .chunks_exact(2)
                .map(|pair| {
                    let time = pair[1]
                        .parse::<u32>()
                        .map_err(|_| err(format!("invalid item time {:?}", pair[1])))?;
                    Ok(Item::new(pair[0], time))
                })
                .collect::<EventResult<Vec<Item>>>()?;
            Ok(Some(Event::CustomerArrival {
                timestamp,
                customer: Customer::new(*name, items),
            }))
        }

        "Close" => {
            let index = tokens
                .get(2)
                .ok_or_else(|| err("Close is missing the line index".into()))?;
            let line_id = index
                .parse::<u32>()
                .map(LineId)
                .map_err(|_| err(format!("invalid line index {index:?}")))?;
            Ok(Some(Event::CloseLine {
                timestamp,
                line: line_id,
            }))
        }

        other => Err(err(format!("unknown event keyword {other:?}"))),
    }
}
