//! Unit tests for gs-store.

use gs_core::LineId;

use crate::{Customer, GroceryStore, Item, StoreConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn customer(name: &str, item_times: &[u32]) -> Customer {
    let items = item_times
        .iter()
        .enumerate()
        .map(|(i, &t)| Item::new(format!("item{i}"), t))
        .collect();
    Customer::new(name, items)
}

fn config(regular: u32, express: u32, self_serve: u32, capacity: u32) -> StoreConfig {
    StoreConfig {
        regular_count:    regular,
        express_count:    express,
        self_serve_count: self_serve,
        line_capacity:    capacity,
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_loading {
    use std::io::Cursor;

    use super::*;

    const CONFIG_JSON: &str = r#"{
        "regular_count": 2,
        "express_count": 1,
        "self_serve_count": 1,
        "line_capacity": 10
    }"#;

    #[test]
    fn parses_valid_json() {
        let cfg = StoreConfig::from_reader(Cursor::new(CONFIG_JSON)).unwrap();
        assert_eq!(cfg.regular_count, 2);
        assert_eq!(cfg.express_count, 1);
        assert_eq!(cfg.self_serve_count, 1);
        assert_eq!(cfg.line_capacity, 10);
        assert_eq!(cfg.total_lines(), 4);
    }

    #[test]
    fn malformed_json_errors() {
        let result = StoreConfig::from_reader(Cursor::new("{not json"));
        assert!(result.is_err());
    }

    #[test]
    fn missing_key_errors() {
        let result = StoreConfig::from_reader(Cursor::new(r#"{"regular_count": 1}"#));
        assert!(result.is_err());
    }

    #[test]
    fn zero_lines_rejected() {
        assert!(GroceryStore::new(&config(0, 0, 0, 10)).is_err());
    }

    #[test]
    fn zero_capacity_rejected() {
        assert!(GroceryStore::new(&config(1, 1, 1, 0)).is_err());
    }

    #[test]
    fn total_lines_survives_huge_counts() {
        // Adversarial counts must not overflow the u32 sum before
        // validation gets a chance to look at them.
        let cfg = config(u32::MAX, u32::MAX, u32::MAX, 1);
        assert_eq!(cfg.total_lines(), 3 * (u32::MAX as usize));
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod errors {
    use gs_core::GsError;

    use crate::StoreError;

    use super::*;

    #[test]
    fn store_errors_convert_to_workspace_errors() {
        let gs: GsError = StoreError::LineNotFound(LineId(3)).into();
        assert!(matches!(gs, GsError::LineNotFound(LineId(3))));

        let gs: GsError = StoreError::EmptyLine(LineId(1)).into();
        assert!(matches!(gs, GsError::EmptyLine(LineId(1))));

        let gs: GsError = StoreError::Config("no lines".into()).into();
        assert!(matches!(gs, GsError::Config(_)));

        let gs: GsError = StoreError::Parse("bad json".into()).into();
        assert!(matches!(gs, GsError::Parse(_)));
    }
}

// ── Line layout ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use crate::LineKind;

    use super::*;

    #[test]
    fn lines_ordered_regular_express_self_serve() {
        let store = GroceryStore::new(&config(2, 1, 1, 5)).unwrap();
        assert_eq!(store.num_lines(), 4);
        assert_eq!(store.line(LineId(0)).unwrap().kind, LineKind::Regular);
        assert_eq!(store.line(LineId(1)).unwrap().kind, LineKind::Regular);
        assert_eq!(store.line(LineId(2)).unwrap().kind, LineKind::Express);
        assert_eq!(store.line(LineId(3)).unwrap().kind, LineKind::SelfServe);
    }

    #[test]
    fn out_of_range_line_errors() {
        let store = GroceryStore::new(&config(1, 0, 0, 5)).unwrap();
        assert!(store.line(LineId(1)).is_err());
        assert!(store.line(LineId::INVALID).is_err());
    }
}

// ── enter_line ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod enter_line {
    use super::*;

    #[test]
    fn first_customer_is_first_in_line() {
        let mut store = GroceryStore::new(&config(1, 0, 0, 5)).unwrap();
        let placement = store.enter_line(customer("a", &[1])).unwrap();
        assert_eq!(placement.line, LineId(0));
        assert!(placement.first_in_line);
    }

    #[test]
    fn picks_shortest_line() {
        let mut store = GroceryStore::new(&config(2, 0, 0, 5)).unwrap();
        store.enter_line(customer("a", &[1])).unwrap();
        // Line 0 has one customer; line 1 is empty and must win.
        let placement = store.enter_line(customer("b", &[1])).unwrap();
        assert_eq!(placement.line, LineId(1));
        assert!(placement.first_in_line);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let mut store = GroceryStore::new(&config(3, 0, 0, 5)).unwrap();
        let placement = store.enter_line(customer("a", &[1])).unwrap();
        assert_eq!(placement.line, LineId(0));
    }

    #[test]
    fn second_customer_is_not_first() {
        let mut store = GroceryStore::new(&config(1, 0, 0, 5)).unwrap();
        store.enter_line(customer("a", &[1])).unwrap();
        let placement = store.enter_line(customer("b", &[1])).unwrap();
        assert_eq!(placement.line, LineId(0));
        assert!(!placement.first_in_line);
    }

    #[test]
    fn express_refuses_big_baskets() {
        // Only an express line: a customer with 8 items has nowhere to go.
        let mut store = GroceryStore::new(&config(0, 1, 0, 5)).unwrap();
        let big = customer("big", &[1, 1, 1, 1, 1, 1, 1, 1]);
        let rejected = store.enter_line(big).unwrap_err();
        assert_eq!(rejected.name, "big");

        // Seven items is fine.
        let small = customer("small", &[1, 1, 1, 1, 1, 1, 1]);
        assert!(store.enter_line(small).is_ok());
    }

    #[test]
    fn full_store_returns_customer() {
        let mut store = GroceryStore::new(&config(1, 0, 0, 1)).unwrap();
        store.enter_line(customer("a", &[1])).unwrap();
        let rejected = store.enter_line(customer("b", &[1])).unwrap_err();
        assert_eq!(rejected.name, "b");
    }

    #[test]
    fn closed_line_refuses_everyone() {
        let mut store = GroceryStore::new(&config(1, 0, 0, 5)).unwrap();
        store.close_line(LineId(0)).unwrap();
        assert!(store.enter_line(customer("a", &[1])).is_err());
    }
}

// ── Checkout flow ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod checkout {
    use super::*;

    #[test]
    fn ticket_reports_name_and_duration() {
        let mut store = GroceryStore::new(&config(1, 0, 0, 5)).unwrap();
        store.enter_line(customer("a", &[3, 4])).unwrap();
        let ticket = store.begin_checkout(LineId(0)).unwrap();
        assert_eq!(ticket.customer_name, "a");
        assert_eq!(ticket.duration, 7);
    }

    #[test]
    fn self_serve_doubles_duration() {
        let mut store = GroceryStore::new(&config(0, 0, 1, 5)).unwrap();
        store.enter_line(customer("a", &[3, 4])).unwrap();
        let ticket = store.begin_checkout(LineId(0)).unwrap();
        assert_eq!(ticket.duration, 14);
    }

    #[test]
    fn express_duration_is_plain_item_time() {
        let mut store = GroceryStore::new(&config(0, 1, 0, 5)).unwrap();
        store.enter_line(customer("a", &[2, 2])).unwrap();
        assert_eq!(store.begin_checkout(LineId(0)).unwrap().duration, 4);
    }

    #[test]
    fn begin_on_empty_line_errors() {
        let store = GroceryStore::new(&config(1, 0, 0, 5)).unwrap();
        assert!(store.begin_checkout(LineId(0)).is_err());
    }

    #[test]
    fn finish_pops_front_and_counts_rest() {
        let mut store = GroceryStore::new(&config(1, 0, 0, 5)).unwrap();
        store.enter_line(customer("a", &[1])).unwrap();
        store.enter_line(customer("b", &[1])).unwrap();

        assert_eq!(store.finish_checkout(LineId(0)).unwrap(), 1);
        // "b" moved to the front.
        assert_eq!(store.begin_checkout(LineId(0)).unwrap().customer_name, "b");
        assert_eq!(store.finish_checkout(LineId(0)).unwrap(), 0);
        assert!(store.finish_checkout(LineId(0)).is_err());
    }
}

// ── close_line ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod close_line {
    use super::*;

    #[test]
    fn keeps_front_displaces_rest_in_order() {
        let mut store = GroceryStore::new(&config(1, 0, 0, 5)).unwrap();
        for name in ["a", "b", "c"] {
            store.enter_line(customer(name, &[1])).unwrap();
        }
        let displaced = store.close_line(LineId(0)).unwrap();
        let names: Vec<&str> = displaced.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);

        // The front customer is still being served.
        let line = store.line(LineId(0)).unwrap();
        assert!(!line.is_open());
        assert_eq!(line.len(), 1);
        assert_eq!(line.front().unwrap().name, "a");
    }

    #[test]
    fn closing_empty_line_displaces_nobody() {
        let mut store = GroceryStore::new(&config(1, 0, 0, 5)).unwrap();
        assert!(store.close_line(LineId(0)).unwrap().is_empty());
        assert!(!store.line(LineId(0)).unwrap().is_open());
    }

    #[test]
    fn closing_twice_is_harmless() {
        let mut store = GroceryStore::new(&config(1, 0, 0, 5)).unwrap();
        store.enter_line(customer("a", &[1])).unwrap();
        store.enter_line(customer("b", &[1])).unwrap();
        assert_eq!(store.close_line(LineId(0)).unwrap().len(), 1);
        assert!(store.close_line(LineId(0)).unwrap().is_empty());
    }

    #[test]
    fn closing_missing_line_errors() {
        let mut store = GroceryStore::new(&config(1, 0, 0, 5)).unwrap();
        assert!(store.close_line(LineId(9)).is_err());
    }
}
