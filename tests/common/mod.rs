//! Common test utilities for rangekit integration tests
//!
//! Provides logger setup, shared settings fixtures and containment cases.

#![allow(dead_code)]

use rangekit::settings;
use serde_json::{Value, json};
use std::collections::HashMap;

/// Install a test logger once; `RUST_LOG=debug` shows construction and
/// sanitization messages.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// Settings Fixtures
// =============================================================================

/// Numeric settings restricted to one `type`
pub fn numeric_type(name: &str) -> HashMap<String, Value> {
    settings! { "type" => json!(name) }
}

/// Candidate settings with nothing a schema would accept
pub fn junk_settings() -> HashMap<String, Value> {
    settings! {
        "type" => json!("string"),
        "charset" => json!(42),
        "precision" => json!(3),
    }
}

// =============================================================================
// Containment Cases
// =============================================================================

/// (start, end, given, expected clamp result, expected code)
pub const CHARACTER_CASES: &[(&str, &str, &str, char, i8)] = &[
    ("G", "U", "A", 'G', -1),
    ("F", "H", "G", 'G', 0),
    ("D", "P", "X", 'P', 1),
];

/// (start, end, given, expected clamp result, expected code), plain dates
pub const DATE_CASES: &[(&str, &str, &str, &str, i8)] = &[
    ("2000-01-01", "2015-07-18", "1979-07-02", "2000-01-01", -1),
    ("1964-02-07", "1995-06-08", "1986-12-24", "1986-12-24", 0),
    ("1774-07-04", "1969-07-20", "2055-01-13", "1969-07-20", 1),
];
