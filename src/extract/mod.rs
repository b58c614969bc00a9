//! Text extraction from loosely structured flow responses.
//!
//! # Responsibilities
//! - Walk an arbitrary JSON tree and find the most plausible text payload
//! - Prefer well-known keys over whatever else the tree happens to contain
//! - Degrade to `None` on any shape, never panic
//!
//! # Traversal
//! ```text
//! String  → returned as-is
//! Object  → priority keys (text, message, result, output, content)
//!         → then remaining values in insertion order (containers only)
//! Array   → elements in order
//! other   → nothing
//! ```
//!
//! # Design Decisions
//! - Depth-first, first match wins: shallow and early matches beat deep ones
//! - Containers reached through recursion only count when they yield non-empty text
//! - Recursion is bounded by `MAX_DEPTH` to keep hostile input off the stack

use serde_json::Value;

/// Keys probed, in order, before falling back to a full scan of an object.
pub const PRIORITY_KEYS: [&str; 5] = ["text", "message", "result", "output", "content"];

/// Nesting level below which sub-trees are ignored.
pub const MAX_DEPTH: usize = 256;

/// Extract the first human-readable text found in `data`.
///
/// A bare string (at the root or under a priority key) is returned exactly,
/// even when empty. Results bubbling up from nested containers must be
/// non-empty to be accepted.
pub fn extract_text(data: &Value) -> Option<&str> {
    extract_at(data, 0)
}

fn extract_at(data: &Value, depth: usize) -> Option<&str> {
    if depth > MAX_DEPTH {
        return None;
    }

    match data {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => {
            for key in PRIORITY_KEYS {
                match map.get(key) {
                    Some(Value::String(s)) => return Some(s.as_str()),
                    Some(nested @ (Value::Object(_) | Value::Array(_))) => {
                        if let Some(found) = non_empty(extract_at(nested, depth + 1)) {
                            return Some(found);
                        }
                    }
                    _ => {}
                }
            }

            map.values()
                .filter(|value| is_container(value))
                .find_map(|value| non_empty(extract_at(value, depth + 1)))
        }
        Value::Array(items) => items
            .iter()
            .find_map(|item| non_empty(extract_at(item, depth + 1))),
        Value::Null | Value::Bool(_) | Value::Number(_) => None,
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn non_empty(found: Option<&str>) -> Option<&str> {
    found.filter(|s| !s.is_empty())
}
