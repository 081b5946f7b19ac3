//! Structural partial matching of JSON values.
//!
//! `is_match(actual, expected)` holds when `actual` contains everything
//! `expected` asks for:
//!
//! - **Objects**: every key of `expected` exists in `actual` and its value
//!   matches recursively. Extra keys in `actual` are ignored.
//! - **Arrays**: `actual` is an array and every element of `expected` matches
//!   some element of `actual`, in any order. `["db", "sql"]` matches
//!   `["postgresql", "sql", "db"]`.
//! - **Numbers**: compared by value, so `1` matches `1.0`.
//! - Everything else: plain equality.

use serde_json::{Map, Value};

pub fn is_match(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Object(actual), Value::Object(expected)) => is_object_match(actual, expected),
        (Value::Array(actual), Value::Array(expected)) => expected
            .iter()
            .all(|wanted| actual.iter().any(|have| is_match(have, wanted))),
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        (actual, expected) => actual == expected,
    }
}

/// Every `(key, value)` pair of `expected` is present and matching in `actual`.
pub fn is_object_match(actual: &Map<String, Value>, expected: &Map<String, Value>) -> bool {
    expected.iter().all(|(key, wanted)| {
        actual
            .get(key)
            .is_some_and(|have| is_match(have, wanted))
    })
}
