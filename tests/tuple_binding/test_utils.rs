//! Shared fixtures for the tuple binding suite.

use serde::Deserialize;
use serde_json::{json, Map, Value};
use tuplebind::Decimal;

/// Install a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TestUser {
    pub string: String,
    pub integer: i32,
    pub double: f64,
    pub decimal: Decimal,
}

pub fn user_json() -> Value {
    json!({"String": "Test", "Integer": 444, "Double": 1.44, "Decimal": 1.44})
}

/// Object `{"k0": 0, "k1": 1, ...}` and its key list.
pub fn numbered_object(n: usize) -> (Value, Vec<String>) {
    let names: Vec<String> = (0..n).map(|i| format!("k{}", i)).collect();
    let map: Map<String, Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.clone(), json!(i)))
        .collect();
    (Value::Object(map), names)
}
