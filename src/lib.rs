//! tuplebind: decode JSON objects into positional tuples
//!
//! A caller supplies three things:
//! - a parsed JSON object
//! - a flat list of field names, one per leaf slot
//! - the target shape, as a [`CompositeDescriptor`] or a Rust tuple type
//!
//! and gets back a fully populated composite or a single [`BindError`].
//!
//! ```
//! use serde_json::json;
//!
//! let payload = json!({"name": "Ada", "ClientId": "{728cb7a1-b8eb-471e-a90d-f17531baf918}"});
//! let (name, client_id, note): (String, tuplebind::Uuid, Option<String>) =
//!     tuplebind::from_value(&payload, &["Name", "clientId", "note"]).unwrap();
//! assert_eq!(name, "Ada");
//! assert_eq!(client_id.to_string(), "728cb7a1-b8eb-471e-a90d-f17531baf918");
//! assert_eq!(note, None);
//! ```
//!
//! Shapes wider than seven leaves nest the remainder in the last element:
//! `(A, B, C, D, E, F, G, (H, I))` reads nine names.

#![warn(clippy::all)]

pub mod types;

pub use tuplebind_binder::{coerce, resolve, resolve_with, Binder};
pub use tuplebind_core::{format_identifier, parse_identifier, parse_with_layout};
pub use types::*;

use serde_json::Value;

/// Decode `payload` into the tuple type `T` with default options.
pub fn from_value<T: BindTuple, S: AsRef<str>>(payload: &Value, names: &[S]) -> Result<T> {
    Binder::new().bind(payload, names)
}

/// Decode JSON text into the tuple type `T` with default options.
pub fn from_str<T: BindTuple, S: AsRef<str>>(payload: &str, names: &[S]) -> Result<T> {
    Binder::new().bind_str_typed(payload, names)
}

/// Decode `payload` against an explicit descriptor with default options.
pub fn bind_value<S: AsRef<str>>(
    payload: &Value,
    names: &[S],
    descriptor: &CompositeDescriptor,
) -> Result<CompositeValue> {
    Binder::new().bind_value(payload, names, descriptor)
}

/// Resolve `descriptor` against `payload` starting at name `start`.
///
/// Returns the decoded composite and the position of the first unused name,
/// for callers that read several composites from one name list.
pub fn resolve_from<S: AsRef<str>>(
    payload: &Value,
    names: &[S],
    descriptor: &CompositeDescriptor,
    start: usize,
    matching: KeyMatching,
) -> Result<(CompositeValue, usize)> {
    let object = types::object_view(payload)?;
    let mut cursor = start;
    let value = resolve_with(&object, names, descriptor, &mut cursor, matching)?;
    Ok((value, cursor))
}
