//! Core data model for tuplebind
//!
//! This crate defines the types shared by the decoding engine:
//! - Slot types: the closed set of leaf types a composite can declare
//! - Composite descriptors: validated, possibly nested slot layouts
//! - Composite values: decoded output shaped like their descriptor
//! - JSON object view with case-insensitive field lookup
//! - Structured identifier layouts
//! - Error taxonomy
//!
//! The engine itself lives in `tuplebind-binder`.

#![warn(clippy::all)]

pub mod descriptor;
pub mod error;
pub mod identifier;
pub mod json;
pub mod slot;
pub mod value;

pub use descriptor::{CompositeDescriptor, DescriptorSlot, MAX_LEVEL_ARITY};
pub use error::{BindError, CoerceError, ErrorKind, Result};
pub use identifier::{format_identifier, parse_identifier, parse_with_layout, IdentifierLayout};
pub use json::{JsonObject, KeyMatching};
pub use slot::{ObjectType, ScalarType, SlotType};
pub use value::{CompositeValue, DecodedObject, Leaves, SlotValue};

// Re-exported so downstream crates name the same versions.
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
