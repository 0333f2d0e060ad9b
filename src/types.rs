//! Public types for the tuplebind API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Shape description
pub use tuplebind_core::{CompositeDescriptor, DescriptorSlot, MAX_LEVEL_ARITY};
pub use tuplebind_core::{ObjectType, ScalarType, SlotType};

// Decoded output
pub use tuplebind_core::{CompositeValue, DecodedObject, SlotValue};

// Structured identifiers
pub use tuplebind_core::{IdentifierLayout, Uuid};

// Decimal slots
pub use tuplebind_core::Decimal;

// Errors
pub use tuplebind_core::{BindError, CoerceError, ErrorKind, Result};

// Configuration
pub use tuplebind_binder::{BindOptions, ExtraNames, KeyMatching};

// Typed tuples
pub use tuplebind_binder::{BindTuple, FromSlot, Json};

// ============================================================================
// Internal types - not exposed in public API
// ============================================================================

pub(crate) use tuplebind_core::JsonObject;

/// Borrow `value` as a JSON object (internal use only).
pub(crate) fn object_view(value: &serde_json::Value) -> Result<JsonObject<'_>> {
    JsonObject::from_value(value)
}
