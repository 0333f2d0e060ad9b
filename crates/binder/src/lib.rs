//! Decoding engine for tuplebind
//!
//! Fills positional composites from JSON objects:
//! - [`resolve`]: walks a descriptor and pairs leaf slots with field names
//!   through a shared cursor, continuing into nested levels
//! - [`coerce`]: converts one JSON node into a typed slot value
//! - [`Binder`]: entry point combining parsing, resolution and options
//! - [`BindTuple`]: typed decoding straight into Rust tuples
//!
//! Field names are supplied in flattened slot order. A descriptor level holds
//! at most [`MAX_LEVEL_ARITY`] slots; wider shapes nest the remainder in a
//! continuation occupying the last slot.

#![warn(clippy::all)]

pub mod binder;
pub mod coerce;
pub mod options;
pub mod resolve;
pub mod typed;

pub use binder::Binder;
pub use coerce::{absent_value, coerce};
pub use options::{BindOptions, ExtraNames, KeyMatching};
pub use resolve::{resolve, resolve_with};
pub use typed::{BindTuple, FromSlot, Json};

pub use tuplebind_core::{
    format_identifier, parse_identifier, BindError, CoerceError, CompositeDescriptor,
    CompositeValue, Decimal, DecodedObject, DescriptorSlot, ErrorKind, IdentifierLayout,
    JsonObject, ObjectType, Result, ScalarType, SlotType, SlotValue, Uuid, MAX_LEVEL_ARITY,
};
