//! Error types for tuple binding
//!
//! Two layers:
//! - [`CoerceError`]: failure of a single slot coercion, without slot context
//! - [`BindError`]: the one failure returned by a decode call, carrying the
//!   flattened slot index and field name where one applies
//!
//! Every variant maps to an [`ErrorKind`] so adapters can translate failures
//! without matching on individual variants.

use thiserror::Error;

/// Result type used across the binding crates.
pub type Result<T> = std::result::Result<T, BindError>;

/// Coarse failure class of a [`BindError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The descriptor was built incorrectly. This is an integration bug,
    /// not a problem with the caller's data.
    Configuration,
    /// The payload or name list does not have the shape the descriptor needs.
    InputShape,
    /// A slot's JSON node could not be converted to the slot type.
    Value,
    /// The general object decoder rejected a nested object.
    Delegated,
}

/// Failure of one coercion, before slot context is attached.
#[derive(Debug, Error)]
pub enum CoerceError {
    /// JSON kind incompatible with the target type, or a number outside the
    /// target's range.
    #[error("expected {expected}, found JSON {found}")]
    TypeMismatch {
        /// Target slot type
        expected: String,
        /// Description of the JSON node that was found
        found: String,
    },

    /// String matched none of the accepted identifier layouts.
    #[error("'{input}' is not a recognized identifier layout")]
    IdentifierFormat {
        /// The rejected input
        input: String,
    },

    /// The serde decoder for an object slot failed.
    #[error("failed to decode {type_name}: {source}")]
    NestedDecode {
        /// Rust type the object was decoded into
        type_name: String,
        /// Error reported by serde_json
        #[source]
        source: serde_json::Error,
    },
}

impl CoerceError {
    /// Attach the flattened slot index and field name of the failing slot.
    pub fn at(self, slot: usize, field: &str) -> BindError {
        let field = field.to_string();
        match self {
            CoerceError::TypeMismatch { expected, found } => BindError::TypeMismatch {
                slot,
                field,
                expected,
                found,
            },
            CoerceError::IdentifierFormat { input } => BindError::IdentifierFormat {
                slot,
                field,
                input,
            },
            CoerceError::NestedDecode { type_name, source } => BindError::NestedDecode {
                slot,
                field,
                type_name,
                source,
            },
        }
    }
}

/// Failure of a decode call.
#[derive(Debug, Error)]
pub enum BindError {
    /// A descriptor level declares more slots than the per-level bound.
    #[error("descriptor level has {arity} slots, more than the maximum of {max}")]
    DescriptorTooLarge {
        /// Declared slot count of the level
        arity: usize,
        /// Per-level bound
        max: usize,
    },

    /// A descriptor level declares no slots.
    #[error("descriptor level has no slots")]
    EmptyDescriptor,

    /// A continuation appears anywhere but the last slot of a saturated level.
    #[error("continuation at position {position} is not the last slot of a saturated level")]
    MisplacedContinuation {
        /// Position of the continuation within its level
        position: usize,
    },

    /// A saturated level ends with a leaf instead of a continuation.
    #[error("saturated level must end with a continuation, found a leaf at position {position}")]
    MissingContinuation {
        /// Position of the offending leaf
        position: usize,
    },

    /// The name list ran out before every leaf slot had a name.
    #[error("name list exhausted at slot {slot}: only {available} names supplied")]
    NamesExhausted {
        /// Flattened index of the slot without a name
        slot: usize,
        /// Number of names supplied
        available: usize,
    },

    /// The name list is longer than the leaf count and extra names are rejected.
    #[error("{extra} unused field names after {consumed} slots")]
    ExtraNames {
        /// Names consumed by the descriptor
        consumed: usize,
        /// Names left over
        extra: usize,
    },

    /// The payload root is not a JSON object.
    #[error("expected a JSON object at the root, found {found}")]
    RootNotObject {
        /// JSON kind of the root
        found: &'static str,
    },

    /// The payload text is not valid JSON.
    #[error("malformed JSON payload: {0}")]
    Json(#[source] serde_json::Error),

    /// See [`CoerceError::TypeMismatch`].
    #[error("slot {slot} ('{field}'): expected {expected}, found JSON {found}")]
    TypeMismatch {
        /// Flattened slot index
        slot: usize,
        /// Field name the slot was read from
        field: String,
        /// Target slot type
        expected: String,
        /// Description of the JSON node that was found
        found: String,
    },

    /// See [`CoerceError::IdentifierFormat`].
    #[error("slot {slot} ('{field}'): '{input}' is not a recognized identifier layout")]
    IdentifierFormat {
        /// Flattened slot index
        slot: usize,
        /// Field name the slot was read from
        field: String,
        /// The rejected input
        input: String,
    },

    /// See [`CoerceError::NestedDecode`].
    #[error("slot {slot} ('{field}'): failed to decode {type_name}: {source}")]
    NestedDecode {
        /// Flattened slot index
        slot: usize,
        /// Field name the slot was read from
        field: String,
        /// Rust type the object was decoded into
        type_name: String,
        /// Error reported by serde_json
        #[source]
        source: serde_json::Error,
    },

    /// A required typed slot read an absent field that its type cannot
    /// represent, such as a missing object for a non-optional struct.
    #[error("slot {slot} ('{field}'): no value for required {expected}")]
    MissingValue {
        /// Flattened slot index
        slot: usize,
        /// Field name the slot was read from
        field: String,
        /// Target slot type
        expected: String,
    },

    /// A composite value does not fit the typed tuple it is converted into.
    #[error("slot {slot}: composite value holds {found}, expected {expected}")]
    ValueShape {
        /// Flattened slot index
        slot: usize,
        /// Slot type the tuple element expects
        expected: String,
        /// Kind of value actually held
        found: &'static str,
    },
}

impl BindError {
    /// Failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BindError::DescriptorTooLarge { .. }
            | BindError::EmptyDescriptor
            | BindError::MisplacedContinuation { .. }
            | BindError::MissingContinuation { .. }
            | BindError::ValueShape { .. } => ErrorKind::Configuration,
            BindError::NamesExhausted { .. }
            | BindError::ExtraNames { .. }
            | BindError::MissingValue { .. }
            | BindError::RootNotObject { .. }
            | BindError::Json(_) => ErrorKind::InputShape,
            BindError::TypeMismatch { .. } | BindError::IdentifierFormat { .. } => {
                ErrorKind::Value
            }
            BindError::NestedDecode { .. } => ErrorKind::Delegated,
        }
    }

    /// Flattened slot index the error refers to, if any.
    pub fn slot(&self) -> Option<usize> {
        match self {
            BindError::NamesExhausted { slot, .. }
            | BindError::TypeMismatch { slot, .. }
            | BindError::IdentifierFormat { slot, .. }
            | BindError::NestedDecode { slot, .. }
            | BindError::MissingValue { slot, .. }
            | BindError::ValueShape { slot, .. } => Some(*slot),
            _ => None,
        }
    }

    /// Field name the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            BindError::TypeMismatch { field, .. }
            | BindError::IdentifierFormat { field, .. }
            | BindError::NestedDecode { field, .. }
            | BindError::MissingValue { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_error() -> serde_json::Error {
        serde_json::from_str::<u32>("\"x\"").unwrap_err()
    }

    #[test]
    fn test_coerce_error_at_type_mismatch() {
        let err = CoerceError::TypeMismatch {
            expected: "i32".to_string(),
            found: "string".to_string(),
        }
        .at(3, "Age");
        match &err {
            BindError::TypeMismatch {
                slot,
                field,
                expected,
                found,
            } => {
                assert_eq!(*slot, 3);
                assert_eq!(field, "Age");
                assert_eq!(expected, "i32");
                assert_eq!(found, "string");
            }
            other => panic!("Expected TypeMismatch, got {:?}", other),
        }
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(err.slot(), Some(3));
        assert_eq!(err.field(), Some("Age"));
    }

    #[test]
    fn test_coerce_error_at_identifier_format() {
        let err = CoerceError::IdentifierFormat {
            input: "not-a-guid".to_string(),
        }
        .at(0, "clientId");
        assert!(matches!(err, BindError::IdentifierFormat { slot: 0, .. }));
        assert!(err.to_string().contains("not-a-guid"));
        assert!(err.to_string().contains("clientId"));
    }

    #[test]
    fn test_nested_decode_keeps_source() {
        use std::error::Error as _;

        let err = CoerceError::NestedDecode {
            type_name: "User".to_string(),
            source: nested_error(),
        }
        .at(1, "User");
        assert_eq!(err.kind(), ErrorKind::Delegated);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_kind_classification() {
        let cases = [
            (
                BindError::DescriptorTooLarge { arity: 9, max: 8 },
                ErrorKind::Configuration,
            ),
            (BindError::EmptyDescriptor, ErrorKind::Configuration),
            (
                BindError::MisplacedContinuation { position: 2 },
                ErrorKind::Configuration,
            ),
            (
                BindError::MissingContinuation { position: 7 },
                ErrorKind::Configuration,
            ),
            (
                BindError::NamesExhausted {
                    slot: 4,
                    available: 4,
                },
                ErrorKind::InputShape,
            ),
            (
                BindError::ExtraNames {
                    consumed: 2,
                    extra: 1,
                },
                ErrorKind::InputShape,
            ),
            (
                BindError::RootNotObject { found: "array" },
                ErrorKind::InputShape,
            ),
        ];

        for (err, kind) in cases {
            assert_eq!(err.kind(), kind, "{}", err);
        }
    }

    #[test]
    fn test_names_exhausted_display() {
        let err = BindError::NamesExhausted {
            slot: 5,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "name list exhausted at slot 5: only 5 names supplied"
        );
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_missing_value_is_input_shape() {
        let err = BindError::MissingValue {
            slot: 0,
            field: "user".to_string(),
            expected: "User".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::InputShape);
        assert_eq!(err.slot(), Some(0));
        assert_eq!(err.field(), Some("user"));
        assert_eq!(err.to_string(), "slot 0 ('user'): no value for required User");
    }
}
