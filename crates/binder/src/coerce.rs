//! Value coercion engine
//!
//! Converts one JSON node, or its absence, into a [`SlotValue`] of the
//! declared [`SlotType`]. Rules apply in this order:
//!
//! 1. Absent (missing key or JSON `null`): no value for nullable types, the
//!    zero default otherwise. Runs first since an absent node has no kind
//!    to dispatch on.
//! 2. Identifier: string parsed in any accepted layout.
//! 3. Scalar: direct conversion, no string/number crossover, no truncation.
//! 4. Object: canonical JSON text handed to the serde decoder of the target.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;
use tuplebind_core::json::describe;
use tuplebind_core::{parse_identifier, CoerceError, ObjectType, ScalarType, SlotType, SlotValue};
use uuid::Uuid;

/// Coerce `node` into a value of type `ty`.
///
/// `None` and JSON `null` are both treated as absent.
pub fn coerce(node: Option<&Value>, ty: &SlotType) -> Result<SlotValue, CoerceError> {
    let node = match node {
        Some(node) if !node.is_null() => node,
        _ => {
            tracing::trace!(target: "tuplebind::coerce", slot_type = %ty, "absent input");
            return Ok(absent_value(ty));
        }
    };

    match ty {
        SlotType::Nullable(inner) => coerce(Some(node), inner),
        SlotType::Identifier => coerce_identifier(node),
        SlotType::Scalar(scalar) => coerce_scalar(node, *scalar),
        SlotType::Object(object_type) => coerce_object(node, object_type),
    }
}

/// Value an absent input produces for `ty`.
pub fn absent_value(ty: &SlotType) -> SlotValue {
    match ty {
        _ if ty.is_nullable() => SlotValue::Null,
        SlotType::Identifier => SlotValue::Identifier(Uuid::nil()),
        SlotType::Scalar(scalar) => zero_value(*scalar),
        SlotType::Object(_) | SlotType::Nullable(_) => SlotValue::Null,
    }
}

fn zero_value(scalar: ScalarType) -> SlotValue {
    match scalar {
        ScalarType::Bool => SlotValue::Bool(false),
        ScalarType::I8 | ScalarType::I16 | ScalarType::I32 | ScalarType::I64 => SlotValue::Int(0),
        ScalarType::U8 | ScalarType::U16 | ScalarType::U32 | ScalarType::U64 => {
            SlotValue::UInt(0)
        }
        ScalarType::F32 | ScalarType::F64 => SlotValue::Float(0.0),
        ScalarType::Decimal => SlotValue::Decimal(Decimal::ZERO),
        ScalarType::Text => SlotValue::Null,
    }
}

fn coerce_identifier(node: &Value) -> Result<SlotValue, CoerceError> {
    let Value::String(text) = node else {
        return Err(CoerceError::TypeMismatch {
            expected: SlotType::Identifier.to_string(),
            found: describe(node),
        });
    };
    parse_identifier(text)
        .map(SlotValue::Identifier)
        .ok_or_else(|| CoerceError::IdentifierFormat {
            input: text.clone(),
        })
}

fn coerce_scalar(node: &Value, scalar: ScalarType) -> Result<SlotValue, CoerceError> {
    let converted = match scalar {
        ScalarType::Bool => node.as_bool().map(SlotValue::Bool),
        ScalarType::I8 => signed(node, i8::MIN.into(), i8::MAX.into()),
        ScalarType::I16 => signed(node, i16::MIN.into(), i16::MAX.into()),
        ScalarType::I32 => signed(node, i32::MIN.into(), i32::MAX.into()),
        ScalarType::I64 => signed(node, i64::MIN, i64::MAX),
        ScalarType::U8 => unsigned(node, u8::MAX.into()),
        ScalarType::U16 => unsigned(node, u16::MAX.into()),
        ScalarType::U32 => unsigned(node, u32::MAX.into()),
        ScalarType::U64 => unsigned(node, u64::MAX),
        ScalarType::F32 => node
            .as_f64()
            .filter(|v| (*v as f32).is_finite())
            .map(|v| SlotValue::Float(f64::from(v as f32))),
        ScalarType::F64 => node.as_f64().map(SlotValue::Float),
        ScalarType::Decimal => decimal(node),
        ScalarType::Text => node.as_str().map(|s| SlotValue::Text(s.to_string())),
    };
    converted.ok_or_else(|| CoerceError::TypeMismatch {
        expected: scalar.name().to_string(),
        found: describe(node),
    })
}

fn signed(node: &Value, min: i64, max: i64) -> Option<SlotValue> {
    let v = node.as_i64()?;
    (min..=max).contains(&v).then_some(SlotValue::Int(v))
}

fn unsigned(node: &Value, max: u64) -> Option<SlotValue> {
    let v = node.as_u64()?;
    (v <= max).then_some(SlotValue::UInt(v))
}

// Goes through the number's text so 1.44 stays exactly 1.44.
fn decimal(node: &Value) -> Option<SlotValue> {
    let Value::Number(number) = node else {
        return None;
    };
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .map(SlotValue::Decimal)
}

fn coerce_object(node: &Value, object_type: &ObjectType) -> Result<SlotValue, CoerceError> {
    let canonical = node.to_string();
    object_type
        .decode(canonical)
        .map(SlotValue::Object)
        .map_err(|source| {
            tracing::debug!(
                target: "tuplebind::coerce",
                type_name = object_type.type_name(),
                error = %source,
                "nested decode failed"
            );
            CoerceError::NestedDecode {
                type_name: object_type.type_name().to_string(),
                source,
            }
        })
}
