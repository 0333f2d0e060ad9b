//! Typed tuple binding
//!
//! Rust tuples describe their own composite layout:
//! - [`FromSlot`] maps one Rust type to a slot type and back from a slot value
//! - [`BindTuple`] is implemented for tuples of 1 to 7 [`FromSlot`] elements,
//!   and for 8-tuples whose last element is itself a [`BindTuple`]; that last
//!   element is the continuation
//!
//! A nine-field tuple is therefore written with the last two fields nested:
//!
//! ```text
//! (A, B, C, D, E, F, G, (H, I))
//! ```
//!
//! Plain `String` and [`Json<T>`] slots are nullable; `String` reads no value
//! as an empty string. Wrap any slot in `Option` to observe absence.

use std::fmt;
use std::ops::{Deref, DerefMut};

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tuplebind_core::{
    BindError, CompositeDescriptor, CompositeValue, Result, ScalarType, SlotType, SlotValue,
    MAX_LEVEL_ARITY,
};
use uuid::Uuid;

/// A Rust type that can fill one leaf slot.
pub trait FromSlot: Sized {
    /// Slot type declared for this Rust type.
    fn slot_type() -> SlotType;

    /// Convert a decoded slot value. Returns the value back when it does
    /// not fit.
    fn from_slot(value: SlotValue) -> std::result::Result<Self, SlotValue>;
}

/// A Rust tuple that can be bound from a JSON object.
pub trait BindTuple: Sized {
    /// Descriptor for this tuple shape.
    fn descriptor() -> Result<CompositeDescriptor>;

    /// Convert a composite value resolved against [`BindTuple::descriptor`].
    fn from_composite(value: CompositeValue) -> Result<Self> {
        Self::from_composite_at(value, 0, &[])
    }

    /// As [`BindTuple::from_composite`], naming `fields[i]` in errors about
    /// flattened slot `i`.
    fn from_composite_named(value: CompositeValue, fields: &[&str]) -> Result<Self> {
        Self::from_composite_at(value, 0, fields)
    }

    /// As [`BindTuple::from_composite_named`], with `offset` the flattened
    /// index of this level's first slot.
    #[doc(hidden)]
    fn from_composite_at(value: CompositeValue, offset: usize, fields: &[&str]) -> Result<Self>;
}

/// Object slot decoded by serde into `T`.
///
/// Similar to an extractor wrapper: the value is reachable through
/// `Deref`, [`Json::into_inner`] or the public field.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Unwrap the decoded value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Json<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> FromSlot for Json<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    fn slot_type() -> SlotType {
        SlotType::object::<T>()
    }

    fn from_slot(value: SlotValue) -> std::result::Result<Self, SlotValue> {
        match value {
            SlotValue::Object(obj) => match obj.take::<T>() {
                Ok(inner) => Ok(Json(inner)),
                Err(obj) => match serde_json::from_str(obj.canonical_json()) {
                    Ok(inner) => Ok(Json(inner)),
                    Err(_) => Err(SlotValue::Object(obj)),
                },
            },
            // No value: let the target type decide what null means.
            SlotValue::Null => serde_json::from_value(Value::Null)
                .map(Json)
                .map_err(|_| SlotValue::Null),
            other => Err(other),
        }
    }
}

impl<T: FromSlot> FromSlot for Option<T> {
    fn slot_type() -> SlotType {
        SlotType::nullable(T::slot_type())
    }

    fn from_slot(value: SlotValue) -> std::result::Result<Self, SlotValue> {
        match value {
            SlotValue::Null => Ok(None),
            other => T::from_slot(other).map(Some),
        }
    }
}

impl FromSlot for bool {
    fn slot_type() -> SlotType {
        SlotType::bool()
    }

    fn from_slot(value: SlotValue) -> std::result::Result<Self, SlotValue> {
        match value {
            SlotValue::Bool(b) => Ok(b),
            other => Err(other),
        }
    }
}

impl FromSlot for String {
    fn slot_type() -> SlotType {
        SlotType::text()
    }

    fn from_slot(value: SlotValue) -> std::result::Result<Self, SlotValue> {
        match value {
            SlotValue::Text(s) => Ok(s),
            SlotValue::Null => Ok(String::new()),
            other => Err(other),
        }
    }
}

impl FromSlot for Uuid {
    fn slot_type() -> SlotType {
        SlotType::identifier()
    }

    fn from_slot(value: SlotValue) -> std::result::Result<Self, SlotValue> {
        match value {
            SlotValue::Identifier(id) => Ok(id),
            other => Err(other),
        }
    }
}

impl FromSlot for Decimal {
    fn slot_type() -> SlotType {
        SlotType::decimal()
    }

    fn from_slot(value: SlotValue) -> std::result::Result<Self, SlotValue> {
        match value {
            SlotValue::Decimal(d) => Ok(d),
            other => Err(other),
        }
    }
}

impl FromSlot for f64 {
    fn slot_type() -> SlotType {
        SlotType::f64()
    }

    fn from_slot(value: SlotValue) -> std::result::Result<Self, SlotValue> {
        match value {
            SlotValue::Float(v) => Ok(v),
            other => Err(other),
        }
    }
}

impl FromSlot for f32 {
    fn slot_type() -> SlotType {
        SlotType::Scalar(ScalarType::F32)
    }

    fn from_slot(value: SlotValue) -> std::result::Result<Self, SlotValue> {
        match value {
            SlotValue::Float(v) => Ok(v as f32),
            other => Err(other),
        }
    }
}

macro_rules! impl_from_slot_int {
    ($($ty:ty => $scalar:ident, $variant:ident;)+) => {
        $(
            impl FromSlot for $ty {
                fn slot_type() -> SlotType {
                    SlotType::Scalar(ScalarType::$scalar)
                }

                fn from_slot(value: SlotValue) -> std::result::Result<Self, SlotValue> {
                    match value {
                        SlotValue::$variant(n) => {
                            <$ty>::try_from(n).map_err(|_| SlotValue::$variant(n))
                        }
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

impl_from_slot_int! {
    i8 => I8, Int;
    i16 => I16, Int;
    i32 => I32, Int;
    i64 => I64, Int;
    u8 => U8, UInt;
    u16 => U16, UInt;
    u32 => U32, UInt;
    u64 => U64, UInt;
}

fn take_leaf<T: FromSlot>(
    leaves: &mut impl Iterator<Item = SlotValue>,
    slot: usize,
    fields: &[&str],
) -> Result<T> {
    let shape_error = |found: &'static str| BindError::ValueShape {
        slot,
        expected: T::slot_type().to_string(),
        found,
    };
    let value = leaves.next().ok_or_else(|| shape_error("nothing"))?;
    T::from_slot(value).map_err(|value| match value {
        // The field was absent and the target has no value for that.
        SlotValue::Null => BindError::MissingValue {
            slot,
            field: fields.get(slot).copied().unwrap_or_default().to_string(),
            expected: T::slot_type().to_string(),
        },
        other => shape_error(other.kind_name()),
    })
}

macro_rules! impl_flat_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: FromSlot),+> BindTuple for ($($name,)+) {
            fn descriptor() -> Result<CompositeDescriptor> {
                CompositeDescriptor::flat(vec![$($name::slot_type()),+])
            }

            fn from_composite_at(
                value: CompositeValue,
                offset: usize,
                fields: &[&str],
            ) -> Result<Self> {
                let (leaves, continuation) = value.into_parts();
                if continuation.is_some() {
                    return Err(BindError::ValueShape {
                        slot: offset + leaves.len(),
                        expected: "end of tuple".to_string(),
                        found: "continuation",
                    });
                }
                let mut leaves = leaves.into_iter();
                Ok(($(take_leaf::<$name>(&mut leaves, offset + $idx, fields)?,)+))
            }
        }
    };
}

macro_rules! impl_saturated_tuple {
    ($($name:ident : $idx:tt),+ ; $rest:ident) => {
        impl<$($name: FromSlot,)+ $rest: BindTuple> BindTuple for ($($name,)+ $rest) {
            fn descriptor() -> Result<CompositeDescriptor> {
                CompositeDescriptor::saturated(vec![$($name::slot_type()),+], $rest::descriptor()?)
            }

            fn from_composite_at(
                value: CompositeValue,
                offset: usize,
                fields: &[&str],
            ) -> Result<Self> {
                let continuation_slot = offset + MAX_LEVEL_ARITY - 1;
                let (leaves, continuation) = value.into_parts();
                let continuation = continuation.ok_or_else(|| BindError::ValueShape {
                    slot: continuation_slot,
                    expected: "continuation".to_string(),
                    found: "nothing",
                })?;
                let mut leaves = leaves.into_iter();
                Ok((
                    $(take_leaf::<$name>(&mut leaves, offset + $idx, fields)?,)+
                    $rest::from_composite_at(continuation, continuation_slot, fields)?,
                ))
            }
        }
    };
}

impl_flat_tuple!(A: 0);
impl_flat_tuple!(A: 0, B: 1);
impl_flat_tuple!(A: 0, B: 1, C: 2);
impl_flat_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_flat_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_flat_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_flat_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_saturated_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6; R);
