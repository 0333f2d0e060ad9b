//! Slot types
//!
//! A slot type is the declared type of one leaf slot of a composite. The set
//! is closed: coercion dispatches on these tags and nothing else.
//!
//! | Tag | Absent input | Present input |
//! |-----|--------------|---------------|
//! | `Scalar(Text)` | no value | JSON string |
//! | other `Scalar` | zero default | matching JSON scalar |
//! | `Identifier` | nil identifier | string in one of five layouts |
//! | `Object` | no value | subtree decoded by serde |
//! | `Nullable(inner)` | no value | coerced as `inner` |

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::value::DecodedObject;

/// Scalar slot types converted directly from a JSON scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// JSON boolean
    Bool,
    /// Signed 8-bit integer
    I8,
    /// Signed 16-bit integer
    I16,
    /// Signed 32-bit integer
    I32,
    /// Signed 64-bit integer
    I64,
    /// Unsigned 8-bit integer
    U8,
    /// Unsigned 16-bit integer
    U16,
    /// Unsigned 32-bit integer
    U32,
    /// Unsigned 64-bit integer
    U64,
    /// Single-precision float
    F32,
    /// Double-precision float
    F64,
    /// High-precision decimal
    Decimal,
    /// JSON string
    Text,
}

impl ScalarType {
    /// Short name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Bool => "bool",
            ScalarType::I8 => "i8",
            ScalarType::I16 => "i16",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::U8 => "u8",
            ScalarType::U16 => "u16",
            ScalarType::U32 => "u32",
            ScalarType::U64 => "u64",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
            ScalarType::Decimal => "decimal",
            ScalarType::Text => "string",
        }
    }
}

type DecodeFn = fn(&str) -> Result<Arc<dyn Any + Send + Sync>, serde_json::Error>;

/// A general object type, decoded by serde from canonical JSON text.
///
/// Built once per Rust type with [`ObjectType::of`]. Two object types are
/// equal when they decode into the same Rust type.
#[derive(Clone)]
pub struct ObjectType {
    type_id: TypeId,
    type_name: &'static str,
    decode: DecodeFn,
}

impl ObjectType {
    /// Object type decoding into `T`.
    pub fn of<T>() -> Self
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        ObjectType {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            decode: decode_as::<T>,
        }
    }

    /// Name of the Rust type objects decode into.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether this object type decodes into `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Decode canonical JSON text into the target type.
    pub fn decode(&self, canonical: String) -> Result<DecodedObject, serde_json::Error> {
        let value = (self.decode)(&canonical)?;
        Ok(DecodedObject::new(self.type_name, canonical, value))
    }
}

fn decode_as<T>(text: &str) -> Result<Arc<dyn Any + Send + Sync>, serde_json::Error>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let value: T = serde_json::from_str(text)?;
    Ok(Arc::new(value))
}

impl PartialEq for ObjectType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ObjectType {}

impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectType").field(&self.type_name).finish()
    }
}

/// Declared type of one leaf slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotType {
    /// Scalar converted directly from a JSON scalar
    Scalar(ScalarType),
    /// 128-bit structured identifier (UUID)
    Identifier,
    /// Any other type, decoded by serde
    Object(ObjectType),
    /// Explicitly nullable wrapper over another slot type
    Nullable(Box<SlotType>),
}

impl SlotType {
    /// Boolean slot.
    pub fn bool() -> Self {
        SlotType::Scalar(ScalarType::Bool)
    }

    /// 32-bit signed integer slot.
    pub fn i32() -> Self {
        SlotType::Scalar(ScalarType::I32)
    }

    /// 64-bit signed integer slot.
    pub fn i64() -> Self {
        SlotType::Scalar(ScalarType::I64)
    }

    /// Double-precision float slot.
    pub fn f64() -> Self {
        SlotType::Scalar(ScalarType::F64)
    }

    /// Decimal slot.
    pub fn decimal() -> Self {
        SlotType::Scalar(ScalarType::Decimal)
    }

    /// Text slot.
    pub fn text() -> Self {
        SlotType::Scalar(ScalarType::Text)
    }

    /// Identifier slot.
    pub fn identifier() -> Self {
        SlotType::Identifier
    }

    /// Object slot decoding into `T`.
    pub fn object<T>() -> Self
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        SlotType::Object(ObjectType::of::<T>())
    }

    /// Wrap `inner` as nullable. Already-wrapped types are returned as is.
    pub fn nullable(inner: SlotType) -> Self {
        match inner {
            SlotType::Nullable(_) => inner,
            other => SlotType::Nullable(Box::new(other)),
        }
    }

    /// Whether absent input yields the no-value representation rather than
    /// a zero default.
    ///
    /// Text and object slots are reference-like and always nullable; other
    /// scalars and identifiers need an explicit [`SlotType::Nullable`].
    pub fn is_nullable(&self) -> bool {
        matches!(
            self,
            SlotType::Scalar(ScalarType::Text) | SlotType::Object(_) | SlotType::Nullable(_)
        )
    }
}

impl From<ScalarType> for SlotType {
    fn from(scalar: ScalarType) -> Self {
        SlotType::Scalar(scalar)
    }
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotType::Scalar(scalar) => write!(f, "{}", scalar.name()),
            SlotType::Identifier => write!(f, "identifier"),
            SlotType::Object(object) => write!(f, "{}", object.type_name()),
            SlotType::Nullable(inner) => write!(f, "nullable {}", inner),
        }
    }
}
