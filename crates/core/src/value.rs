//! Runtime values produced by decoding
//!
//! - [`SlotValue`]: the value of one leaf slot
//! - [`DecodedObject`]: an object slot decoded by serde
//! - [`CompositeValue`]: one decoded level plus its continuation, shaped like
//!   the descriptor it was resolved against

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

/// An object slot decoded by serde.
///
/// Keeps the canonical JSON text the object was decoded from. Equality
/// compares the target type name and the canonical text, so two decodes of
/// the same input compare equal.
#[derive(Clone)]
pub struct DecodedObject {
    type_name: &'static str,
    canonical: String,
    value: Arc<dyn Any + Send + Sync>,
}

impl DecodedObject {
    pub(crate) fn new(
        type_name: &'static str,
        canonical: String,
        value: Arc<dyn Any + Send + Sync>,
    ) -> Self {
        DecodedObject {
            type_name,
            canonical,
            value,
        }
    }

    /// Name of the Rust type the object was decoded into.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Canonical JSON text of the source subtree.
    pub fn canonical_json(&self) -> &str {
        &self.canonical
    }

    /// Borrow the decoded value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Take the decoded value out if it is a `T` and not shared.
    ///
    /// Returns `self` unchanged on failure.
    pub fn take<T: Any + Send + Sync>(self) -> Result<T, Self> {
        let DecodedObject {
            type_name,
            canonical,
            value,
        } = self;
        match value.downcast::<T>() {
            Ok(typed) => match Arc::try_unwrap(typed) {
                Ok(inner) => Ok(inner),
                Err(shared) => Err(DecodedObject {
                    type_name,
                    canonical,
                    value: shared,
                }),
            },
            Err(value) => Err(DecodedObject {
                type_name,
                canonical,
                value,
            }),
        }
    }
}

impl PartialEq for DecodedObject {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.canonical == other.canonical
    }
}

impl fmt::Debug for DecodedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedObject")
            .field("type_name", &self.type_name)
            .field("canonical", &self.canonical)
            .finish()
    }
}

/// Value of one leaf slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotValue {
    /// No value: nullable slot with absent or null input
    Null,
    /// Boolean
    Bool(bool),
    /// Any signed integer width
    Int(i64),
    /// Any unsigned integer width
    UInt(u64),
    /// Either float width
    Float(f64),
    /// Decimal
    Decimal(Decimal),
    /// Text
    Text(String),
    /// Structured identifier
    Identifier(Uuid),
    /// Decoded object
    Object(DecodedObject),
}

impl SlotValue {
    /// Short kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SlotValue::Null => "null",
            SlotValue::Bool(_) => "bool",
            SlotValue::Int(_) => "signed integer",
            SlotValue::UInt(_) => "unsigned integer",
            SlotValue::Float(_) => "float",
            SlotValue::Decimal(_) => "decimal",
            SlotValue::Text(_) => "string",
            SlotValue::Identifier(_) => "identifier",
            SlotValue::Object(_) => "object",
        }
    }

    /// Whether this is the no-value representation.
    pub fn is_null(&self) -> bool {
        matches!(self, SlotValue::Null)
    }

    /// Boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SlotValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Signed integer payload.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SlotValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Unsigned integer payload.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            SlotValue::UInt(n) => Some(*n),
            _ => None,
        }
    }

    /// Floating-point payload.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SlotValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Decimal payload.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            SlotValue::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Text payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SlotValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Identifier payload.
    pub fn as_identifier(&self) -> Option<Uuid> {
        match self {
            SlotValue::Identifier(id) => Some(*id),
            _ => None,
        }
    }

    /// Decoded object payload.
    pub fn as_object(&self) -> Option<&DecodedObject> {
        match self {
            SlotValue::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

/// Decoded composite, one level at a time.
///
/// `leaves` holds the leaf slots of this level in declared order;
/// `continuation` is present exactly when the level was saturated.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeValue {
    leaves: Vec<SlotValue>,
    continuation: Option<Box<CompositeValue>>,
}

impl CompositeValue {
    /// Assemble a level from its leaves and optional continuation.
    pub fn new(leaves: Vec<SlotValue>, continuation: Option<CompositeValue>) -> Self {
        CompositeValue {
            leaves,
            continuation: continuation.map(Box::new),
        }
    }

    /// Slot count of this level, counting the continuation as one slot.
    pub fn arity(&self) -> usize {
        self.leaves.len() + usize::from(self.continuation.is_some())
    }

    /// Leaf slots across this level and every continuation.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len() + self.continuation.as_ref().map_or(0, |rest| rest.leaf_count())
    }

    /// Leaf slots of this level only.
    pub fn level_leaves(&self) -> &[SlotValue] {
        &self.leaves
    }

    /// Continuation value of a saturated level.
    pub fn continuation(&self) -> Option<&CompositeValue> {
        self.continuation.as_deref()
    }

    /// Leaf at a flattened index.
    pub fn get(&self, index: usize) -> Option<&SlotValue> {
        match self.leaves.get(index) {
            Some(value) => Some(value),
            None => self
                .continuation
                .as_ref()
                .and_then(|rest| rest.get(index - self.leaves.len())),
        }
    }

    /// Iterate all leaves in flattened order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            current: self.leaves.iter(),
            next: self.continuation.as_deref(),
        }
    }

    /// Split into this level's leaves and the continuation.
    pub fn into_parts(self) -> (Vec<SlotValue>, Option<CompositeValue>) {
        (self.leaves, self.continuation.map(|rest| *rest))
    }

    /// All leaves in flattened order.
    pub fn into_leaves(self) -> Vec<SlotValue> {
        let mut out = Vec::with_capacity(self.leaf_count());
        let mut level = Some(self);
        while let Some(current) = level {
            let (leaves, rest) = current.into_parts();
            out.extend(leaves);
            level = rest;
        }
        out
    }
}

/// Iterator over the leaves of a [`CompositeValue`] in flattened order.
pub struct Leaves<'a> {
    current: std::slice::Iter<'a, SlotValue>,
    next: Option<&'a CompositeValue>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a SlotValue;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.current.next() {
                return Some(value);
            }
            let level = self.next.take()?;
            self.current = level.leaves.iter();
            self.next = level.continuation.as_deref();
        }
    }
}
