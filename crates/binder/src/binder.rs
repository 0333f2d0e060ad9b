//! Binder facade
//!
//! [`Binder`] pairs [`BindOptions`] with the resolver. Every call starts a
//! fresh cursor at zero, so a binder holds no per-decode state and can be
//! shared freely.

use serde_json::Value;
use tuplebind_core::{BindError, CompositeDescriptor, CompositeValue, JsonObject, Result};

use crate::options::{BindOptions, ExtraNames};
use crate::resolve::resolve_with;
use crate::typed::BindTuple;

/// Decodes JSON objects into positional composites.
///
/// ```
/// use serde_json::json;
/// use tuplebind_binder::{Binder, CompositeDescriptor, SlotType, SlotValue};
///
/// let descriptor = CompositeDescriptor::from_leaves(vec![SlotType::text(), SlotType::i32()]).unwrap();
/// let value = Binder::new()
///     .bind_value(&json!({"Name": "Ada", "age": 36}), &["name", "Age"], &descriptor)
///     .unwrap();
/// assert_eq!(value.get(1), Some(&SlotValue::Int(36)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Binder {
    options: BindOptions,
}

impl Binder {
    /// Binder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binder with the given options.
    pub fn with_options(options: BindOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &BindOptions {
        &self.options
    }

    /// Decode a parsed JSON value.
    ///
    /// `names[i]` is the field read for the `i`-th leaf slot in flattened
    /// order.
    pub fn bind_value<S: AsRef<str>>(
        &self,
        payload: &Value,
        names: &[S],
        descriptor: &CompositeDescriptor,
    ) -> Result<CompositeValue> {
        let object = JsonObject::from_value(payload)?;
        let mut cursor = 0;
        let value = resolve_with(
            &object,
            names,
            descriptor,
            &mut cursor,
            self.options.key_matching,
        )?;
        self.check_extra_names(cursor, names.len())?;
        Ok(value)
    }

    /// Decode JSON text.
    pub fn bind_str<S: AsRef<str>>(
        &self,
        payload: &str,
        names: &[S],
        descriptor: &CompositeDescriptor,
    ) -> Result<CompositeValue> {
        self.bind_slice(payload.as_bytes(), names, descriptor)
    }

    /// Decode JSON bytes.
    pub fn bind_slice<S: AsRef<str>>(
        &self,
        payload: &[u8],
        names: &[S],
        descriptor: &CompositeDescriptor,
    ) -> Result<CompositeValue> {
        let value: Value = serde_json::from_slice(payload).map_err(BindError::Json)?;
        self.bind_value(&value, names, descriptor)
    }

    /// Decode a parsed JSON value into the tuple type `T`.
    ///
    /// ```
    /// use serde_json::json;
    /// use tuplebind_binder::Binder;
    ///
    /// let (name, age): (String, Option<i32>) = Binder::new()
    ///     .bind(&json!({"name": "Ada"}), &["name", "age"])
    ///     .unwrap();
    /// assert_eq!(name, "Ada");
    /// assert_eq!(age, None);
    /// ```
    pub fn bind<T: BindTuple, S: AsRef<str>>(&self, payload: &Value, names: &[S]) -> Result<T> {
        let descriptor = T::descriptor()?;
        let value = self.bind_value(payload, names, &descriptor)?;
        let fields: Vec<&str> = names.iter().map(|name| AsRef::<str>::as_ref(name)).collect();
        T::from_composite_named(value, &fields)
    }

    /// Decode JSON text into the tuple type `T`.
    pub fn bind_str_typed<T: BindTuple, S: AsRef<str>>(
        &self,
        payload: &str,
        names: &[S],
    ) -> Result<T> {
        let value: Value = serde_json::from_str(payload).map_err(BindError::Json)?;
        self.bind(&value, names)
    }

    fn check_extra_names(&self, consumed: usize, supplied: usize) -> Result<()> {
        if supplied <= consumed {
            return Ok(());
        }
        let extra = supplied - consumed;
        match self.options.extra_names {
            ExtraNames::Ignore => {
                tracing::debug!(
                    target: "tuplebind::resolve",
                    consumed,
                    extra,
                    "ignoring unused field names"
                );
                Ok(())
            }
            ExtraNames::Reject => Err(BindError::ExtraNames { consumed, extra }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tuplebind_core::{ErrorKind, KeyMatching, SlotType, SlotValue};

    fn two_ints() -> CompositeDescriptor {
        CompositeDescriptor::from_leaves(vec![SlotType::i32(), SlotType::i32()]).unwrap()
    }

    #[test]
    fn test_bind_value() {
        let value = Binder::new()
            .bind_value(&json!({"a": 1, "b": 2}), &["a", "b"], &two_ints())
            .unwrap();
        assert_eq!(value.level_leaves(), &[SlotValue::Int(1), SlotValue::Int(2)]);
    }

    #[test]
    fn test_root_not_object() {
        let err = Binder::new()
            .bind_value(&json!([1, 2]), &["a", "b"], &two_ints())
            .unwrap_err();
        assert!(matches!(err, BindError::RootNotObject { found: "array" }));
        assert_eq!(err.kind(), ErrorKind::InputShape);
    }

    #[test]
    fn test_bind_str_malformed() {
        let err = Binder::new()
            .bind_str("{\"a\": ", &["a", "b"], &two_ints())
            .unwrap_err();
        assert!(matches!(err, BindError::Json(_)));
    }

    #[test]
    fn test_bind_slice() {
        let value = Binder::new()
            .bind_slice(br#"{"A": 7}"#, &["a", "b"], &two_ints())
            .unwrap();
        assert_eq!(value.level_leaves(), &[SlotValue::Int(7), SlotValue::Int(0)]);
    }

    #[test]
    fn test_extra_names_ignored_by_default() {
        let value = Binder::new()
            .bind_value(&json!({"a": 1}), &["a", "b", "c"], &two_ints())
            .unwrap();
        assert_eq!(value.leaf_count(), 2);
    }

    #[test]
    fn test_extra_names_rejected() {
        let binder = Binder::with_options(BindOptions::new().extra_names(ExtraNames::Reject));
        match binder.bind_value(&json!({}), &["a", "b", "c"], &two_ints()) {
            Err(BindError::ExtraNames { consumed, extra }) => {
                assert_eq!(consumed, 2);
                assert_eq!(extra, 1);
            }
            other => panic!("Expected ExtraNames, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_key_matching_option() {
        let binder = Binder::with_options(BindOptions::new().key_matching(KeyMatching::Exact));
        let value = binder
            .bind_value(&json!({"A": 1, "b": 2}), &["a", "b"], &two_ints())
            .unwrap();
        assert_eq!(value.level_leaves(), &[SlotValue::Int(0), SlotValue::Int(2)]);
        assert_eq!(binder.options().key_matching, KeyMatching::Exact);
    }

    #[test]
    fn test_bind_typed() {
        let (flag, name): (bool, String) = Binder::new()
            .bind_str_typed(r#"{"flag": true}"#, &["flag", "name"])
            .unwrap();
        assert!(flag);
        assert!(name.is_empty());
    }

    #[test]
    fn test_bind_typed_names_exhausted() {
        let err = Binder::new()
            .bind::<(bool, bool), _>(&json!({}), &["only"])
            .unwrap_err();
        assert_eq!(err.slot(), Some(1));
    }
}
