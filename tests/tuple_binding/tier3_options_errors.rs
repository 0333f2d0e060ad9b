//! Tier 3: binder options and error reporting.

use serde_json::json;
use tuplebind::{BindError, BindOptions, Binder, ErrorKind, ExtraNames, KeyMatching};

#[test]
fn test_options_from_config_json() {
    let options: BindOptions =
        serde_json::from_value(json!({"key_matching": "Exact", "extra_names": "Reject"}))
            .unwrap();
    let binder = Binder::with_options(options);

    let (name,): (Option<String>,) = binder.bind(&json!({"Name": "x"}), &["name"]).unwrap();
    assert_eq!(name, None);

    let err = binder
        .bind::<(Option<String>,), _>(&json!({}), &["name", "extra"])
        .unwrap_err();
    assert!(matches!(err, BindError::ExtraNames { consumed: 1, extra: 1 }));
    assert_eq!(err.kind(), ErrorKind::InputShape);
}

#[test]
fn test_default_options_ignore_extra_names() {
    let binder = Binder::new();
    assert_eq!(binder.options().extra_names, ExtraNames::Ignore);
    assert_eq!(binder.options().key_matching, KeyMatching::CaseInsensitive);

    let (a,): (i32,) = binder.bind(&json!({"A": 3}), &["a", "b", "c"]).unwrap();
    assert_eq!(a, 3);
}

#[test]
fn test_error_messages_name_slot_and_field() {
    let err = tuplebind::from_value::<(bool, i32), _>(&json!({"flag": true, "count": 1.5}), &[
        "flag", "count",
    ])
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("slot 1"), "{}", message);
    assert!(message.contains("count"), "{}", message);
    assert!(message.contains("i32"), "{}", message);
}

#[test]
fn test_malformed_payload() {
    let err = tuplebind::from_str::<(bool,), _>("{not json", &["a"]).unwrap_err();
    assert!(matches!(err, BindError::Json(_)));
    assert_eq!(err.kind(), ErrorKind::InputShape);
}

#[test]
fn test_bool_string_is_mismatch() {
    let err = tuplebind::from_value::<(bool,), _>(&json!({"flag": "true"}), &["flag"])
        .unwrap_err();
    assert!(matches!(err, BindError::TypeMismatch { slot: 0, .. }));
}
