//! Tier 1: decoding through the facade functions.

use crate::test_utils::*;
use serde_json::json;
use tuplebind::{Json, SlotType, SlotValue, Uuid};

#[test]
fn test_from_value_root_example() {
    init_tracing();
    let payload = json!({
        "User": user_json(),
        "SomeData": "Test String Root",
        "NullCheck": null,
        "BooleanCheck": true,
        "ComplexNullCheck": null
    });
    let names = ["User", "SomeData", "NullCheck", "BooleanCheck", "ComplexNullCheck"];

    let (user, data, null_check, flag, complex): (
        Json<TestUser>,
        String,
        Option<String>,
        bool,
        Option<Json<TestUser>>,
    ) = tuplebind::from_value(&payload, &names).unwrap();

    assert_eq!(user.integer, 444);
    assert_eq!(user.string, "Test");
    assert_eq!(data, "Test String Root");
    assert!(null_check.is_none());
    assert!(flag);
    assert!(complex.is_none());
}

#[test]
fn test_from_str_nested() {
    let text = r#"{
        "a": 1, "b": 2, "c": 3, "d": 4, "e": 5, "f": 6, "g": 7,
        "clientId": "(728cb7a1-b8eb-471e-a90d-f17531baf918)",
        "label": "nine"
    }"#;
    let names = ["a", "b", "c", "d", "e", "f", "g", "clientId", "label"];

    let (a, _, _, _, _, _, g, (client_id, label)): (
        u8,
        u16,
        u32,
        u64,
        i8,
        i16,
        i32,
        (Uuid, String),
    ) = tuplebind::from_str(text, &names).unwrap();

    assert_eq!(a, 1);
    assert_eq!(g, 7);
    assert_eq!(client_id.to_string(), "728cb7a1-b8eb-471e-a90d-f17531baf918");
    assert_eq!(label, "nine");
}

#[test]
fn test_bind_value_with_descriptor() {
    let descriptor = tuplebind::CompositeDescriptor::from_leaves(vec![
        SlotType::object::<TestUser>(),
        SlotType::nullable(SlotType::f64()),
    ])
    .unwrap();
    let payload = json!({"user": user_json()});

    let value = tuplebind::bind_value(&payload, &["user", "score"], &descriptor).unwrap();
    let user = value.get(0).and_then(SlotValue::as_object).unwrap();
    assert_eq!(user.type_name(), std::any::type_name::<TestUser>());
    assert_eq!(user.downcast_ref::<TestUser>().map(|u| u.double), Some(1.44));
    assert_eq!(value.get(1), Some(&SlotValue::Null));
}
