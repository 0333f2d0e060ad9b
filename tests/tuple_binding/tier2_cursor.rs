//! Tier 2: several composites read from one name list.

use crate::test_utils::*;
use tuplebind::{CompositeDescriptor, KeyMatching, SlotType, SlotValue};

#[test]
fn test_consecutive_composites_share_name_list() {
    let (payload, names) = numbered_object(12);
    let first = CompositeDescriptor::from_leaves(vec![SlotType::i32(); 3]).unwrap();
    let second = CompositeDescriptor::from_leaves(vec![SlotType::i64(); 9]).unwrap();

    let (a, next) =
        tuplebind::resolve_from(&payload, &names, &first, 0, KeyMatching::CaseInsensitive)
            .unwrap();
    assert_eq!(next, 3);
    assert_eq!(a.leaf_count(), 3);

    let (b, next) =
        tuplebind::resolve_from(&payload, &names, &second, next, KeyMatching::CaseInsensitive)
            .unwrap();
    assert_eq!(next, 12);
    assert_eq!(b.get(0), Some(&SlotValue::Int(3)));
    assert_eq!(b.get(8), Some(&SlotValue::Int(11)));
    assert_eq!(b.continuation().map(|rest| rest.arity()), Some(2));
}

#[test]
fn test_cursor_past_end_fails() {
    let (payload, names) = numbered_object(2);
    let descriptor = CompositeDescriptor::from_leaves(vec![SlotType::i32()]).unwrap();

    let err = tuplebind::resolve_from(&payload, &names, &descriptor, 2, KeyMatching::Exact)
        .unwrap_err();
    assert_eq!(err.slot(), Some(2));
}
