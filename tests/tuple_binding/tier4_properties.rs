//! Tier 4: properties over generated inputs.

use crate::test_utils::*;
use proptest::prelude::*;
use tuplebind::{format_identifier, CompositeDescriptor, IdentifierLayout, SlotType, Uuid};

proptest! {
    #[test]
    fn prop_decoding_twice_is_equal(n in 1usize..30) {
        let (payload, names) = numbered_object(n);
        let descriptor = CompositeDescriptor::from_leaves(vec![SlotType::i64(); n]).unwrap();
        let first = tuplebind::bind_value(&payload, &names, &descriptor).unwrap();
        let second = tuplebind::bind_value(&payload, &names, &descriptor).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_every_layout_reads_same_identifier(bytes in any::<[u8; 16]>()) {
        let id = Uuid::from_bytes(bytes);
        for layout in IdentifierLayout::ALL {
            let payload = serde_json::json!({"id": format_identifier(id, layout)});
            let (decoded,): (Uuid,) = tuplebind::from_value(&payload, &["ID"]).unwrap();
            prop_assert_eq!(decoded, id);
        }
    }

    #[test]
    fn prop_upper_case_names_match(n in 1usize..10) {
        let (payload, names) = numbered_object(n);
        let upper: Vec<String> = names.iter().map(|name| name.to_uppercase()).collect();
        let descriptor = CompositeDescriptor::from_leaves(vec![SlotType::i64(); n]).unwrap();
        let exact = tuplebind::bind_value(&payload, &names, &descriptor).unwrap();
        let folded = tuplebind::bind_value(&payload, &upper, &descriptor).unwrap();
        prop_assert_eq!(exact, folded);
    }
}
