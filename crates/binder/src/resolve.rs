//! Slot resolver
//!
//! Walks a descriptor's leaf slots in declared order, pairing each with the
//! next name from a shared cursor, then recurses into the continuation of a
//! saturated level with the same object and the same cursor.
//!
//! Names are consumed strictly left to right across all levels and never
//! twice. After a successful outermost call the cursor equals the
//! descriptor's leaf count.

use tuplebind_core::{
    BindError, CompositeDescriptor, CompositeValue, JsonObject, KeyMatching, Result,
    MAX_LEVEL_ARITY,
};

use crate::coerce::coerce;

/// Resolve `descriptor` against `object` with case-insensitive key matching.
///
/// `cursor` is the position of the next unconsumed name and is advanced once
/// per leaf slot.
pub fn resolve<S: AsRef<str>>(
    object: &JsonObject<'_>,
    names: &[S],
    descriptor: &CompositeDescriptor,
    cursor: &mut usize,
) -> Result<CompositeValue> {
    resolve_with(object, names, descriptor, cursor, KeyMatching::CaseInsensitive)
}

/// Resolve `descriptor` against `object` using the given key matching.
pub fn resolve_with<S: AsRef<str>>(
    object: &JsonObject<'_>,
    names: &[S],
    descriptor: &CompositeDescriptor,
    cursor: &mut usize,
    matching: KeyMatching,
) -> Result<CompositeValue> {
    resolve_level(object, names, descriptor, cursor, matching, 0)
}

fn resolve_level<S: AsRef<str>>(
    object: &JsonObject<'_>,
    names: &[S],
    descriptor: &CompositeDescriptor,
    cursor: &mut usize,
    matching: KeyMatching,
    depth: usize,
) -> Result<CompositeValue> {
    debug_assert!(descriptor.arity() <= MAX_LEVEL_ARITY);
    tracing::debug!(
        target: "tuplebind::resolve",
        depth,
        arity = descriptor.arity(),
        cursor = *cursor,
        "resolving level"
    );

    let mut leaves = Vec::with_capacity(descriptor.leaves().len());
    for slot_type in descriptor.leaves() {
        let slot = *cursor;
        let field: &str = match names.get(slot) {
            Some(name) => name.as_ref(),
            None => {
                return Err(BindError::NamesExhausted {
                    slot,
                    available: names.len(),
                })
            }
        };
        *cursor += 1;

        let node = object.lookup(field, matching);
        tracing::trace!(
            target: "tuplebind::resolve",
            slot,
            field,
            present = node.is_some(),
            "resolving slot"
        );
        leaves.push(coerce(node, slot_type).map_err(|err| err.at(slot, field))?);
    }

    // The continuation is finished before this level is assembled.
    let continuation = match descriptor.continuation() {
        Some(rest) => Some(resolve_level(
            object,
            names,
            rest,
            cursor,
            matching,
            depth + 1,
        )?),
        None => None,
    };

    Ok(CompositeValue::new(leaves, continuation))
}
