//! Structured identifier text layouts
//!
//! A structured identifier is a 128-bit UUID. Five interchangeable text
//! layouts are accepted:
//!
//! | Layout | Example |
//! |--------|---------|
//! | Simple | `728cb7a1b8eb471ea90df17531baf918` |
//! | Hyphenated | `728cb7a1-b8eb-471e-a90d-f17531baf918` |
//! | Braced | `{728cb7a1-b8eb-471e-a90d-f17531baf918}` |
//! | Parenthesized | `(728cb7a1-b8eb-471e-a90d-f17531baf918)` |
//! | HexTuple | `{0x728cb7a1,0xb8eb,0x471e,{0xa9,0x0d,0xf1,0x75,0x31,0xba,0xf9,0x18}}` |
//!
//! Hex digits are case-insensitive; surrounding whitespace is ignored, as is
//! whitespace between the fields of a hex tuple.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SIMPLE_LEN: usize = 32;
const HYPHENATED_LEN: usize = 36;

/// Text layout of a structured identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierLayout {
    /// 32 hex digits
    Simple,
    /// 8-4-4-4-12 hex digits separated by hyphens
    Hyphenated,
    /// Hyphenated, enclosed in braces
    Braced,
    /// Hyphenated, enclosed in parentheses
    Parenthesized,
    /// Braced tuple of `0x`-prefixed fields, last eight as a nested tuple of bytes
    HexTuple,
}

impl IdentifierLayout {
    /// Every layout, in documentation order.
    pub const ALL: [IdentifierLayout; 5] = [
        IdentifierLayout::Simple,
        IdentifierLayout::Hyphenated,
        IdentifierLayout::Braced,
        IdentifierLayout::Parenthesized,
        IdentifierLayout::HexTuple,
    ];
}

/// Parse an identifier written in any accepted layout.
pub fn parse_identifier(input: &str) -> Option<Uuid> {
    parse_with_layout(input).map(|(id, _)| id)
}

/// Parse an identifier and report which layout it was written in.
pub fn parse_with_layout(input: &str) -> Option<(Uuid, IdentifierLayout)> {
    let input = input.trim();
    if let Some(inner) = input.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        // Hex tuples may be spaced after separators.
        let compact: String = inner.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        if compact.starts_with("0x") || compact.starts_with("0X") {
            return parse_hex_tuple(&compact).map(|id| (id, IdentifierLayout::HexTuple));
        }
        return parse_hyphenated(inner).map(|id| (id, IdentifierLayout::Braced));
    }
    if let Some(inner) = input.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        return parse_hyphenated(inner).map(|id| (id, IdentifierLayout::Parenthesized));
    }
    match input.len() {
        SIMPLE_LEN => Uuid::try_parse(input)
            .ok()
            .map(|id| (id, IdentifierLayout::Simple)),
        HYPHENATED_LEN => parse_hyphenated(input).map(|id| (id, IdentifierLayout::Hyphenated)),
        _ => None,
    }
}

/// Format an identifier in the given layout, lowercase.
pub fn format_identifier(id: Uuid, layout: IdentifierLayout) -> String {
    match layout {
        IdentifierLayout::Simple => id.simple().to_string(),
        IdentifierLayout::Hyphenated => id.hyphenated().to_string(),
        IdentifierLayout::Braced => id.braced().to_string(),
        IdentifierLayout::Parenthesized => format!("({})", id.hyphenated()),
        IdentifierLayout::HexTuple => {
            let (d1, d2, d3, d4) = id.as_fields();
            let bytes: Vec<String> = d4.iter().map(|b| format!("0x{:02x}", b)).collect();
            format!(
                "{{0x{:08x},0x{:04x},0x{:04x},{{{}}}}}",
                d1,
                d2,
                d3,
                bytes.join(",")
            )
        }
    }
}

fn parse_hyphenated(input: &str) -> Option<Uuid> {
    if input.len() != HYPHENATED_LEN {
        return None;
    }
    Uuid::try_parse(input).ok()
}

/// Parses the body of a hex tuple, outer braces already removed:
/// `0xXXXXXXXX,0xXXXX,0xXXXX,{0xXX,...8 bytes}`.
fn parse_hex_tuple(body: &str) -> Option<Uuid> {
    let (head, tail) = body.split_once(",{")?;
    let tail = tail.strip_suffix('}')?;

    let mut fields = head.split(',');
    let d1 = u32::try_from(hex_field(fields.next()?, 8)?).ok()?;
    let d2 = u16::try_from(hex_field(fields.next()?, 4)?).ok()?;
    let d3 = u16::try_from(hex_field(fields.next()?, 4)?).ok()?;
    if fields.next().is_some() {
        return None;
    }

    let mut d4 = [0u8; 8];
    let mut bytes = tail.split(',');
    for byte in d4.iter_mut() {
        *byte = u8::try_from(hex_field(bytes.next()?, 2)?).ok()?;
    }
    if bytes.next().is_some() {
        return None;
    }

    Some(Uuid::from_fields(d1, d2, d3, &d4))
}

/// One `0x`-prefixed field of at most `max_digits` hex digits.
fn hex_field(field: &str, max_digits: usize) -> Option<u64> {
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))?;
    if digits.is_empty()
        || digits.len() > max_digits
        || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}
