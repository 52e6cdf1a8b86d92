use serde::de::{Deserialize, IgnoredAny};

/// Marker for a well-formed hook input.
///
/// The stop decision never looks inside the payload, so nothing is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookPayload;

/// Check that stdin holds exactly one JSON value. Returns None for anything
/// else, including non-UTF-8 input.
///
/// The value is skipped rather than built, so deep nesting, out-of-range
/// numbers and lone surrogate escapes are still accepted.
pub fn parse_payload(bytes: &[u8]) -> Option<HookPayload> {
    let text = std::str::from_utf8(bytes).ok()?;
    let mut de = serde_json::Deserializer::from_str(text);
    IgnoredAny::deserialize(&mut de).ok()?;
    de.end().ok()?;
    Some(HookPayload)
}
