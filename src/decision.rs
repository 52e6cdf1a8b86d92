//! Stop decision for the continue hook.
//!
//! Every check is ordered and fail-open: the first one that cannot confirm a
//! non-blank continue message lets the session stop.

use crate::input;
use crate::sentinel::SentinelState;

/// Why the hook let the session stop. All variants look the same to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowReason {
    MalformedInput,
    SentinelAbsent,
    SentinelUnreadable,
    SentinelBlank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow(AllowReason),
    /// Deny the stop and feed `reason` back to the agent
    Block { reason: String },
}

/// Decide from raw stdin bytes. `probe` only runs once the input has parsed.
pub fn decide<F>(input_bytes: &[u8], probe: F) -> Decision
where
    F: FnOnce() -> SentinelState,
{
    match input::parse_payload(input_bytes) {
        Some(_) => evaluate(probe()),
        None => Decision::Allow(AllowReason::MalformedInput),
    }
}

/// Decide from the sentinel file alone, for input that already parsed.
pub fn evaluate(state: SentinelState) -> Decision {
    let bytes = match state {
        SentinelState::Absent => return Decision::Allow(AllowReason::SentinelAbsent),
        SentinelState::Unreadable(kind) => {
            tracing::debug!(?kind, "sentinel could not be read");
            return Decision::Allow(AllowReason::SentinelUnreadable);
        }
        SentinelState::Present(bytes) => bytes,
    };

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("sentinel is not UTF-8: {}", e);
            return Decision::Allow(AllowReason::SentinelUnreadable);
        }
    };

    let reason = content.trim();
    if reason.is_empty() {
        Decision::Allow(AllowReason::SentinelBlank)
    } else {
        Decision::Block {
            reason: reason.to_string(),
        }
    }
}
