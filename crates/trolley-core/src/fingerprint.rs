//! Content fingerprint for delta payloads.
//!
//! The host channel re-notifies on *any* change to its documents, including
//! changes caused by this engine's own writes. The fingerprint of the last
//! processed delta payload is what lets the reconciler tell a genuinely new
//! payload from an echo: comparison is by canonical serialized content,
//! never by reference identity.

use serde_json::Value;

/// Canonical identity of a delta payload, compared by structural equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fingerprint {
    /// No payload has been seen yet. Distinct from any real payload's
    /// serialization, including an empty one.
    Absent,
    /// Canonical serialization of a payload. `serde_json::Map` keeps its
    /// keys sorted, so equal content always yields an equal string.
    Payload(String),
    /// The payload refused to serialize. Matches itself, so an
    /// unserializable payload is still suppressed on repeat delivery, but
    /// never matches a normal payload.
    Unserializable,
}

impl Fingerprint {
    /// Fingerprints the current delta payload, if any.
    pub fn of(payload: Option<&Value>) -> Self {
        match payload {
            None => Self::Absent,
            Some(value) => match serde_json::to_string(value) {
                Ok(canonical) => Self::Payload(canonical),
                Err(_) => Self::Unserializable,
            },
        }
    }
}

impl Default for Fingerprint {
    fn default() -> Self {
        Self::Absent
    }
}
