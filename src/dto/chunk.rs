//! Streamed availability results

use serde_json::Value;

/// Completion status reported by a poll response.
///
/// The server may grow new status values; anything that is not `COMPLETE`
/// is treated as `Partial` so old clients keep streaming instead of
/// aborting on an unknown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChunkStatus {
    #[default]
    Partial,
    Complete,
}

impl ChunkStatus {
    pub fn parse(s: &str) -> Self {
        if s == "COMPLETE" {
            ChunkStatus::Complete
        } else {
            ChunkStatus::Partial
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ChunkStatus::Complete)
    }
}

/// One unit of streamed availability output.
///
/// A chunk with `status == Complete` is always the last chunk emitted for a
/// search. The full decoded poll response is preserved in `raw` for callers
/// needing provider-specific fields the SDK does not model.
#[derive(Debug, Clone)]
pub struct AvailabilityChunk {
    /// Ordered offer records, passed through opaquely
    pub items: Vec<Value>,
    pub status: ChunkStatus,
    /// Replacement cursor position; `None` leaves the session cursor as-is
    pub cursor: Option<u64>,
    /// Full decoded poll response
    pub raw: Value,
}

impl AvailabilityChunk {
    /// Decode a poll response leniently: missing or mistyped fields degrade
    /// to an empty item list, `Partial` status, and no cursor, so one
    /// malformed response never aborts the stream or loses position.
    pub fn from_value(data: Value) -> Self {
        let items = data
            .get("items")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();

        let status = data
            .get("status")
            .and_then(|v| v.as_str())
            .map(ChunkStatus::parse)
            .unwrap_or_default();

        let cursor = data.get("cursor").and_then(|v| v.as_u64());

        AvailabilityChunk {
            items,
            status,
            cursor,
            raw: data,
        }
    }
}

/// Acknowledgement of an availability submit.
///
/// An absent or empty `request_id` means the platform has nothing to search
/// for these criteria (for example, no matching agreements); it is not an
/// error.
#[derive(Debug, Clone)]
pub struct SubmitAck {
    pub request_id: Option<String>,
    pub raw: Value,
}

impl SubmitAck {
    pub fn from_value(data: Value) -> Self {
        let request_id = data
            .get("request_id")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        SubmitAck {
            request_id,
            raw: data,
        }
    }
}
