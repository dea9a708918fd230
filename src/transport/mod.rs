//! Transport abstraction
//!
//! The SDK talks to the booking platform through the `Transport` capability
//! trait. Two interchangeable implementations exist: [`rest::RestTransport`]
//! (HTTP+JSON) and [`grpc::GrpcTransport`] (RPC, currently a stub pending
//! proto generation). The clients above this seam never branch on which
//! implementation is active.

pub mod grpc;
pub mod rest;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::dto::{AvailabilityChunk, BookingResult, SubmitAck};
use crate::error::Result;

pub use grpc::GrpcTransport;
pub use rest::RestTransport;

/// Capability set required by the SDK clients.
///
/// Implementations own any stateful connection resource and must be safe to
/// share across concurrent searches; all suspension points honor
/// cancellation by drop and are bounded by the configured per-call timeout.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Submit an availability search; the ack carries the opaque request id
    /// to poll with, or nothing when the platform has nothing to search
    async fn submit_availability(&self, criteria: &Value) -> Result<SubmitAck>;

    /// Long-poll for availability results after `since_seq`. The server may
    /// hold the call open for up to `wait` before responding.
    async fn poll_availability(
        &self,
        request_id: &str,
        since_seq: u64,
        wait: Duration,
    ) -> Result<AvailabilityChunk>;

    /// Create a booking; `idempotency_key` lets the platform deduplicate a
    /// retried create of the same logical booking
    async fn create_booking(
        &self,
        payload: &Value,
        idempotency_key: Option<&str>,
    ) -> Result<BookingResult>;

    /// Modify a booking scoped by `(booking_ref, agreement_ref)`
    async fn modify_booking(
        &self,
        booking_ref: &str,
        fields: &Value,
        agreement_ref: &str,
    ) -> Result<BookingResult>;

    /// Cancel a booking scoped by `(booking_ref, agreement_ref)`
    async fn cancel_booking(&self, booking_ref: &str, agreement_ref: &str)
        -> Result<BookingResult>;

    /// Check booking status, optionally narrowed to a supplier source
    async fn check_booking(
        &self,
        booking_ref: &str,
        agreement_ref: &str,
        source_id: Option<&str>,
    ) -> Result<BookingResult>;

    /// Whether a location is supported under an agreement. Placeholder: the
    /// current implementations have no authoritative answer and callers must
    /// not treat `false` as final; submit-time validation is the real check.
    async fn is_location_supported(&self, agreement_ref: &str, locode: &str) -> Result<bool>;

    /// Release any connection resources. Safe to call with no search in
    /// flight, and more than once.
    async fn close(&self) -> Result<()>;
}
