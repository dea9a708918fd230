//! Booking lifecycle operations
//!
//! Thin pass-throughs to the transport: each call is a single
//! request/response with light request-shape validation and no retry or
//! state. Validation failures surface before any network call.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::dto::{BookingCreate, BookingResult};
use crate::error::{Result, SdkError};
use crate::transport::Transport;

/// Client for booking create/modify/cancel/check
pub struct BookingClient {
    transport: Arc<dyn Transport>,
}

impl BookingClient {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        BookingClient { transport }
    }

    /// Create a booking. Supply `idempotency_key` so a retried create of the
    /// same logical booking (for example after a client-side timeout) does
    /// not duplicate the remote booking.
    pub async fn create(
        &self,
        booking: &BookingCreate,
        idempotency_key: Option<&str>,
    ) -> Result<BookingResult> {
        if booking.agreement_ref.trim().is_empty() {
            return Err(SdkError::validation("agreement_ref required"));
        }

        self.transport
            .create_booking(&booking.to_payload(), idempotency_key)
            .await
    }

    /// Modify a booking, sending only the changed fields
    pub async fn modify(
        &self,
        booking_ref: &str,
        fields: Map<String, Value>,
        agreement_ref: &str,
    ) -> Result<BookingResult> {
        require_refs(booking_ref, agreement_ref)?;

        self.transport
            .modify_booking(booking_ref, &Value::Object(fields), agreement_ref)
            .await
    }

    /// Cancel a booking
    pub async fn cancel(&self, booking_ref: &str, agreement_ref: &str) -> Result<BookingResult> {
        require_refs(booking_ref, agreement_ref)?;

        self.transport.cancel_booking(booking_ref, agreement_ref).await
    }

    /// Check booking status, optionally narrowed to a supplier source
    pub async fn check(
        &self,
        booking_ref: &str,
        agreement_ref: &str,
        source_id: Option<&str>,
    ) -> Result<BookingResult> {
        require_refs(booking_ref, agreement_ref)?;

        self.transport
            .check_booking(booking_ref, agreement_ref, source_id)
            .await
    }
}

fn require_refs(booking_ref: &str, agreement_ref: &str) -> Result<()> {
    if booking_ref.trim().is_empty() {
        return Err(SdkError::validation("supplier_booking_ref required"));
    }
    if agreement_ref.trim().is_empty() {
        return Err(SdkError::validation("agreement_ref required"));
    }
    Ok(())
}
