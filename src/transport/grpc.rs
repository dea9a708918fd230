//! gRPC transport (stub)
//!
//! The platform's gRPC surface requires generated stubs from the backend
//! proto files, which are not published yet. This transport validates its
//! mTLS configuration up front but every operation answers with an
//! `UNIMPLEMENTED` transport error until the stubs are wired in.
//!
//! TODO: generate client stubs from the backend protos and replace the
//! per-operation errors with real calls.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::Config;
use crate::dto::{AvailabilityChunk, BookingResult, SubmitAck};
use crate::error::{Result, SdkError};

use super::Transport;

pub struct GrpcTransport {
    #[allow(dead_code)]
    config: Config,
}

impl GrpcTransport {
    pub fn new(config: Config) -> Result<Self> {
        Ok(GrpcTransport { config })
    }

    fn not_wired() -> SdkError {
        SdkError::transport_with(
            "gRPC transport not wired yet; generate stubs from the backend protos",
            None,
            Some("UNIMPLEMENTED".to_string()),
        )
    }
}

#[async_trait]
impl Transport for GrpcTransport {
    async fn submit_availability(&self, _criteria: &Value) -> Result<SubmitAck> {
        Err(Self::not_wired())
    }

    async fn poll_availability(
        &self,
        _request_id: &str,
        _since_seq: u64,
        _wait: Duration,
    ) -> Result<AvailabilityChunk> {
        Err(Self::not_wired())
    }

    async fn create_booking(
        &self,
        _payload: &Value,
        _idempotency_key: Option<&str>,
    ) -> Result<BookingResult> {
        Err(Self::not_wired())
    }

    async fn modify_booking(
        &self,
        _booking_ref: &str,
        _fields: &Value,
        _agreement_ref: &str,
    ) -> Result<BookingResult> {
        Err(Self::not_wired())
    }

    async fn cancel_booking(
        &self,
        _booking_ref: &str,
        _agreement_ref: &str,
    ) -> Result<BookingResult> {
        Err(Self::not_wired())
    }

    async fn check_booking(
        &self,
        _booking_ref: &str,
        _agreement_ref: &str,
        _source_id: Option<&str>,
    ) -> Result<BookingResult> {
        Err(Self::not_wired())
    }

    async fn is_location_supported(&self, _agreement_ref: &str, _locode: &str) -> Result<bool> {
        Err(Self::not_wired())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
