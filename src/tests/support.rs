//! Shared test fixtures: a scripted fake transport and criteria helpers.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use crate::config::Config;
use crate::dto::{AvailabilityChunk, AvailabilityCriteria, BookingResult, SubmitAck};
use crate::error::{Result, SdkError};
use crate::transport::Transport;

/// Valid criteria for the standard two-day rental scenario
pub fn sample_criteria() -> AvailabilityCriteria {
    AvailabilityCriteria::builder(
        "USNYC",
        "USNYC",
        Utc.with_ymd_and_hms(2025, 12, 1, 10, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2025, 12, 3, 10, 0, 0).unwrap(),
        28,
        "USD",
        vec!["AGR-001".to_string()],
    )
    .build()
    .expect("sample criteria must be valid")
}

/// REST config with the given timing parameters (ms)
pub fn timing_config(call_timeout: u64, sla: u64, long_poll: u64) -> Config {
    Config::for_rest("https://api.test.invalid", "test-token")
        .call_timeout_ms(call_timeout)
        .availability_sla_ms(sla)
        .long_poll_wait_ms(long_poll)
        .build()
        .expect("timing config must be valid")
}

/// One scripted poll response
pub enum PollStep {
    /// Respond with this poll body after the given server-side delay
    Respond { delay: Duration, body: Value },
    /// Fail the poll with a transport error
    Fail(String),
}

impl PollStep {
    pub fn chunk(body: Value) -> Self {
        PollStep::Respond {
            delay: Duration::ZERO,
            body,
        }
    }

    pub fn slow_chunk(delay: Duration, body: Value) -> Self {
        PollStep::Respond { delay, body }
    }
}

/// Transport that replays a scripted submit response and poll sequence,
/// recording every call it receives.
pub struct ScriptedTransport {
    submit_response: Mutex<Option<Result<Value>>>,
    poll_steps: Mutex<VecDeque<PollStep>>,
    pub submit_count: Mutex<u32>,
    /// (since_seq, wait) per poll, in order
    pub poll_calls: Mutex<Vec<(u64, Duration)>>,
}

impl ScriptedTransport {
    pub fn new(submit_response: Value, poll_steps: Vec<PollStep>) -> Self {
        ScriptedTransport {
            submit_response: Mutex::new(Some(Ok(submit_response))),
            poll_steps: Mutex::new(poll_steps.into()),
            submit_count: Mutex::new(0),
            poll_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_submit(message: &str) -> Self {
        ScriptedTransport {
            submit_response: Mutex::new(Some(Err(SdkError::transport(message)))),
            poll_steps: Mutex::new(VecDeque::new()),
            submit_count: Mutex::new(0),
            poll_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn poll_count(&self) -> usize {
        self.poll_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn submit_availability(&self, _criteria: &Value) -> Result<SubmitAck> {
        *self.submit_count.lock().unwrap() += 1;
        let response = self
            .submit_response
            .lock()
            .unwrap()
            .take()
            .expect("submit called more than once");
        response.map(SubmitAck::from_value)
    }

    async fn poll_availability(
        &self,
        _request_id: &str,
        since_seq: u64,
        wait: Duration,
    ) -> Result<AvailabilityChunk> {
        let step = self
            .poll_steps
            .lock()
            .unwrap()
            .pop_front()
            .expect("poll called more times than scripted");
        self.poll_calls.lock().unwrap().push((since_seq, wait));

        match step {
            PollStep::Respond { delay, body } => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(AvailabilityChunk::from_value(body))
            }
            PollStep::Fail(message) => Err(SdkError::transport(message)),
        }
    }

    async fn create_booking(
        &self,
        payload: &Value,
        idempotency_key: Option<&str>,
    ) -> Result<BookingResult> {
        Ok(BookingResult::from_value(json!({
            "supplier_booking_ref": "BK-1",
            "status": "CONFIRMED",
            "echo_payload": payload,
            "echo_idempotency_key": idempotency_key,
        })))
    }

    async fn modify_booking(
        &self,
        booking_ref: &str,
        fields: &Value,
        agreement_ref: &str,
    ) -> Result<BookingResult> {
        Ok(BookingResult::from_value(json!({
            "supplier_booking_ref": booking_ref,
            "status": "MODIFIED",
            "echo_fields": fields,
            "echo_agreement_ref": agreement_ref,
        })))
    }

    async fn cancel_booking(
        &self,
        booking_ref: &str,
        agreement_ref: &str,
    ) -> Result<BookingResult> {
        Ok(BookingResult::from_value(json!({
            "supplier_booking_ref": booking_ref,
            "status": "CANCELLED",
            "echo_agreement_ref": agreement_ref,
        })))
    }

    async fn check_booking(
        &self,
        booking_ref: &str,
        agreement_ref: &str,
        source_id: Option<&str>,
    ) -> Result<BookingResult> {
        Ok(BookingResult::from_value(json!({
            "supplier_booking_ref": booking_ref,
            "status": "CONFIRMED",
            "echo_agreement_ref": agreement_ref,
            "echo_source_id": source_id,
        })))
    }

    async fn is_location_supported(&self, _agreement_ref: &str, _locode: &str) -> Result<bool> {
        Ok(false)
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
