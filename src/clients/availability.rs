//! Availability search engine
//!
//! Drives the submit-then-long-poll protocol: one submit call yields an
//! opaque request id, then sequential long-polls deliver result chunks until
//! the server reports completion or the client-side SLA deadline passes.
//!
//! The returned stream is pull-based: the consumer drives progress by
//! requesting the next chunk, each pull suspends while a poll resolves, and
//! dropping the stream abandons the in-flight call without any further
//! polling. SLA exhaustion is a normal, silent end of the stream, never an
//! error; chunks already yielded remain valid.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, Stream};
use log::debug;
use tokio::time::Instant;

use crate::config::Config;
use crate::dto::{AvailabilityChunk, AvailabilityCriteria};
use crate::error::Result;
use crate::transport::Transport;

/// Client for availability search operations
pub struct AvailabilityClient {
    transport: Arc<dyn Transport>,
    config: Config,
}

/// Per-search state. Created on `search()`, lives for the duration of one
/// streaming call, never shared or persisted.
struct SearchSession {
    request_id: String,
    /// Position in the result stream; starts at 0 and only ever advances
    cursor: u64,
    /// Absolute SLA deadline, computed once at submit success
    deadline: Instant,
    /// Set once a chunk reports completion
    terminal: bool,
}

enum SearchState {
    Submit(AvailabilityCriteria),
    Polling(SearchSession),
}

impl AvailabilityClient {
    pub(crate) fn new(transport: Arc<dyn Transport>, config: Config) -> Self {
        AvailabilityClient { transport, config }
    }

    /// Search availability, streaming result chunks as they arrive.
    ///
    /// The submit happens on the first pull. A submit response without a
    /// request id ends the stream immediately with zero chunks and zero
    /// polls: the platform legitimately had nothing to search. Transport
    /// errors from submit or poll terminate the stream; the engine never
    /// retries and never resumes a search from a later call.
    pub fn search(
        &self,
        criteria: AvailabilityCriteria,
    ) -> impl Stream<Item = Result<AvailabilityChunk>> + Send + 'static {
        let transport = Arc::clone(&self.transport);
        let sla = self.config.availability_sla();
        let long_poll_wait = self.config.long_poll_wait();

        stream::try_unfold(SearchState::Submit(criteria), move |state| {
            let transport = Arc::clone(&transport);
            async move {
                match state {
                    SearchState::Submit(criteria) => {
                        let ack = transport.submit_availability(&criteria.to_payload()).await?;

                        let Some(request_id) = ack.request_id else {
                            debug!("availability submit returned no request_id; empty search");
                            return Ok(None);
                        };

                        // The SLA measures time to receive usable
                        // availability, so the clock starts at submit
                        // success, not at call entry.
                        let session = SearchSession {
                            request_id,
                            cursor: 0,
                            deadline: Instant::now() + sla,
                            terminal: false,
                        };
                        next_chunk(transport, long_poll_wait, session).await
                    }
                    SearchState::Polling(session) => {
                        if session.terminal {
                            return Ok(None);
                        }
                        next_chunk(transport, long_poll_wait, session).await
                    }
                }
            }
        })
    }
}

/// Run one poll iteration: enforce the deadline, cap the server-side wait,
/// poll, advance the cursor, and hand the chunk to the consumer.
async fn next_chunk(
    transport: Arc<dyn Transport>,
    long_poll_wait: Duration,
    mut session: SearchSession,
) -> Result<Option<(AvailabilityChunk, SearchState)>> {
    let remaining = session.deadline.saturating_duration_since(Instant::now());
    if remaining.is_zero() {
        debug!(
            "availability SLA exhausted for request {}; ending stream",
            session.request_id
        );
        return Ok(None);
    }

    // Cap the poll's server-side wait by both the configured budget and the
    // remaining SLA so the final poll cannot overshoot the deadline.
    let wait = long_poll_wait.min(remaining);

    let chunk = transport
        .poll_availability(&session.request_id, session.cursor, wait)
        .await?;

    // A chunk without a cursor leaves the position unchanged, so one
    // malformed response cannot silently lose progress.
    if let Some(cursor) = chunk.cursor {
        session.cursor = cursor;
    }
    session.terminal = chunk.status.is_complete();

    Ok(Some((chunk, SearchState::Polling(session))))
}
