//! # Car-Hire Agent SDK
//!
//! Client SDK for agent applications integrating with the car-hire booking
//! platform. It covers availability search and the booking lifecycle
//! (create/modify/cancel/check) over either an HTTP+JSON transport or an
//! RPC transport, selected once by configuration.
//!
//! ## Architecture
//!
//! - `Config`: immutable per-client configuration (endpoints, credentials,
//!   timing parameters)
//! - `Transport`: capability trait the clients talk through; `RestTransport`
//!   and `GrpcTransport` are the two implementations
//! - `AvailabilityClient`: the search engine. It submits, then long-polls
//!   for chunks under a client-enforced SLA deadline, streamed to the caller
//! - `BookingClient` / `LocationsClient`: single request/response operations
//! - `CarHireClient`: the facade composing all of the above
//!
//! ## Example
//!
//! ```no_run
//! use carhire_agent_sdk::{CarHireClient, Config, AvailabilityCriteria};
//! use chrono::{TimeZone, Utc};
//! use futures::StreamExt;
//!
//! # async fn run() -> carhire_agent_sdk::Result<()> {
//! let config = Config::for_rest("https://api.example.com", "agent-token").build()?;
//! let client = CarHireClient::new(config)?;
//!
//! let criteria = AvailabilityCriteria::builder(
//!     "USNYC",
//!     "USNYC",
//!     Utc.with_ymd_and_hms(2025, 12, 1, 10, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2025, 12, 3, 10, 0, 0).unwrap(),
//!     28,
//!     "USD",
//!     vec!["AGR-001".to_string()],
//! )
//! .build()?;
//!
//! let mut chunks = std::pin::pin!(client.availability().search(criteria));
//! while let Some(chunk) = chunks.next().await {
//!     let chunk = chunk?;
//!     println!("{} offers ({:?})", chunk.items.len(), chunk.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod clients;
pub mod config;
pub mod dto;
pub mod error;
pub mod transport;

mod util;

pub use client::CarHireClient;
pub use clients::{AvailabilityClient, BookingClient, LocationsClient};
pub use config::{Config, ConfigBuilder, TransportMode};
pub use dto::{
    AvailabilityChunk, AvailabilityCriteria, BookingCreate, BookingResult, ChunkStatus, Driver,
    Location, SubmitAck,
};
pub use error::{Result, SdkError};
pub use transport::{GrpcTransport, RestTransport, Transport};

#[cfg(test)]
mod tests;
