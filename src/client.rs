//! SDK entry point
//!
//! `CarHireClient` composes a [`Config`] and the transport it selects into
//! the operation-scoped clients. The transport is built once at construction
//! and shared; the config is immutable and freely shared read-only across
//! concurrent searches.

use std::sync::Arc;

use crate::clients::{AvailabilityClient, BookingClient, LocationsClient};
use crate::config::{Config, TransportMode};
use crate::error::Result;
use crate::transport::{GrpcTransport, RestTransport, Transport};

/// Main SDK client for the car-hire booking platform
pub struct CarHireClient {
    config: Config,
    transport: Arc<dyn Transport>,
}

impl CarHireClient {
    /// Build a client, selecting the concrete transport from the config's
    /// fixed mode. Nothing above this point ever inspects which transport is
    /// active.
    pub fn new(config: Config) -> Result<Self> {
        let transport: Arc<dyn Transport> = match config.mode() {
            TransportMode::Rest => Arc::new(RestTransport::new(config.clone())?),
            TransportMode::Grpc => Arc::new(GrpcTransport::new(config.clone())?),
        };

        Ok(CarHireClient { config, transport })
    }

    /// Build a client over a caller-supplied transport. Mainly useful for
    /// tests and custom wiring.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        CarHireClient { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Availability search operations
    pub fn availability(&self) -> AvailabilityClient {
        AvailabilityClient::new(Arc::clone(&self.transport), self.config.clone())
    }

    /// Booking lifecycle operations
    pub fn booking(&self) -> BookingClient {
        BookingClient::new(Arc::clone(&self.transport))
    }

    /// Location queries
    pub fn locations(&self) -> LocationsClient {
        LocationsClient::new(Arc::clone(&self.transport))
    }

    /// Release the transport's connection resources. Safe to call even when
    /// no search is in flight, and more than once.
    pub async fn close(&self) -> Result<()> {
        self.transport.close().await
    }
}
