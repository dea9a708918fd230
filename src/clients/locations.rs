//! Location lookup

use std::sync::Arc;

use crate::error::Result;
use crate::transport::Transport;

/// Client for location-related queries
pub struct LocationsClient {
    transport: Arc<dyn Transport>,
}

impl LocationsClient {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        LocationsClient { transport }
    }

    /// Whether `locode` is supported under `agreement_ref`.
    ///
    /// Placeholder: the current transports have no authoritative answer
    /// (REST always reports `false`, gRPC is not wired). Do not treat a
    /// `false` result as final; location coverage is validated during
    /// availability submit.
    pub async fn is_supported(&self, agreement_ref: &str, locode: &str) -> Result<bool> {
        self.transport.is_location_supported(agreement_ref, locode).await
    }
}
