//! SDK configuration
//!
//! `Config` is an immutable value object built once per client. It carries
//! endpoint and credential data for the selected transport plus the three
//! timing parameters driving the availability search: the per-call timeout,
//! the overall availability SLA, and the long-poll wait length.
//!
//! The transport mode (REST vs gRPC) is fixed at construction and cannot be
//! switched afterwards. Updates never mutate in place: `with_correlation_id`
//! returns a new instance. Each timing parameter has a 1000 ms floor;
//! construction fails below it.

use std::time::Duration;

use url::Url;

use crate::error::{Result, SdkError};
use crate::util::generate_correlation_id;

/// Default per-call timeout
pub const DEFAULT_CALL_TIMEOUT_MS: u64 = 10_000;
/// Default overall availability SLA
pub const DEFAULT_AVAILABILITY_SLA_MS: u64 = 120_000;
/// Default server-side long-poll wait
pub const DEFAULT_LONG_POLL_WAIT_MS: u64 = 10_000;

/// Minimum accepted value for any of the timing parameters
const TIMING_FLOOR_MS: u64 = 1_000;

/// Which concrete transport a client will use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Rest,
    Grpc,
}

/// Immutable SDK configuration
#[derive(Debug, Clone)]
pub struct Config {
    mode: TransportMode,

    // REST
    base_url: String,
    token: String,

    // gRPC
    host: String,
    ca_cert: String,
    client_cert: String,
    client_key: String,

    // Common
    api_key: Option<String>,
    agent_id: String,
    correlation_id: String,
    call_timeout: Duration,
    availability_sla: Duration,
    long_poll_wait: Duration,
}

impl Config {
    /// Start building a configuration for the REST transport.
    ///
    /// `base_url` must be a parseable http(s) URL and `token` must be
    /// non-empty; both are checked by [`ConfigBuilder::build`].
    pub fn for_rest(base_url: impl Into<String>, token: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder {
            mode: TransportMode::Rest,
            base_url: base_url.into(),
            token: token.into(),
            ..ConfigBuilder::empty()
        }
    }

    /// Start building a configuration for the gRPC transport.
    ///
    /// The gRPC channel is mutually authenticated, so the CA certificate and
    /// client certificate/key material are all required.
    pub fn for_grpc(
        host: impl Into<String>,
        ca_cert: impl Into<String>,
        client_cert: impl Into<String>,
        client_key: impl Into<String>,
    ) -> ConfigBuilder {
        ConfigBuilder {
            mode: TransportMode::Grpc,
            host: host.into(),
            ca_cert: ca_cert.into(),
            client_cert: client_cert.into(),
            client_key: client_key.into(),
            ..ConfigBuilder::empty()
        }
    }

    /// The transport mode fixed at construction
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub fn is_grpc(&self) -> bool {
        self.mode == TransportMode::Grpc
    }

    /// REST base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Bearer/API token sent verbatim in the `Authorization` header
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn ca_cert(&self) -> &str {
        &self.ca_cert
    }

    pub fn client_cert(&self) -> &str {
        &self.client_cert
    }

    pub fn client_key(&self) -> &str {
        &self.client_key
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Correlation identifier for this client instance, auto-generated when
    /// not supplied by the caller
    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    /// Per-call timeout applied to each individual transport request
    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// Overall SLA for one availability search, measured from submit success
    pub fn availability_sla(&self) -> Duration {
        self.availability_sla
    }

    /// Server-side wait budget for a single long-poll
    pub fn long_poll_wait(&self) -> Duration {
        self.long_poll_wait
    }

    /// Return a copy of this configuration with a different correlation id
    pub fn with_correlation_id(&self, id: impl Into<String>) -> Config {
        Config {
            correlation_id: id.into(),
            ..self.clone()
        }
    }
}

/// Builder for [`Config`]
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    mode: TransportMode,
    base_url: String,
    token: String,
    host: String,
    ca_cert: String,
    client_cert: String,
    client_key: String,
    api_key: Option<String>,
    agent_id: String,
    correlation_id: Option<String>,
    call_timeout_ms: u64,
    availability_sla_ms: u64,
    long_poll_wait_ms: u64,
}

impl ConfigBuilder {
    fn empty() -> Self {
        Self {
            mode: TransportMode::Rest,
            base_url: String::new(),
            token: String::new(),
            host: String::new(),
            ca_cert: String::new(),
            client_cert: String::new(),
            client_key: String::new(),
            api_key: None,
            agent_id: String::new(),
            correlation_id: None,
            call_timeout_ms: DEFAULT_CALL_TIMEOUT_MS,
            availability_sla_ms: DEFAULT_AVAILABILITY_SLA_MS,
            long_poll_wait_ms: DEFAULT_LONG_POLL_WAIT_MS,
        }
    }

    /// Secondary API key, sent as `X-API-Key` when set
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Caller agent identifier, sent as `X-Agent-Id`
    pub fn agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = agent_id.into();
        self
    }

    /// Explicit correlation identifier; one is generated when unset
    pub fn correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    pub fn call_timeout_ms(mut self, ms: u64) -> Self {
        self.call_timeout_ms = ms;
        self
    }

    pub fn availability_sla_ms(mut self, ms: u64) -> Self {
        self.availability_sla_ms = ms;
        self
    }

    pub fn long_poll_wait_ms(mut self, ms: u64) -> Self {
        self.long_poll_wait_ms = ms;
        self
    }

    /// Validate and build the immutable configuration
    pub fn build(self) -> Result<Config> {
        for (name, value) in [
            ("callTimeoutMs", self.call_timeout_ms),
            ("availabilitySlaMs", self.availability_sla_ms),
            ("longPollWaitMs", self.long_poll_wait_ms),
        ] {
            if value < TIMING_FLOOR_MS {
                return Err(SdkError::configuration(format!(
                    "{} must be at least {}ms (got {}ms)",
                    name, TIMING_FLOOR_MS, value
                )));
            }
        }

        match self.mode {
            TransportMode::Rest => {
                if self.base_url.trim().is_empty() {
                    return Err(SdkError::configuration(
                        "baseUrl is required for REST configuration",
                    ));
                }
                Url::parse(self.base_url.trim()).map_err(|e| {
                    SdkError::configuration(format!("baseUrl is not a valid URL: {}", e))
                })?;
                if self.token.trim().is_empty() {
                    return Err(SdkError::configuration(
                        "token is required for REST configuration",
                    ));
                }
            }
            TransportMode::Grpc => {
                for (name, value) in [
                    ("host", &self.host),
                    ("caCert", &self.ca_cert),
                    ("clientCert", &self.client_cert),
                    ("clientKey", &self.client_key),
                ] {
                    if value.trim().is_empty() {
                        return Err(SdkError::configuration(format!(
                            "{} is required for gRPC configuration",
                            name
                        )));
                    }
                }
            }
        }

        Ok(Config {
            mode: self.mode,
            base_url: self.base_url.trim().trim_end_matches('/').to_string(),
            token: self.token,
            host: self.host,
            ca_cert: self.ca_cert,
            client_cert: self.client_cert,
            client_key: self.client_key,
            api_key: self.api_key.filter(|k| !k.is_empty()),
            agent_id: self.agent_id,
            correlation_id: self
                .correlation_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(generate_correlation_id),
            call_timeout: Duration::from_millis(self.call_timeout_ms),
            availability_sla: Duration::from_millis(self.availability_sla_ms),
            long_poll_wait: Duration::from_millis(self.long_poll_wait_ms),
        })
    }
}
