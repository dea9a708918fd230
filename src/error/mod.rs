//! Error handling for the Car-Hire Agent SDK
//!
//! This module provides a normalized error system that:
//! - Separates local validation failures from remote transport failures
//! - Carries the remote status code and provider error code when known
//! - Provides a convenient Result type alias
//!
//! Deadline exhaustion during an availability search is deliberately NOT an
//! error: the search stream simply ends, and callers distinguish "completed"
//! from "SLA-exhausted" by the status of the last chunk they received.

use thiserror::Error;

pub mod http;

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

/// Main error type for the Car-Hire Agent SDK
#[derive(Error, Debug)]
pub enum SdkError {
    /// Local structural/business validation failure, raised before any
    /// network call and never retried
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid configuration detected at construction time
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The remote call failed at the network or protocol level, or the
    /// remote service returned a non-success status
    #[error("Transport error: {message}{}", fmt_transport_detail(.status, .code))]
    Transport {
        message: String,
        /// HTTP status code when the failure carried one
        status: Option<u16>,
        /// Provider-specific error code when one could be extracted
        code: Option<String>,
    },

    /// A response body could not be decoded where decoding is required
    #[error("Decode error: {0}")]
    Decode(String),
}

fn fmt_transport_detail(status: &Option<u16>, code: &Option<String>) -> String {
    match (status, code) {
        (Some(s), Some(c)) => format!(" (status: {}, code: {})", s, c),
        (Some(s), None) => format!(" (status: {})", s),
        (None, Some(c)) => format!(" (code: {})", c),
        (None, None) => String::new(),
    }
}

impl SdkError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        SdkError::Validation(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        SdkError::Configuration(message.into())
    }

    /// Create a transport error without status or provider code
    pub fn transport(message: impl Into<String>) -> Self {
        SdkError::Transport {
            message: message.into(),
            status: None,
            code: None,
        }
    }

    /// Create a transport error carrying an HTTP status and provider code
    pub fn transport_with(
        message: impl Into<String>,
        status: Option<u16>,
        code: Option<String>,
    ) -> Self {
        SdkError::Transport {
            message: message.into(),
            status,
            code,
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        SdkError::Decode(message.into())
    }

    /// HTTP status code attached to a transport error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SdkError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Provider error code attached to a transport error, if any
    pub fn provider_code(&self) -> Option<&str> {
        match self {
            SdkError::Transport { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// True for failures raised locally before any network interaction
    pub fn is_local(&self) -> bool {
        matches!(self, SdkError::Validation(_) | SdkError::Configuration(_))
    }
}

/// Convert reqwest errors to SdkError
impl From<reqwest::Error> for SdkError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());

        if err.is_timeout() {
            SdkError::transport_with(
                format!("Request timed out: {}", err),
                status,
                Some("TIMEOUT".to_string()),
            )
        } else if err.is_connect() {
            SdkError::transport_with(format!("Connection error: {}", err), status, None)
        } else if err.is_decode() {
            SdkError::decode(format!("Response decode error: {}", err))
        } else if err.is_builder() || err.is_request() {
            SdkError::validation(format!("Invalid request: {}", err))
        } else {
            SdkError::transport_with(format!("HTTP client error: {}", err), status, None)
        }
    }
}

/// Convert serde_json errors to SdkError
impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::decode(format!("JSON error: {}", err))
    }
}
