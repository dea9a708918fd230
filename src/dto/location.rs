//! Location records

use serde_json::Value;

/// A pickup/return location known to the platform.
///
/// No current operation returns one: `LocationsClient::is_supported` only
/// answers a boolean, and the dedicated location endpoint is still pending
/// on the backend. The shape is reserved for that endpoint so callers can
/// code against it now.
#[derive(Debug, Clone)]
pub struct Location {
    /// UN/LOCODE identifying the location
    pub locode: Option<String>,
    pub name: Option<String>,
    pub raw: Value,
}

impl Location {
    pub fn from_value(data: Value) -> Self {
        let locode = data
            .get("locode")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        let name = data
            .get("name")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        Location { locode, name, raw: data }
    }
}
