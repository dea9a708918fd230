//! Booking payloads and results

use serde_json::{json, Map, Value};

/// Driver details attached to a booking
#[derive(Debug, Clone, Default)]
pub struct Driver {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<u8>,
}

impl Driver {
    fn to_payload(&self) -> Value {
        let mut driver = Map::new();
        if let Some(v) = &self.first_name {
            driver.insert("first_name".into(), json!(v));
        }
        if let Some(v) = &self.last_name {
            driver.insert("last_name".into(), json!(v));
        }
        if let Some(v) = &self.email {
            driver.insert("email".into(), json!(v));
        }
        if let Some(v) = &self.phone {
            driver.insert("phone".into(), json!(v));
        }
        if let Some(v) = self.age {
            driver.insert("age".into(), json!(v));
        }
        Value::Object(driver)
    }
}

/// Payload for creating a booking.
///
/// Only `agreement_ref` is required by the SDK; the backend resolves the
/// supplier from the agreement reference. Everything else is optional
/// context carried from the availability search or the agent's own records.
#[derive(Debug, Clone, Default)]
pub struct BookingCreate {
    pub agreement_ref: String,
    pub supplier_offer_ref: Option<String>,
    pub agent_booking_ref: Option<String>,

    /// Request id of the availability search this booking derives from
    pub availability_request_id: Option<String>,

    pub pickup_unlocode: Option<String>,
    pub dropoff_unlocode: Option<String>,
    pub pickup_iso: Option<String>,
    pub dropoff_iso: Option<String>,

    pub vehicle_class: Option<String>,
    pub vehicle_make_model: Option<String>,
    pub rate_plan_code: Option<String>,
    pub driver_age: Option<u8>,
    pub residency_country: Option<String>,

    pub customer_info: Option<Map<String, Value>>,
    pub payment_info: Option<Map<String, Value>>,

    pub driver: Option<Driver>,
    /// Provider-specific extension fields, merged at the top level
    pub extras: Map<String, Value>,
}

impl BookingCreate {
    pub fn new(agreement_ref: impl Into<String>) -> Self {
        BookingCreate {
            agreement_ref: agreement_ref.into(),
            ..Default::default()
        }
    }

    /// Wire shape for the create request; empty optional fields are omitted
    /// and extras are merged last.
    pub fn to_payload(&self) -> Value {
        let mut payload = Map::new();
        payload.insert("agreement_ref".into(), json!(self.agreement_ref));

        let string_fields = [
            ("supplier_offer_ref", &self.supplier_offer_ref),
            ("agent_booking_ref", &self.agent_booking_ref),
            ("availability_request_id", &self.availability_request_id),
            ("pickup_unlocode", &self.pickup_unlocode),
            ("dropoff_unlocode", &self.dropoff_unlocode),
            ("pickup_iso", &self.pickup_iso),
            ("dropoff_iso", &self.dropoff_iso),
            ("vehicle_class", &self.vehicle_class),
            ("vehicle_make_model", &self.vehicle_make_model),
            ("rate_plan_code", &self.rate_plan_code),
            ("residency_country", &self.residency_country),
        ];
        for (key, value) in string_fields {
            if let Some(v) = value {
                if !v.is_empty() {
                    payload.insert(key.into(), json!(v));
                }
            }
        }

        if let Some(age) = self.driver_age {
            payload.insert("driver_age".into(), json!(age));
        }
        if let Some(info) = &self.customer_info {
            payload.insert("customer_info".into(), Value::Object(info.clone()));
        }
        if let Some(info) = &self.payment_info {
            payload.insert("payment_info".into(), Value::Object(info.clone()));
        }
        if let Some(driver) = &self.driver {
            payload.insert("driver".into(), driver.to_payload());
        }

        for (k, v) in &self.extras {
            payload.insert(k.clone(), v.clone());
        }

        Value::Object(payload)
    }
}

/// Result of any booking lifecycle operation
#[derive(Debug, Clone)]
pub struct BookingResult {
    pub supplier_booking_ref: Option<String>,
    pub status: Option<String>,
    /// Full decoded response for provider-specific fields
    pub raw: Value,
}

impl BookingResult {
    pub fn from_value(data: Value) -> Self {
        let supplier_booking_ref = data
            .get("supplier_booking_ref")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        let status = data
            .get("status")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        BookingResult {
            supplier_booking_ref,
            status,
            raw: data,
        }
    }
}
