//! Availability search criteria

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

use crate::error::{Result, SdkError};

/// Legal driving-age bounds accepted by the platform
const MIN_DRIVER_AGE: u8 = 18;
const MAX_DRIVER_AGE: u8 = 100;

/// Validated input for one availability search.
///
/// Instances are only obtainable through [`AvailabilityCriteria::builder`],
/// which validates and normalizes every field. Construction either yields a
/// fully valid value or fails with [`SdkError::Validation`] before any
/// network interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityCriteria {
    pickup_locode: String,
    return_locode: String,
    pickup_at: DateTime<Utc>,
    return_at: DateTime<Utc>,
    driver_age: u8,
    currency: String,
    agreement_refs: Vec<String>,
    vehicle_prefs: Vec<String>,
    rate_prefs: Vec<String>,
    residency_country: String,
    extras: Map<String, Value>,
}

impl AvailabilityCriteria {
    /// Start building criteria from the required fields.
    pub fn builder(
        pickup_locode: impl Into<String>,
        return_locode: impl Into<String>,
        pickup_at: DateTime<Utc>,
        return_at: DateTime<Utc>,
        driver_age: u8,
        currency: impl Into<String>,
        agreement_refs: Vec<String>,
    ) -> AvailabilityCriteriaBuilder {
        AvailabilityCriteriaBuilder {
            pickup_locode: pickup_locode.into(),
            return_locode: return_locode.into(),
            pickup_at,
            return_at,
            driver_age,
            currency: currency.into(),
            agreement_refs,
            vehicle_prefs: Vec::new(),
            rate_prefs: Vec::new(),
            residency_country: "US".to_string(),
            extras: Map::new(),
        }
    }

    pub fn pickup_locode(&self) -> &str {
        &self.pickup_locode
    }

    pub fn return_locode(&self) -> &str {
        &self.return_locode
    }

    pub fn pickup_at(&self) -> DateTime<Utc> {
        self.pickup_at
    }

    pub fn return_at(&self) -> DateTime<Utc> {
        self.return_at
    }

    pub fn driver_age(&self) -> u8 {
        self.driver_age
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Agreement references scoping this search; guaranteed non-empty
    pub fn agreement_refs(&self) -> &[String] {
        &self.agreement_refs
    }

    pub fn vehicle_prefs(&self) -> &[String] {
        &self.vehicle_prefs
    }

    pub fn rate_prefs(&self) -> &[String] {
        &self.rate_prefs
    }

    pub fn residency_country(&self) -> &str {
        &self.residency_country
    }

    pub fn extras(&self) -> &Map<String, Value> {
        &self.extras
    }

    /// Wire shape for the submit request. Extension fields are merged at the
    /// top level and may shadow modeled fields, matching the backend contract.
    pub fn to_payload(&self) -> Value {
        let mut payload = json!({
            "pickup_unlocode": self.pickup_locode,
            "dropoff_unlocode": self.return_locode,
            "pickup_iso": self.pickup_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            "dropoff_iso": self.return_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            "driver_age": self.driver_age,
            "currency": self.currency,
            "residency_country": self.residency_country,
            "vehicle_classes": self.vehicle_prefs,
            "rate_prefs": self.rate_prefs,
            "agreement_refs": self.agreement_refs,
        });

        if let Some(obj) = payload.as_object_mut() {
            for (k, v) in &self.extras {
                obj.insert(k.clone(), v.clone());
            }
        }

        payload
    }
}

/// Builder for [`AvailabilityCriteria`]
#[derive(Debug, Clone)]
pub struct AvailabilityCriteriaBuilder {
    pickup_locode: String,
    return_locode: String,
    pickup_at: DateTime<Utc>,
    return_at: DateTime<Utc>,
    driver_age: u8,
    currency: String,
    agreement_refs: Vec<String>,
    vehicle_prefs: Vec<String>,
    rate_prefs: Vec<String>,
    residency_country: String,
    extras: Map<String, Value>,
}

impl AvailabilityCriteriaBuilder {
    /// Preferred vehicle classes (OTA codes such as `ECMN`, `CDMR`)
    pub fn vehicle_prefs(mut self, prefs: Vec<String>) -> Self {
        self.vehicle_prefs = prefs;
        self
    }

    /// Preferred rate plan codes
    pub fn rate_prefs(mut self, prefs: Vec<String>) -> Self {
        self.rate_prefs = prefs;
        self
    }

    /// Driver residency, ISO 3166-1 alpha-2 (default `US`)
    pub fn residency_country(mut self, country: impl Into<String>) -> Self {
        self.residency_country = country.into();
        self
    }

    /// Add a provider-specific extension field, merged at the top level of
    /// the submit payload
    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extras.insert(key.into(), value);
        self
    }

    /// Merge a map of provider-specific extension fields
    pub fn extras(mut self, extras: Map<String, Value>) -> Self {
        self.extras.extend(extras);
        self
    }

    /// Validate, normalize, and build the criteria.
    pub fn build(self) -> Result<AvailabilityCriteria> {
        let pickup_locode = normalize_code(&self.pickup_locode);
        if pickup_locode.is_empty() {
            return Err(SdkError::validation("pickup_locode is required"));
        }

        let return_locode = normalize_code(&self.return_locode);
        if return_locode.is_empty() {
            return Err(SdkError::validation("return_locode is required"));
        }

        if self.return_at <= self.pickup_at {
            return Err(SdkError::validation("return_at must be after pickup_at"));
        }

        if self.driver_age < MIN_DRIVER_AGE || self.driver_age > MAX_DRIVER_AGE {
            return Err(SdkError::validation(format!(
                "driver_age must be between {} and {}",
                MIN_DRIVER_AGE, MAX_DRIVER_AGE
            )));
        }

        let currency = normalize_code(&self.currency);
        if currency.is_empty() {
            return Err(SdkError::validation("currency is required"));
        }

        let agreement_refs: Vec<String> = self
            .agreement_refs
            .into_iter()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();
        if agreement_refs.is_empty() {
            return Err(SdkError::validation(
                "agreement_refs must be a non-empty list",
            ));
        }

        let residency_country = normalize_code(&self.residency_country);
        if residency_country.len() != 2 || !residency_country.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(SdkError::validation(
                "residency_country must be a 2-letter country code",
            ));
        }

        Ok(AvailabilityCriteria {
            pickup_locode,
            return_locode,
            pickup_at: self.pickup_at,
            return_at: self.return_at,
            driver_age: self.driver_age,
            currency,
            agreement_refs,
            vehicle_prefs: self.vehicle_prefs,
            rate_prefs: self.rate_prefs,
            residency_country,
            extras: self.extras,
        })
    }
}

fn normalize_code(s: &str) -> String {
    s.trim().to_ascii_uppercase()
}
