//! Data transfer objects for the Car-Hire Agent SDK
//!
//! All search input is validated at construction: an invalid
//! [`AvailabilityCriteria`] value cannot exist. Responses are decoded
//! leniently, preserving the full raw payload for callers that need
//! provider-specific fields the SDK does not model.

mod booking;
mod chunk;
mod criteria;
mod location;

pub use booking::{BookingCreate, BookingResult, Driver};
pub use chunk::{AvailabilityChunk, ChunkStatus, SubmitAck};
pub use criteria::{AvailabilityCriteria, AvailabilityCriteriaBuilder};
pub use location::Location;
