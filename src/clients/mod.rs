//! Operation-scoped clients composed by the [`crate::client::CarHireClient`]
//! facade.

mod availability;
mod booking;
mod locations;

pub use availability::AvailabilityClient;
pub use booking::BookingClient;
pub use locations::LocationsClient;
