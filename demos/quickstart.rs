//! Minimal end-to-end booking flow.
//!
//! Usage:
//!   CARHIRE_BASE_URL=https://api.example.com CARHIRE_TOKEN=... \
//!     cargo run --example quickstart

use std::env;

use carhire_agent_sdk::dto::BookingCreate;
use carhire_agent_sdk::{CarHireClient, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let base_url = env::var("CARHIRE_BASE_URL")?;
    let token = env::var("CARHIRE_TOKEN")?;

    let config = Config::for_rest(base_url, token)
        .agent_id("demo-agent")
        .build()?;
    let client = CarHireClient::new(config)?;

    let mut booking = BookingCreate::new("AGR-001");
    booking.vehicle_class = Some("ECMN".to_string());
    booking.driver_age = Some(30);

    let created = client
        .booking()
        .create(&booking, Some("demo-idem-key-1"))
        .await?;
    println!(
        "created booking {:?} ({:?})",
        created.supplier_booking_ref, created.status
    );

    if let Some(booking_ref) = &created.supplier_booking_ref {
        let status = client.booking().check(booking_ref, "AGR-001", None).await?;
        println!("current status: {:?}", status.status);
    }

    client.close().await?;
    Ok(())
}
