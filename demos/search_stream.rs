//! Availability search showing the streamed chunk flow.
//!
//! Usage:
//!   CARHIRE_BASE_URL=https://api.example.com CARHIRE_TOKEN=... \
//!     cargo run --example search_stream

use std::env;

use chrono::{Duration, Utc};
use futures::StreamExt;

use carhire_agent_sdk::{AvailabilityCriteria, CarHireClient, ChunkStatus, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let base_url = env::var("CARHIRE_BASE_URL")?;
    let token = env::var("CARHIRE_TOKEN")?;

    let config = Config::for_rest(base_url, token)
        .agent_id("demo-agent")
        .availability_sla_ms(30_000)
        .long_poll_wait_ms(5_000)
        .build()?;
    let client = CarHireClient::new(config)?;

    let pickup = Utc::now() + Duration::days(7);
    let criteria = AvailabilityCriteria::builder(
        "USNYC",
        "USBOS",
        pickup,
        pickup + Duration::days(3),
        30,
        "USD",
        vec!["AGR-001".to_string()],
    )
    .vehicle_prefs(vec!["ECMN".to_string(), "CDMR".to_string()])
    .build()?;

    let mut chunks = std::pin::pin!(client.availability().search(criteria));
    let mut total = 0usize;
    let mut completed = false;

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        total += chunk.items.len();
        completed = chunk.status == ChunkStatus::Complete;
        println!("chunk: {} offers (status {:?})", chunk.items.len(), chunk.status);
    }

    // A stream can end without a COMPLETE chunk when the SLA window runs
    // out; the offers received so far are still usable.
    if completed {
        println!("search complete: {} offers", total);
    } else {
        println!("search window elapsed: {} offers collected", total);
    }

    client.close().await?;
    Ok(())
}
