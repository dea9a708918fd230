//! Configuration tests

use std::time::Duration;

use crate::config::{Config, TransportMode};
use crate::error::SdkError;

#[test]
fn rest_config_applies_defaults() {
    let config = Config::for_rest("https://api.example.com/", "tok").build().unwrap();

    assert_eq!(config.mode(), TransportMode::Rest);
    assert!(!config.is_grpc());
    // Trailing slash is normalized away.
    assert_eq!(config.base_url(), "https://api.example.com");
    assert_eq!(config.call_timeout(), Duration::from_millis(10_000));
    assert_eq!(config.availability_sla(), Duration::from_millis(120_000));
    assert_eq!(config.long_poll_wait(), Duration::from_millis(10_000));
    assert!(config.correlation_id().starts_with("rust-sdk-"));
}

#[test]
fn rest_config_requires_base_url_and_token() {
    assert!(matches!(
        Config::for_rest("", "tok").build().unwrap_err(),
        SdkError::Configuration(_)
    ));
    assert!(matches!(
        Config::for_rest("not a url", "tok").build().unwrap_err(),
        SdkError::Configuration(_)
    ));
    assert!(matches!(
        Config::for_rest("https://api.example.com", " ").build().unwrap_err(),
        SdkError::Configuration(_)
    ));
}

#[test]
fn timing_floors_are_enforced() {
    let base = || Config::for_rest("https://api.example.com", "tok");

    assert!(matches!(
        base().call_timeout_ms(999).build().unwrap_err(),
        SdkError::Configuration(_)
    ));
    assert!(matches!(
        base().availability_sla_ms(0).build().unwrap_err(),
        SdkError::Configuration(_)
    ));
    assert!(matches!(
        base().long_poll_wait_ms(500).build().unwrap_err(),
        SdkError::Configuration(_)
    ));

    // Exactly at the floor is accepted.
    let config = base()
        .call_timeout_ms(1000)
        .availability_sla_ms(1000)
        .long_poll_wait_ms(1000)
        .build()
        .unwrap();
    assert_eq!(config.call_timeout(), Duration::from_millis(1000));
}

#[test]
fn grpc_config_requires_tls_material() {
    let config = Config::for_grpc("carhire.example.com:443", "ca.pem", "client.pem", "client.key")
        .build()
        .unwrap();
    assert_eq!(config.mode(), TransportMode::Grpc);
    assert!(config.is_grpc());
    assert_eq!(config.host(), "carhire.example.com:443");

    for broken in [
        Config::for_grpc("", "ca", "cert", "key"),
        Config::for_grpc("host", "", "cert", "key"),
        Config::for_grpc("host", "ca", "", "key"),
        Config::for_grpc("host", "ca", "cert", ""),
    ] {
        assert!(matches!(broken.build().unwrap_err(), SdkError::Configuration(_)));
    }
}

#[test]
fn explicit_correlation_id_is_kept() {
    let config = Config::for_rest("https://api.example.com", "tok")
        .correlation_id("corr-1")
        .build()
        .unwrap();
    assert_eq!(config.correlation_id(), "corr-1");
}

#[test]
fn with_correlation_id_returns_a_new_instance() {
    let config = Config::for_rest("https://api.example.com", "tok")
        .correlation_id("corr-1")
        .build()
        .unwrap();

    let updated = config.with_correlation_id("corr-2");

    assert_eq!(config.correlation_id(), "corr-1");
    assert_eq!(updated.correlation_id(), "corr-2");
    assert_eq!(updated.base_url(), config.base_url());
    assert_eq!(updated.mode(), config.mode());
}

#[test]
fn optional_identity_fields() {
    let config = Config::for_rest("https://api.example.com", "tok")
        .api_key("key-1")
        .agent_id("agent-7")
        .build()
        .unwrap();
    assert_eq!(config.api_key(), Some("key-1"));
    assert_eq!(config.agent_id(), "agent-7");

    let bare = Config::for_rest("https://api.example.com", "tok").build().unwrap();
    assert_eq!(bare.api_key(), None);
    assert_eq!(bare.agent_id(), "");
}
