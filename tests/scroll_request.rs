//! Host-level tests for scroll requests and build-time credentials.

use wifi_news::secrets::{Secrets, WifiCredentials};
use wifi_news::{
    DEFAULT_PAUSE_AFTER_MS, DEFAULT_SCROLL_SPEED_MS, Error, MAX_TEXT_LEN, ScrollRequest,
};

#[test]
fn new_request_uses_defaults() {
    let request = ScrollRequest::new("HELLO").expect("short text fits");
    assert_eq!(request.text(), "HELLO");
    assert_eq!(request.scroll_speed_ms(), DEFAULT_SCROLL_SPEED_MS);
    assert_eq!(request.pause_after_ms(), DEFAULT_PAUSE_AFTER_MS);
    assert_eq!((DEFAULT_SCROLL_SPEED_MS, DEFAULT_PAUSE_AFTER_MS), (500, 50));
}

#[test]
fn zero_speed_and_pause_are_allowed() {
    let request = ScrollRequest::new("A")
        .expect("short text fits")
        .with_scroll_speed(0)
        .with_pause_after(0);
    assert_eq!(request.scroll_speed_ms(), 0);
    assert_eq!(request.pause_after_ms(), 0);
}

#[test]
fn text_at_capacity_fits() {
    let text = "x".repeat(MAX_TEXT_LEN);
    let request = ScrollRequest::new(&text).expect("capacity-sized text fits");
    assert_eq!(request.text().len(), MAX_TEXT_LEN);
}

#[test]
fn text_over_capacity_is_rejected() {
    let text = "x".repeat(MAX_TEXT_LEN + 1);
    assert_eq!(
        ScrollRequest::new(&text),
        Err(Error::TextTooLong { max: MAX_TEXT_LEN })
    );
}

#[test]
fn wifi_credentials_enforce_capacity() {
    let credentials = WifiCredentials::new("home", "hunter22").expect("short credentials fit");
    assert_eq!(credentials.ssid.as_str(), "home");
    assert_eq!(credentials.password.as_str(), "hunter22");
    assert!(!credentials.is_empty());

    assert_eq!(
        WifiCredentials::new(&"s".repeat(33), "pw"),
        Err(Error::CredentialTooLong {
            field: "WIFI_SSID",
            max: 32
        })
    );
    assert_eq!(
        WifiCredentials::new("ssid", &"p".repeat(65)),
        Err(Error::CredentialTooLong {
            field: "WIFI_PASSWORD",
            max: 64
        })
    );
}

#[test]
fn error_messages_name_the_limit() {
    assert_eq!(
        Error::TextTooLong { max: 128 }.to_string(),
        "Text exceeds 128 bytes"
    );
    assert_eq!(
        Error::CredentialTooLong {
            field: "WIFI_SSID",
            max: 32
        }
        .to_string(),
        "WIFI_SSID exceeds 32 bytes"
    );
}

#[test]
fn build_env_secrets_match_constants() {
    let secrets = Secrets::from_build_env().expect("configured secrets fit");
    assert_eq!(secrets.wifi.ssid.as_str(), wifi_news::secrets::WIFI_SSID);
    assert_eq!(
        secrets.weather_api_token,
        wifi_news::secrets::WEATHER_API_TOKEN
    );
}
