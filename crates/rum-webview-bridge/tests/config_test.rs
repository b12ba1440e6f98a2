//! BridgeConfig loading and validation.

use rum_webview_bridge::errors::BridgeError;
use rum_webview_bridge::event_mapping::MAX_VIEW_TIME_OFFSETS_RETAIN;
use rum_webview_bridge::logging::LogFormat;
use rum_webview_bridge::BridgeConfig;

#[test]
fn config_empty_toml_gives_defaults() {
    let config = BridgeConfig::from_toml("").unwrap();
    assert!(config.allowed_hosts.is_empty());
    assert_eq!(config.offset_cache_capacity, MAX_VIEW_TIME_OFFSETS_RETAIN);
    assert!(!config.logs.forward_internal_logs);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn config_full_toml() {
    let config = BridgeConfig::from_toml(
        r#"
        allowed_hosts = ["shop.example.com", "example.org"]
        offset_cache_capacity = 5

        [logs]
        forward_internal_logs = true
        env = "staging"
        version = "4.1.0"

        [logging]
        level = "rum_webview_bridge=debug"
        format = "json"
        "#,
    )
    .unwrap();

    assert_eq!(config.allowed_hosts, vec!["shop.example.com", "example.org"]);
    assert_eq!(config.offset_cache_capacity, 5);
    assert!(config.logs.forward_internal_logs);
    assert_eq!(config.logs.env.as_deref(), Some("staging"));
    assert_eq!(config.logs.version.as_deref(), Some("4.1.0"));
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn config_zero_capacity_rejected() {
    let err = BridgeConfig::from_toml("offset_cache_capacity = 0").unwrap_err();
    assert!(matches!(err, BridgeError::Config(_)));
}

#[test]
fn config_blank_host_rejected() {
    let err = BridgeConfig::from_toml(r#"allowed_hosts = ["ok.example.com", "  "]"#).unwrap_err();
    assert!(err.to_string().contains("allowed_hosts[1]"));
}

#[test]
fn config_wrong_type_rejected() {
    let err = BridgeConfig::from_toml(r#"offset_cache_capacity = "three""#).unwrap_err();
    assert!(matches!(err, BridgeError::Config(_)));
}
