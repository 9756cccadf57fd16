//! Tests for utility functions

use url_probe_tasks::util::{
    host_key, init_tracing, log_filter, now_ms, parse_probe_url, DEFAULT_LOG_FILTER,
};

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::info!("tracing initialised");
}

#[test]
fn test_log_filter_defaults_to_crate_info() {
    assert_eq!(log_filter(None).to_string(), DEFAULT_LOG_FILTER);
    assert_eq!(log_filter(Some("  ")).to_string(), DEFAULT_LOG_FILTER);
}

#[test]
fn test_log_filter_honours_rust_log() {
    let filter = log_filter(Some("url_probe_tasks=debug")).to_string();
    assert_eq!(filter, "url_probe_tasks=debug");
}

#[test]
fn test_now_ms_is_monotonic_enough() {
    let a = now_ms();
    let b = now_ms();
    assert!(a > 0);
    assert!(b >= a);
}

#[test]
fn test_cache_key_and_host_key() {
    let url = parse_probe_url("https://Example.COM:443").unwrap();
    assert_eq!(url.as_str(), "https://example.com/");
    assert_eq!(host_key(&url), "example.com");
}

#[test]
fn test_rejects_url_without_host() {
    assert!(parse_probe_url("http://").is_err());
    assert!(parse_probe_url("file:///etc/hosts").is_err());
}
