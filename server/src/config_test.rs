use super::*;

fn base() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

#[test]
fn no_port_keeps_site_addr() {
    assert_eq!(apply_port_override(base(), None).unwrap(), base());
}

#[test]
fn blank_port_keeps_site_addr() {
    assert_eq!(apply_port_override(base(), Some("  ")).unwrap(), base());
}

#[test]
fn port_override_keeps_ip() {
    let addr = apply_port_override(base(), Some("8080")).unwrap();
    assert_eq!(addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn invalid_port_errors() {
    let err = apply_port_override(base(), Some("http")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "http"));
    assert_eq!(err.to_string(), "invalid PORT 'http'");
}

#[test]
fn out_of_range_port_errors() {
    assert!(apply_port_override(base(), Some("70000")).is_err());
}

#[test]
fn default_log_filter_is_plain_info() {
    let filter = tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
    assert_eq!(filter.to_string(), "info");
}
