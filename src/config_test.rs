use super::*;

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_values(None, None).unwrap();
    assert_eq!(config, HostConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = HostConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn parses_overrides() {
    let config = HostConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn ipv6_bind_addr() {
    let config = HostConfig::from_values(Some("::1"), Some("4000")).unwrap();
    assert_eq!(config.socket_addr().to_string(), "[::1]:4000");
}

#[test]
fn rejects_bad_port() {
    let err = HostConfig::from_values(None, Some("70000")).unwrap_err();
    assert!(matches!(err, HostError::InvalidPort(ref v) if v == "70000"));
    assert_eq!(err.to_string(), "invalid PORT '70000'");
}

#[test]
fn rejects_bad_bind_addr() {
    let err = HostConfig::from_values(Some("localhost"), None).unwrap_err();
    assert!(matches!(err, HostError::InvalidBindAddr(_)));
}
