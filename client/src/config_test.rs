use super::*;

#[test]
fn default_launch_matches_constant() {
    let config = LandingConfig::default();
    assert_eq!(config.launch_at_ms, 1_767_225_599_000);
    assert_eq!(config.max_retries, 3);
    assert_eq!(config.retry_delay, Duration::from_millis(1000));
    assert_eq!(config.sheets_url, DEFAULT_SHEETS_URL);
}

#[test]
fn parse_launch_at_honors_offset() {
    assert_eq!(parse_launch_at("1970-01-01T00:00:01Z"), Ok(1000));
    assert_eq!(parse_launch_at("1970-01-01T01:00:00+01:00"), Ok(0));
}

#[test]
fn parse_launch_at_rejects_local_time_without_offset() {
    assert_eq!(
        parse_launch_at("2025-12-31T23:59:59"),
        Err(ConfigError::InvalidLaunchAt("2025-12-31T23:59:59".to_owned()))
    );
}

#[test]
fn parse_log_level_is_case_insensitive() {
    assert_eq!(parse_log_level("DEBUG"), Ok(LogLevel::Debug));
    assert_eq!(parse_log_level("warning"), Ok(LogLevel::Warn));
    assert!(parse_log_level("loud").is_err());
}

#[test]
fn from_values_overrides_valid_entries() {
    let (config, errors) =
        LandingConfig::from_values(Some("2030-01-01T00:00:00Z"), Some(" https://example.com/hook "), Some("trace"));
    assert!(errors.is_empty());
    assert_eq!(config.launch_at_ms, 1_893_456_000_000);
    assert_eq!(config.sheets_url, "https://example.com/hook");
    assert_eq!(config.log_level, LogLevel::Trace);
}

#[test]
fn from_values_keeps_defaults_and_reports_invalid_entries() {
    let (config, errors) = LandingConfig::from_values(Some("soon"), Some("   "), Some("shout"));
    assert_eq!(config, LandingConfig::default());
    assert_eq!(
        errors,
        vec![
            ConfigError::InvalidLaunchAt("soon".to_owned()),
            ConfigError::UnknownLogLevel("shout".to_owned()),
        ]
    );
}
