use super::*;

#[test]
fn defaults_match_console_routes() {
    let config = ConsoleConfig::default();
    assert_eq!(config.api_base, "/api/admin");
    assert_eq!(config.anonymous_landing, "/login");
    assert_eq!(config.authenticated_landing, "/");
    assert!(config.resolve_timeout.is_none());
}

#[test]
fn endpoint_joins_without_double_slash() {
    let config = ConsoleConfig::default();
    assert_eq!(config.endpoint("sessions"), "/api/admin/sessions");
    assert_eq!(config.endpoint("/cache/stats"), "/api/admin/cache/stats");
}

#[test]
fn overrides_trim_trailing_slash_and_parse_timeout() {
    let config = ConsoleConfig::from_overrides(Some("https://ops.example.com/api/"), Some("2500"));
    assert_eq!(config.api_base, "https://ops.example.com/api");
    assert_eq!(config.resolve_timeout, Some(Duration::from_millis(2500)));
}

#[test]
fn blank_or_invalid_overrides_keep_defaults() {
    let config = ConsoleConfig::from_overrides(Some("  "), Some("soon"));
    assert_eq!(config, ConsoleConfig::default());

    let zero = ConsoleConfig::from_overrides(None, Some("0"));
    assert!(zero.resolve_timeout.is_none());
}
