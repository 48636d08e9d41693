use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn empty_environment_yields_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.login_wait_secs, 15);
    assert_eq!(cfg.user_agent, "pawport/0.1 (membership-aggregator)");
    assert_eq!(cfg.max_concurrent_venues, 4);
}

#[test]
fn overrides_are_respected() {
    let mut map = HashMap::new();
    map.insert("PAWPORT_LOG_LEVEL", "debug");
    map.insert("PAWPORT_REQUEST_TIMEOUT_SECS", "5");
    map.insert("PAWPORT_LOGIN_WAIT_SECS", "2");
    map.insert("PAWPORT_USER_AGENT", "test-agent/9");
    map.insert("PAWPORT_MAX_CONCURRENT_VENUES", "1");

    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.request_timeout_secs, 5);
    assert_eq!(cfg.login_wait_secs, 2);
    assert_eq!(cfg.user_agent, "test-agent/9");
    assert_eq!(cfg.max_concurrent_venues, 1);
}

#[test]
fn invalid_timeout_is_rejected() {
    let mut map = HashMap::new();
    map.insert("PAWPORT_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. })
            if var == "PAWPORT_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(PAWPORT_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn invalid_concurrency_is_rejected() {
    let mut map = HashMap::new();
    map.insert("PAWPORT_MAX_CONCURRENT_VENUES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. })
            if var == "PAWPORT_MAX_CONCURRENT_VENUES"),
        "expected InvalidEnvVar(PAWPORT_MAX_CONCURRENT_VENUES), got: {result:?}"
    );
}
