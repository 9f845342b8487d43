use super::*;

#[test]
fn defaults_match_page_contract() {
    let config = UiConfig::default();
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.storage_keys.theme, "theme");
    assert_eq!(config.storage_keys.access_token, "accessToken");
    assert_eq!(config.storage_keys.user_email, "userEmail");
    assert_eq!(config.theme_variant, ThemeVariant::Simple);
    assert_eq!(config.notification_duration().as_millis(), 5000);
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = UiConfig::from_json(r#"{"theme_variant":"propagating","storage_keys":{"theme":"ui-theme"}}"#).unwrap();
    assert_eq!(config.theme_variant, ThemeVariant::Propagating);
    assert_eq!(config.storage_keys.theme, "ui-theme");
    assert_eq!(config.storage_keys.access_token, "accessToken");
    assert_eq!(config.login_path, "/login");
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(UiConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
    assert!(matches!(
        UiConfig::from_json(r#"{"theme_variant":"neon"}"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn from_json_rejects_unknown_log_level() {
    let err = UiConfig::from_json(r#"{"log_level":"loud"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::LogLevel(ref level) if level == "loud"));
}

#[test]
fn from_json_or_default_tolerates_absent_and_bad_blocks() {
    assert_eq!(UiConfig::from_json_or_default(None), UiConfig::default());
    assert_eq!(UiConfig::from_json_or_default(Some("   ")), UiConfig::default());
    assert_eq!(UiConfig::from_json_or_default(Some("[1,2")), UiConfig::default());

    let config = UiConfig::from_json_or_default(Some(r#"{"login_path":"/signin"}"#));
    assert_eq!(config.login_path, "/signin");
}
