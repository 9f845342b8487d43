use super::*;

#[test]
fn parse_level_accepts_known_names() {
    assert_eq!(parse_level("info"), Some(log::Level::Info));
    assert_eq!(parse_level("WARN"), Some(log::Level::Warn));
    assert_eq!(parse_level(" debug "), Some(log::Level::Debug));
}

#[test]
fn parse_level_rejects_unknown_names() {
    assert_eq!(parse_level("loud"), None);
    assert_eq!(parse_level(""), None);
}
