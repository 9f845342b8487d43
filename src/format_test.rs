use super::*;

fn fixed() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(15, 7, 0).unwrap()
}

#[test]
fn date_only_has_no_time_fields() {
    assert_eq!(format_date(&fixed(), false), "Jan 5, 2024");
}

#[test]
fn include_time_adds_two_digit_hour_and_minute() {
    assert_eq!(format_date(&fixed(), true), "Jan 5, 2024, 03:07 PM");
}

#[test]
fn morning_times_use_am() {
    let dt = NaiveDate::from_ymd_opt(2023, 11, 30).unwrap().and_hms_opt(0, 5, 0).unwrap();
    assert_eq!(format_date(&dt, true), "Nov 30, 2023, 12:05 AM");
}

#[test]
fn parse_accepts_supported_layouts() {
    assert_eq!(parse_date("2024-01-05T15:07:00Z").unwrap(), fixed());
    assert_eq!(parse_date("2024-01-05T15:07:00+02:00").unwrap(), fixed());
    assert_eq!(parse_date("2024-01-05T15:07:00.250").unwrap().format("%H:%M").to_string(), "15:07");
    assert_eq!(parse_date("2024-01-05T15:07").unwrap(), fixed());
    assert_eq!(parse_date("2024-01-05 15:07:00").unwrap(), fixed());
    assert_eq!(format_date(&parse_date("2024-01-05").unwrap(), true), "Jan 5, 2024, 12:00 AM");
}

#[test]
fn format_date_str_reports_invalid_input() {
    assert_eq!(format_date_str("2024-01-05", false).unwrap(), "Jan 5, 2024");
    assert_eq!(
        format_date_str("yesterday", false),
        Err(FormatError::InvalidDate("yesterday".to_owned()))
    );
}
