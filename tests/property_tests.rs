//! Property-based tests for entry validation and formatting

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use sitemap_gen::frequency::VALID_FREQUENCIES;
use sitemap_gen::{Error, UrlEntry};

fn fixed_instant() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
}

proptest! {
    #[test]
    fn priority_in_range_always_constructs(priority in 0.0f64..=1.0) {
        let entry = UrlEntry::new("https://example.com/", "daily", priority, fixed_instant())
            .unwrap();
        // one fractional digit, e.g. "0.0" .. "1.0"
        let text = entry.priority();
        prop_assert_eq!(text.len(), 3);
        let parsed: f64 = text.parse().unwrap();
        prop_assert!((0.0..=1.0).contains(&parsed));
        prop_assert!((parsed - priority).abs() <= 0.05 + f64::EPSILON);
    }

    #[test]
    fn priority_out_of_range_always_fails(priority in prop_oneof![
        -1.0e6f64..-f64::EPSILON,
        (1.0f64 + 1.0e-9)..1.0e6,
    ]) {
        let err = UrlEntry::new("https://example.com/", "daily", priority, fixed_instant())
            .unwrap_err();
        prop_assert!(matches!(err, Error::InvalidPriority(_)));
    }

    #[test]
    fn unknown_frequency_always_fails(freq in "[a-zA-Z]{0,12}") {
        prop_assume!(!VALID_FREQUENCIES.contains(&freq.as_str()));
        let err = UrlEntry::new("https://example.com/", &freq, 0.5, fixed_instant())
            .unwrap_err();
        prop_assert!(matches!(err, Error::InvalidFrequency(_)));
    }

    #[test]
    fn lastmod_is_the_calendar_date(
        year in 1990i32..2100,
        ordinal in 1u32..=365,
        secs in 0u32..86_400,
    ) {
        let date = chrono::NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let t = Utc
            .from_utc_datetime(&date.and_time(
                chrono::NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap(),
            ));
        let entry = UrlEntry::new("https://example.com/", "weekly", 0.5, t).unwrap();
        prop_assert_eq!(entry.last_modified(), date.format("%Y-%m-%d").to_string());
    }
}
