//! Human-readable post ages.

use chrono::{DateTime, Utc};

/// Map a post's age to the label the feed shows.
///
/// Under a minute reads "Just now", then minutes, hours and days; anything a
/// week or older falls back to a short absolute date such as `Aug 7, 2026`.
/// A timestamp ahead of `now` also reads "Just now".
pub fn format_relative_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - timestamp).num_seconds();

    if elapsed < 60 {
        return "Just now".to_string();
    }
    if elapsed < 3_600 {
        return unit_label(elapsed / 60, "minute");
    }
    if elapsed < 86_400 {
        return unit_label(elapsed / 3_600, "hour");
    }
    if elapsed < 604_800 {
        return unit_label(elapsed / 86_400, "day");
    }
    timestamp.format("%b %-d, %Y").to_string()
}

fn unit_label(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(iso: &str) -> DateTime<Utc> {
        iso.parse().unwrap()
    }

    #[test]
    fn test_under_a_minute_is_just_now() {
        let now = at("2026-08-07T12:00:00Z");
        assert_eq!(format_relative_age(now - Duration::seconds(45), now), "Just now");
        assert_eq!(format_relative_age(now, now), "Just now");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        let now = at("2026-08-07T12:00:00Z");
        assert_eq!(format_relative_age(now + Duration::seconds(30), now), "Just now");
    }

    #[test]
    fn test_minutes_with_singular() {
        let now = at("2026-08-07T12:00:00Z");
        assert_eq!(
            format_relative_age(now - Duration::seconds(90), now),
            "1 minute ago"
        );
        assert_eq!(
            format_relative_age(now - Duration::seconds(60), now),
            "1 minute ago"
        );
        assert_eq!(
            format_relative_age(now - Duration::seconds(3_599), now),
            "59 minutes ago"
        );
    }

    #[test]
    fn test_hours() {
        let now = at("2026-08-07T12:00:00Z");
        assert_eq!(
            format_relative_age(now - Duration::seconds(7_200), now),
            "2 hours ago"
        );
        assert_eq!(
            format_relative_age(now - Duration::seconds(86_399), now),
            "23 hours ago"
        );
    }

    #[test]
    fn test_days() {
        let now = at("2026-08-07T12:00:00Z");
        assert_eq!(
            format_relative_age(now - Duration::days(1), now),
            "1 day ago"
        );
        assert_eq!(
            format_relative_age(now - Duration::seconds(604_799), now),
            "6 days ago"
        );
    }

    #[test]
    fn test_week_and_older_is_absolute_date() {
        let now = at("2026-08-10T12:00:00Z");
        let posted = at("2026-08-01T08:00:00Z");
        assert_eq!(format_relative_age(posted, now), "Aug 1, 2026");
    }
}
