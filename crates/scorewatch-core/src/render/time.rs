use chrono::{DateTime, Utc};

/// Differences smaller than this read as "just now"
const JUST_NOW_SECS: i64 = 5;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Human-readable distance between `at` and `now` ("3 minutes ago", "in 2 hours")
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(at).num_seconds();
    let magnitude = delta.saturating_abs();

    if magnitude < JUST_NOW_SECS {
        return "just now".to_string();
    }

    let (count, unit) = if magnitude < MINUTE {
        (magnitude, "second")
    } else if magnitude < HOUR {
        (magnitude / MINUTE, "minute")
    } else if magnitude < DAY {
        (magnitude / HOUR, "hour")
    } else {
        (magnitude / DAY, "day")
    };
    let plural = if count == 1 { "" } else { "s" };

    if delta > 0 {
        format!("{} {}{} ago", count, unit, plural)
    } else {
        format!("in {} {}{}", count, unit, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_just_now() {
        assert_eq!(relative_time(at(1000), at(1000)), "just now");
        assert_eq!(relative_time(at(1000), at(1004)), "just now");
        assert_eq!(relative_time(at(1004), at(1000)), "just now");
    }

    #[test]
    fn test_past() {
        let now = at(1_000_000);
        assert_eq!(relative_time(now - Duration::seconds(42), now), "42 seconds ago");
        assert_eq!(relative_time(now - Duration::seconds(60), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::minutes(59), now), "59 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(relative_time(now - Duration::days(1), now), "1 day ago");
        assert_eq!(relative_time(now - Duration::days(9), now), "9 days ago");
    }

    #[test]
    fn test_future() {
        let now = at(1_000_000);
        assert_eq!(relative_time(now + Duration::seconds(30), now), "in 30 seconds");
        assert_eq!(relative_time(now + Duration::hours(1), now), "in 1 hour");
    }
}
