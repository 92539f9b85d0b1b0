use crate::error::{PulseError, Result};
use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use std::time::Duration;

/// Parse an instant given as RFC3339, `YYYY-MM-DD` (midnight UTC), or "N days/weeks/months ago".
pub fn parse_instant(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(datetime) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&datetime));
        }
    }

    if let Some(duration) = parse_natural_duration(input) {
        let delta = TimeDelta::from_std(duration)
            .map_err(|_| PulseError::InvalidDate(format!("Duration overflow for '{input}'")))?;
        return now
            .checked_sub_signed(delta)
            .ok_or_else(|| PulseError::InvalidDate(format!("Duration overflow for '{input}'")));
    }

    Err(PulseError::InvalidDate(input.to_string()))
}

/// Parse a look-back such as `180d`, `6months` or `26 weeks`.
pub fn parse_lookback(input: &str) -> Result<TimeDelta> {
    let duration = humantime::parse_duration(input.trim())
        .map_err(|e| PulseError::InvalidLookback(format!("'{input}': {e}")))?;
    TimeDelta::from_std(duration).map_err(|_| PulseError::InvalidLookback(format!("'{input}' is too large")))
}

fn parse_natural_duration(input: &str) -> Option<Duration> {
    let input = input.trim().to_lowercase();

    let units: [(&str, u64); 3] = [(" days ago", 1), (" weeks ago", 7), (" months ago", 30)];
    for (suffix, days) in units {
        if let Some(n) = input.strip_suffix(suffix) {
            let secs = n.trim().parse::<u64>().ok()?.checked_mul(days)?.checked_mul(86400)?;
            return Some(Duration::from_secs(secs));
        }
    }

    None
}

/// ISO-8601 with millisecond precision and a `Z` suffix, e.g. `2024-03-01T12:00:00.000Z`.
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_rfc3339_and_plain_dates() {
        let dt = parse_instant("2024-01-02T03:04:05+02:00", now()).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 2, 1, 4, 5).unwrap());

        let day = parse_instant("2024-01-02", now()).unwrap();
        assert_eq!(day, Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_relative_dates_against_now() {
        let dt = parse_instant("2 weeks ago", now()).unwrap();
        assert_eq!(dt, now() - TimeDelta::days(14));
    }

    #[test]
    fn oversized_relative_dates_are_invalid() {
        assert!(matches!(
            parse_instant("8000000000000 months ago", now()),
            Err(PulseError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_instant("100000000000 days ago", now()),
            Err(PulseError::InvalidDate(_))
        ));
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(matches!(parse_instant("yesterday-ish", now()), Err(PulseError::InvalidDate(_))));
    }

    #[test]
    fn lookback_uses_humantime_units() {
        assert_eq!(parse_lookback("180d").unwrap(), TimeDelta::days(180));
        assert_eq!(parse_lookback("2weeks").unwrap(), TimeDelta::days(14));
        assert!(parse_lookback("soon").is_err());
    }
}
