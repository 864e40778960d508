//! Human-readable date and time strings for task cards and detail views.
//!
//! All functions render in the timezone they are given; stored instants are UTC.

use std::fmt::Display;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};

use crate::errors::CoreError;

/// Placeholder for a missing value.
pub const ABSENT: &str = "—";

/// Shown by [`format_due`] when a task has no due date.
pub const NO_DUE_DATE: &str = "No due date";

/// `"Feb 21 — 3:45 PM"`, with the year added when it differs from `now`'s year.
pub fn format_timestamp<Tz>(instant: Option<DateTime<Utc>>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(instant) = instant else {
        return ABSENT.to_string();
    };
    let local = instant.with_timezone(&now.timezone());
    if local.year() == now.year() {
        local.format("%b %-d — %-I:%M %p").to_string()
    } else {
        local.format("%b %-d, %Y — %-I:%M %p").to_string()
    }
}

/// `"Feb 21, 2026"`.
pub fn format_date<Tz>(instant: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.map_or_else(
        || ABSENT.to_string(),
        |i| i.with_timezone(tz).format("%b %-d, %Y").to_string(),
    )
}

/// `"3:45 PM"`.
pub fn format_time<Tz>(instant: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.map_or_else(
        || ABSENT.to_string(),
        |i| i.with_timezone(tz).format("%-I:%M %p").to_string(),
    )
}

/// `"Feb 21 at 3:45 PM"`, or [`NO_DUE_DATE`].
pub fn format_due<Tz>(due: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    due.map_or_else(
        || NO_DUE_DATE.to_string(),
        |d| d.with_timezone(tz).format("%b %-d at %-I:%M %p").to_string(),
    )
}

fn unit(count: i64, singular: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// `"just now"`, `"5 mins ago"`, `"in 3 days"`. Each unit is floored.
#[must_use]
pub fn relative_time(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(instant);
    let future = delta.num_seconds() < 0;
    let delta = delta.abs();

    let minutes = delta.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    let amount = if minutes < 60 {
        unit(minutes, "min")
    } else if delta.num_hours() < 24 {
        unit(delta.num_hours(), "hour")
    } else {
        unit(delta.num_days(), "day")
    };

    if future {
        format!("in {amount}")
    } else {
        format!("{amount} ago")
    }
}

/// Combine a local date and an optional `HH:MM` into a UTC due instant.
///
/// Without a time the current local wall-clock time (to the minute) is used.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] for a malformed time or a local time that
/// does not exist in the timezone (DST gap).
pub fn build_due_at<Tz: TimeZone>(
    date: NaiveDate,
    time: Option<&str>,
    now: &DateTime<Tz>,
) -> Result<DateTime<Utc>, CoreError> {
    let time = match time.map(str::trim).filter(|t| !t.is_empty()) {
        Some(raw) => NaiveTime::parse_from_str(raw, "%H:%M")
            .map_err(|_| CoreError::Validation(format!("invalid time '{raw}', expected HH:MM")))?,
        None => NaiveTime::from_hms_opt(now.hour(), now.minute(), 0)
            .ok_or_else(|| CoreError::Validation("invalid current time".into()))?,
    };
    now.timezone()
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| CoreError::Validation(format!("{date} {time} does not exist locally")))
}

/// Split a due instant into the local date and `HH:MM` used by edit forms.
pub fn split_due_at<Tz>(due: DateTime<Utc>, tz: &Tz) -> (NaiveDate, String)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = due.with_timezone(tz);
    (local.date_naive(), local.format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeDelta};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn timestamp_hides_current_year() {
        let now = at(2026, 3, 10, 10, 0);
        assert_eq!(
            format_timestamp(Some(at(2026, 2, 21, 15, 45)), &now),
            "Feb 21 — 3:45 PM"
        );
        assert_eq!(
            format_timestamp(Some(at(2025, 2, 21, 9, 5)), &now),
            "Feb 21, 2025 — 9:05 AM"
        );
        assert_eq!(format_timestamp(None, &now), ABSENT);
    }

    #[test]
    fn due_and_parts() {
        let due = Some(at(2026, 2, 21, 15, 45));
        assert_eq!(format_due(due, &Utc), "Feb 21 at 3:45 PM");
        assert_eq!(format_due(None, &Utc), "No due date");
        assert_eq!(format_date(due, &Utc), "Feb 21, 2026");
        assert_eq!(format_time(due, &Utc), "3:45 PM");
        assert_eq!(format_time(None, &Utc), "—");
    }

    #[test]
    fn formatting_uses_given_timezone() {
        let minus_two = FixedOffset::west_opt(2 * 3600).unwrap();
        assert_eq!(
            format_due(Some(at(2026, 2, 21, 1, 0)), &minus_two),
            "Feb 20 at 11:00 PM"
        );
    }

    #[rstest]
    #[case(TimeDelta::seconds(-30), "just now")]
    #[case(TimeDelta::minutes(-1), "1 min ago")]
    #[case(TimeDelta::minutes(-5), "5 mins ago")]
    #[case(TimeDelta::minutes(-119), "1 hour ago")]
    #[case(TimeDelta::hours(-30), "1 day ago")]
    #[case(TimeDelta::days(3) + TimeDelta::hours(2), "in 3 days")]
    #[case(TimeDelta::minutes(90), "in 1 hour")]
    fn relative(#[case] offset: TimeDelta, #[case] expected: &str) {
        let now = at(2026, 3, 10, 10, 0);
        assert_eq!(relative_time(now + offset, now), expected);
    }

    #[test]
    fn build_due_with_explicit_time() {
        let now = at(2026, 3, 10, 10, 17);
        let date = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
        assert_eq!(
            build_due_at(date, Some("08:30"), &now).unwrap(),
            at(2026, 3, 12, 8, 30)
        );
    }

    #[test]
    fn build_due_defaults_to_current_time() {
        let now = at(2026, 3, 10, 10, 17);
        let date = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
        assert_eq!(build_due_at(date, None, &now).unwrap(), at(2026, 3, 12, 10, 17));
        assert_eq!(build_due_at(date, Some("  "), &now).unwrap(), at(2026, 3, 12, 10, 17));
    }

    #[test]
    fn build_due_converts_local_to_utc() {
        let plus_five = FixedOffset::east_opt(5 * 3600).unwrap();
        let now = at(2026, 3, 10, 10, 0).with_timezone(&plus_five);
        let date = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
        assert_eq!(
            build_due_at(date, Some("02:00"), &now).unwrap(),
            at(2026, 3, 11, 21, 0)
        );
    }

    #[test]
    fn build_due_rejects_bad_time() {
        let now = at(2026, 3, 10, 10, 0);
        let date = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
        let err = build_due_at(date, Some("25:99"), &now).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn split_reverses_build() {
        let now = at(2026, 3, 10, 10, 0);
        let date = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        let due = build_due_at(date, Some("18:05"), &now).unwrap();
        assert_eq!(split_due_at(due, &Utc), (date, "18:05".to_string()));
    }
}
