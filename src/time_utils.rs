// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-week arithmetic.
//!
//! All values are local wall-clock times. Session dates carry no time of
//! day, so they are placed at noon to keep them clear of midnight edges.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::TrainingSessionSummary;

/// Today's date on the local clock.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Monday 00:00:00.000 through Sunday 23:59:59.999 of the ISO week
/// containing `today`.
pub fn week_bounds(today: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let days_from_monday = i64::from(today.weekday().num_days_from_monday());
    let monday = today - Duration::days(days_from_monday);
    let sunday = monday + Duration::days(6);

    let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    (monday.and_time(NaiveTime::MIN), sunday.and_time(end_of_day))
}

/// Instant a session date is compared at.
pub fn session_instant(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN))
}

/// Id of the first session that falls inside the week of `today`.
pub fn find_in_week(sessions: &[TrainingSessionSummary], today: NaiveDate) -> Option<u64> {
    let (start, end) = week_bounds(today);
    sessions
        .iter()
        .find(|s| {
            let at = session_instant(s.performed_date);
            at >= start && at <= end
        })
        .map(|s| s.id)
}

/// Format a date the way the backend expects in query strings.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn session(id: u64, performed_date: NaiveDate) -> TrainingSessionSummary {
        TrainingSessionSummary { id, performed_date }
    }

    #[test]
    fn test_week_bounds_midweek() {
        // 2026-10-14 is a Wednesday
        let (start, end) = week_bounds(date(2026, 10, 14));
        assert_eq!(start, date(2026, 10, 12).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(
            end,
            date(2026, 10, 18).and_hms_milli_opt(23, 59, 59, 999).unwrap()
        );
    }

    #[test]
    fn test_week_bounds_on_sunday_and_monday() {
        let (start, _) = week_bounds(date(2026, 10, 18));
        assert_eq!(start.date(), date(2026, 10, 12));

        let (start, end) = week_bounds(date(2026, 10, 12));
        assert_eq!(start.date(), date(2026, 10, 12));
        assert_eq!(end.date(), date(2026, 10, 18));
    }

    #[test]
    fn test_week_spanning_year_end() {
        // 2026-12-31 is a Thursday; its week starts Monday 2026-12-28
        let (start, end) = week_bounds(date(2026, 12, 31));
        assert_eq!(start.date(), date(2026, 12, 28));
        assert_eq!(end.date(), date(2027, 1, 3));
    }

    #[test]
    fn test_find_in_week() {
        let today = date(2026, 10, 14);
        let sessions = vec![
            session(1, date(2026, 10, 6)),
            session(2, date(2026, 10, 12)),
            session(3, date(2026, 10, 18)),
        ];
        assert_eq!(find_in_week(&sessions, today), Some(2));
    }

    #[test]
    fn test_previous_week_is_not_found() {
        let today = date(2026, 10, 14);
        let sessions = vec![session(9, today - Duration::days(8))];
        assert_eq!(find_in_week(&sessions, today), None);
    }

    #[test]
    fn test_next_monday_is_not_found() {
        let today = date(2026, 10, 14);
        let sessions = vec![session(5, date(2026, 10, 19))];
        assert_eq!(find_in_week(&sessions, today), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2026, 3, 7)), "2026-03-07");
    }
}
