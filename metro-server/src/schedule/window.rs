//! Service window and last-train resolution.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::domain::{ClockTime, ScheduleError};

use super::anchor::{Rollover, anchor, anchor_following};

/// A station's daily operating window, resolved around an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceWindow {
    /// Whether the evaluated instant lies inside the window (both ends inclusive)
    pub is_open: bool,

    /// Service start on the evaluated instant's calendar date
    pub window_start: DateTime<Tz>,

    /// Service end, always strictly after `window_start`
    pub window_end: DateTime<Tz>,
}

/// Resolve the service window for the calendar date of `now`.
///
/// The window starts at `service_start` on `now`'s date. An end time at or
/// before the start time belongs to the following day, so "05:30"-"01:15"
/// runs from 05:30 until 01:15 the next morning.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::Europe::Paris;
/// use metro_server::schedule::resolve_service_window;
///
/// let noon = Paris.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
/// assert!(resolve_service_window(&noon, "05:30", "01:15").unwrap().is_open);
///
/// let three_am = Paris.with_ymd_and_hms(2024, 3, 15, 3, 0, 0).unwrap();
/// assert!(!resolve_service_window(&three_am, "05:30", "01:15").unwrap().is_open);
/// ```
pub fn resolve_service_window(
    now: &DateTime<Tz>,
    service_start: &str,
    service_end: &str,
) -> Result<ServiceWindow, ScheduleError> {
    let start = ClockTime::parse(service_start)?;
    let end = ClockTime::parse(service_end)?;

    let window_start = anchor(now, start)?;
    let window_end = anchor_following(&window_start, end, Rollover::UnlessAfter)?;

    Ok(ServiceWindow {
        is_open: window_start <= *now && *now <= window_end,
        window_start,
        window_end,
    })
}

/// Resolve the instant the last-train period begins.
///
/// Anchored to `window_start`'s calendar date, moved to the following day if
/// that lands before the window opens.
pub fn resolve_last_window_start(
    window_start: &DateTime<Tz>,
    last_window_start: &str,
) -> Result<DateTime<Tz>, ScheduleError> {
    let time = ClockTime::parse(last_window_start)?;
    anchor_following(window_start, time, Rollover::UnlessAtOrAfter)
}

/// Whether an arrival evaluated at `now` is the last of the service day.
pub fn classify_arrival(now: &DateTime<Tz>, last_window: &DateTime<Tz>) -> bool {
    now >= last_window
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use chrono_tz::Europe::Paris;

    fn paris(y: i32, m: u32, d: u32, h: u32, mi: u32) -> DateTime<Tz> {
        Paris.with_ymd_and_hms(y, m, d, h, mi, 0).unwrap()
    }

    #[test]
    fn overnight_window_closed_before_start() {
        let now = paris(2024, 3, 15, 3, 0);
        let window = resolve_service_window(&now, "05:30", "01:15").unwrap();

        assert!(!window.is_open);
        assert_eq!(window.window_start, paris(2024, 3, 15, 5, 30));
        assert_eq!(window.window_end, paris(2024, 3, 16, 1, 15));
    }

    #[test]
    fn overnight_window_open_at_midday() {
        let now = paris(2024, 3, 15, 12, 0);
        let window = resolve_service_window(&now, "05:30", "01:15").unwrap();

        assert!(window.is_open);
        assert_eq!(window.window_start, paris(2024, 3, 15, 5, 30));
    }

    #[test]
    fn overnight_window_open_late_evening() {
        let now = paris(2024, 3, 15, 23, 59);
        let window = resolve_service_window(&now, "05:30", "01:15").unwrap();
        assert!(window.is_open);
    }

    #[test]
    fn window_is_anchored_to_now_date() {
        // 00:30 belongs to the previous evening's service, but the window is
        // built on today's date and has not opened yet
        let now = paris(2024, 3, 16, 0, 30);
        let window = resolve_service_window(&now, "05:30", "01:15").unwrap();

        assert!(!window.is_open);
        assert_eq!(window.window_start, paris(2024, 3, 16, 5, 30));
    }

    #[test]
    fn both_ends_inclusive() {
        let start = paris(2024, 3, 15, 8, 0);
        let end = paris(2024, 3, 15, 20, 0);

        assert!(resolve_service_window(&start, "08:00", "20:00").unwrap().is_open);
        assert!(resolve_service_window(&end, "08:00", "20:00").unwrap().is_open);

        let before = start - Duration::seconds(1);
        let after = end + Duration::seconds(1);
        assert!(!resolve_service_window(&before, "08:00", "20:00").unwrap().is_open);
        assert!(!resolve_service_window(&after, "08:00", "20:00").unwrap().is_open);
    }

    #[test]
    fn equal_start_and_end_spans_a_full_day() {
        let now = paris(2024, 3, 15, 10, 0);
        let window = resolve_service_window(&now, "10:00", "10:00").unwrap();

        assert!(window.is_open);
        assert_eq!(window.window_end, paris(2024, 3, 16, 10, 0));
    }

    #[test]
    fn daytime_window_stays_on_same_day() {
        let now = paris(2024, 3, 15, 12, 0);
        let window = resolve_service_window(&now, "06:00", "22:00").unwrap();
        assert_eq!(window.window_end, paris(2024, 3, 15, 22, 0));
    }

    #[test]
    fn malformed_times_rejected() {
        let now = paris(2024, 3, 15, 12, 0);

        for (start, end) in [
            ("5h30", "01:15"),
            ("05:30", "01-15"),
            ("05:30:00", "01:15"),
            ("xx:30", "01:15"),
            ("05:30", "24:00"),
            ("05:61", "01:15"),
        ] {
            let err = resolve_service_window(&now, start, end).unwrap_err();
            assert!(
                matches!(err, ScheduleError::InvalidTimeFormat { .. }),
                "{start}-{end}: {err:?}"
            );
        }
    }

    #[test]
    fn last_window_moves_to_following_day() {
        let window_start = paris(2024, 3, 15, 5, 30);
        let last = resolve_last_window_start(&window_start, "00:45").unwrap();
        assert_eq!(last, paris(2024, 3, 16, 0, 45));
    }

    #[test]
    fn last_window_same_day_when_after_start() {
        let window_start = paris(2024, 3, 15, 5, 30);
        let last = resolve_last_window_start(&window_start, "23:00").unwrap();
        assert_eq!(last, paris(2024, 3, 15, 23, 0));
    }

    #[test]
    fn last_window_equal_to_start_does_not_move() {
        let window_start = paris(2024, 3, 15, 5, 30);

        let last = resolve_last_window_start(&window_start, "05:30").unwrap();
        assert_eq!(last, window_start);

        let last = resolve_last_window_start(&window_start, "05:29").unwrap();
        assert_eq!(last, paris(2024, 3, 16, 5, 29));
    }

    #[test]
    fn last_window_malformed() {
        let window_start = paris(2024, 3, 15, 5, 30);
        let err = resolve_last_window_start(&window_start, "0045").unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidTimeFormat { .. }));
    }

    #[test]
    fn classify_boundary_is_inclusive() {
        let last = paris(2024, 3, 16, 0, 45);

        assert!(!classify_arrival(&(last - Duration::minutes(1)), &last));
        assert!(classify_arrival(&last, &last));
        assert!(classify_arrival(&(last + Duration::minutes(1)), &last));
    }
}
