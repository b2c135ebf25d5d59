//! Next-arrival computation.

use chrono::{DateTime, Duration};
use chrono_tz::Tz;

use crate::domain::{ClockTime, ScheduleError};

/// Wall-clock time of the next arrival, `headway_minutes` after `now`.
///
/// The result is read in `now`'s timezone, so an arrival that crosses a DST
/// jump shows the post-jump reading.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::Europe::Paris;
/// use metro_server::schedule::compute_next_arrival;
///
/// let now = Paris.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
/// assert_eq!(compute_next_arrival(&now, 4).unwrap().to_string(), "12:04");
/// ```
pub fn compute_next_arrival(
    now: &DateTime<Tz>,
    headway_minutes: i64,
) -> Result<ClockTime, ScheduleError> {
    if headway_minutes <= 0 {
        return Err(ScheduleError::InvalidInput("headway must be positive"));
    }

    let headway = Duration::try_minutes(headway_minutes)
        .ok_or(ScheduleError::InvalidInput("headway out of range"))?;
    let next = now
        .checked_add_signed(headway)
        .ok_or(ScheduleError::InvalidInput("date out of range"))?;

    Ok(ClockTime::of(&next))
}
