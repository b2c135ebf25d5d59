//! Anchoring times of day to calendar dates in the service timezone.
//!
//! Every daily time the engine works with ("05:30", "01:15", ...) is placed
//! on a calendar date relative to some reference instant. When the result
//! lands before the reference it belongs to the following day. That rule
//! lives here, in [`anchor_following`], and nowhere else.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

use crate::domain::{ClockTime, ScheduleError};

const OUT_OF_RANGE: ScheduleError = ScheduleError::InvalidInput("date out of range");

/// When an anchored time moves to the following calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rollover {
    /// The anchored instant must end up strictly after the reference.
    UnlessAfter,
    /// The anchored instant may coincide with the reference.
    UnlessAtOrAfter,
}

/// Resolve a local wall-clock reading to an instant in `tz`.
///
/// A reading inside a DST fold resolves to the earlier instant. A reading
/// inside a DST gap does not exist on the wall clock; it is read with the
/// offset in force before the gap, which lands it just after the jump.
pub(crate) fn localize(tz: Tz, local: NaiveDateTime) -> Result<DateTime<Tz>, ScheduleError> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => {
            let day_before = local
                .checked_sub_signed(Duration::days(1))
                .ok_or(OUT_OF_RANGE)?;
            let offset = tz.offset_from_utc_datetime(&day_before).fix();
            let utc = local
                .checked_sub_signed(Duration::seconds(offset.local_minus_utc().into()))
                .ok_or(OUT_OF_RANGE)?;
            Ok(tz.from_utc_datetime(&utc))
        }
    }
}

/// Place `time` on `date` in `tz`, zero seconds.
pub(crate) fn anchor_on(
    tz: Tz,
    date: NaiveDate,
    time: ClockTime,
) -> Result<DateTime<Tz>, ScheduleError> {
    localize(tz, date.and_time(time.to_naive()))
}

/// Place `time` on the calendar date of `reference`.
pub(crate) fn anchor(
    reference: &DateTime<Tz>,
    time: ClockTime,
) -> Result<DateTime<Tz>, ScheduleError> {
    anchor_on(reference.timezone(), reference.date_naive(), time)
}

/// Place `time` on the calendar date of `reference`, moving it to the
/// following calendar day when it falls before the reference.
///
/// With [`Rollover::UnlessAfter`] a result equal to the reference also moves.
pub(crate) fn anchor_following(
    reference: &DateTime<Tz>,
    time: ClockTime,
    rollover: Rollover,
) -> Result<DateTime<Tz>, ScheduleError> {
    let anchored = anchor(reference, time)?;
    let rolls = match rollover {
        Rollover::UnlessAfter => anchored <= *reference,
        Rollover::UnlessAtOrAfter => anchored < *reference,
    };
    if !rolls {
        return Ok(anchored);
    }

    let next_day = reference.date_naive().succ_opt().ok_or(OUT_OF_RANGE)?;
    anchor_on(reference.timezone(), next_day, time)
}
