//! Schedule engine.
//!
//! Pure functions over a station's configuration and an instant in the
//! service timezone. Nothing here performs I/O or holds state: the same
//! inputs always produce the same outputs.
//!
//! A station's day runs from `service_start` to `service_end`, where an end
//! at or before the start means the next morning. Arrivals come every
//! `headway_minutes`; once the clock passes `last_window_start` each arrival
//! is flagged as the last of the day.

mod anchor;
mod arrival;
mod clock;
mod window;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::domain::{ClockTime, ScheduleError, StationConfig};

pub use arrival::compute_next_arrival;
pub use clock::{Clock, FixedClock, SystemClock};
pub use window::{
    ServiceWindow, classify_arrival, resolve_last_window_start, resolve_service_window,
};

/// The timezone every schedule is evaluated in.
pub const SERVICE_TZ: Tz = chrono_tz::Europe::Paris;

/// Answer to "when is the next train".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextMetro {
    /// The station is outside its service window
    Closed,

    /// The station is running
    Open {
        /// Wall-clock time of the next arrival
        next_arrival: ClockTime,
        /// Whether that arrival falls in the last-train period
        is_last: bool,
    },
}

/// Evaluate the next arrival at a station.
///
/// The last-train period is only resolved when the station is open, so a
/// malformed `last_window_start` goes unnoticed while service is closed.
pub fn next_metro(
    config: &StationConfig,
    now: &DateTime<Tz>,
) -> Result<NextMetro, ScheduleError> {
    let window = resolve_service_window(now, &config.service_start, &config.service_end)?;
    if !window.is_open {
        return Ok(NextMetro::Closed);
    }

    let next_arrival = compute_next_arrival(now, i64::from(config.headway_minutes))?;
    let last_window = resolve_last_window_start(&window.window_start, &config.last_window_start)?;

    Ok(NextMetro::Open {
        next_arrival,
        is_last: classify_arrival(now, &last_window),
    })
}

/// The time of the last departure of the service day.
pub fn last_departure(config: &StationConfig) -> Result<ClockTime, ScheduleError> {
    ClockTime::parse(&config.service_end)
}
