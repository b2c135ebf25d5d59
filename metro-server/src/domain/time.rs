//! Wall-clock times of day.
//!
//! Station records carry their service hours as "HH:MM" strings. A
//! [`ClockTime`] is the validated form of such a string: an hour and a minute
//! with no date attached. Anchoring it to a calendar date in the service
//! timezone is the schedule engine's job.

use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

use super::error::ScheduleError;

/// A time of day with minute resolution.
///
/// # Examples
///
/// ```
/// use metro_server::domain::ClockTime;
///
/// let time = ClockTime::parse("5:30").unwrap();
/// assert_eq!(time.hour(), 5);
/// assert_eq!(time.to_string(), "05:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Parse a time from "H:M" format.
    ///
    /// Exactly one colon is required. Each side must be an unsigned integer;
    /// surrounding whitespace is ignored, and single-digit components are
    /// accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_server::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse("00:00").is_ok());
    /// assert!(ClockTime::parse("23:59").is_ok());
    /// assert!(ClockTime::parse("7:05").is_ok());
    ///
    /// assert!(ClockTime::parse("1430").is_err());
    /// assert!(ClockTime::parse("14:30:00").is_err());
    /// assert!(ClockTime::parse("25:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ScheduleError> {
        let invalid = |reason| ScheduleError::InvalidTimeFormat {
            value: s.to_string(),
            reason,
        };

        let mut parts = s.split(':');
        let (Some(hour), Some(minute), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid("expected exactly one ':' separator"));
        };

        let hour = parse_component(hour).ok_or_else(|| invalid("hour is not a number"))?;
        if hour > 23 {
            return Err(invalid("hour must be 0-23"));
        }

        let minute = parse_component(minute).ok_or_else(|| invalid("minute is not a number"))?;
        if minute > 59 {
            return Err(invalid("minute must be 0-59"));
        }

        Ok(Self { hour, minute })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Converts to a NaiveTime with zero seconds.
    pub fn to_naive(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Truncates any time-like value to its hour and minute.
    pub fn of<T: Timelike>(t: &T) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour, self.minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parse one side of an "H:M" string.
fn parse_component(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
