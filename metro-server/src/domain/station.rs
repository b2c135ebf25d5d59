//! Station identity and schedule configuration.

use std::fmt;

/// Default interval between arrivals, in minutes.
pub const DEFAULT_HEADWAY_MINUTES: u32 = 3;

/// Default start of the daily service window.
pub const DEFAULT_SERVICE_START: &str = "05:30";

/// Default end of the daily service window (on the following day).
pub const DEFAULT_SERVICE_END: &str = "01:15";

/// Default start of the last-train period.
pub const DEFAULT_LAST_WINDOW_START: &str = "00:45";

/// Error returned when a station name is blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("station name must not be blank")]
pub struct InvalidStationName;

/// A station name as supplied by a client.
///
/// Surrounding whitespace is removed and the result is never empty. Lookup is
/// by exact match on the trimmed name; case is preserved.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationName;
///
/// let name = StationName::parse("  Châtelet ").unwrap();
/// assert_eq!(name.as_str(), "Châtelet");
///
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name, trimming whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStationName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fully populated schedule configuration for one station.
///
/// Produced by the station directory after defaults have been applied. The
/// time-of-day fields are kept as the strings the directory holds; the
/// schedule engine validates them when it anchors them to a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationConfig {
    /// Unique station identifier
    pub name: String,

    /// Display label of the line serving the station
    pub line: String,

    /// Minutes between consecutive arrivals (always positive)
    pub headway_minutes: u32,

    /// Start of the daily service window, "HH:MM"
    pub service_start: String,

    /// End of the daily service window, "HH:MM"; at or before
    /// `service_start` means the following day
    pub service_end: String,

    /// Start of the last-train period, "HH:MM"
    pub last_window_start: String,
}

impl StationConfig {
    /// Create a config with the default schedule for the given station.
    pub fn with_defaults(name: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            line: line.into(),
            headway_minutes: DEFAULT_HEADWAY_MINUTES,
            service_start: DEFAULT_SERVICE_START.to_string(),
            service_end: DEFAULT_SERVICE_END.to_string(),
            last_window_start: DEFAULT_LAST_WINDOW_START.to_string(),
        }
    }
}
