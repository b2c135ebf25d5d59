//! Domain types for the metro schedule service.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod error;
mod station;
mod time;

pub use error::ScheduleError;
pub use station::{
    DEFAULT_HEADWAY_MINUTES, DEFAULT_LAST_WINDOW_START, DEFAULT_SERVICE_END,
    DEFAULT_SERVICE_START, InvalidStationName, StationConfig, StationName,
};
pub use time::ClockTime;
