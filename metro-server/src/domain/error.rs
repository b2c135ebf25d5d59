//! Schedule error types.
//!
//! These errors come out of the pure schedule computations. Neither is
//! user-correctable: a malformed time string is a data-quality problem in the
//! station directory, and invalid input means a caller broke the engine's
//! contract.

/// Errors raised by the schedule engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Arguments the engine cannot compute with (non-positive headway,
    /// instants outside the representable calendar range)
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A configured time of day is not "H:M" with H in 0-23 and M in 0-59
    #[error("invalid time {value:?}: {reason}")]
    InvalidTimeFormat { value: String, reason: &'static str },
}
