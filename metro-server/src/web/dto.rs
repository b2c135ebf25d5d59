//! Data transfer objects for web requests and responses.

use serde::Serialize;

use crate::domain::{ClockTime, StationConfig};
use crate::schedule::SERVICE_TZ;

/// Raw query string as decoded key/value pairs, in order.
pub type QueryPairs = Vec<(String, String)>;

/// Query string of the schedule endpoints.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StationQuery {
    /// Station name, required
    pub station: Option<String>,
}

impl StationQuery {
    /// Pick out the parameters, keeping the first of any repeated key.
    pub fn from_pairs(pairs: QueryPairs) -> Self {
        let station = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "station").then_some(value));
        Self { station }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Next arrival at an open station.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextMetroResponse {
    /// Station name
    pub station: String,

    /// Line serving the station
    pub line: String,

    /// Minutes between arrivals
    pub headway_min: u32,

    /// Wall-clock time of the next arrival, "HH:MM"
    pub next_arrival: String,

    /// Whether this is the last train of the day
    pub is_last: bool,

    /// Timezone the times are expressed in
    pub tz: &'static str,
}

impl NextMetroResponse {
    pub fn new(config: &StationConfig, next_arrival: ClockTime, is_last: bool) -> Self {
        Self {
            station: config.name.clone(),
            line: config.line.clone(),
            headway_min: config.headway_minutes,
            next_arrival: next_arrival.to_string(),
            is_last,
            tz: SERVICE_TZ.name(),
        }
    }
}

/// Reply for a station outside its service window.
#[derive(Debug, Serialize)]
pub struct ServiceClosedResponse {
    pub service: &'static str,
    pub tz: &'static str,
}

impl ServiceClosedResponse {
    pub fn new() -> Self {
        Self {
            service: "closed",
            tz: SERVICE_TZ.name(),
        }
    }
}

impl Default for ServiceClosedResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Last departure of the service day.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMetroResponse {
    pub station: String,
    pub line: String,

    /// "HH:MM"
    pub last_departure: String,

    pub tz: &'static str,
}

impl LastMetroResponse {
    pub fn new(config: &StationConfig, last_departure: ClockTime) -> Self {
        Self {
            station: config.name.clone(),
            line: config.line.clone(),
            last_departure: last_departure.to_string(),
            tz: SERVICE_TZ.name(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
