//! Raw station records and their normalization.

use serde::{Deserialize, Deserializer};

use crate::domain::StationConfig;

/// One row of the `stations` table, exactly as stored.
///
/// Every column but the name is optional. `headway_min` is read as text so
/// that numeric and string columns (and JSON numbers and strings in fixture
/// files) are handled alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, sqlx::FromRow)]
pub struct StationRecord {
    pub station: String,
    #[serde(default)]
    pub line: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub headway_min: Option<String>,
    #[serde(default)]
    pub service_start: Option<String>,
    #[serde(default)]
    pub service_end: Option<String>,
    #[serde(default)]
    pub last_window_start: Option<String>,
}

impl StationRecord {
    /// Apply the documented defaults, producing the config the schedule
    /// engine works from.
    ///
    /// - a missing, non-numeric or non-positive headway becomes 3 minutes
    /// - missing or blank service hours become "05:30"-"01:15"
    /// - a missing or blank last-train start becomes "00:45"
    /// - a missing line becomes the empty string
    ///
    /// Time strings are not validated here.
    pub fn normalize(self) -> StationConfig {
        let line = self.line.unwrap_or_default();
        let mut config = StationConfig::with_defaults(self.station, line);

        if let Some(minutes) = headway(self.headway_min.as_deref()) {
            config.headway_minutes = minutes;
        }
        for (value, slot) in [
            (self.service_start, &mut config.service_start),
            (self.service_end, &mut config.service_end),
            (self.last_window_start, &mut config.last_window_start),
        ] {
            if let Some(value) = value.filter(|s| !s.trim().is_empty()) {
                *slot = value;
            }
        }

        config
    }
}

fn headway(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|&minutes| minutes > 0)
}

/// Accept a JSON string or number as text.
///
/// Whole-valued floats such as `4.0` are written without the fraction, so
/// they read the same as the integer column would.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) if n.is_f64() => n
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| format!("{f:.0}"))
            .or_else(|| Some(n.to_string())),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(station: &str) -> StationRecord {
        StationRecord {
            station: station.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn fully_populated_record_is_kept() {
        let config = StationRecord {
            station: "Chatelet".into(),
            line: Some("M1".into()),
            headway_min: Some("4".into()),
            service_start: Some("06:00".into()),
            service_end: Some("00:30".into()),
            last_window_start: Some("00:10".into()),
        }
        .normalize();

        assert_eq!(config.name, "Chatelet");
        assert_eq!(config.line, "M1");
        assert_eq!(config.headway_minutes, 4);
        assert_eq!(config.service_start, "06:00");
        assert_eq!(config.service_end, "00:30");
        assert_eq!(config.last_window_start, "00:10");
    }

    #[test]
    fn missing_fields_get_defaults() {
        let config = record("Bastille").normalize();
        assert_eq!(config, StationConfig::with_defaults("Bastille", ""));
    }

    #[test]
    fn blank_times_get_defaults() {
        let config = StationRecord {
            service_start: Some("".into()),
            service_end: Some("   ".into()),
            last_window_start: Some("".into()),
            ..record("Nation")
        }
        .normalize();

        assert_eq!(config.service_start, "05:30");
        assert_eq!(config.service_end, "01:15");
        assert_eq!(config.last_window_start, "00:45");
    }

    #[test]
    fn malformed_times_are_passed_through() {
        let config = StationRecord {
            service_start: Some("early".into()),
            ..record("Nation")
        }
        .normalize();
        assert_eq!(config.service_start, "early");
    }

    #[test]
    fn bad_headways_fall_back() {
        for raw in ["abc", "0", "-4", "4.5", ""] {
            let config = StationRecord {
                headway_min: Some(raw.into()),
                ..record("Nation")
            }
            .normalize();
            assert_eq!(config.headway_minutes, 3, "headway {raw:?}");
        }
    }

    #[test]
    fn headway_whitespace_is_trimmed() {
        let config = StationRecord {
            headway_min: Some(" 7 ".into()),
            ..record("Nation")
        }
        .normalize();
        assert_eq!(config.headway_minutes, 7);
    }

    #[test]
    fn deserializes_numeric_and_string_headways() {
        let json = r#"[
            {"station": "A", "headway_min": 4},
            {"station": "B", "headway_min": "6"},
            {"station": "C", "headway_min": null},
            {"station": "D"}
        ]"#;
        let records: Vec<StationRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].headway_min.as_deref(), Some("4"));
        assert_eq!(records[1].headway_min.as_deref(), Some("6"));
        assert_eq!(records[2].headway_min, None);
        assert_eq!(records[3].headway_min, None);
    }

    #[test]
    fn whole_float_headway_reads_as_integer() {
        let json = r#"[
            {"station": "F", "headway_min": 4.0},
            {"station": "G", "headway_min": 4.5}
        ]"#;
        let records: Vec<StationRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].headway_min.as_deref(), Some("4"));
        assert_eq!(records[0].clone().normalize().headway_minutes, 4);
        assert_eq!(records[1].clone().normalize().headway_minutes, 3);
    }
}
