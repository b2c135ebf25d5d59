//! Station directory served from a JSON file.
//!
//! Useful for development and tests without a database. The file holds an
//! array of station records using the same field names as the `stations`
//! table.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::StationConfig;

use super::StationDirectory;
use super::error::DirectoryError;
use super::record::StationRecord;

/// In-memory station directory.
#[derive(Debug, Clone, Default)]
pub struct FixtureDirectory {
    stations: Arc<HashMap<String, StationRecord>>,
}

impl FixtureDirectory {
    /// Build a directory from records.
    ///
    /// When two records share a name the first one wins, matching a
    /// `LIMIT 1` lookup.
    pub fn from_records(records: impl IntoIterator<Item = StationRecord>) -> Self {
        let mut stations = HashMap::new();
        for record in records {
            stations.entry(record.station.clone()).or_insert(record);
        }
        Self {
            stations: Arc::new(stations),
        }
    }

    /// Load records from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| DirectoryError::Fixture {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let records: Vec<StationRecord> =
            serde_json::from_str(&json).map_err(|e| DirectoryError::Fixture {
                message: format!("failed to parse {}: {}", path.display(), e),
            })?;

        Ok(Self::from_records(records))
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the directory has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[async_trait]
impl StationDirectory for FixtureDirectory {
    async fn lookup(&self, name: &str) -> Result<StationConfig, DirectoryError> {
        if name.is_empty() {
            return Err(DirectoryError::EmptyName);
        }

        self.stations
            .get(name)
            .cloned()
            .map(StationRecord::normalize)
            .ok_or_else(|| DirectoryError::NotFound {
                station: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn record(station: &str, line: &str) -> StationRecord {
        StationRecord {
            station: station.to_string(),
            line: Some(line.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn lookup_known_station_applies_defaults() {
        let directory = FixtureDirectory::from_records([record("Bastille", "M1")]);

        let config = directory.lookup("Bastille").await.unwrap();
        assert_eq!(config, StationConfig::with_defaults("Bastille", "M1"));
    }

    #[tokio::test]
    async fn unknown_station_is_not_found() {
        let directory = FixtureDirectory::from_records([record("Bastille", "M1")]);

        let err = directory.lookup("Inconnue").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn lookup_is_exact_match() {
        let directory = FixtureDirectory::from_records([record("Bastille", "M1")]);

        assert!(directory.lookup("bastille").await.unwrap_err().is_not_found());
        assert!(directory.lookup("Bastille ").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn empty_name_rejected() {
        let directory = FixtureDirectory::default();
        assert!(matches!(
            directory.lookup("").await,
            Err(DirectoryError::EmptyName)
        ));
    }

    #[test]
    fn first_duplicate_wins() {
        let directory =
            FixtureDirectory::from_records([record("Nation", "M1"), record("Nation", "M2")]);
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.stations["Nation"].line.as_deref(), Some("M1"));
    }

    #[tokio::test]
    async fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(
            &path,
            r#"[{"station": "Chatelet", "line": "M1", "headway_min": 3,
                 "service_start": "05:30", "service_end": "01:15",
                 "last_window_start": "00:45"}]"#,
        )
        .unwrap();

        let directory = FixtureDirectory::load(&path).unwrap();
        assert_eq!(directory.len(), 1);

        let config = directory.lookup("Chatelet").await.unwrap();
        assert_eq!(config.line, "M1");
        assert_eq!(config.headway_minutes, 3);
    }

    #[test]
    fn load_bundled_stations() {
        let directory = FixtureDirectory::load("data/stations.json").unwrap();
        assert!(!directory.is_empty());
    }

    #[test]
    fn missing_file_is_fixture_error() {
        let err = FixtureDirectory::load("/nonexistent/stations.json").unwrap_err();
        assert!(matches!(err, DirectoryError::Fixture { .. }));
    }

    #[test]
    fn malformed_file_is_fixture_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = FixtureDirectory::load(&path).unwrap_err();
        assert!(matches!(err, DirectoryError::Fixture { .. }));
    }
}
