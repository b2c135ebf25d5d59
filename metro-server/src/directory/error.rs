//! Station directory error types.

/// Errors that can occur when looking up a station.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// No station with this exact name
    #[error("station not found: {station}")]
    NotFound { station: String },

    /// Lookup attempted with a blank name
    #[error("station name is required")]
    EmptyName,

    /// Backing database failed (connection, timeout, bad query)
    #[error("directory unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Fixture file could not be read or parsed
    #[error("fixture error: {message}")]
    Fixture { message: String },
}

impl DirectoryError {
    /// Whether the error means the station simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound { .. })
    }
}
