//! Station directory: name → schedule configuration.
//!
//! The directory is the only part of a request that performs I/O. Whatever
//! the backing store, a lookup hands back a fully defaulted
//! [`StationConfig`], or reports that the station does not exist or that the
//! store could not be reached.

mod error;
mod fixture;
mod postgres;
mod record;

use async_trait::async_trait;

use crate::domain::StationConfig;

pub use error::DirectoryError;
pub use fixture::FixtureDirectory;
pub use postgres::{PgDirectoryConfig, PgStationDirectory};
pub use record::StationRecord;

/// Lookup of station configuration by exact name.
#[async_trait]
pub trait StationDirectory: Send + Sync {
    /// Fetch the normalized config for `name`.
    ///
    /// Returns [`DirectoryError::NotFound`] when no station has this name.
    async fn lookup(&self, name: &str) -> Result<StationConfig, DirectoryError>;
}
