//! Server configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `PORT` | 5000 | TCP port to listen on |
//! | `BIND_ADDR` | 0.0.0.0 | Interface to listen on |
//! | `DATABASE_URL`, else `PG_URI` | none | Postgres connection string |
//! | `STATIONS_FILE` | none | Serve stations from a JSON file instead |
//! | `DB_MAX_CONNECTIONS` | 5 | Pool size |
//! | `DB_ACQUIRE_TIMEOUT_SECS` | 5 | Wait for a pooled connection |
//! | `RUN_MIGRATIONS` | false | Create the `stations` table on startup |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::directory::PgDirectoryConfig;

const DEFAULT_PORT: u16 = 5000;

/// Errors in the environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but does not parse
    #[error("invalid {key}={value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// Neither a database URL nor a fixture file is configured
    #[error("no station directory configured: set DATABASE_URL, PG_URI or STATIONS_FILE")]
    MissingDirectory,
}

/// Where station configuration comes from.
#[derive(Debug, Clone)]
pub enum DirectorySource {
    /// A Postgres `stations` table
    Postgres(PgDirectoryConfig),
    /// A JSON fixture file
    Fixture(PathBuf),
}

/// Everything needed to start the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub addr: SocketAddr,

    /// Station directory backend
    pub directory: DirectorySource,

    /// Whether to run migrations against the database on startup
    pub run_migrations: bool,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse_var(&get, "PORT")?.unwrap_or(DEFAULT_PORT);
        let ip = parse_var(&get, "BIND_ADDR")?.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

        let directory = if let Some(path) = get("STATIONS_FILE") {
            DirectorySource::Fixture(PathBuf::from(path))
        } else if let Some(url) = get("DATABASE_URL").or_else(|| get("PG_URI")) {
            let mut pg = PgDirectoryConfig::new(url);
            if let Some(max) = parse_var::<u32, _>(&get, "DB_MAX_CONNECTIONS")? {
                pg = pg.with_max_connections(max);
            }
            if let Some(secs) = parse_var::<u64, _>(&get, "DB_ACQUIRE_TIMEOUT_SECS")? {
                pg = pg.with_acquire_timeout(Duration::from_secs(secs));
            }
            DirectorySource::Postgres(pg)
        } else {
            return Err(ConfigError::MissingDirectory);
        };

        let run_migrations = parse_var(&get, "RUN_MIGRATIONS")?.unwrap_or(false);

        Ok(Self {
            addr: SocketAddr::new(ip, port),
            directory,
            run_migrations,
        })
    }
}

/// Parse an optional variable, reporting which key was malformed.
fn parse_var<T, G>(get: &G, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|value| {
            value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                key,
                value: value.clone(),
                reason: e.to_string(),
            })
        })
        .transpose()
}
