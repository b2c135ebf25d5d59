//! Application state for the web layer.

use std::sync::Arc;

use crate::directory::StationDirectory;
use crate::schedule::Clock;

/// Shared application state.
///
/// Holds the collaborators a request needs; both are injected at startup.
#[derive(Clone)]
pub struct AppState {
    /// Station configuration lookup
    pub directory: Arc<dyn StationDirectory>,

    /// Source of the current instant
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        directory: impl StationDirectory + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            directory: Arc::new(directory),
            clock: Arc::new(clock),
        }
    }
}
