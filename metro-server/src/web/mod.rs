//! Web layer for the metro schedule service.
//!
//! Provides the JSON endpoints `/health`, `/next-metro` and `/last-metro`.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
