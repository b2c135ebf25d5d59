//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, Request, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, error, info_span};

use crate::directory::DirectoryError;
use crate::domain::{ScheduleError, StationName};
use crate::schedule::{self, NextMetro, SERVICE_TZ};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// Every request is logged with its method, path, status and latency.
pub fn create_router(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request| {
            info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        })
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    // A known path with the wrong method is answered like an unknown path
    Router::new()
        .route("/health", get(health).fallback(not_found))
        .route("/next-metro", get(next_metro).fallback(not_found))
        .route("/last-metro", get(last_metro).fallback(not_found))
        .fallback(not_found)
        .layer(trace)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Next arrival at a station, or a closed notice outside service hours.
async fn next_metro(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Response, AppError> {
    let station = station_param(query)?;
    let config = state.directory.lookup(station.as_str()).await?;

    let now = state.clock.now().with_timezone(&SERVICE_TZ);
    let response = match schedule::next_metro(&config, &now)? {
        NextMetro::Closed => Json(ServiceClosedResponse::new()).into_response(),
        NextMetro::Open {
            next_arrival,
            is_last,
        } => Json(NextMetroResponse::new(&config, next_arrival, is_last)).into_response(),
    };

    Ok(response)
}

/// Last departure of the day at a station.
async fn last_metro(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<LastMetroResponse>, AppError> {
    let station = station_param(query)?;
    let config = state.directory.lookup(station.as_str()).await?;

    let last_departure = schedule::last_departure(&config)?;
    Ok(Json(LastMetroResponse::new(&config, last_departure)))
}

/// Anything not routed above.
async fn not_found() -> AppError {
    AppError::RouteNotFound
}

/// Extract the required, non-blank `station` parameter.
///
/// When the parameter is repeated the first value is used. A query string
/// that does not decode counts as missing.
fn station_param(
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<StationName, AppError> {
    let Ok(Query(pairs)) = query else {
        return Err(AppError::MissingStation);
    };
    StationQuery::from_pairs(pairs)
        .station
        .as_deref()
        .and_then(|s| StationName::parse(s).ok())
        .ok_or(AppError::MissingStation)
}

/// Application error type.
///
/// Client-facing bodies are fixed strings; internal detail goes to the log
/// only.
#[derive(Debug)]
pub enum AppError {
    MissingStation,
    StationNotFound,
    RouteNotFound,
    Internal { message: String },
}

impl From<DirectoryError> for AppError {
    fn from(e: DirectoryError) -> Self {
        if e.is_not_found() {
            AppError::StationNotFound
        } else {
            AppError::Internal {
                message: e.to_string(),
            }
        }
    }
}

impl From<ScheduleError> for AppError {
    fn from(e: ScheduleError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingStation => (StatusCode::BAD_REQUEST, "missing station"),
            AppError::StationNotFound => (StatusCode::NOT_FOUND, "station not found"),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, "not found"),
            AppError::Internal { message } => {
                error!(error = %message, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        };

        if status.is_client_error() {
            debug!(%status, reason = message, "Request rejected");
        }

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}
