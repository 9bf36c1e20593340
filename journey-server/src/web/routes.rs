//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::CityCode;
use crate::events::{EventSource, EventsError};
use crate::search::JourneySearch;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<S: EventSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/journeys/search", get(search_journeys::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Validated search parameters.
struct SearchQuery {
    date: NaiveDate,
    origin: CityCode,
    destination: CityCode,
}

/// Check presence and shape of the raw query parameters.
///
/// All failures for a request are collected and reported together, so a
/// request missing both `from` and `to` hears about both at once.
fn validate_query(req: &SearchJourneysRequest) -> Result<SearchQuery, AppError> {
    let mut errors = Vec::new();

    let date = match req.date.as_deref() {
        None => {
            errors.push("missing required query parameter: date".to_string());
            None
        }
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(format!("invalid date {raw:?}: expected YYYY-MM-DD"));
                None
            }
        },
    };

    let origin = parse_city("from", req.from.as_deref(), &mut errors);
    let destination = parse_city("to", req.to.as_deref(), &mut errors);

    match (date, origin, destination) {
        (Some(date), Some(origin), Some(destination)) => Ok(SearchQuery {
            date,
            origin,
            destination,
        }),
        _ => Err(AppError::Validation(errors)),
    }
}

/// Parse one city-code parameter, recording a failure by name.
fn parse_city(name: &str, raw: Option<&str>, errors: &mut Vec<String>) -> Option<CityCode> {
    let Some(raw) = raw else {
        errors.push(format!("missing required query parameter: {name}"));
        return None;
    };

    match CityCode::parse_normalized(raw) {
        Ok(code) => Some(code),
        Err(_) => {
            errors.push(format!("invalid {name} {raw:?}: expected a 3-letter city code"));
            None
        }
    }
}

/// Search journeys from an origin to a destination on a departure date.
async fn search_journeys<S: EventSource>(
    State(state): State<AppState<S>>,
    Query(req): Query<SearchJourneysRequest>,
) -> Result<Json<Vec<JourneyDto>>, AppError> {
    let query = validate_query(&req)?;

    // Fetch the candidate pool, then run the pure search over it
    let events = state.events.fetch_events(query.date).await?;

    let journeys = JourneySearch::new(&state.limits).search(
        query.date,
        query.origin,
        query.destination,
        &events,
    );

    Ok(Json(journeys.iter().map(JourneyDto::from_journey).collect()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Query parameters missing or malformed
    Validation(Vec<String>),

    /// The events source failed
    Upstream(EventsError),
}

impl From<EventsError> for AppError {
    fn from(e: EventsError) -> Self {
        AppError::Upstream(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            AppError::Validation(details) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: "validation failed".to_string(),
                    details: Some(details),
                },
            ),
            AppError::Upstream(e) => {
                warn!(error = %e, "events fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: format!("events source error: {e}"),
                        details: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
