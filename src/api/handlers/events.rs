use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{empty_string_as_none, DeleteResponse};
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::criteria::{parse_timestamp, Page, Sort};
use crate::domain::event::{Event, EventChanges, EventCriteria};
use crate::domain::{parse_id, RepositoryError};

/// Query string accepted by the event search
#[derive(Debug, Default, Deserialize)]
pub struct SearchEventsParams {
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    /// Direction: `asc`/`1` or `desc`/`-1`
    pub sort: Option<String>,
    /// Field to order by
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub skip: Option<u64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<u64>,
}

/// Query string accepted by the event count
#[derive(Debug, Default, Deserialize)]
pub struct CountEventsParams {
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
}

/// Request body for creating or updating an event
///
/// Every field is optional at the wire level; creation enforces presence,
/// updates skip what is absent or empty.
#[derive(Debug, Default, Deserialize)]
pub struct EventRequest {
    pub title: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: Uuid,
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id(),
            title: event.title().to_string(),
            date: event.date(),
            location: event.location().to_string(),
        }
    }
}

/// Search events
///
/// GET /events
pub async fn search_events(
    State(state): State<AppState>,
    params: Result<Query<SearchEventsParams>, QueryRejection>,
) -> Result<Json<Vec<EventResponse>>, ApiError> {
    let Query(params) = params?;
    let criteria = EventCriteria::from_raw(
        params.title,
        params.location,
        params.start_date,
        params.end_date,
    )?
    .with_sort(Sort::parse(params.sort_by.as_deref(), params.sort.as_deref()))
    .with_page(Page::new(params.skip, params.limit));

    let events = state.events.find(&criteria).await?;

    Ok(Json(events.iter().map(EventResponse::from).collect()))
}

/// Count events matching the filters
///
/// GET /events/count
pub async fn count_events(
    State(state): State<AppState>,
    params: Result<Query<CountEventsParams>, QueryRejection>,
) -> Result<Json<u64>, ApiError> {
    let Query(params) = params?;
    let criteria = EventCriteria::from_raw(
        params.title,
        params.location,
        params.start_date,
        params.end_date,
    )?;

    let count = state.events.count(&criteria).await?;

    Ok(Json(count))
}

/// Create a new event
///
/// POST /events
///
/// Any failure, including missing fields or an unreadable body, is reported as 500.
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EventResponse>), ApiError> {
    let failed =
        |e: RepositoryError| ApiError::internal_server_error(format!("Failed to create event: {}", e));

    let Json(req) = payload.map_err(|e| failed(RepositoryError::Validation(e.body_text())))?;

    let date = req
        .date
        .as_deref()
        .map(|raw| parse_timestamp("date", raw))
        .transpose()
        .map_err(failed)?
        .ok_or_else(|| failed(RepositoryError::Validation("date is required".to_string())))?;

    let event = Event::new(
        req.title.unwrap_or_default(),
        date,
        req.location.unwrap_or_default(),
    )
    .map_err(failed)?;

    let created = state.events.create(&event).await.map_err(failed)?;

    tracing::info!(event_id = %created.id(), "Event created");

    Ok((StatusCode::CREATED, Json(EventResponse::from(&created))))
}

/// Get an event by ID
///
/// GET /events/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>, ApiError> {
    let id = parse_id(&id).map_err(|e| ApiError::from_lookup(e, "event"))?;

    let event = state
        .events
        .get(id)
        .await
        .map_err(|e| ApiError::from_lookup(e, "event"))?
        .ok_or_else(|| ApiError::not_found("Event not found"))?;

    Ok(Json(EventResponse::from(&event)))
}

/// Update an event
///
/// PUT /events/:id (also accepted as POST)
///
/// Absent or empty fields are left unchanged. An unreadable body is a 400.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EventResponse>), ApiError> {
    let id = parse_id(&id).map_err(|e| ApiError::from_update(e, "event"))?;
    let Json(req) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let changes = EventChanges::from_raw(req.title, req.date, req.location)
        .map_err(|e| ApiError::from_update(e, "event"))?;

    let event = state
        .events
        .update(id, &changes)
        .await
        .map_err(|e| ApiError::from_update(e, "event"))?;

    tracing::info!(event_id = %event.id(), "Event updated");

    Ok((StatusCode::CREATED, Json(EventResponse::from(&event))))
}

/// Delete an event
///
/// DELETE /events/:id
///
/// Succeeds whether or not the event existed. A malformed id is reported
/// as a generic failure.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_id(&id)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete event: {}", e)))?;

    let removed = state
        .events
        .delete(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete event: {}", e)))?;

    if removed {
        tracing::info!(event_id = %id, "Event deleted");
    } else {
        tracing::debug!(event_id = %id, "Delete matched no event");
    }

    Ok(Json(DeleteResponse { success: true }))
}
