use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{empty_string_as_none, DeleteResponse};
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::criteria::{Page, Sort};
use crate::domain::parse_id;
use crate::domain::team::{Team, TeamChanges, TeamCriteria};

/// Query string accepted by the team search
#[derive(Debug, Default, Deserialize)]
pub struct SearchTeamsParams {
    pub name: Option<String>,
    pub sort: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub skip: Option<u64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub limit: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CountTeamsParams {
    pub name: Option<String>,
}

/// Request body for creating or updating a team
#[derive(Debug, Default, Deserialize)]
pub struct TeamRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
        }
    }
}

/// Search teams
///
/// GET /teams
pub async fn search_teams(
    State(state): State<AppState>,
    params: Result<Query<SearchTeamsParams>, QueryRejection>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let Query(params) = params?;
    let criteria = TeamCriteria::from_raw(params.name)
        .with_sort(Sort::parse(params.sort_by.as_deref(), params.sort.as_deref()))
        .with_page(Page::new(params.skip, params.limit));

    let teams = state.teams.find(&criteria).await?;

    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Count teams
///
/// GET /teams/count
pub async fn count_teams(
    State(state): State<AppState>,
    params: Result<Query<CountTeamsParams>, QueryRejection>,
) -> Result<Json<u64>, ApiError> {
    let Query(params) = params?;
    let count = state.teams.count(&TeamCriteria::from_raw(params.name)).await?;

    Ok(Json(count))
}

/// Get a team by its exact name
///
/// GET /teams/by-name/:name
pub async fn get_team_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state
        .teams
        .find_by_name(&name)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", name)))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Create a new team
///
/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    payload: Result<Json<TeamRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let Json(req) = payload.map_err(|e| {
        ApiError::internal_server_error(format!("Failed to create team: {}", e.body_text()))
    })?;

    let team = Team::new(req.name.unwrap_or_default())
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create team: {}", e)))?;

    let created = state
        .teams
        .create(&team)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create team: {}", e)))?;

    tracing::info!(team_id = %created.id(), "Team created");

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&created))))
}

/// Get a team by ID
///
/// GET /teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    let id = parse_id(&id).map_err(|e| ApiError::from_lookup(e, "team"))?;

    let team = state
        .teams
        .get(id)
        .await
        .map_err(|e| ApiError::from_lookup(e, "team"))?
        .ok_or_else(|| ApiError::not_found("Team not found"))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Update a team
///
/// PUT /teams/:id (also accepted as POST)
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TeamRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let id = parse_id(&id).map_err(|e| ApiError::from_update(e, "team"))?;
    let Json(req) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;

    let team = state
        .teams
        .update(id, &TeamChanges::from_raw(req.name))
        .await
        .map_err(|e| ApiError::from_update(e, "team"))?;

    tracing::info!(team_id = %team.id(), "Team updated");

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// Delete a team
///
/// DELETE /teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = parse_id(&id)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete team: {}", e)))?;

    let removed = state
        .teams
        .delete(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete team: {}", e)))?;

    if removed {
        tracing::info!(team_id = %id, "Team deleted");
    } else {
        tracing::debug!(team_id = %id, "Delete matched no team");
    }

    Ok(Json(DeleteResponse { success: true }))
}
