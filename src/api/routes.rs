use axum::{routing::get, Router};

use super::handlers::{events, health, teams};
use super::state::AppState;

/// Builds the application router
///
/// Middleware (tracing, CORS) is layered on by the binary so tests can
/// drive the bare routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Event routes
        .route(
            "/events",
            get(events::search_events).post(events::create_event),
        )
        .route("/events/count", get(events::count_events))
        .route(
            "/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .post(events::update_event)
                .delete(events::delete_event),
        )
        // Team routes
        .route("/teams", get(teams::search_teams).post(teams::create_team))
        .route("/teams/count", get(teams::count_teams))
        .route("/teams/by-name/:name", get(teams::get_team_by_name))
        .route(
            "/teams/:id",
            get(teams::get_team)
                .put(teams::update_team)
                .post(teams::update_team)
                .delete(teams::delete_team),
        )
        .with_state(state)
}
