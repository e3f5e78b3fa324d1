use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::{EventRepository, TeamRepository};
use crate::infrastructure::repositories::{
    InMemoryEventRepository, InMemoryTeamRepository, PostgresEventRepository,
    PostgresTeamRepository,
};

/// Repositories shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventRepository>,
    pub teams: Arc<dyn TeamRepository>,
}

impl AppState {
    pub fn new(events: Arc<dyn EventRepository>, teams: Arc<dyn TeamRepository>) -> Self {
        Self { events, teams }
    }

    /// State backed by PostgreSQL through a shared pool
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresEventRepository::new(pool.clone())),
            Arc::new(PostgresTeamRepository::new(pool)),
        )
    }

    /// State backed by empty in-memory repositories
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryEventRepository::new()),
            Arc::new(InMemoryTeamRepository::new()),
        )
    }
}
