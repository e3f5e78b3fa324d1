// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_event_repository;
pub mod postgres_team_repository;
mod query;

pub use in_memory::{InMemoryEventRepository, InMemoryTeamRepository};
pub use postgres_event_repository::PostgresEventRepository;
pub use postgres_team_repository::PostgresTeamRepository;
