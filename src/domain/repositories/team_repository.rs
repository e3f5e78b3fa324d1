use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::team::{Team, TeamChanges, TeamCriteria};

/// Repository trait for teams
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find teams matching the criteria, ordered and paginated
    async fn find(&self, criteria: &TeamCriteria) -> Result<Vec<Team>, RepositoryError>;

    /// Count teams matching the criteria
    async fn count(&self, criteria: &TeamCriteria) -> Result<u64, RepositoryError>;

    /// Find the first team whose name equals `name` exactly
    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, RepositoryError>;

    /// Store a new team and return it as persisted
    async fn create(&self, team: &Team) -> Result<Team, RepositoryError>;

    /// Find a team by its ID
    async fn get(&self, id: Uuid) -> Result<Option<Team>, RepositoryError>;

    /// Apply a partial update, failing with `NotFound` if the ID is unknown
    async fn update(&self, id: Uuid, changes: &TeamChanges) -> Result<Team, RepositoryError>;

    /// Delete a team by ID; a missing ID is not an error
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
