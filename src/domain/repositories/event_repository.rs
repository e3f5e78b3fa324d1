use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::event::{Event, EventChanges, EventCriteria};

/// Repository trait for events
///
/// Every call is a single round trip to the store; implementations hold no
/// per-request state.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find events matching the criteria, ordered and paginated
    async fn find(&self, criteria: &EventCriteria) -> Result<Vec<Event>, RepositoryError>;

    /// Count events matching the criteria, ignoring sort and pagination
    async fn count(&self, criteria: &EventCriteria) -> Result<u64, RepositoryError>;

    /// Store a new event and return it as persisted
    async fn create(&self, event: &Event) -> Result<Event, RepositoryError>;

    /// Find an event by its ID
    async fn get(&self, id: Uuid) -> Result<Option<Event>, RepositoryError>;

    /// Apply a partial update, failing with `NotFound` if the ID is unknown
    async fn update(&self, id: Uuid, changes: &EventChanges) -> Result<Event, RepositoryError>;

    /// Delete an event by ID
    ///
    /// Returns whether a row was removed; a missing ID is not an error.
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
