use uuid::Uuid;

use super::criteria::TeamChanges;
use crate::domain::errors::RepositoryError;

/// A named team
///
/// # Invariants
/// - Name is never empty
/// - The identifier is assigned on creation and never changes
///
/// # Example
/// ```
/// use fixtures_api::domain::team::Team;
///
/// let team = Team::new("Harbour Rovers".to_string()).expect("valid team");
/// assert_eq!(team.name(), "Harbour Rovers");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Uuid,
    name: String,
}

impl Team {
    /// Creates a new Team with a fresh identifier
    ///
    /// # Returns
    /// * `Ok(Team)` - The new team
    /// * `Err(RepositoryError::Validation)` - If the name is empty
    pub fn new(name: String) -> Result<Self, RepositoryError> {
        if name.trim().is_empty() {
            return Err(RepositoryError::Validation("name is required".to_string()));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
        })
    }

    /// Applies a partial update
    pub fn apply(&mut self, changes: &TeamChanges) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reconstructs a Team from stored data
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(id: Uuid, name: String) -> Self {
        Self { id, name }
    }
}
