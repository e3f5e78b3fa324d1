// Team domain module
// Contains the team entity, its search criteria and partial updates

#![allow(clippy::module_inception)]

pub mod criteria;
pub mod team;

// Re-export main types for convenience
pub use criteria::{TeamChanges, TeamCriteria, TeamSortField};
pub use team::Team;
