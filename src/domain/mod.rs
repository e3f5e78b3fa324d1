// Domain layer module exports
// Entities, query criteria and the repository contracts
// Domain is independent of HTTP concerns

pub mod criteria;
pub mod errors;
pub mod event;
pub mod repositories;
pub mod team;

pub use errors::{parse_id, RepositoryError};
