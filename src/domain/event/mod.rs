// Event domain module
// Contains the event entity, its search criteria and partial updates

#![allow(clippy::module_inception)]

pub mod criteria;
pub mod event;

// Re-export main types for convenience
pub use criteria::{EventChanges, EventCriteria, EventSortField};
pub use event::Event;
