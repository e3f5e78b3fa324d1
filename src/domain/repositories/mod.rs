// Repository contracts (ports)
// Implemented by the adapters in infrastructure::repositories

pub mod event_repository;
pub mod team_repository;

pub use event_repository::EventRepository;
pub use team_repository::TeamRepository;
