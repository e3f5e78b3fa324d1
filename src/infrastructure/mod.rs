// Infrastructure layer module
// PostgreSQL and in-memory adapters for the domain repository traits

pub mod repositories;
