//! Fixtures API Library
//!
//! HTTP handlers for events and teams, the domain types they exchange,
//! and the repositories that persist them.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
