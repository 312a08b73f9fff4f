//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer on top of
//! PostgreSQL via `sqlx`.

pub mod persistence;
