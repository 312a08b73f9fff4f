//! Request processing middleware and extractors.

pub mod auth;
pub mod tracing;

pub use auth::AuthUser;
