//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};

/// Shared application state.
///
/// Constructed once at startup (or per test server) and cloned into each
/// handler by axum. Services own their repositories; no module-level
/// singletons exist anywhere in the crate.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Creates application state from constructed services.
    pub fn new(link_service: Arc<LinkService>, auth_service: Arc<AuthService>) -> Self {
        Self {
            link_service,
            auth_service,
        }
    }
}
