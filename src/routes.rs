//! Application router.
//!
//! # Route Structure
//!
//! | Method & Path | Auth |
//! |---|---|
//! | `GET    /`                           | none   |
//! | `POST   /register`                   | none   |
//! | `POST   /token`                      | none   |
//! | `POST   /links/shorten`              | none   |
//! | `GET    /links/{code}`               | none   |
//! | `DELETE /links/{code}`               | bearer |
//! | `PUT    /links/{code}`               | bearer |
//! | `GET    /links/{code}/stats`         | none   |
//! | `GET    /links/search/link`          | none   |
//! | `DELETE /links/remove_unused/links`  | bearer |
//! | `GET    /links/expired/links`        | none   |
//!
//! Static segments (`search`, `remove_unused`, `expired`) take priority over
//! the `{code}` capture, so those paths never resolve as short codes.
//!
//! Protected endpoints are gated by the
//! [`AuthUser`](crate::api::middleware::AuthUser) extractor rather than a
//! router-level middleware: auth is a parameter of the handler, and routes
//! with mixed auth on the same path (`GET` vs `DELETE /links/{code}`) stay on
//! one method router.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::api::handlers::{
    delete_link_handler, expired_links_handler, login_handler, redirect_handler,
    register_handler, remove_unused_handler, root_handler, search_link_handler, shorten_handler,
    stats_handler, update_link_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and tracing middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/register", post(register_handler))
        .route("/token", post(login_handler))
        .route("/links/shorten", post(shorten_handler))
        .route(
            "/links/{code}",
            get(redirect_handler)
                .delete(delete_link_handler)
                .put(update_link_handler),
        )
        .route("/links/{code}/stats", get(stats_handler))
        .route("/links/search/link", get(search_link_handler))
        .route("/links/remove_unused/links", delete(remove_unused_handler))
        .route("/links/expired/links", get(expired_links_handler))
        .with_state(state)
        .layer(tracing::layer())
}
