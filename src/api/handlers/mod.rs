//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod links;
pub mod redirect;
pub mod root;
pub mod shorten;
pub mod stats;

pub use auth::{login_handler, register_handler};
pub use links::{
    delete_link_handler, expired_links_handler, remove_unused_handler, search_link_handler,
    update_link_handler,
};
pub use redirect::redirect_handler;
pub use root::root_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
