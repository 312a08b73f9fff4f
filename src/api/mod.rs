//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into domain operations and formats responses
//! according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing middleware and the bearer-token gate

pub mod dto;
pub mod handlers;
pub mod middleware;
