//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls and business rules, and provide a
//! clean API for HTTP handlers:
//!
//! - [`services::LinkService`] - Link creation, redirect accounting, maintenance
//! - [`services::AuthService`] - Registration, login, bearer-token verification

pub mod services;
