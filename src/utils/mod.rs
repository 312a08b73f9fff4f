//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Random short code generation
//! - [`password`] - Argon2id password hashing and verification
//! - [`url_scheme`] - Redirect-target scheme normalization

pub mod code_generator;
pub mod password;
pub mod url_scheme;
