//! Domain layer containing business entities and repository contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits defined here are implemented by
//! [`crate::infrastructure`] and consumed by [`crate::application`] services.

pub mod entities;
pub mod repositories;
