//! Data access trait definitions.
//!
//! Repository traits define contracts implemented by the infrastructure
//! layer. Services depend on these traits, never on concrete stores.

pub mod link_repository;
pub mod user_repository;

pub use link_repository::LinkRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
