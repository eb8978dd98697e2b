//! Domain Layer
//!
//! Contains entities, value objects, and gateway traits.

pub mod entity;
pub mod gateway;
pub mod value_object;

// Re-exports
pub use entity::{identity::Identity, session::Session};
pub use gateway::{AuthClient, Location, Navigator};
