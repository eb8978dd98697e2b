//! Infrastructure Layer
//!
//! Auth backend implementations.

pub mod dto;
pub mod http;
pub mod mock;

pub use http::HttpAuthClient;
pub use mock::{MockAuthClient, MockConfig};
