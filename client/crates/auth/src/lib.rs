//! Auth (Authentication) Client Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, gateway traits
//! - `application/` - Session store, route guard, use cases, controller
//! - `infra/` - Auth backend clients (mock and HTTP)
//! - `presentation/` - Route table, menus, navigation
//!
//! ## Features
//! - Email + password login against the CivicConnect auth backend
//! - Registration followed by 6-digit OTP verification
//! - Session (identity + token) persisted across restarts
//! - Role-based route access for citizens (`user`) and staff (`admin`)
//!
//! ## Security Model
//! - Roles come only from the backend's assertion (response or token claim)
//! - Tokens and passwords are redacted in `Debug` output and never logged
//! - Half-written sessions are discarded on load

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::controller::{Flow, FlowState, SessionController};
pub use application::session_store::SessionStore;
pub use error::{AuthError, AuthResult};
pub use infra::{HttpAuthClient, MockAuthClient, MockConfig};
pub use presentation::{HistoryNavigator, RouteTable};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
    pub use crate::infra::mock::MockConfig;
    pub use platform::http::HttpClientConfig;
}

pub mod models {
    pub use crate::domain::entity::identity::Identity;
    pub use crate::domain::entity::route_rule::*;
    pub use crate::domain::entity::session::Session;
    pub use crate::domain::gateway::{Location, OtpReceipt, RegisterReceipt, Registration};
    pub use crate::domain::value_object::{
        access_token::AccessToken, email::Email, otp_code::OtpCode, password::Password,
        role::Role,
    };
}
