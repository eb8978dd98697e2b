//! Application Configuration
//!
//! Configuration for the Auth application layer.

use crate::domain::value_object::role::Role;

/// Auth application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Storage key holding the serialized identity
    pub identity_key: String,
    /// Storage key holding the access token
    pub token_key: String,
    /// Landing page after an admin signs in
    pub admin_home: String,
    /// Landing page after a user signs in
    pub user_home: String,
    /// Landing page after logout, and for role mismatches
    pub public_home: String,
    /// Where unauthenticated visitors are sent
    pub login_path: String,
    /// Where registration continues
    pub otp_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            identity_key: "civic_user".to_string(),
            token_key: "civic_token".to_string(),
            admin_home: "/admin/dashboard".to_string(),
            user_home: "/user/dashboard".to_string(),
            public_home: "/".to_string(),
            login_path: "/login".to_string(),
            otp_path: "/verify-otp".to_string(),
        }
    }
}

impl AuthConfig {
    /// Landing page for a freshly signed-in role
    pub fn home_for(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_home,
            Role::User => &self.user_home,
        }
    }
}
