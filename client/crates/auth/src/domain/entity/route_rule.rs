//! Route Access Rule Entity
//!
//! Static mapping from a navigable path to the roles allowed to view it.

use std::collections::BTreeSet;
use std::fmt;

use crate::domain::value_object::role::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    /// Anyone, signed in or not
    Unrestricted,
    /// Only the listed roles
    Roles(BTreeSet<Role>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteAccessRule {
    pub path: String,
    pub access: RouteAccess,
}

impl RouteAccessRule {
    pub fn public(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            access: RouteAccess::Unrestricted,
        }
    }

    pub fn restricted(path: impl Into<String>, roles: &[Role]) -> Self {
        Self {
            path: path.into(),
            access: RouteAccess::Roles(roles.iter().copied().collect()),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self.access, RouteAccess::Unrestricted)
    }

    pub fn allows(&self, role: Role) -> bool {
        match &self.access {
            RouteAccess::Unrestricted => true,
            RouteAccess::Roles(roles) => roles.contains(&role),
        }
    }
}

/// Outcome of evaluating a rule against a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

impl AccessDecision {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AccessDecision::Allow => "allow",
            AccessDecision::RedirectToLogin => "redirect_to_login",
            AccessDecision::RedirectToHome => "redirect_to_home",
        }
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
