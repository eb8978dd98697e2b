//! Route Guard
//!
//! Decides whether the current session may view a route.

use crate::domain::entity::route_rule::{AccessDecision, RouteAccessRule};
use crate::domain::entity::session::Session;

/// Evaluate `rule` for `session`.
///
/// 1. Unrestricted rule: `Allow`
/// 2. No identity: `RedirectToLogin`
/// 3. Role not permitted: `RedirectToHome`
/// 4. Otherwise `Allow`
pub fn guard(session: &Session, rule: &RouteAccessRule) -> AccessDecision {
    if rule.is_unrestricted() {
        return AccessDecision::Allow;
    }

    match session.role() {
        None => AccessDecision::RedirectToLogin,
        Some(role) if !rule.allows(role) => AccessDecision::RedirectToHome,
        Some(_) => AccessDecision::Allow,
    }
}
