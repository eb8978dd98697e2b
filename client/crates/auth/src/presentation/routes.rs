//! Route Table
//!
//! Declarative access rules for every CivicConnect page plus the
//! per-role navigation menus.

use crate::application::route_guard::guard;
use crate::domain::entity::route_rule::{AccessDecision, RouteAccessRule};
use crate::domain::entity::session::Session;
use crate::domain::value_object::role::Role;

const PUBLIC_PATHS: [&str; 9] = [
    "/",
    "/home",
    "/about",
    "/contact",
    "/report",
    "/map",
    "/login",
    "/register",
    "/verify-otp",
];

const USER_PATHS: [&str; 3] = ["/user/dashboard", "/user/reports", "/user/submit"];

const ADMIN_PATHS: [&str; 4] = [
    "/admin/dashboard",
    "/admin/reports",
    "/admin/analytics",
    "/admin/departments",
];

/// Navigation bar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
}

const fn item(label: &'static str, path: &'static str) -> MenuItem {
    MenuItem { label, path }
}

pub const PUBLIC_MENU: [MenuItem; 5] = [
    item("Home", "/"),
    item("About", "/about"),
    item("Report Issue", "/report"),
    item("Live Map", "/map"),
    item("Contact", "/contact"),
];

pub const USER_MENU: [MenuItem; 3] = [
    item("Dashboard", "/user/dashboard"),
    item("My Reports", "/user/reports"),
    item("Submit Report", "/user/submit"),
];

pub const ADMIN_MENU: [MenuItem; 4] = [
    item("Dashboard", "/admin/dashboard"),
    item("Manage Reports", "/admin/reports"),
    item("Analytics", "/admin/analytics"),
    item("Departments", "/admin/departments"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    rules: Vec<RouteAccessRule>,
}

impl RouteTable {
    pub fn new(rules: Vec<RouteAccessRule>) -> Self {
        Self { rules }
    }

    /// CivicConnect pages: public, citizen (`user`) and admin areas
    pub fn civic() -> Self {
        let public = PUBLIC_PATHS.iter().map(|p| RouteAccessRule::public(*p));
        let user = USER_PATHS
            .iter()
            .map(|p| RouteAccessRule::restricted(*p, &[Role::User]));
        let admin = ADMIN_PATHS
            .iter()
            .map(|p| RouteAccessRule::restricted(*p, &[Role::Admin]));

        Self::new(public.chain(user).chain(admin).collect())
    }

    pub fn rules(&self) -> &[RouteAccessRule] {
        &self.rules
    }

    /// Rule for `path` after normalization. `None` for unknown pages.
    pub fn rule_for(&self, path: &str) -> Option<&RouteAccessRule> {
        let wanted = normalize_path(path);
        self.rules
            .iter()
            .find(|rule| normalize_path(&rule.path) == wanted)
    }

    /// Guard decision for `path`. Unknown pages are unrestricted.
    pub fn decide(&self, session: &Session, path: &str) -> AccessDecision {
        match self.rule_for(path) {
            Some(rule) => guard(session, rule),
            None => AccessDecision::Allow,
        }
    }

    /// Menu for a role; signed-out visitors get the public menu
    pub fn menu_for(role: Option<Role>) -> &'static [MenuItem] {
        match role {
            None => &PUBLIC_MENU,
            Some(Role::User) => &USER_MENU,
            Some(Role::Admin) => &ADMIN_MENU,
        }
    }
}

/// Strip query and fragment, drop trailing slashes (root excepted),
/// ensure a leading slash, and lower-case ASCII.
pub fn normalize_path(path: &str) -> String {
    let path = path.trim();
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');

    let mut normalized = String::with_capacity(trimmed.len() + 1);
    if !trimmed.starts_with('/') {
        normalized.push('/');
    }
    normalized.push_str(trimmed);
    normalized.make_ascii_lowercase();
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/Admin/Dashboard/"), "/admin/dashboard");
        assert_eq!(normalize_path("/user/reports?page=2"), "/user/reports");
        assert_eq!(normalize_path("/map#layer"), "/map");
        assert_eq!(normalize_path("about"), "/about");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn test_civic_table() {
        let table = RouteTable::civic();
        assert_eq!(table.rules().len(), 16);
        assert!(table.rule_for("/report").unwrap().is_unrestricted());
        assert!(table.rule_for("/USER/SUBMIT/").unwrap().allows(Role::User));
        assert!(!table.rule_for("/admin/departments").unwrap().allows(Role::User));
        assert!(table.rule_for("/does-not-exist").is_none());
    }

    #[test]
    fn test_decide_unknown_path_allows() {
        let table = RouteTable::civic();
        assert_eq!(
            table.decide(&Session::anonymous(), "/nowhere"),
            AccessDecision::Allow
        );
    }

    #[test]
    fn test_decide_anonymous() {
        let table = RouteTable::civic();
        assert_eq!(
            table.decide(&Session::anonymous(), "/admin/reports?sort=new"),
            AccessDecision::RedirectToLogin
        );
        assert_eq!(
            table.decide(&Session::anonymous(), "/login"),
            AccessDecision::Allow
        );
    }

    #[test]
    fn test_menu_for() {
        assert_eq!(RouteTable::menu_for(None)[0].label, "Home");
        assert_eq!(RouteTable::menu_for(Some(Role::User)).len(), 3);
        assert_eq!(
            RouteTable::menu_for(Some(Role::Admin))[3],
            MenuItem {
                label: "Departments",
                path: "/admin/departments"
            }
        );
    }

    #[test]
    fn test_menu_paths_are_reachable_for_role() {
        let table = RouteTable::civic();
        for (role, menu) in [(Role::User, &USER_MENU[..]), (Role::Admin, &ADMIN_MENU[..])] {
            for entry in menu {
                assert!(table.rule_for(entry.path).unwrap().allows(role));
            }
        }
    }
}
