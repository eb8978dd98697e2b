//! Entity Module

pub mod identity;
pub mod route_rule;
pub mod session;
