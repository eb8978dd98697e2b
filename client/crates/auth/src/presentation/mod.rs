//! Presentation Layer
//!
//! Route table, menus and navigation.

pub mod navigation;
pub mod routes;

// Re-exports
pub use navigation::HistoryNavigator;
pub use routes::{MenuItem, RouteTable};
