//! Shared Kernel - Cross-crate minimal core
//!
//! This crate contains the "smallest core" shared by every client crate:
//! - The unified error type surfaced to the user
//! - Error classification and its mapping to HTTP status / exit codes
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all crates.

pub mod error {
    pub mod app_error;
    pub mod kind;
}
