//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Persistent key-value storage (in-memory and file backends)
//! - JSON-over-HTTP client with timeout and error sanitizing
//! - Base64 / JWT payload decoding

pub mod crypto;
pub mod http;
pub mod storage;
