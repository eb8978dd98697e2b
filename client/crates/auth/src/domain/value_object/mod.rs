//! Value Object Module

pub mod access_token;
pub mod email;
pub mod otp_code;
pub mod password;
pub mod role;
