//! Wire DTOs for the auth backend (`/api/v1/auth/*`)

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SendOtpRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct VerifyOtpRequest<'a> {
    pub email: &'a str,
    pub otp: &'a str,
}

/// Login / verify-otp response. A rejected login comes back as 200 with no token.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub user: Option<UserDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserDto {
    pub email: Option<String>,
    pub name: Option<String>,
    /// `ROLE_USER` / `ROLE_ADMIN`
    pub role: Option<String>,
}

/// Register / send-otp response
#[derive(Debug, Deserialize)]
pub struct OtpSendResponse {
    pub sent: bool,
}
