//! HTTP client for the CivicConnect auth backend.
//!
//! The role in every grant comes from the server: the `user.role` field of
//! the response, or failing that the `role` claim of the issued JWT.

use platform::crypto::decode_jwt_claims;
use platform::http::{HttpClientConfig, HttpError, JsonClient};

use crate::domain::gateway::{AuthClient, AuthGrant, OtpReceipt, RegisterReceipt, Registration};
use crate::domain::value_object::{
    access_token::AccessToken, email::Email, otp_code::OtpCode, password::Password, role::Role,
};
use crate::error::{AuthError, AuthResult};
use crate::infra::dto::{
    AuthResponse, LoginRequest, OtpSendResponse, RegisterRequest, SendOtpRequest,
    VerifyOtpRequest,
};

pub const DEFAULT_PREFIX: &str = "/api/v1/auth";

#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    http: JsonClient,
    prefix: String,
}

impl HttpAuthClient {
    pub fn new(config: &HttpClientConfig) -> AuthResult<Self> {
        Ok(Self {
            http: JsonClient::new(config)?,
            prefix: DEFAULT_PREFIX.to_string(),
        })
    }

    /// Mount the endpoints under a different path prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.prefix.trim_end_matches('/'), name)
    }

    /// Turn an auth response into a grant, taking the role from the server.
    fn grant_from(response: AuthResponse) -> AuthResult<Option<AuthGrant>> {
        let Some(raw_token) = response.token.filter(|t| !t.trim().is_empty()) else {
            return Ok(None);
        };

        let asserted = response
            .user
            .and_then(|user| user.role)
            .or_else(|| {
                decode_jwt_claims(&raw_token)?
                    .get("role")?
                    .as_str()
                    .map(str::to_string)
            })
            .ok_or_else(|| AuthError::Backend {
                status: 502,
                message: "Auth response did not assert a role".to_string(),
            })?;

        let role = Role::from_code(&asserted).map_err(|_| AuthError::Backend {
            status: 502,
            message: format!("Auth response asserted an unknown role: {asserted}"),
        })?;
        let token = AccessToken::new(raw_token).map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(Some(AuthGrant { token, role }))
    }
}

impl AuthClient for HttpAuthClient {
    async fn login(&self, email: &Email, password: &Password) -> AuthResult<AuthGrant> {
        let body = LoginRequest {
            email: email.as_str(),
            password: password.expose(),
        };

        let response: AuthResponse = self
            .http
            .post_json(&self.endpoint("login"), &body)
            .await
            .map_err(|e| match e {
                HttpError::Status {
                    status: 401 | 403 | 404,
                    ..
                } => AuthError::InvalidCredentials,
                other => other.into(),
            })?;

        Self::grant_from(response)?.ok_or(AuthError::InvalidCredentials)
    }

    async fn register(&self, registration: &Registration) -> AuthResult<RegisterReceipt> {
        let body = RegisterRequest {
            name: &registration.name,
            email: registration.email.as_str(),
            password: registration.password.expose(),
        };

        let response: OtpSendResponse = self
            .http
            .post_json(&self.endpoint("register"), &body)
            .await
            .map_err(|e| match e {
                HttpError::Status {
                    status: 400 | 409 | 422,
                    message,
                } => AuthError::Registration(message),
                other => other.into(),
            })?;

        if !response.sent {
            return Err(AuthError::Registration(
                "Email is already registered".to_string(),
            ));
        }
        Ok(RegisterReceipt { success: true })
    }

    async fn send_otp(&self, email: &Email) -> AuthResult<OtpReceipt> {
        let body = SendOtpRequest {
            email: email.as_str(),
        };

        let response: OtpSendResponse = self
            .http
            .post_json(&self.endpoint("send-otp"), &body)
            .await
            .map_err(|e| match e {
                HttpError::Status { status, message } if (400..500).contains(&status) => {
                    AuthError::Delivery(message)
                }
                other => other.into(),
            })?;

        Ok(OtpReceipt {
            sent: response.sent,
        })
    }

    async fn verify_otp(&self, email: &Email, otp: &OtpCode) -> AuthResult<AuthGrant> {
        let body = VerifyOtpRequest {
            email: email.as_str(),
            otp: otp.as_str(),
        };

        let response: AuthResponse = self
            .http
            .post_json(&self.endpoint("verify-otp"), &body)
            .await
            .map_err(|e| match e {
                HttpError::Status {
                    status: 400 | 401 | 403 | 410,
                    ..
                } => AuthError::InvalidOtp,
                other => other.into(),
            })?;

        Self::grant_from(response)?.ok_or(AuthError::InvalidOtp)
    }
}
