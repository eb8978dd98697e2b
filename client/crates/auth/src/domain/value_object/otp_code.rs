//! OTP Code Value Object
//!
//! Six-digit one-time code mailed after registration.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

pub const OTP_LENGTH: usize = 6;

#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    /// Strict constructor: exactly six ASCII digits (surrounding whitespace ignored).
    pub fn new(code: impl AsRef<str>) -> AppResult<Self> {
        let code = code.as_ref().trim();

        if code.len() != OTP_LENGTH || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::bad_request(format!(
                "OTP must be exactly {OTP_LENGTH} digits"
            ))
            .with_action("Enter the 6-digit code sent to your email"));
        }

        Ok(Self(code.to_string()))
    }

    /// Keep the first six ASCII digits of `raw`, the way the code input
    /// field does. The result still has to pass [`OtpCode::new`].
    pub fn sanitize(raw: &str) -> String {
        raw.chars()
            .filter(char::is_ascii_digit)
            .take(OTP_LENGTH)
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OtpCode").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_strict() {
        assert_eq!(OtpCode::new("123456").unwrap().as_str(), "123456");
        assert_eq!(OtpCode::new(" 000000 ").unwrap().as_str(), "000000");
        assert!(OtpCode::new("12345").is_err());
        assert!(OtpCode::new("1234567").is_err());
        assert!(OtpCode::new("12a456").is_err());
        assert!(OtpCode::new("１２３４５６").is_err());
    }

    #[test]
    fn test_otp_sanitized_input() {
        let code = OtpCode::new(OtpCode::sanitize("12-34 56")).unwrap();
        assert_eq!(code.as_str(), "123456");
        let code = OtpCode::new(OtpCode::sanitize("1234567890")).unwrap();
        assert_eq!(code.as_str(), "123456");
        assert!(OtpCode::new(OtpCode::sanitize("12 34")).is_err());
    }

    #[test]
    fn test_otp_sanitize() {
        assert_eq!(OtpCode::sanitize("a1b2c3"), "123");
        assert_eq!(OtpCode::sanitize(""), "");
    }
}
