//! Encoding Utilities

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Decode base64url, with or without padding.
///
/// JWT segments are unpadded base64url, but some issuers pad them anyway.
pub fn from_base64_url(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(s.trim().trim_end_matches('='))
}

/// Decode the payload (second segment) of a compact JWT without verifying it.
///
/// Returns `None` when the token is not three dot-separated segments or the
/// payload is not a JSON object.
pub fn decode_jwt_claims(token: &str) -> Option<serde_json::Map<String, serde_json::Value>> {
    let mut segments = token.split('.');
    let (_header, payload, _signature) = (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
        return None;
    }

    let bytes = from_base64_url(payload).ok()?;
    match serde_json::from_slice(&bytes).ok()? {
        serde_json::Value::Object(map) => Some(map),
        _ => None,
    }
}
