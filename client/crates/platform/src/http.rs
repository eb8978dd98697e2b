//! JSON-over-HTTP helper with a fixed timeout policy and sanitized errors.
//!
//! Feature clients build on [`JsonClient`] so request setup and error
//! mapping live in one place. The client never stores credentials; callers
//! pass whatever the request needs in the body.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};

/// Default request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

/// HTTP helper error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Timeout(String),

    /// Non-2xx response. `message` is the sanitized body.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type HttpResult<T> = Result<T, HttpError>;

/// Client settings
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL, e.g. `http://localhost:8080`
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("civic/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Thin JSON client over `reqwest`
#[derive(Debug, Clone)]
pub struct JsonClient {
    inner: reqwest::Client,
    base_url: String,
}

impl JsonClient {
    pub fn new(config: &HttpClientConfig) -> HttpResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(HttpError::Config("API base URL is empty".to_string()));
        }

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| HttpError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            base_url: config.base_url.clone(),
        })
    }

    /// POST a JSON body and decode a JSON response.
    ///
    /// Non-2xx responses become [`HttpError::Status`] with a sanitized body.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> HttpResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = build_url_with_base(&self.base_url, path);
        let payload = serde_json::to_vec(body)
            .map_err(|e| HttpError::Serialization(format!("Failed to encode request: {e}")))?;

        tracing::debug!(%url, "POST");

        let response = self
            .inner
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }
}

/// Join a base URL and a path with exactly one slash between them.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn map_request_error(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        HttpError::Config(format!("Invalid request: {err}"))
    } else {
        HttpError::Network(format!("Unable to reach the server: {err}"))
    }
}

async fn handle_json_response<T: DeserializeOwned>(response: reqwest::Response) -> HttpResult<T> {
    let status = response.status();

    if status.is_success() {
        let bytes = response.bytes().await.map_err(map_request_error)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| HttpError::Parse(format!("Failed to decode response: {e}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(HttpError::Status {
            status: status.as_u16(),
            message: sanitize_body(&body),
        })
    }
}

/// Reduce an error body to a short user-facing message.
///
/// `{"error": "..."}` and `{"message": "..."}` bodies are unwrapped. The
/// result is trimmed and capped at [`MAX_ERROR_CHARS`] characters.
pub fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();

    let extracted = serde_json::from_str::<serde_json::Value>(trimmed)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .iter()
                .find_map(|key| value.get(key)?.as_str().map(str::to_string))
        });
    let message = extracted.as_deref().map(str::trim).unwrap_or(trimmed);

    if message.is_empty() {
        "Request failed.".to_string()
    } else {
        message.chars().take(MAX_ERROR_CHARS).collect()
    }
}
