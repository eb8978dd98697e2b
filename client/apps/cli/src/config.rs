//! Runtime configuration, read from flags or the environment (`.env` included).

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Args;
use auth::infra::http::DEFAULT_PREFIX;
use platform::http::HttpClientConfig;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Where the session is persisted between runs
    #[arg(long, env = "CIVIC_SESSION_FILE", default_value = ".civic/session.json")]
    pub session_file: PathBuf,

    /// Auth backend base URL. The built-in demo backend is used when unset.
    #[arg(long, env = "CIVIC_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Path prefix of the auth endpoints on the HTTP backend
    #[arg(long, env = "CIVIC_API_PREFIX", default_value = DEFAULT_PREFIX)]
    pub api_prefix: String,

    /// Request timeout for the auth backend, in seconds
    #[arg(long, env = "CIVIC_HTTP_TIMEOUT_SECS", default_value_t = 10)]
    pub http_timeout_secs: u64,

    /// Simulated latency of the demo backend, in milliseconds
    #[arg(long, env = "CIVIC_MOCK_LATENCY_MS", default_value_t = 0)]
    pub mock_latency_ms: u64,
}

#[derive(Debug, Clone)]
pub enum BackendConfig {
    Mock { latency: Duration },
    Http {
        http: HttpClientConfig,
        prefix: String,
    },
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub session_file: PathBuf,
    pub backend: BackendConfig,
}

impl CliConfig {
    pub fn from_args(args: &ConfigArgs) -> Result<Self> {
        if args.session_file.as_os_str().is_empty() {
            bail!("CIVIC_SESSION_FILE must not be empty");
        }

        let backend = match args.api_base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    bail!("CIVIC_API_BASE_URL must start with http:// or https:// (got {url})");
                }
                if args.http_timeout_secs == 0 {
                    bail!("CIVIC_HTTP_TIMEOUT_SECS must be greater than zero");
                }
                let prefix = args.api_prefix.trim();
                if !prefix.starts_with('/') {
                    bail!("CIVIC_API_PREFIX must start with / (got {prefix})");
                }
                BackendConfig::Http {
                    http: HttpClientConfig::new(url)
                        .with_timeout(Duration::from_secs(args.http_timeout_secs)),
                    prefix: prefix.to_string(),
                }
            }
            _ => BackendConfig::Mock {
                latency: Duration::from_millis(args.mock_latency_ms),
            },
        };

        let session_file = absolutize(&args.session_file)?;
        Ok(Self {
            session_file,
            backend,
        })
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ConfigArgs {
        ConfigArgs {
            session_file: PathBuf::from("/tmp/civic/session.json"),
            api_base_url: None,
            api_prefix: DEFAULT_PREFIX.to_string(),
            http_timeout_secs: 10,
            mock_latency_ms: 0,
        }
    }

    #[test]
    fn test_mock_backend_by_default() {
        let config = CliConfig::from_args(&args()).unwrap();
        assert!(matches!(config.backend, BackendConfig::Mock { latency } if latency.is_zero()));
        assert_eq!(config.session_file, PathBuf::from("/tmp/civic/session.json"));
    }

    #[test]
    fn test_blank_url_means_mock() {
        let config = CliConfig::from_args(&ConfigArgs {
            api_base_url: Some("  ".to_string()),
            ..args()
        })
        .unwrap();
        assert!(matches!(config.backend, BackendConfig::Mock { .. }));
    }

    #[test]
    fn test_http_backend() {
        let config = CliConfig::from_args(&ConfigArgs {
            api_base_url: Some("http://localhost:8080".to_string()),
            http_timeout_secs: 3,
            ..args()
        })
        .unwrap();
        match config.backend {
            BackendConfig::Http { http, prefix } => {
                assert_eq!(http.base_url, "http://localhost:8080");
                assert_eq!(http.timeout, Duration::from_secs(3));
                assert_eq!(prefix, "/api/v1/auth");
            }
            other => panic!("unexpected backend: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_values() {
        assert!(
            CliConfig::from_args(&ConfigArgs {
                api_base_url: Some("localhost:8080".to_string()),
                ..args()
            })
            .is_err()
        );
        assert!(
            CliConfig::from_args(&ConfigArgs {
                api_base_url: Some("http://localhost:8080".to_string()),
                http_timeout_secs: 0,
                ..args()
            })
            .is_err()
        );
        assert!(
            CliConfig::from_args(&ConfigArgs {
                api_base_url: Some("http://localhost:8080".to_string()),
                api_prefix: "auth".to_string(),
                ..args()
            })
            .is_err()
        );
        assert!(
            CliConfig::from_args(&ConfigArgs {
                session_file: PathBuf::new(),
                ..args()
            })
            .is_err()
        );
    }

    #[test]
    fn test_relative_session_file_is_absolutized() {
        let config = CliConfig::from_args(&ConfigArgs {
            session_file: PathBuf::from("session.json"),
            ..args()
        })
        .unwrap();
        assert!(config.session_file.is_absolute());
    }
}
