use std::path::PathBuf;
use std::time::Duration;

use anyhow::{ensure, Context, Result};

pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Renderer configuration loaded from environment variables.
/// Fails at startup if `CV_API_URL` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the CV API; `/cv` is appended when fetching.
    pub api_url: String,
    pub api_timeout: Duration,
    /// Directory that relative `header.photo` paths resolve against.
    pub assets_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_timeout = api_timeout(std::env::var("CV_API_TIMEOUT_SECS").ok().as_deref())
            .context("Invalid CV_API_TIMEOUT_SECS")?;

        Ok(Config {
            api_url: require_env("CV_API_URL")?,
            api_timeout,
            assets_dir: std::env::var("CV_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8501".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Fetch timeout in whole seconds, `DEFAULT_API_TIMEOUT_SECS` when unset.
/// Zero is rejected.
fn api_timeout(raw: Option<&str>) -> Result<Duration> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(DEFAULT_API_TIMEOUT_SECS));
    };
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("'{raw}' is not a whole number of seconds"))?;
    ensure!(secs > 0, "timeout must be at least 1 second");
    Ok(Duration::from_secs(secs))
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
