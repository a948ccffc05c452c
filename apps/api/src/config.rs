use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Logged at startup when neither credential variable is set.
pub const MISSING_CREDENTIAL_WARNING: &str =
    "Neither GEMINI_API_KEY nor GOOGLE_API_KEY is set; every request will get the fallback message";

/// Application configuration loaded from environment variables.
/// Resolved once at startup; the advisor and listener are built from it.
///
/// A missing Gemini credential is not an error: the advisor runs in
/// fallback mode and answers every request with a static message.
#[derive(Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub request_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs = match non_empty("GEMINI_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("GEMINI_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            gemini_api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("GOOGLE_API_KEY")),
            gemini_model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_api_base: non_empty("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            request_timeout: Duration::from_secs(timeout_secs),
            port: non_empty("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

// Hand-written so the credential never reaches a log line.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("gemini_api_base", &self.gemini_api_base)
            .field("request_timeout", &self.request_timeout)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}
