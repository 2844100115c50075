//! Environment-driven server configuration.

use anyhow::{Context, Result};

/// Server settings, loaded once at startup.
///
/// No Debug derive: `pexels_api_key` must never end up in logs.
#[derive(Clone)]
pub struct Config {
    /// Port to bind on.
    pub port: u16,

    /// Base URL of a local Ollama instance. Absent = no content provider.
    pub ollama_url: Option<String>,

    /// Model passed to the content provider.
    pub ollama_model: String,

    /// Pexels API key. Absent = no image enrichment.
    pub pexels_api_key: Option<String>,

    /// Timeout in seconds for each outbound provider call.
    pub external_timeout_secs: u64,
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse()
            .context("PORT must be a number")?;

        let external_timeout_secs = std::env::var("GENERATION_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .context("GENERATION_TIMEOUT_SECS must be a number")?;

        Ok(Self {
            port,
            ollama_url: optional_env("OLLAMA_URL"),
            ollama_model: std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3".to_string()),
            pexels_api_key: optional_env("PEXELS_API_KEY"),
            external_timeout_secs,
        })
    }
}
