use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
///
/// Nothing is strictly required: a missing API key only makes generative
/// calls fail with "service unavailable".
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub gemini_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            api_key: non_blank("API_KEY")
                .or_else(|| non_blank("GEMINI_API_KEY"))
                .unwrap_or_default(),
            gemini_base_url: non_blank("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            port: non_blank("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: non_blank("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
