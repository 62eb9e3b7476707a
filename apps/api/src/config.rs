use std::str::FromStr;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub ollama_url: String,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            rust_log: "info".to_string(),
            ollama_url: DEFAULT_BASE_URL.to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            llm_timeout_secs: 120,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_var("PORT", env("PORT"), defaults.port)?,
            rust_log: env("RUST_LOG").unwrap_or(defaults.rust_log),
            ollama_url: env("OLLAMA_URL").unwrap_or(defaults.ollama_url),
            llm_model: env("LLM_MODEL").unwrap_or(defaults.llm_model),
            llm_timeout_secs: parse_var(
                "LLM_TIMEOUT_SECS",
                env("LLM_TIMEOUT_SECS"),
                defaults.llm_timeout_secs,
            )?,
            max_upload_bytes: parse_var(
                "MAX_UPLOAD_BYTES",
                env("MAX_UPLOAD_BYTES"),
                defaults.max_upload_bytes,
            )?,
        })
    }
}

fn env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{value}'")),
        None => Ok(default),
    }
}
