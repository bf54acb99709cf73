use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Variable holding the Etsy API key unless `ETSY_API_KEY_VAR` names another.
pub const DEFAULT_API_KEY_VAR: &str = "ETSY_API_KEY";

/// Application configuration loaded from environment variables
///
/// The Etsy API key itself is not held here; it is read from
/// `etsy_api_key_var` on every grading request.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub etsy_api_base_url: String,
    pub etsy_api_key_var: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            etsy_api_base_url: env::var("ETSY_API_BASE_URL")
                .unwrap_or_else(|_| etsy_client::DEFAULT_BASE_URL.to_string()),
            etsy_api_key_var: env::var("ETSY_API_KEY_VAR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_KEY_VAR.to_string()),
        })
    }
}
