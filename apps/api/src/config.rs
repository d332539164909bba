use anyhow::{Context, Result};

const DEFAULT_PDF_SERVICE_URL: &str = "http://localhost:3001";

/// Application configuration loaded from environment variables.
/// Every setting has a default, so a bare environment starts a local setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub pdf_service_url: String,
    pub pdf_service_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            pdf_service_url: std::env::var("PDF_SERVICE_URL")
                .unwrap_or_else(|_| DEFAULT_PDF_SERVICE_URL.to_string()),
            pdf_service_timeout_secs: parse_env("PDF_SERVICE_TIMEOUT_SECS", 120)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
