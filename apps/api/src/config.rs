use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// SMTP credentials are injected here and never appear as literals in code.
#[derive(Debug, Clone)]
pub struct Config {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub smtp_from: String,
    /// Optional path to a file holding the reference job description.
    /// Falls back to the built-in default when unset.
    pub reference_jd_path: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            smtp_host: require_env("SMTP_HOST")?,
            smtp_port: std::env::var("SMTP_PORT")
                .unwrap_or_else(|_| "465".to_string())
                .parse::<u16>()
                .context("SMTP_PORT must be a valid port number")?,
            smtp_username: require_env("SMTP_USERNAME")?,
            smtp_password: require_env("SMTP_PASSWORD")?,
            smtp_from: require_env("SMTP_FROM")?,
            reference_jd_path: std::env::var("REFERENCE_JD_PATH").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
