use anyhow::{bail, Context, Result};

use crate::activity::DEFAULT_CAPACITY;
use crate::gateway::gemini::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub port: u16,
    pub rust_log: String,
    pub activity_simulator_enabled: bool,
    pub activity_interval_secs: u64,
    pub activity_log_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let activity_interval_secs: u64 = parse_env("ACTIVITY_INTERVAL_SECS", 8)?;
        if activity_interval_secs == 0 {
            bail!("ACTIVITY_INTERVAL_SECS must be greater than zero");
        }
        let activity_log_capacity: usize = parse_env("ACTIVITY_LOG_CAPACITY", DEFAULT_CAPACITY)?;
        if activity_log_capacity == 0 {
            bail!("ACTIVITY_LOG_CAPACITY must be greater than zero");
        }

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            activity_simulator_enabled: parse_env("ACTIVITY_SIMULATOR_ENABLED", true)?,
            activity_interval_secs,
            activity_log_capacity,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
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
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_defaults_when_unset() {
        let port: u16 = parse_env("AUTOPILOT_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("AUTOPILOT_TEST_BAD_BOOL", "maybe");
        let parsed: Result<bool> = parse_env("AUTOPILOT_TEST_BAD_BOOL", true);
        assert!(parsed.is_err());
    }
}
