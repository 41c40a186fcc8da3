use anyhow::Context;
use std::time::Duration;

/// Location of the external users service.
#[derive(Debug, Clone)]
pub struct UsersServiceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl UsersServiceConfig {
    /// Environment variables:
    /// - USERS_SERVICE_URL: Base URL of the users service (required)
    /// - USERS_SERVICE_TIMEOUT_SECS: Request timeout in seconds (default: 5)
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            std::env::var("USERS_SERVICE_URL").context("USERS_SERVICE_URL must be set")?;
        let timeout_secs = match std::env::var("USERS_SERVICE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .context("USERS_SERVICE_TIMEOUT_SECS must be a number of seconds")?,
            Err(_) => 5,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
