use anyhow::Context;
use jsonwebtoken::DecodingKey;

/// Shared-secret settings for validating HS256 bearer tokens.
///
/// Registered as request data so the security scheme checker can reach it.
#[derive(Clone)]
pub struct JwtConfig {
    secret: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Environment variables:
    /// - JWT_SECRET: HMAC secret shared with the users service (required)
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        if secret.trim().is_empty() {
            anyhow::bail!("JWT_SECRET must not be empty");
        }
        Ok(Self::new(secret))
    }

    pub fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.as_bytes())
    }
}
