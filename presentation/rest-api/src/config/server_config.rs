use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> anyhow::Result<Self> {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| DEFAULT_IP.to_string());
        let port = Self::parse_port(env::var("SERVICE_PORT").ok().as_deref())?;

        Ok(Self { ip, port })
    }

    fn parse_port(raw: Option<&str>) -> anyhow::Result<u16> {
        match raw {
            None => Ok(DEFAULT_PORT),
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("SERVICE_PORT must be a valid port, got '{value}'")),
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
