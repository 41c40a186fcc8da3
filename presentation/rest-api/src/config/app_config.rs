use super::{
    cors_config, jwt_config::JwtConfig, server_config::ServerConfig,
    users_service_config::UsersServiceConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub jwt: JwtConfig,
    pub users_service: UsersServiceConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            jwt: JwtConfig::from_env()?,
            users_service: UsersServiceConfig::from_env()?,
        })
    }
}
