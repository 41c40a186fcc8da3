use jsonwebtoken::{Algorithm, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use business::domain::shared::value_objects::UserId;

use crate::config::jwt_config::JwtConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("auth.token_validation_failed: {0}")]
    InvalidToken(String),
    #[error("auth.missing_user_id")]
    MissingUserId,
    #[error("auth.invalid_user_id")]
    InvalidUserId,
}

/// Roles the API gates endpoints on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Owner,
}

impl Role {
    fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Owner => "OWNER",
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenClaims {
    #[serde(rename = "userId")]
    user_id: Option<Value>,
    roles: Option<Vec<String>>,
    role: Option<String>,
}

/// Identity taken from a validated bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Option<String>,
}

impl AuthenticatedUser {
    /// Case-insensitive match that also accepts a `ROLE_` prefix.
    pub fn has_role(&self, role: Role) -> bool {
        let Some(granted) = self.role.as_deref() else {
            return false;
        };
        let granted = granted.trim();
        let granted = match granted.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("ROLE_") => &granted[5..],
            _ => granted,
        };
        granted.eq_ignore_ascii_case(role.as_str())
    }
}

fn parse_user_id(claim: Option<Value>) -> Result<UserId, AuthError> {
    match claim {
        None | Some(Value::Null) => Err(AuthError::MissingUserId),
        Some(Value::Number(number)) => number
            .as_i64()
            .map(UserId::new)
            .ok_or(AuthError::InvalidUserId),
        Some(Value::String(raw)) => raw.parse::<UserId>().map_err(|_| AuthError::InvalidUserId),
        Some(_) => Err(AuthError::InvalidUserId),
    }
}

/// Validates an HS256 token and extracts the caller's id and primary role.
///
/// The role is the first entry of `roles`; `role` is read only when `roles`
/// is absent, so an empty `roles` list grants nothing.
pub fn authenticate(token: &str, config: &JwtConfig) -> Result<AuthenticatedUser, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    let token_data = decode::<TokenClaims>(token, &config.decoding_key(), &validation)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;
    let claims = token_data.claims;

    let user_id = parse_user_id(claims.user_id)?;
    let role = match claims.roles {
        Some(roles) => roles.into_iter().next(),
        None => claims.role,
    };

    Ok(AuthenticatedUser { user_id, role })
}

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub AuthenticatedUser);

async fn jwt_bearer_checker(
    req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<AuthenticatedUser> {
    let Some(config) = req.data::<JwtConfig>() else {
        tracing::error!("JwtConfig missing from request data");
        return None;
    };

    match authenticate(&bearer.token, config) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("JWT auth failed: {e}");
            None
        }
    }
}
