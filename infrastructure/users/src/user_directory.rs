use async_trait::async_trait;
use serde::Deserialize;

use business::domain::shared::value_objects::UserId;
use business::domain::user::services::UserDirectoryService;

use crate::client::UsersClient;

const OWNER_ROLE: &str = "OWNER";

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    role: Option<String>,
}

pub struct UserDirectoryHttp {
    client: UsersClient,
}

impl UserDirectoryHttp {
    pub fn new(client: UsersClient) -> Self {
        Self { client }
    }

    async fn fetch_role(&self, user_id: UserId) -> Result<Option<String>, reqwest::Error> {
        let user = self
            .client
            .client
            .get(self.client.user_url(user_id.value()))
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfoResponse>()
            .await?;

        Ok(user.role)
    }
}

#[async_trait]
impl UserDirectoryService for UserDirectoryHttp {
    async fn is_owner_role(&self, user_id: UserId) -> bool {
        match self.fetch_role(user_id).await {
            Ok(Some(role)) => role.trim().eq_ignore_ascii_case(OWNER_ROLE),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(user_id = user_id.value(), error = %e, "user lookup failed");
                false
            }
        }
    }
}
