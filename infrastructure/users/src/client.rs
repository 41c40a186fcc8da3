use std::time::Duration;

use reqwest::Client;

/// Shared HTTP client for the users service.
pub struct UsersClient {
    pub client: Client,
    pub base_url: String,
}

impl UsersClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the endpoint describing a single user.
    pub fn user_url(&self, user_id: i64) -> String {
        format!("{}/api/v1/users/{}", self.base_url, user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_user_url_without_double_slash() {
        let client = UsersClient::new(
            "http://users.local:8081/".to_string(),
            Duration::from_secs(5),
        );

        assert_eq!(client.user_url(42), "http://users.local:8081/api/v1/users/42");
    }
}
