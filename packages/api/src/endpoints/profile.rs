use crate::client::{ApiClient, RequestOptions};
use crate::error::ApiError;
use crate::models::{Mode, ModeToggle, ProfileUpdate, User};

/// `/profile/*` endpoints for the signed-in user.
#[derive(Debug, Clone, Copy)]
pub struct ProfileApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProfileApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /profile/me`
    pub async fn me(&self) -> Result<User, ApiError> {
        self.client.request("/profile/me", RequestOptions::get()).await
    }

    /// `PUT /profile/me`
    pub async fn update_me(&self, data: &ProfileUpdate) -> Result<User, ApiError> {
        self.client
            .request("/profile/me", RequestOptions::put().json(data)?)
            .await
    }

    /// `POST /profile/mode`
    pub async fn toggle_mode(&self, mode: Mode) -> Result<User, ApiError> {
        self.client
            .request("/profile/mode", RequestOptions::post().json(&ModeToggle { mode })?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client_with, sample_user_json};
    use reqwest::Method;
    use store::MemoryStore;

    #[tokio::test]
    async fn test_update_me() {
        let (client, transport) = client_with(MemoryStore::with_credential("tok"));
        transport.push_json(200, sample_user_json(5));

        let update = ProfileUpdate {
            interests: Some(vec!["robotics".to_string()]),
            ..ProfileUpdate::default()
        };
        let user = client.profile().update_me(&update).await.unwrap();
        assert_eq!(user.id, 5);

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::PUT);
        assert_eq!(sent.url, "http://api.test/profile/me");
        assert_eq!(sent.body.as_deref(), Some(r#"{"interests":["robotics"]}"#));
    }

    #[tokio::test]
    async fn test_toggle_mode() {
        let (client, transport) = client_with(MemoryStore::with_credential("tok"));
        transport.push_json(200, sample_user_json(5));

        client.profile().toggle_mode(Mode::Hustler).await.unwrap();

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.url, "http://api.test/profile/mode");
        assert_eq!(sent.body.as_deref(), Some(r#"{"mode":"hustler"}"#));
    }
}
