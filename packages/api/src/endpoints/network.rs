use crate::client::{with_query, ApiClient, RequestOptions};
use crate::error::ApiError;
use crate::models::{Application, NetworkQuery, User};

/// `/network/*` endpoints: the member directory.
#[derive(Debug, Clone, Copy)]
pub struct NetworkApi<'a> {
    client: &'a ApiClient,
}

impl<'a> NetworkApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /network[?skip=&limit=&mode=]`; the backend excludes the caller.
    pub async fn members(&self, query: &NetworkQuery) -> Result<Vec<User>, ApiError> {
        let path = with_query("/network", query)?;
        self.client.request(&path, RequestOptions::get()).await
    }

    /// `GET /network/{id}`
    pub async fn member(&self, id: i64) -> Result<User, ApiError> {
        self.client
            .request(&format!("/network/{id}"), RequestOptions::get())
            .await
    }

    /// `GET /network/applications/my`: applications the caller submitted.
    pub async fn my_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.client
            .request("/network/applications/my", RequestOptions::get())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mode;
    use crate::testing::{client_with, sample_user_json};
    use serde_json::json;
    use store::MemoryStore;

    #[tokio::test]
    async fn test_members_filtered_by_mode() {
        let (client, transport) = client_with(MemoryStore::with_credential("tok"));
        transport.push_json(200, json!([sample_user_json(2), sample_user_json(3)]));

        let members = client
            .network()
            .members(&NetworkQuery::with_mode(Mode::Hustler))
            .await
            .unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(transport.last_request().url, "http://api.test/network?mode=hustler");
    }

    #[tokio::test]
    async fn test_member_and_my_applications() {
        let (client, transport) = client_with(MemoryStore::with_credential("tok"));
        transport.push_json(200, sample_user_json(8));
        transport.push_json(200, json!([]));

        let member = client.network().member(8).await.unwrap();
        assert_eq!(member.id, 8);
        assert_eq!(transport.last_request().url, "http://api.test/network/8");

        let applications = client.network().my_applications().await.unwrap();
        assert!(applications.is_empty());
        assert_eq!(transport.last_request().url, "http://api.test/network/applications/my");
    }
}
