use serde::Serialize;

use crate::client::{with_query, ApiClient, RequestOptions};
use crate::error::ApiError;
use crate::models::{
    Application, ApplicationCreate, ApplicationStatus, Opportunity, OpportunityCreate,
    OpportunityQuery, OpportunityStatus, OpportunityUpdate,
};

/// Page size used by [`OpportunitiesApi::list_all`]; the backend's default cap.
pub const PAGE_SIZE: u32 = 50;

#[derive(Serialize)]
struct StatusQuery {
    new_status: ApplicationStatus,
}

/// `/opportunities/*` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct OpportunitiesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OpportunitiesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /opportunities[?skip=&limit=&status=]`, newest first.
    pub async fn list(&self, query: &OpportunityQuery) -> Result<Vec<Opportunity>, ApiError> {
        let path = with_query("/opportunities", query)?;
        self.client.request(&path, RequestOptions::get()).await
    }

    /// Every opportunity, read with `GET /opportunities?skip=&limit=` one
    /// page at a time until a page comes back short.
    pub async fn list_all(
        &self,
        status: Option<OpportunityStatus>,
    ) -> Result<Vec<Opportunity>, ApiError> {
        self.list_paged(status, PAGE_SIZE).await
    }

    async fn list_paged(
        &self,
        status: Option<OpportunityStatus>,
        page_size: u32,
    ) -> Result<Vec<Opportunity>, ApiError> {
        let mut all = Vec::new();
        let mut skip = 0;
        loop {
            let query = OpportunityQuery {
                skip: Some(skip),
                limit: Some(page_size),
                status,
            };
            let page = self.list(&query).await?;
            let short = page.len() < page_size as usize;
            all.extend(page);
            if short {
                return Ok(all);
            }
            skip += page_size;
        }
    }

    /// `GET /opportunities/{id}`
    pub async fn get(&self, id: i64) -> Result<Opportunity, ApiError> {
        self.client
            .request(&format!("/opportunities/{id}"), RequestOptions::get())
            .await
    }

    /// `POST /opportunities`
    pub async fn create(&self, data: &OpportunityCreate) -> Result<Opportunity, ApiError> {
        self.client
            .request("/opportunities", RequestOptions::post().json(data)?)
            .await
    }

    /// `PUT /opportunities/{id}`
    pub async fn update(&self, id: i64, data: &OpportunityUpdate) -> Result<Opportunity, ApiError> {
        self.client
            .request(&format!("/opportunities/{id}"), RequestOptions::put().json(data)?)
            .await
    }

    /// `DELETE /opportunities/{id}`; the backend answers `204 No Content`.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .request_empty(&format!("/opportunities/{id}"), RequestOptions::delete())
            .await
    }

    /// `POST /opportunities/{id}/apply`
    pub async fn apply(&self, id: i64, message: &str) -> Result<Application, ApiError> {
        let body = ApplicationCreate {
            message: message.to_string(),
        };
        self.client
            .request(&format!("/opportunities/{id}/apply"), RequestOptions::post().json(&body)?)
            .await
    }

    /// `GET /opportunities/{id}/applications` (creator only).
    pub async fn applications(&self, id: i64) -> Result<Vec<Application>, ApiError> {
        self.client
            .request(&format!("/opportunities/{id}/applications"), RequestOptions::get())
            .await
    }

    /// `PUT /opportunities/applications/{id}/status?new_status=` (creator only).
    ///
    /// The backend accepts only `accepted` and `rejected`.
    pub async fn set_application_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<Application, ApiError> {
        let path = with_query(
            &format!("/opportunities/applications/{application_id}/status"),
            &StatusQuery { new_status: status },
        )?;
        self.client.request(&path, RequestOptions::put()).await
    }
}
