use crate::client::{ApiClient, RequestOptions};
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, SignupRequest};

/// `/auth/*` endpoints. Neither call needs a credential.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/signup`
    pub async fn signup(&self, data: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.client
            .request("/auth/signup", RequestOptions::post().json(data)?)
            .await
    }

    /// `POST /auth/login`
    pub async fn login(&self, data: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.client
            .request("/auth/login", RequestOptions::post().json(data)?)
            .await
    }
}
