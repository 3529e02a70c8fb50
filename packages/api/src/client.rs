//! # API client: the single choke point for backend calls
//!
//! [`ApiClient`] turns a relative path plus [`RequestOptions`] into an
//! [`HttpRequest`], hands it to the configured [`HttpTransport`] and maps the
//! response:
//!
//! - **Headers**: `Content-Type: application/json`, then
//!   `Authorization: Bearer <token>` when the credential store holds a token,
//!   then the caller's headers. A caller header replaces a default of the
//!   same name; nothing the caller passes is dropped.
//! - **2xx**: the body is decoded as JSON into the caller's type
//!   ([`request`](ApiClient::request)) or ignored
//!   ([`request_empty`](ApiClient::request_empty), for `204 No Content`).
//! - **Anything else**: an [`ApiError`] built by
//!   [`ApiError::from_response`], logged once and returned.
//!
//! The client reads the credential store but never writes it; that is the
//! session manager's job. It never retries.

use std::rc::Rc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::CredentialStore;

use crate::config::ApiConfig;
use crate::endpoints::{AuthApi, NetworkApi, OpportunitiesApi, ProfileApi};
use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Method, JSON body and extra headers of one call.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::invalid_request(format!("Failed to encode request body: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Add a header; it overrides any default of the same name.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// Authenticated JSON client for the Workforce backend.
///
/// Cheap to clone: the transport and credential store are shared.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Rc<dyn HttpTransport>,
    credentials: Rc<dyn CredentialStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        transport: Rc<dyn HttpTransport>,
        credentials: Rc<dyn CredentialStore>,
    ) -> Self {
        Self {
            config,
            transport,
            credentials,
        }
    }

    /// Client using [`ReqwestTransport`].
    pub fn with_reqwest(config: ApiConfig, credentials: Rc<dyn CredentialStore>) -> Self {
        Self::new(config, Rc::new(ReqwestTransport::new()), credentials)
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The credential store this client reads from.
    pub fn credentials(&self) -> Rc<dyn CredentialStore> {
        Rc::clone(&self.credentials)
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn profile(&self) -> ProfileApi<'_> {
        ProfileApi::new(self)
    }

    pub fn opportunities(&self) -> OpportunitiesApi<'_> {
        OpportunitiesApi::new(self)
    }

    pub fn network(&self) -> NetworkApi<'_> {
        NetworkApi::new(self)
    }

    /// Call `path` and decode the JSON response body.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let response = self.execute(path, options).await?;
        serde_json::from_str(&response.body).map_err(|e| {
            let err = ApiError::malformed(response.status, format!("Invalid response body: {e}"));
            tracing::error!("API error on {}: {}", path, err);
            err
        })
    }

    /// Call `path`, ignoring the body of a successful response.
    pub async fn request_empty(&self, path: &str, options: RequestOptions) -> Result<(), ApiError> {
        self.execute(path, options).await.map(|_| ())
    }

    async fn execute(&self, path: &str, options: RequestOptions) -> Result<HttpResponse, ApiError> {
        let request = self.build_request(path, options).map_err(|err| {
            tracing::error!("API error on {}: {}", path, err);
            err
        })?;
        tracing::debug!(method = %request.method, url = %request.url, "api request");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("API error on {}: {}", path, err);
                return Err(err);
            }
        };

        if !response.is_success() {
            let err = ApiError::from_response(response.status, &response.body);
            tracing::error!("API error on {} ({}): {}", path, response.status, err);
            return Err(err);
        }
        Ok(response)
    }

    fn build_request(&self, path: &str, options: RequestOptions) -> Result<HttpRequest, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.credentials.load() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::invalid_request("Stored credential is not a valid header value"))?;
            headers.insert(AUTHORIZATION, value);
        }

        for name in options.headers.keys() {
            headers.remove(name);
        }
        for (name, value) in &options.headers {
            headers.append(name.clone(), value.clone());
        }

        Ok(HttpRequest {
            method: options.method,
            url: self.config.url_for(path),
            headers,
            body: options.body.map(|body| body.to_string()),
        })
    }
}

/// Append `query` to `path` as a form-urlencoded query string.
///
/// Fields serialised as `null` are skipped; an empty query leaves the path
/// unchanged.
pub(crate) fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let value = serde_json::to_value(query)
        .map_err(|e| ApiError::invalid_request(format!("Failed to encode query: {e}")))?;
    let Value::Object(fields) = value else {
        return Ok(path.to_string());
    };

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut empty = true;
    for (key, value) in &fields {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        serializer.append_pair(key, &text);
        empty = false;
    }

    if empty {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{}", serializer.finish()))
    }
}
