//! Backend location, resolved from the environment.

/// Base URL used when `WORKFORCE_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Name of the variable holding the backend base URL.
pub const API_URL_VAR: &str = "WORKFORCE_API_URL";

/// API client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    /// Create a config for the given base URL. A trailing `/` is dropped.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from `WORKFORCE_API_URL`.
    ///
    /// Native builds read the process environment (loading `.env` first);
    /// wasm builds use the value present at compile time.
    pub fn from_env() -> Self {
        Self::from_value(read_api_url().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a path relative to the base, e.g. `"/profile/me"`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_api_url() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(API_URL_VAR).ok()
}

#[cfg(target_arch = "wasm32")]
fn read_api_url() -> Option<String> {
    option_env!("WORKFORCE_API_URL").map(str::to_string)
}
