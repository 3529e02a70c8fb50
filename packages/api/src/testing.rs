//! Recording transport shared by the crate's tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Value};
use store::MemoryStore;

use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
}

impl RecordingTransport {
    pub fn push_json(&self, status: u16, body: Value) {
        self.push_text(status, &body.to_string());
    }

    pub fn push_text(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_failure(&self, err: ApiError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::transport("no response queued")))
    }
}

/// Client against `http://api.test` reading credentials from `store`.
pub fn client_with(store: MemoryStore) -> (ApiClient, Rc<RecordingTransport>) {
    let transport = Rc::new(RecordingTransport::default());
    let client = ApiClient::new(
        ApiConfig::new("http://api.test"),
        transport.clone(),
        Rc::new(store),
    );
    (client, transport)
}

pub fn sample_user_json(id: i64) -> Value {
    json!({
        "id": id,
        "email": format!("user{id}@uni.edu"),
        "username": format!("user{id}"),
        "full_name": format!("User {id}"),
        "bio": null,
        "skills": "[\"rust\",\"sql\"]",
        "interests": null,
        "profile_image": null,
        "mode": "hustler",
        "created_at": "2025-01-15T10:00:00"
    })
}
