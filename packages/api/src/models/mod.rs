//! Wire shapes exchanged with the backend.
//!
//! List-valued fields (`skills`, `interests`, `required_skills`) arrive as
//! JSON-encoded text and leave as real arrays. [`decode_list`] handles the
//! first direction, [`split_list`] turns comma-separated form input into the
//! second.

mod application;
mod auth;
mod opportunity;
mod user;

pub use application::{Application, ApplicationCreate, ApplicationStatus};
pub use auth::{AuthResponse, LoginRequest, SignupRequest};
pub use opportunity::{Opportunity, OpportunityCreate, OpportunityQuery, OpportunityStatus, OpportunityUpdate};
pub use user::{Mode, ModeToggle, NetworkQuery, ProfileUpdate, User};

/// Decode a JSON-encoded list of strings. Absent or unparsable input is empty.
pub fn decode_list(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|text| serde_json::from_str::<Vec<String>>(text).ok())
        .unwrap_or_default()
}

/// Split comma-separated input into trimmed, non-empty items.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
