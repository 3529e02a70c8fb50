//! # API crate: client core for the Workforce marketplace
//!
//! Everything the views need to talk to the Workforce backend lives here:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: URL resolution, JSON bodies, bearer header, error mapping |
//! | [`transport`] | [`HttpTransport`] seam and the reqwest implementation |
//! | [`endpoints`] | Typed groups: auth, profile, opportunities, network |
//! | [`session`] | [`SessionManager`]: credential + current user lifecycle |
//! | [`models`] | Wire shapes (`User`, `Opportunity`, `Application`, request bodies) |
//! | [`config`] | Backend base URL (`WORKFORCE_API_URL`) |
//! | [`error`] | [`ApiError`], [`SessionError`], [`ValidationError`] |
//! | [`validation`] | Form checks run before a request is sent |
//!
//! All futures are `!Send`: the client targets a single-threaded UI event
//! loop (the browser, or a Dioxus desktop runtime).

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod session;
pub mod transport;
pub mod validation;

#[cfg(test)]
mod testing;

pub use client::{ApiClient, RequestOptions};
pub use config::ApiConfig;
pub use error::{ApiError, ApiErrorKind, SessionError, ValidationError};
pub use models::{
    Application, ApplicationStatus, Mode, Opportunity, OpportunityStatus, User,
};
pub use session::{SessionManager, SessionState, SessionStatus};
pub use transport::{HttpTransport, ReqwestTransport};
