//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_auth, use_session, AuthProvider, LogoutButton, Session};

mod credentials;
pub use credentials::make_credential_store;

pub mod views;
pub mod widgets;
