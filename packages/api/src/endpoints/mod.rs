//! Typed wrappers over [`ApiClient`](crate::ApiClient), one per backend area.
//!
//! Each method is exactly one HTTP call with a fixed method and path; they
//! carry no logic of their own beyond shaping parameters.
//!
//! | Group | Paths |
//! |-------|-------|
//! | [`AuthApi`] | `/auth/signup`, `/auth/login` |
//! | [`ProfileApi`] | `/profile/me`, `/profile/mode` |
//! | [`OpportunitiesApi`] | `/opportunities`, `/opportunities/{id}`, `/opportunities/{id}/apply`, `/opportunities/{id}/applications`, `/opportunities/applications/{id}/status` |
//! | [`NetworkApi`] | `/network`, `/network/{id}`, `/network/applications/my` |

mod auth;
mod network;
mod opportunities;
mod profile;

pub use auth::AuthApi;
pub use network::NetworkApi;
pub use opportunities::OpportunitiesApi;
pub use profile::ProfileApi;
