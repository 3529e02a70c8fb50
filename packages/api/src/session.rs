//! # Session manager: owner of the credential and the current user
//!
//! [`SessionManager`] is the only writer of the stored credential and the
//! single in-memory source of truth for the signed-in [`User`]. Everything
//! else reads [`SessionState`] snapshots.
//!
//! ## States
//!
//! | Status | credential | user | loading |
//! |--------|-----------|------|---------|
//! | `Unauthenticated` | none | none | false |
//! | `Hydrating` | some | none | true |
//! | `Authenticated` | some | some | false |
//!
//! Startup reads the store once: no credential goes straight to
//! `Unauthenticated`, a credential starts `Hydrating` and [`init`](SessionManager::init)
//! resolves it through `GET /profile/me`. [`login`](SessionManager::login)
//! stores a fresh credential and hydrates again. A failed hydration, for any
//! reason, clears the credential and the user; it is the only error this
//! module swallows. [`logout`](SessionManager::logout) is synchronous and
//! never touches the network.
//!
//! ## Stale completions
//!
//! Every credential change bumps an epoch. A hydration whose response arrives
//! after the epoch moved on (e.g. the user logged out while it was in flight)
//! is dropped instead of resurrecting the old session.
//!
//! ## Sharing
//!
//! All methods take `&self`; state lives in cells and no borrow is held across
//! an `.await`. Wrap the manager in an `Rc` to share it with a view layer and
//! use [`subscribe`](SessionManager::subscribe) to be told about changes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use store::CredentialStore;

use crate::client::ApiClient;
use crate::error::SessionError;
use crate::models::{LoginRequest, Mode, ProfileUpdate, SignupRequest, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Unauthenticated,
    Hydrating,
    Authenticated,
}

/// Snapshot of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub credential: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    fn hydrating(credential: String) -> Self {
        Self {
            credential: Some(credential),
            user: None,
            loading: true,
        }
    }

    pub fn status(&self) -> SessionStatus {
        match (&self.credential, &self.user) {
            (Some(_), Some(_)) => SessionStatus::Authenticated,
            (Some(_), None) => SessionStatus::Hydrating,
            (None, _) => SessionStatus::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }
}

type Observer = Box<dyn Fn(&SessionState)>;

pub struct SessionManager {
    client: ApiClient,
    state: RefCell<SessionState>,
    epoch: Cell<u64>,
    /// Epoch of the hydration currently awaiting `GET /profile/me`.
    in_flight: Cell<Option<u64>>,
    observers: RefCell<Vec<Observer>>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("status", &self.status())
            .field("epoch", &self.epoch.get())
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Read the stored credential and pick the initial state. No request is
    /// made until [`init`](Self::init).
    pub fn new(client: ApiClient) -> Self {
        let state = match client.credentials().load() {
            Some(credential) => SessionState::hydrating(credential),
            None => SessionState::default(),
        };
        Self {
            client,
            state: RefCell::new(state),
            epoch: Cell::new(0),
            in_flight: Cell::new(None),
            observers: RefCell::new(Vec::new()),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn store(&self) -> Rc<dyn CredentialStore> {
        self.client.credentials()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.state.borrow().status()
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn credential(&self) -> Option<String> {
        self.state.borrow().credential.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Call `observer` after every state change.
    ///
    /// Observers must not subscribe further observers from inside the
    /// callback.
    pub fn subscribe(&self, observer: impl Fn(&SessionState) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    fn set_state(&self, state: SessionState) {
        *self.state.borrow_mut() = state.clone();
        for observer in self.observers.borrow().iter() {
            observer(&state);
        }
    }

    fn next_epoch(&self) -> u64 {
        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);
        epoch
    }

    /// Startup hydration. Does nothing unless the session is `Hydrating`
    /// and no hydration for the current credential is already in flight.
    pub async fn init(&self) {
        if self.status() != SessionStatus::Hydrating {
            return;
        }
        let epoch = self.epoch.get();
        if self.in_flight.get() == Some(epoch) {
            tracing::debug!("Session hydration already in flight");
            return;
        }
        self.hydrate(epoch).await;
    }

    /// Store a freshly issued credential and resolve its user.
    pub async fn login(&self, credential: &str) {
        self.store().save(credential);
        let epoch = self.next_epoch();
        self.set_state(SessionState::hydrating(credential.to_string()));
        self.hydrate(epoch).await;
    }

    async fn hydrate(&self, epoch: u64) {
        self.in_flight.set(Some(epoch));
        let result = self.client.profile().me().await;
        if self.in_flight.get() == Some(epoch) {
            self.in_flight.set(None);
        }
        if self.epoch.get() != epoch {
            tracing::debug!("Discarding stale session hydration");
            return;
        }

        match result {
            Ok(user) => {
                tracing::debug!(user_id = user.id, "Session hydrated");
                let credential = self.credential();
                self.set_state(SessionState {
                    credential,
                    user: Some(user),
                    loading: false,
                });
            }
            Err(e) => {
                tracing::warn!("Failed to fetch current user, signing out: {}", e);
                self.logout();
            }
        }
    }

    /// Forget the credential and the user. Synchronous, no network.
    pub fn logout(&self) {
        self.store().clear();
        self.next_epoch();
        self.set_state(SessionState::default());
    }

    /// Replace the current user with a fresh copy from the backend.
    pub fn update_user(&self, user: User) -> Result<(), SessionError> {
        let mut state = self.state();
        if state.status() != SessionStatus::Authenticated {
            return Err(SessionError::NotAuthenticated);
        }
        state.user = Some(user);
        self.set_state(state);
        Ok(())
    }

    /// `POST /auth/login`, then [`login`](Self::login) with the issued token.
    ///
    /// Fails with [`SessionError::NotAuthenticated`] when the token was
    /// issued but the user behind it could not be loaded.
    pub async fn sign_in(&self, request: &LoginRequest) -> Result<(), SessionError> {
        let auth = self.client.auth().login(request).await?;
        self.finish_sign_in(&auth.access_token).await
    }

    /// `POST /auth/signup`, then [`login`](Self::login) with the issued token.
    pub async fn sign_up(&self, request: &SignupRequest) -> Result<(), SessionError> {
        let auth = self.client.auth().signup(request).await?;
        self.finish_sign_in(&auth.access_token).await
    }

    async fn finish_sign_in(&self, credential: &str) -> Result<(), SessionError> {
        self.login(credential).await;
        if self.state.borrow().is_authenticated() {
            Ok(())
        } else {
            Err(SessionError::NotAuthenticated)
        }
    }

    /// `PUT /profile/me` and adopt the returned user.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, SessionError> {
        let user = self.client.profile().update_me(update).await?;
        self.update_user(user.clone())?;
        Ok(user)
    }

    /// `POST /profile/mode` and adopt the returned user.
    pub async fn toggle_mode(&self, mode: Mode) -> Result<User, SessionError> {
        let user = self.client.profile().toggle_mode(mode).await?;
        self.update_user(user.clone())?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::error::{ApiError, ApiErrorKind};
    use crate::testing::{client_with, sample_user_json};
    use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
    use async_trait::async_trait;
    use reqwest::header::AUTHORIZATION;
    use serde_json::json;
    use std::rc::{Rc, Weak};
    use store::MemoryStore;

    fn assert_invariants(state: &SessionState) {
        if state.credential.is_none() {
            assert!(state.user.is_none());
        }
        if !state.loading {
            assert_eq!(state.credential.is_some(), state.user.is_some());
        }
    }

    #[tokio::test]
    async fn test_startup_without_credential() {
        let (client, transport) = client_with(MemoryStore::new());
        let session = SessionManager::new(client);

        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(!session.is_loading());

        session.init().await;
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert_eq!(transport.request_count(), 0);
        assert_invariants(&session.state());
    }

    #[tokio::test]
    async fn test_startup_hydrates_stored_credential() {
        let (client, transport) = client_with(MemoryStore::with_credential("stored"));
        transport.push_json(200, sample_user_json(3));
        let session = SessionManager::new(client);

        assert_eq!(session.status(), SessionStatus::Hydrating);
        assert!(session.is_loading());

        session.init().await;
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert!(!session.is_loading());
        assert_eq!(session.user().unwrap().id, 3);
        assert_eq!(session.credential().as_deref(), Some("stored"));

        let sent = transport.last_request();
        assert_eq!(sent.url, "http://api.test/profile/me");
        assert_eq!(sent.headers.get(AUTHORIZATION).unwrap(), "Bearer stored");
        assert_invariants(&session.state());
    }

    #[tokio::test]
    async fn test_rejected_credential_is_cleared() {
        let store = MemoryStore::with_credential("expired");
        let (client, transport) = client_with(store.clone());
        transport.push_json(401, json!({"detail": "Could not validate credentials"}));
        let session = SessionManager::new(client);

        session.init().await;
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(!session.is_loading());
        assert!(store.load().is_none());
        assert_invariants(&session.state());

        // Not retried
        session.init().await;
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_network_failure_during_hydration_logs_out() {
        let store = MemoryStore::with_credential("tok");
        let (client, transport) = client_with(store.clone());
        transport.push_failure(ApiError::transport("offline"));
        let session = SessionManager::new(client);

        session.init().await;
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_login_then_hydration() {
        let store = MemoryStore::new();
        let (client, transport) = client_with(store.clone());
        transport.push_json(200, sample_user_json(9));
        let session = SessionManager::new(client);

        session.login("new-token").await;
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert!(!session.is_loading());
        assert_eq!(store.load().as_deref(), Some("new-token"));
        assert_eq!(
            transport.last_request().headers.get(AUTHORIZATION).unwrap(),
            "Bearer new-token"
        );
        assert_invariants(&session.state());
    }

    #[tokio::test]
    async fn test_sign_in_propagates_api_errors() {
        let store = MemoryStore::new();
        let (client, transport) = client_with(store.clone());
        transport.push_json(401, json!({"detail": "Incorrect email or password"}));
        let session = SessionManager::new(client);

        let request = LoginRequest {
            email: "ada@uni.edu".to_string(),
            password: "wrong-password".to_string(),
        };
        let err = session.sign_in(&request).await.unwrap_err();
        match err {
            SessionError::Api(api) => assert_eq!(api.message, "Incorrect email or password"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn test_sign_up_logs_in() {
        let (client, transport) = client_with(MemoryStore::new());
        transport.push_json(201, json!({"access_token": "fresh", "token_type": "bearer"}));
        transport.push_json(200, sample_user_json(12));
        let session = SessionManager::new(client);

        let request = SignupRequest {
            email: "new@uni.edu".to_string(),
            username: "newbie".to_string(),
            password: "longenough".to_string(),
            full_name: "New Person".to_string(),
        };
        session.sign_up(&request).await.unwrap();
        assert!(session.state().is_authenticated());
        assert_eq!(session.user().unwrap().id, 12);
    }

    #[tokio::test]
    async fn test_logout_is_synchronous_and_offline() {
        let store = MemoryStore::with_credential("tok");
        let (client, transport) = client_with(store.clone());
        transport.push_json(200, sample_user_json(1));
        let session = SessionManager::new(client);
        session.init().await;
        assert!(session.state().is_authenticated());

        session.logout();
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(!session.is_loading());
        assert!(store.load().is_none());
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_update_user_roundtrip() {
        let (client, transport) = client_with(MemoryStore::with_credential("tok"));
        transport.push_json(200, sample_user_json(1));
        let session = SessionManager::new(client);
        session.init().await;

        let mut updated: User = serde_json::from_value(sample_user_json(1)).unwrap();
        updated.bio = Some("Night owl".to_string());
        updated.mode = Mode::Builder;

        session.update_user(updated.clone()).unwrap();
        assert_eq!(session.user(), Some(updated));
        assert_eq!(session.credential().as_deref(), Some("tok"));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_update_user_requires_authentication() {
        let (client, _transport) = client_with(MemoryStore::new());
        let session = SessionManager::new(client);

        let user: User = serde_json::from_value(sample_user_json(1)).unwrap();
        assert_eq!(session.update_user(user), Err(SessionError::NotAuthenticated));
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_toggle_mode_adopts_returned_user() {
        let (client, transport) = client_with(MemoryStore::with_credential("tok"));
        transport.push_json(200, sample_user_json(1));
        let mut builder = sample_user_json(1);
        builder["mode"] = json!("builder");
        transport.push_json(200, builder);
        let session = SessionManager::new(client);
        session.init().await;

        let user = session.toggle_mode(Mode::Builder).await.unwrap();
        assert_eq!(user.mode, Mode::Builder);
        assert_eq!(session.user().unwrap().mode, Mode::Builder);
    }

    #[tokio::test]
    async fn test_failed_profile_update_keeps_session() {
        let (client, transport) = client_with(MemoryStore::with_credential("tok"));
        transport.push_json(200, sample_user_json(1));
        transport.push_json(422, json!({"detail": "bad skills"}));
        let session = SessionManager::new(client);
        session.init().await;
        let before = session.state();

        let err = session.update_profile(&ProfileUpdate::default()).await.unwrap_err();
        match err {
            SessionError::Api(api) => {
                assert_eq!(api.kind, ApiErrorKind::Server);
                assert_eq!(api.message, "bad skills");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(session.state(), before);
    }

    #[tokio::test]
    async fn test_observers_see_every_transition() {
        let (client, transport) = client_with(MemoryStore::new());
        transport.push_json(200, sample_user_json(4));
        let session = SessionManager::new(client);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |state| sink.borrow_mut().push(state.status()));

        session.login("tok").await;
        session.logout();

        assert_eq!(
            *seen.borrow(),
            vec![
                SessionStatus::Hydrating,
                SessionStatus::Authenticated,
                SessionStatus::Unauthenticated,
            ]
        );
    }

    /// Logs the session out while the hydration request is in flight.
    struct LogoutDuringSend {
        session: RefCell<Weak<SessionManager>>,
    }

    #[async_trait(?Send)]
    impl HttpTransport for LogoutDuringSend {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            if let Some(session) = self.session.borrow().upgrade() {
                session.logout();
            }
            Ok(HttpResponse {
                status: 200,
                body: sample_user_json(1).to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_logout_during_hydration_wins() {
        let store = MemoryStore::with_credential("tok");
        let transport = Rc::new(LogoutDuringSend {
            session: RefCell::new(Weak::new()),
        });
        let client = ApiClient::new(
            ApiConfig::new("http://api.test"),
            transport.clone(),
            Rc::new(store.clone()),
        );
        let session = Rc::new(SessionManager::new(client));
        *transport.session.borrow_mut() = Rc::downgrade(&session);

        session.init().await;

        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(session.user().is_none());
        assert!(store.load().is_none());
        assert_invariants(&session.state());
    }

    #[tokio::test]
    async fn test_sign_in_reports_failed_hydration() {
        let store = MemoryStore::new();
        let (client, transport) = client_with(store.clone());
        transport.push_json(200, json!({"access_token": "issued", "token_type": "bearer"}));
        transport.push_json(500, json!({"detail": "profile service down"}));
        let session = SessionManager::new(client);

        let request = LoginRequest {
            email: "ada@uni.edu".to_string(),
            password: "correct-horse".to_string(),
        };
        let err = session.sign_in(&request).await.unwrap_err();
        assert_eq!(err, SessionError::NotAuthenticated);
        assert_eq!(session.status(), SessionStatus::Unauthenticated);
        assert!(store.load().is_none());
        assert_invariants(&session.state());
    }

    /// Starts a second `init` while the first one's request is in flight.
    struct InitDuringSend {
        session: RefCell<Weak<SessionManager>>,
        sends: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl HttpTransport for InitDuringSend {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.sends.set(self.sends.get() + 1);
            if self.sends.get() == 1 {
                let session = self.session.borrow().upgrade();
                if let Some(session) = session {
                    session.init().await;
                }
            }
            Ok(HttpResponse {
                status: 200,
                body: sample_user_json(5).to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_overlapping_init_sends_one_request() {
        let transport = Rc::new(InitDuringSend {
            session: RefCell::new(Weak::new()),
            sends: Cell::new(0),
        });
        let client = ApiClient::new(
            ApiConfig::new("http://api.test"),
            transport.clone(),
            Rc::new(MemoryStore::with_credential("tok")),
        );
        let session = Rc::new(SessionManager::new(client));
        *transport.session.borrow_mut() = Rc::downgrade(&session);

        session.init().await;

        assert_eq!(transport.sends.get(), 1);
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.user().unwrap().id, 5);
    }
}
