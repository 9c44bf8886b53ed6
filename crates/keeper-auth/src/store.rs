//! Async auth actions over the reducer store.

use crate::{
    AuthAction, AuthReducer, AuthState, Credentials, RegistrationProfile, TokenPropagator,
    TokenResponse, User,
};
use keeper_config::{DispatchOrdering, Endpoints};
use keeper_storage::TokenVault;
use keeper_store::Store;
use keeper_transport::{decode, normalize, Transport, TransportResult};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

const LOAD_USER: &str = "load_user";

/// The client's session.
///
/// Every async action resolves without returning an error: failures land in
/// [`AuthState::error`] (login and register) or sign the session out
/// (session check).
pub struct AuthStore {
    store: Store<AuthReducer>,
    transport: Arc<dyn Transport>,
    propagator: TokenPropagator,
    endpoints: Endpoints,
}

impl AuthStore {
    /// Create the store, seeding the token from persistent storage.
    pub fn new(
        transport: Arc<dyn Transport>,
        vault: TokenVault,
        endpoints: Endpoints,
        ordering: DispatchOrdering,
    ) -> Self {
        let propagator = TokenPropagator::new(transport.clone(), vault);
        let initial = AuthState::initial(propagator.persisted());
        Self {
            store: Store::with_ordering(initial, ordering),
            transport,
            propagator,
            endpoints,
        }
    }

    /// Check the session against the current-user endpoint.
    ///
    /// A persisted token is attached to the transport first. On success the
    /// session becomes authenticated; on any failure it is signed out and the
    /// token is discarded. The existing error message is left alone.
    pub async fn load_user(&self) -> AuthState {
        let ticket = self.store.begin_call(LOAD_USER);

        // Attach the stored token before the request goes out
        if let Some(token) = self.propagator.persisted() {
            self.propagator.set_token(Some(&token));
        }

        self.store.dispatch(AuthAction::Requested);

        match self.fetch_user().await {
            Ok(user) => {
                debug!(user_id = %user.id, "Loaded current user");
                self.store
                    .dispatch_settled(&ticket, AuthAction::UserLoaded(user));
            }
            Err(e) => {
                warn!(status = ?e.status(), error = %e, "Session check failed");
                if self
                    .store
                    .dispatch_settled(&ticket, AuthAction::AuthError)
                    .is_some()
                {
                    self.propagator.set_token(None);
                }
            }
        }

        self.store.snapshot()
    }

    /// Sign in with email and password, then load the user.
    pub async fn login(&self, credentials: &Credentials) -> AuthState {
        self.store.dispatch(AuthAction::Requested);

        debug!(email = %credentials.email, "Attempting login");

        match self.request_token(&self.endpoints.login, credentials).await {
            Ok(token) => {
                self.store.dispatch(AuthAction::LoginSuccess {
                    token: token.clone(),
                });
                self.propagator.set_token(Some(&token));
                info!(email = %credentials.email, "Login successful");
                self.load_user().await
            }
            Err(message) => {
                self.store.dispatch(AuthAction::LoginFail(message));
                self.propagator.set_token(None);
                self.store.snapshot()
            }
        }
    }

    /// Create an account, then load the new user.
    pub async fn register(&self, profile: &RegistrationProfile) -> AuthState {
        self.store.dispatch(AuthAction::Requested);

        debug!(email = %profile.email, "Attempting registration");

        match self.request_token(&self.endpoints.register, profile).await {
            Ok(token) => {
                self.store.dispatch(AuthAction::RegisterSuccess {
                    token: token.clone(),
                });
                self.propagator.set_token(Some(&token));
                info!(email = %profile.email, "Registration successful");
                self.load_user().await
            }
            Err(message) => {
                self.store.dispatch(AuthAction::RegisterFail(message));
                self.propagator.set_token(None);
                self.store.snapshot()
            }
        }
    }

    /// End the session and discard the token.
    pub fn logout(&self) -> AuthState {
        let state = self.store.dispatch(AuthAction::Logout);
        self.propagator.set_token(None);
        info!("Logged out");
        state
    }

    /// Drop the last error message.
    pub fn clear_errors(&self) -> AuthState {
        self.store.dispatch(AuthAction::ClearErrors)
    }

    /// Current session snapshot.
    pub fn state(&self) -> AuthState {
        self.store.snapshot()
    }

    /// Receive every later session snapshot.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.store.subscribe()
    }

    async fn fetch_user(&self) -> TransportResult<User> {
        let body = self.transport.get(&self.endpoints.current_user).await?;
        decode(body)
    }

    /// POST a form and extract the issued token, normalizing any failure.
    async fn request_token<T: Serialize + Sync>(
        &self,
        path: &str,
        form: &T,
    ) -> Result<String, String> {
        self.post_form(path, form).await.map(|r| r.token).map_err(|e| {
            warn!(path = %path, status = ?e.status(), error = %e, "Token request failed");
            normalize(&e)
        })
    }

    async fn post_form<T: Serialize + Sync>(
        &self,
        path: &str,
        form: &T,
    ) -> TransportResult<TokenResponse> {
        let body = self.transport.post(path, serde_json::to_value(form)?).await?;
        decode(body)
    }
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("state", &self.store.snapshot())
            .finish_non_exhaustive()
    }
}
