//! Pure auth transitions.

use crate::{AuthAction, AuthState};
use keeper_store::Reducer;

/// Reducer for [`AuthState`].
pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Action = AuthAction;
    const NAME: &'static str = "auth";

    fn reduce(state: &AuthState, action: AuthAction) -> AuthState {
        match action {
            AuthAction::Requested => AuthState {
                loading: true,
                ..state.clone()
            },
            AuthAction::UserLoaded(user) => {
                if state.token.is_some() {
                    AuthState {
                        is_authenticated: Some(true),
                        loading: false,
                        user: Some(user),
                        ..state.clone()
                    }
                } else {
                    // A session without a token is not a session.
                    signed_out(state.error.clone())
                }
            }
            AuthAction::LoginSuccess { token } | AuthAction::RegisterSuccess { token } => {
                AuthState {
                    token: Some(token),
                    loading: false,
                    ..state.clone()
                }
            }
            AuthAction::AuthError | AuthAction::Logout => signed_out(state.error.clone()),
            AuthAction::LoginFail(message) | AuthAction::RegisterFail(message) => {
                signed_out(Some(message))
            }
            AuthAction::ClearErrors => AuthState {
                error: None,
                ..state.clone()
            },
        }
    }
}

fn signed_out(error: Option<String>) -> AuthState {
    AuthState {
        token: None,
        is_authenticated: Some(false),
        loading: false,
        user: None,
        error,
    }
}
