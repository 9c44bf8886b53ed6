//! Auth store actions.

use crate::User;
use keeper_store::StoreAction;

/// Every transition the auth reducer accepts.
#[derive(Clone, PartialEq)]
pub enum AuthAction {
    /// An async auth call has started.
    Requested,
    UserLoaded(User),
    AuthError,
    LoginSuccess { token: String },
    LoginFail(String),
    RegisterSuccess { token: String },
    RegisterFail(String),
    Logout,
    ClearErrors,
}

impl StoreAction for AuthAction {
    fn name(&self) -> &'static str {
        match self {
            AuthAction::Requested => "AUTH_REQUESTED",
            AuthAction::UserLoaded(_) => "USER_LOADED",
            AuthAction::AuthError => "AUTH_ERROR",
            AuthAction::LoginSuccess { .. } => "LOGIN_SUCCESS",
            AuthAction::LoginFail(_) => "LOGIN_FAIL",
            AuthAction::RegisterSuccess { .. } => "REGISTER_SUCCESS",
            AuthAction::RegisterFail(_) => "REGISTER_FAIL",
            AuthAction::Logout => "LOGOUT",
            AuthAction::ClearErrors => "CLEAR_ERRORS",
        }
    }
}

impl std::fmt::Debug for AuthAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
