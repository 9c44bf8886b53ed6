//! Session snapshot.

use crate::User;
use std::fmt;

/// Everything the UI knows about the current session.
#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    /// `None` until the first load, login, or register settles.
    pub is_authenticated: Option<bool>,
    pub loading: bool,
    pub user: Option<User>,
    /// Last auth failure message. Cleared only by `clear_errors`.
    pub error: Option<String>,
}

impl AuthState {
    /// State at client start, with the token found in persistent storage.
    pub fn initial(token: Option<String>) -> Self {
        Self {
            token,
            is_authenticated: None,
            loading: true,
            user: None,
            error: None,
        }
    }

    /// True only for a settled, authenticated session.
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated == Some(true)
    }

    /// Whether a protected surface may render.
    ///
    /// Rendering is allowed while a session check is in flight so a valid
    /// session is not bounced to the login screen during startup.
    pub fn can_access_protected(&self) -> bool {
        self.is_authenticated() || self.loading
    }
}

impl fmt::Debug for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthState")
            .field("has_token", &self.token.is_some())
            .field("is_authenticated", &self.is_authenticated)
            .field("loading", &self.loading)
            .field("user", &self.user.as_ref().map(|u| u.id.as_str()))
            .field("error", &self.error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AuthState::initial(Some("stored".to_string()));
        assert_eq!(state.token.as_deref(), Some("stored"));
        assert_eq!(state.is_authenticated, None);
        assert!(state.loading);
        assert!(state.user.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_access_gate() {
        let mut state = AuthState::initial(None);
        state.loading = false;
        assert!(!state.can_access_protected());

        state.is_authenticated = Some(false);
        assert!(!state.can_access_protected());

        state.loading = true;
        assert!(state.can_access_protected());

        state.loading = false;
        state.is_authenticated = Some(true);
        assert!(state.can_access_protected());
    }

    #[test]
    fn test_debug_hides_token() {
        let state = AuthState::initial(Some("secret-token".to_string()));
        let debug = format!("{:?}", state);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("has_token: true"));
    }
}
