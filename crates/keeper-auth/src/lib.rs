//! Authentication session store for the Contact Keeper client.
//!
//! This crate provides:
//! - [`AuthState`], the session snapshot consumers render from
//! - [`AuthAction`] and the pure [`AuthReducer`]
//! - [`AuthStore`], the async actions (`load_user`, `login`, `register`, ...)
//! - [`TokenPropagator`], which keeps the transport header and the persisted
//!   token in step with the session

mod action;
mod propagator;
mod reducer;
mod state;
mod store;
mod user;

pub use action::AuthAction;
pub use propagator::TokenPropagator;
pub use reducer::AuthReducer;
pub use state::AuthState;
pub use store::AuthStore;
pub use user::{Credentials, RegistrationProfile, TokenResponse, User};
