//! Transient user-facing alerts.
//!
//! Store errors reach the user through here: [`surface_auth_error`] and
//! [`surface_contact_error`] turn a store's error field into a
//! [`AlertKind::Danger`] alert that disappears after the configured timeout.

mod alert;
mod store;

pub use alert::{Alert, AlertAction, AlertKind, AlertReducer};
pub use store::{surface_auth_error, surface_contact_error, AlertStore};
