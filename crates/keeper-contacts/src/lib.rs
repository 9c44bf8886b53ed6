//! Contact collection store for the Contact Keeper client.

mod action;
mod contact;
pub mod filter;
mod reducer;
mod state;
mod store;

pub use action::ContactAction;
pub use contact::{Contact, ContactDraft, ContactKind};
pub use reducer::ContactReducer;
pub use state::ContactState;
pub use store::ContactStore;
