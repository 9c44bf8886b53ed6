//! Reducer-driven state containers.
//!
//! A [`Store`] owns one state value. The only way to change it is
//! [`Store::dispatch`], which applies the store's pure [`Reducer`] to the
//! current state under the channel's write lock, so every dispatch is
//! atomic with respect to every other. Subscribers observe snapshots
//! through a `tokio::sync::watch` channel.
//!
//! Async actions that replace state wholesale take a [`CallTicket`] when
//! they start; under [`DispatchOrdering::LatestCallWins`] a settlement from
//! a superseded call is dropped instead of dispatched.

mod generation;
mod store;

pub use generation::{CallTicket, Generations};
pub use keeper_config::DispatchOrdering;
pub use store::{Reducer, Store, StoreAction};
