//! The generic store.

use crate::{CallTicket, DispatchOrdering, Generations};
use std::fmt::Debug;
use tokio::sync::watch;
use tracing::debug;

/// An action a reducer understands.
pub trait StoreAction: Send + 'static {
    /// Stable name for logs. Action payloads may hold secrets and are not logged.
    fn name(&self) -> &'static str;
}

/// Pure state transition function for one store.
pub trait Reducer: Send + Sync + 'static {
    type State: Clone + Debug + Send + Sync + 'static;
    type Action: StoreAction;

    /// Store name used in logs.
    const NAME: &'static str;

    fn reduce(state: &Self::State, action: Self::Action) -> Self::State;
}

/// Reducer-managed state container.
pub struct Store<R: Reducer> {
    updates: watch::Sender<R::State>,
    generations: Generations,
    ordering: DispatchOrdering,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self::with_ordering(initial, DispatchOrdering::default())
    }

    pub fn with_ordering(initial: R::State, ordering: DispatchOrdering) -> Self {
        let (updates, _) = watch::channel(initial);
        Self {
            updates,
            generations: Generations::new(),
            ordering,
        }
    }

    /// Apply `action` and return the resulting snapshot.
    pub fn dispatch(&self, action: R::Action) -> R::State {
        let name = action.name();
        let mut next = None;
        self.updates.send_modify(|state| {
            *state = R::reduce(state, action);
            next = Some(state.clone());
        });
        debug!(store = R::NAME, action = name, "Dispatched");
        // send_modify always runs the closure.
        next.unwrap_or_else(|| self.snapshot())
    }

    /// Start an async call whose settlement replaces state of `kind`.
    pub fn begin_call(&self, kind: &'static str) -> CallTicket {
        self.generations.begin(kind)
    }

    /// Dispatch the settlement of the call behind `ticket`.
    ///
    /// Returns `None` when the ordering policy drops a superseded call.
    pub fn dispatch_settled(&self, ticket: &CallTicket, action: R::Action) -> Option<R::State> {
        if self.ordering == DispatchOrdering::LatestCallWins && !self.generations.is_latest(ticket)
        {
            debug!(
                store = R::NAME,
                action = action.name(),
                call = ticket.kind(),
                generation = ticket.generation(),
                "Dropped settlement of superseded call"
            );
            return None;
        }
        Some(self.dispatch(action))
    }

    /// Current state.
    pub fn snapshot(&self) -> R::State {
        self.updates.borrow().clone()
    }

    /// Receive every state produced by later dispatches.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.updates.subscribe()
    }
}
