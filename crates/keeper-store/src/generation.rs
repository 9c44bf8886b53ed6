//! Call-generation bookkeeping for async actions.

use parking_lot::Mutex;
use std::collections::HashMap;

/// Issued when an async action starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallTicket {
    kind: &'static str,
    generation: u64,
}

impl CallTicket {
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Latest issued generation per call kind.
#[derive(Debug, Default)]
pub struct Generations {
    inner: Mutex<GenerationsInner>,
}

#[derive(Debug, Default)]
struct GenerationsInner {
    next: u64,
    latest: HashMap<&'static str, u64>,
}

impl Generations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a call of `kind`, superseding every earlier call of that kind.
    pub fn begin(&self, kind: &'static str) -> CallTicket {
        let mut inner = self.inner.lock();
        inner.next += 1;
        let generation = inner.next;
        inner.latest.insert(kind, generation);
        CallTicket { kind, generation }
    }

    /// Whether no call of the same kind started after `ticket`.
    pub fn is_latest(&self, ticket: &CallTicket) -> bool {
        self.inner.lock().latest.get(ticket.kind) == Some(&ticket.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_call_supersedes_older() {
        let generations = Generations::new();
        let first = generations.begin("load");
        let second = generations.begin("load");

        assert!(!generations.is_latest(&first));
        assert!(generations.is_latest(&second));
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn test_kinds_are_independent() {
        let generations = Generations::new();
        let load = generations.begin("load");
        let other = generations.begin("other");

        assert!(generations.is_latest(&load));
        assert!(generations.is_latest(&other));
        assert_eq!(load.kind(), "load");
    }
}
