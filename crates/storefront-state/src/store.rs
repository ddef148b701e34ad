//! Shared catalog store with request generations.
//!
//! Every mutating operation takes a [`Ticket`] before it fetches. Only the
//! ticket of the most recently issued operation may commit, so responses
//! that arrive after a newer request was issued are dropped.

use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::state::{CatalogEvent, CatalogState};

/// Generation handle for one in-flight operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was applied.
    Applied,
    /// The fetch failed; the recovery state (if any) was applied.
    Failed,
    /// A newer operation was issued first; the response was dropped.
    Stale,
    /// Preconditions did not hold; nothing was requested.
    Skipped,
}

/// Releases the loading flag of an operation that is dropped before it
/// commits or finishes.
///
/// Held for the lifetime of an operation's future. Dropping it after a
/// commit is a no-op because it only touches the flag while its ticket is
/// current.
#[must_use = "the loading flag is released when the guard is dropped"]
#[derive(Debug)]
pub struct Pending<'a> {
    store: &'a CatalogStore,
    ticket: Ticket,
}

impl Pending<'_> {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        self.store.finish(self.ticket);
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: CatalogState,
    generation: u64,
    loading: bool,
}

/// Catalog state shared by the pagination controller and search resolver.
#[derive(Debug, Default)]
pub struct CatalogStore {
    inner: Mutex<Inner>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // State is replaced whole by the reducer, so a poisoned guard is still consistent.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Issue a ticket for a new operation, superseding any in flight.
    pub fn begin(&self) -> Ticket {
        let mut inner = self.lock();
        Self::next_ticket(&mut inner)
    }

    /// Issue a ticket only if `allowed` holds for the current state and
    /// loading flag. The check and issue happen under one lock.
    pub fn begin_if(
        &self,
        allowed: impl FnOnce(&CatalogState, bool) -> bool,
    ) -> Option<(Ticket, CatalogState)> {
        let mut inner = self.lock();
        if !allowed(&inner.state, inner.loading) {
            return None;
        }
        let ticket = Self::next_ticket(&mut inner);
        Some((ticket, inner.state.clone()))
    }

    /// Supersede everything in flight and apply `event` immediately.
    pub fn replace(&self, event: CatalogEvent) -> Ticket {
        let mut inner = self.lock();
        let ticket = Self::next_ticket(&mut inner);
        inner.state.apply(event);
        inner.loading = false;
        ticket
    }

    fn next_ticket(inner: &mut Inner) -> Ticket {
        inner.generation += 1;
        inner.loading = true;
        Ticket {
            generation: inner.generation,
        }
    }

    /// Guard `ticket` so an abandoned operation does not leave the store
    /// loading.
    pub fn pending(&self, ticket: Ticket) -> Pending<'_> {
        Pending {
            store: self,
            ticket,
        }
    }

    /// Whether `ticket` still belongs to the latest operation.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.lock().generation == ticket.generation
    }

    /// Apply `event` if `ticket` is current. Returns false for stale tickets.
    pub fn commit(&self, ticket: Ticket, event: CatalogEvent) -> bool {
        let mut inner = self.lock();
        if inner.generation != ticket.generation {
            debug!(
                generation = ticket.generation,
                current = inner.generation,
                "dropping stale response"
            );
            return false;
        }
        inner.state.apply(event);
        inner.loading = false;
        true
    }

    /// Complete an operation without changing state. Returns false for stale
    /// tickets.
    pub fn finish(&self, ticket: Ticket) -> bool {
        let mut inner = self.lock();
        if inner.generation != ticket.generation {
            return false;
        }
        inner.loading = false;
        true
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> CatalogState {
        self.lock().state.clone()
    }

    /// Whether the latest operation is still in flight.
    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }
}
