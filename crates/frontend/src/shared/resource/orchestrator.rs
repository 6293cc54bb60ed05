//! Debounced, last-request-wins fetching for a [`ResourceState`].
//!
//! Everything here is free of I/O and timers. The Leptos driver in
//! `controller.rs` owns the real timer and the network call and feeds their
//! outcomes back through [`ResourceStore`].
//!
//! Flow for one resource:
//! 1. an intent (`set_filter`, `set_page`, `refresh`) returns a [`DebounceTicket`]
//!    and the driver (re)arms the timer with it;
//! 2. when the timer fires, [`ResourceStore::on_timer_elapsed`] issues a request
//!    only if the ticket is still the newest one;
//! 3. the response is handed to [`ResourceStore::settle`], which applies it only
//!    if its [`RequestSeq`] is the latest issued.

use super::state::ResourceState;
use contracts::domain::common::HasId;
use contracts::shared::page::{ListQuery, PageResult};

/// Fixed debounce window between the last query change and the fetch.
pub const DEBOUNCE_MS: u32 = 400;

/// Cancelable pending timer.
pub trait TimerHandle {
    fn cancel(self);
}

/// The single pending debounce timer of a resource.
///
/// Resetting cancels the previous timer before it can fire. A handle whose
/// timer already fired stays here until the next reset; cancelling it then
/// is a no-op.
pub struct DebounceTimer<H: TimerHandle> {
    pending: Option<H>,
}

impl<H: TimerHandle> DebounceTimer<H> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn reset(&mut self, handle: H) {
        self.clear();
        self.pending = Some(handle);
    }

    pub fn clear(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H: TimerHandle> Default for DebounceTimer<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies one arming of the debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

/// Monotonic number of an issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Debounce generation and request sequence of one resource.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FetchOrchestrator {
    debounce_generation: u64,
    issued_generation: u64,
    latest_issued: u64,
}

impl FetchOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersedes any earlier ticket.
    pub fn schedule(&mut self) -> DebounceTicket {
        self.debounce_generation += 1;
        DebounceTicket(self.debounce_generation)
    }

    /// Issues the next request if `ticket` is still the newest.
    pub fn elapse(&mut self, ticket: DebounceTicket) -> Option<RequestSeq> {
        if ticket.0 != self.debounce_generation {
            return None;
        }
        self.issued_generation = ticket.0;
        self.latest_issued += 1;
        Some(RequestSeq(self.latest_issued))
    }

    /// A query change was scheduled after the latest request was issued.
    pub fn has_pending_change(&self) -> bool {
        self.debounce_generation != self.issued_generation
    }

    pub fn is_latest(&self, seq: RequestSeq) -> bool {
        seq.0 == self.latest_issued
    }

    pub fn latest_issued(&self) -> Option<RequestSeq> {
        (self.latest_issued > 0).then_some(RequestSeq(self.latest_issued))
    }

    /// Nothing was ever scheduled for this resource.
    pub fn is_pristine(&self) -> bool {
        self.debounce_generation == 0
    }
}

/// A request the driver must send now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedRequest {
    pub seq: RequestSeq,
    pub query: ListQuery,
}

/// Resource state plus its fetch bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceStore<T> {
    pub state: ResourceState<T>,
    orchestrator: FetchOrchestrator,
}

impl<T> ResourceStore<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            state: ResourceState::new(page_size),
            orchestrator: FetchOrchestrator::new(),
        }
    }

    pub fn set_filter(&mut self, text: impl Into<String>) -> DebounceTicket {
        self.state.set_filter(text);
        self.orchestrator.schedule()
    }

    pub fn set_page(&mut self, index: usize) -> DebounceTicket {
        self.state.set_page(index);
        self.orchestrator.schedule()
    }

    /// Re-runs the current query.
    pub fn refresh(&mut self) -> DebounceTicket {
        self.orchestrator.schedule()
    }

    pub fn is_pristine(&self) -> bool {
        self.orchestrator.is_pristine()
    }

    /// Timer fired: move to `Loading` and hand back the request to send,
    /// unless a newer change superseded this ticket.
    pub fn on_timer_elapsed(&mut self, ticket: DebounceTicket) -> Option<IssuedRequest> {
        let seq = self.orchestrator.elapse(ticket)?;
        self.state.begin_load();
        Some(IssuedRequest {
            seq,
            query: self.state.query.to_list_query(),
        })
    }

    /// Applies a response. Responses of anything but the latest issued
    /// request are dropped, successes and failures alike. While a newer
    /// query change waits for its timer the cursor is left as the user set it.
    /// Returns whether the state changed.
    pub fn settle(&mut self, seq: RequestSeq, outcome: Result<PageResult<T>, String>) -> bool {
        if !self.orchestrator.is_latest(seq) {
            log::debug!(
                "discarding stale response #{} (latest #{:?})",
                seq.value(),
                self.orchestrator.latest_issued().map(RequestSeq::value)
            );
            return false;
        }
        match outcome {
            Ok(result) if self.orchestrator.has_pending_change() => self.state.accept_page(result),
            Ok(result) => self.state.complete_load(result),
            Err(message) => self.state.fail_load(message),
        }
        true
    }
}

impl<T: HasId> ResourceStore<T> {
    pub fn remove_item_locally(&mut self, id: i64) {
        self.state.remove_item_locally(id);
    }

    /// Outcome of `DELETE {path}/{id}`. Only a confirmed success touches
    /// the item list; a failure is reported through the error status.
    pub fn settle_delete(&mut self, id: i64, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => self.remove_item_locally(id),
            Err(message) => self.state.fail_load(message),
        }
    }
}
