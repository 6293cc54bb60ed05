//! Leptos driver of a [`ResourceStore`]: real debounce timer, real requests.

use super::orchestrator::{DebounceTicket, DebounceTimer, ResourceStore, TimerHandle, DEBOUNCE_MS};
use super::state::ResourceState;
use crate::shared::gateway::{item_path, RemoteGateway};
use crate::shared::notifications::NotificationService;
use contracts::domain::common::HasId;
use contracts::shared::page::{ListQuery, PageResult};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

impl TimerHandle for Timeout {
    fn cancel(self) {
        // dropping a gloo timeout clears it
        drop(self);
    }
}

/// Page size of every resource list.
pub const PAGE_SIZE: usize = 10;

/// One paginated resource (products, materials, production report).
pub struct ResourceController<T: 'static> {
    store: RwSignal<ResourceStore<T>>,
    timer: StoredValue<DebounceTimer<Timeout>, LocalStorage>,
    gateway: StoredValue<RemoteGateway>,
    notifications: NotificationService,
    path: &'static str,
    label: &'static str,
}

impl<T: 'static> Clone for ResourceController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ResourceController<T> {}

impl<T> ResourceController<T>
where
    T: Clone + Send + Sync + DeserializeOwned + 'static,
{
    /// `path` is the list endpoint (`/products`), `label` names the
    /// resource in messages ("products").
    pub fn new(
        path: &'static str,
        label: &'static str,
        gateway: RemoteGateway,
        notifications: NotificationService,
    ) -> Self {
        Self {
            store: RwSignal::new(ResourceStore::new(PAGE_SIZE)),
            timer: StoredValue::new_local(DebounceTimer::new()),
            gateway: StoredValue::new(gateway),
            notifications,
            path,
            label,
        }
    }

    /// Tracked read access for views.
    pub fn with_state<R>(&self, f: impl FnOnce(&ResourceState<T>) -> R) -> R {
        self.store.with(|s| f(&s.state))
    }

    pub fn items(&self) -> Vec<T> {
        self.with_state(|s| s.items.clone())
    }

    pub fn set_filter(&self, text: String) {
        if self.store.with_untracked(|s| s.state.name_filter() == text) {
            return;
        }
        if let Some(ticket) = self.store.try_update(|s| s.set_filter(text)) {
            self.arm(ticket);
        }
    }

    pub fn set_page(&self, index: usize) {
        if let Some(ticket) = self.store.try_update(|s| s.set_page(index)) {
            self.arm(ticket);
        }
    }

    pub fn refresh(&self) {
        if let Some(ticket) = self.store.try_update(|s| s.refresh()) {
            self.arm(ticket);
        }
    }

    /// Schedules the first load of a list nobody has asked for yet.
    pub fn ensure_loaded(&self) {
        if self.store.with_untracked(|s| s.is_pristine()) {
            self.refresh();
        }
    }

    fn arm(&self, ticket: DebounceTicket) {
        let this = *self;
        let handle = Timeout::new(DEBOUNCE_MS, move || this.fire(ticket));
        self.timer.update_value(|timer| timer.reset(handle));
    }

    fn fire(&self, ticket: DebounceTicket) {
        let Some(issued) = self.store.try_update(|s| s.on_timer_elapsed(ticket)).flatten() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let outcome = this.fetch(&issued.query).await;
            let failure = outcome.as_ref().err().cloned();
            let applied = this
                .store
                .try_update(|s| s.settle(issued.seq, outcome))
                .unwrap_or(false);
            if let (true, Some(message)) = (applied, failure) {
                this.notifications.error(message);
            }
        });
    }

    async fn fetch(&self, query: &ListQuery) -> Result<PageResult<T>, String> {
        let gateway = self.gateway.get_value();
        match gateway.list::<T>(self.path, query).await {
            Ok(envelope) => envelope
                .into_result()
                .map(PageResult::normalized)
                .map_err(|e| format!("Failed to fetch {}: {}", self.label, e.summary())),
            Err(e) => Err(format!("Failed to fetch {}: {}", self.label, e)),
        }
    }
}

impl<T> ResourceController<T>
where
    T: Clone + Send + Sync + DeserializeOwned + HasId + 'static,
{
    /// `DELETE {path}/{id}`. The row disappears only after the server
    /// confirmed; then an authoritative refetch is scheduled.
    pub fn delete_item(&self, id: i64) {
        let this = *self;
        spawn_local(async move {
            let gateway = this.gateway.get_value();
            let outcome = match gateway.remove(&item_path(this.path, id)).await {
                Ok(envelope) if envelope.is_success() => Ok(envelope.message),
                Ok(envelope) => Err(envelope.error_summary()),
                Err(e) => Err(e.to_string()),
            };
            match outcome {
                Ok(message) => {
                    this.store.update(|s| s.settle_delete(id, Ok(())));
                    this.notifications.success(if message.trim().is_empty() {
                        "Successfully removed.".to_string()
                    } else {
                        message
                    });
                    this.refresh();
                }
                Err(message) => {
                    this.store.update(|s| s.settle_delete(id, Err(message.clone())));
                    this.notifications.error(message);
                }
            }
        });
    }
}
