//! Paginated resource lists.
//!
//! - `state` - [`ResourceState`]: query, current page, status
//! - `orchestrator` - debounce and last-request-wins bookkeeping (no I/O)
//! - `controller` - Leptos driver wiring timers and the gateway

pub mod controller;
pub mod orchestrator;
pub mod state;

pub use controller::{ResourceController, PAGE_SIZE};
pub use orchestrator::{ResourceStore, DEBOUNCE_MS};
pub use state::{LoadStatus, ResourceState};
