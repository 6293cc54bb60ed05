//! List chrome bound to a [`ResourceController`]: search box, status
//! rows and pagination.

use super::pagination_controls::PaginationControls;
use super::search_input::SearchInput;
use crate::shared::resource::{LoadStatus, ResourceController};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

#[component]
pub fn ResourceSearch<T>(resource: ResourceController<T>) -> impl IntoView
where
    T: Clone + Send + Sync + DeserializeOwned + 'static,
{
    view! {
        <SearchInput
            value=Signal::derive(move || resource.with_state(|s| s.name_filter().to_string()))
            on_change=Callback::new(move |text: String| resource.set_filter(text))
        />
    }
}

/// Error alert of the last failed load.
#[component]
pub fn ResourceError<T>(resource: ResourceController<T>) -> impl IntoView
where
    T: Clone + Send + Sync + DeserializeOwned + 'static,
{
    move || {
        resource
            .with_state(|s| match s.status {
                LoadStatus::Error => s.error_message.clone(),
                _ => None,
            })
            .map(|err| view! { <div class="alert alert--error">{err}</div> })
    }
}

/// "Loading..." / "Nothing found" row, shown only while the page is empty.
#[component]
pub fn ResourceStatusRow<T>(resource: ResourceController<T>, colspan: usize) -> impl IntoView
where
    T: Clone + Send + Sync + DeserializeOwned + 'static,
{
    move || {
        let text = resource.with_state(|s| {
            if !s.items.is_empty() {
                None
            } else if s.is_loading() {
                Some("Loading...")
            } else if s.status == LoadStatus::Idle {
                Some("Nothing found")
            } else {
                None
            }
        });
        text.map(|text| {
            view! {
                <tr class="table__status-row">
                    <td colspan=colspan.to_string()>{text}</td>
                </tr>
            }
        })
    }
}

/// Pagination, rendered only with more than one page.
#[component]
pub fn ResourcePagination<T>(resource: ResourceController<T>) -> impl IntoView
where
    T: Clone + Send + Sync + DeserializeOwned + 'static,
{
    view! {
        <Show when=move || resource.with_state(|s| s.shows_pagination())>
            <PaginationControls
                current_page=Signal::derive(move || resource.with_state(|s| s.page_index()))
                total_pages=Signal::derive(move || resource.with_state(|s| s.total_pages()))
                total_count=Signal::derive(move || resource.with_state(|s| s.total_items))
                visible_range=Signal::derive(move || resource.with_state(|s| s.visible_range()))
                has_previous=Signal::derive(move || resource.with_state(|s| s.has_previous()))
                has_next=Signal::derive(move || resource.with_state(|s| s.has_next()))
                on_page_change=Callback::new(move |index: usize| resource.set_page(index))
            />
        </Show>
    }
}
