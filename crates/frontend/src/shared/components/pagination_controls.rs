use crate::shared::icons::icon;
use leptos::prelude::*;

/// Numbered buttons shown at most.
const MAX_PAGE_BUTTONS: usize = 7;

/// Window of page indexes around `current`, at most `max` wide.
pub fn page_window(current: usize, total: usize, max: usize) -> Vec<usize> {
    if total == 0 || max == 0 {
        return Vec::new();
    }
    let width = max.min(total);
    let start = current
        .saturating_sub(width / 2)
        .min(total - width);
    (start..start + width).collect()
}

/// PaginationControls component - range label, prev/next and numbered pages.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// 1-based first/last item on the page
    #[prop(into)]
    visible_range: Signal<Option<(usize, usize)>>,

    #[prop(into)]
    has_previous: Signal<bool>,

    #[prop(into)]
    has_next: Signal<bool>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || match visible_range.get() {
                    Some((first, last)) => format!("Showing {}–{} of {}", first, last, total_count.get()),
                    None => format!("Showing 0 of {}", total_count.get()),
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_previous.get_untracked() {
                        on_page_change.run(current_page.get_untracked() - 1);
                    }
                }
                disabled=move || !has_previous.get()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_window(current, total_pages.get(), MAX_PAGE_BUTTONS)
                    .into_iter()
                    .map(|index| {
                        view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=index == current
                                on:click=move |_| on_page_change.run(index)
                            >
                                {(index + 1).to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_next.get_untracked() {
                        on_page_change.run(current_page.get_untracked() + 1);
                    }
                }
                disabled=move || !has_next.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window_small_total() {
        assert_eq!(page_window(0, 3, 7), vec![0, 1, 2]);
        assert!(page_window(0, 0, 7).is_empty());
    }

    #[test]
    fn test_page_window_centers_on_current() {
        assert_eq!(page_window(10, 20, 5), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_page_window_sticks_to_edges() {
        assert_eq!(page_window(0, 20, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(page_window(19, 20, 5), vec![15, 16, 17, 18, 19]);
    }
}
