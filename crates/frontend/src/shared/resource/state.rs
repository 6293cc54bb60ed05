//! Paginated list state of one resource kind.

use contracts::domain::common::HasId;
use contracts::shared::page::{self, PageQuery, PageResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Error,
}

/// Query cursor, current page of items and request status.
///
/// `total_pages`, `has_next` and `has_previous` are not stored: they are
/// derived from `total_items`, `page_size` and `page_index` on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub query: PageQuery,
    pub items: Vec<T>,
    pub total_items: usize,
    pub status: LoadStatus,
    pub error_message: Option<String>,
}

impl<T> ResourceState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: PageQuery::new(page_size),
            items: Vec::new(),
            total_items: 0,
            status: LoadStatus::Idle,
            error_message: None,
        }
    }

    pub fn total_pages(&self) -> usize {
        page::total_pages(self.total_items, self.query.page_size)
    }

    pub fn has_next(&self) -> bool {
        page::has_next(self.query.page_index, self.total_pages())
    }

    pub fn has_previous(&self) -> bool {
        page::has_previous(self.query.page_index)
    }

    pub fn page_index(&self) -> usize {
        self.query.page_index
    }

    pub fn page_size(&self) -> usize {
        self.query.page_size
    }

    pub fn name_filter(&self) -> &str {
        &self.query.name_filter
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Pagination controls are only worth rendering with more than one page.
    pub fn shows_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    /// 1-based `(first, last)` item numbers of the current page, for
    /// "Showing a–b of n". `None` when the list is empty.
    pub fn visible_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = self.query.page_index * self.query.page_size + 1;
        let last = (first + self.items.len() - 1).min(self.total_items.max(first));
        Some((first, last))
    }

    /// Sets the name filter and goes back to page 0. No I/O.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.query.set_filter(text);
    }

    /// Out-of-range indices are not rejected here; the server answers them
    /// with an empty page or an error.
    pub fn set_page(&mut self, index: usize) {
        self.query.set_page(index);
    }

    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
        self.error_message = None;
    }

    /// Replaces the whole item list with the page the server returned and
    /// clamps the page index to the last page.
    pub fn complete_load(&mut self, result: PageResult<T>) {
        self.accept_page(result);
        self.clamp_page();
    }

    /// Takes items and `total_items` only. The query cursor belongs to the
    /// client: the server's `page`/`pageSize` echo is ignored.
    pub fn accept_page(&mut self, result: PageResult<T>) {
        self.items = result.items;
        self.total_items = result.total_items;
        self.status = LoadStatus::Idle;
        self.error_message = None;
    }

    fn clamp_page(&mut self) {
        let pages = self.total_pages();
        self.query.clamp_to(pages);
    }

    /// Keeps the last good items on screen; only the status changes.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.status = LoadStatus::Error;
        self.error_message = Some(message.into());
    }
}

impl<T: HasId> ResourceState<T> {
    /// Drops `id` from the visible page after a confirmed delete.
    /// `total_items` is decremented by exactly one, floored at zero.
    pub fn remove_item_locally(&mut self, id: i64) {
        self.items.retain(|item| item.id() != id);
        self.total_items = self.total_items.saturating_sub(1);
        self.clamp_page();
    }
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(i64);

    impl HasId for Row {
        fn id(&self) -> i64 {
            self.0
        }
    }

    fn assert_consistent(state: &ResourceState<Row>) {
        let pages = page::total_pages(state.total_items, state.page_size());
        assert_eq!(state.total_pages(), pages);
        assert_eq!(state.has_next(), pages > 0 && state.page_index() < pages - 1);
        assert_eq!(state.has_previous(), state.page_index() > 0);
    }

    #[test]
    fn test_initial_state_is_idle_and_empty() {
        let state: ResourceState<Row> = ResourceState::new(10);
        assert_eq!(state.status, LoadStatus::Idle);
        assert!(state.items.is_empty());
        assert_eq!(state.total_pages(), 0);
        assert!(!state.has_next());
        assert!(!state.has_previous());
        assert!(state.visible_range().is_none());
    }

    #[test]
    fn test_derived_fields_after_every_mutation() {
        let mut state: ResourceState<Row> = ResourceState::new(10);
        state.set_page(3);
        assert_consistent(&state);
        state.begin_load();
        assert_consistent(&state);
        state.complete_load(PageResult::new((0..10).map(Row).collect(), 3, 10, 42));
        assert_consistent(&state);
        assert_eq!(state.total_pages(), 5);
        assert!(state.has_next());
        state.remove_item_locally(4);
        assert_consistent(&state);
        state.set_filter("x");
        assert_consistent(&state);
        state.fail_load("boom");
        assert_consistent(&state);
    }

    #[test]
    fn test_filter_resets_page() {
        let mut state: ResourceState<Row> = ResourceState::new(10);
        state.set_page(9);
        state.set_filter("bolt");
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.name_filter(), "bolt");
    }

    #[test]
    fn test_set_page_does_not_reject_out_of_range() {
        let mut state: ResourceState<Row> = ResourceState::new(10);
        state.set_page(50);
        assert_eq!(state.page_index(), 50);
    }

    #[test]
    fn test_complete_load_clamps_to_last_page() {
        let mut state: ResourceState<Row> = ResourceState::new(10);
        state.set_page(8);
        state.complete_load(PageResult::new(vec![], 8, 10, 25));
        assert_eq!(state.page_index(), 2);
        assert_eq!(state.status, LoadStatus::Idle);
    }

    #[test]
    fn test_complete_load_ignores_server_cursor() {
        let mut state: ResourceState<Row> = ResourceState::new(10);
        state.set_page(2);
        state.complete_load(PageResult::new((0..10).map(Row).collect(), 0, 50, 45));
        assert_eq!(state.page_index(), 2);
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.total_pages(), 5);
    }

    #[test]
    fn test_accept_page_does_not_clamp() {
        let mut state: ResourceState<Row> = ResourceState::new(10);
        state.set_page(7);
        state.accept_page(PageResult::new(vec![], 0, 10, 12));
        assert_eq!(state.page_index(), 7);
        assert_eq!(state.total_items, 12);
    }

    #[test]
    fn test_fail_load_sets_error_and_keeps_items() {
        let mut state: ResourceState<Row> = ResourceState::new(10);
        state.complete_load(PageResult::new(vec![Row(1)], 0, 10, 1));
        state.begin_load();
        assert!(state.is_loading());
        state.fail_load("connection refused");
        assert_eq!(state.status, LoadStatus::Error);
        assert_eq!(state.error_message.as_deref(), Some("connection refused"));
        assert_eq!(state.items, vec![Row(1)]);
        state.begin_load();
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_remove_item_locally() {
        let mut state: ResourceState<Row> = ResourceState::new(10);
        state.complete_load(PageResult::new(vec![Row(3), Row(7), Row(9)], 0, 10, 3));
        state.remove_item_locally(7);
        assert_eq!(state.items, vec![Row(3), Row(9)]);
        assert_eq!(state.total_items, 2);
    }

    #[test]
    fn test_remove_item_locally_floors_at_zero() {
        let mut state: ResourceState<Row> = ResourceState::new(10);
        state.remove_item_locally(7);
        assert_eq!(state.total_items, 0);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_remove_last_item_of_last_page_steps_back() {
        let mut state: ResourceState<Row> = ResourceState::new(10);
        state.set_page(1);
        state.complete_load(PageResult::new(vec![Row(11)], 1, 10, 11));
        state.remove_item_locally(11);
        assert_eq!(state.page_index(), 0);
        assert!(!state.shows_pagination());
    }

    #[test]
    fn test_visible_range() {
        let mut state: ResourceState<Row> = ResourceState::new(10);
        state.set_page(2);
        state.complete_load(PageResult::new((0..5).map(Row).collect(), 2, 10, 25));
        assert_eq!(state.visible_range(), Some((21, 25)));
        assert!(state.shows_pagination());
    }
}
