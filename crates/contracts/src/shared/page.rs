//! Page-number pagination shared by every list endpoint.
//!
//! `total_pages`, `has_next` and `has_previous` are never stored
//! independently on the client: they are recomputed from
//! `total_items`, `page_size` and the page index.

use serde::{Deserialize, Serialize};

/// `ceil(total_items / page_size)`. A zero page size means "everything on
/// one page".
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return usize::from(total_items > 0);
    }
    total_items.div_ceil(page_size)
}

pub fn has_next(page: usize, total_pages: usize) -> bool {
    page + 1 < total_pages
}

pub fn has_previous(page: usize) -> bool {
    page > 0
}

/// Filter and page cursor of one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub name_filter: String,
    pub page_index: usize,
    pub page_size: usize,
}

impl PageQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            name_filter: String::new(),
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Changing the filter always goes back to the first page.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.name_filter = text.into();
        self.page_index = 0;
    }

    pub fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }

    /// Pulls the page index back into `[0, total_pages - 1]`.
    /// Returns `true` if the index moved.
    pub fn clamp_to(&mut self, total_pages: usize) -> bool {
        if total_pages > 0 && self.page_index > total_pages - 1 {
            self.page_index = total_pages - 1;
            return true;
        }
        false
    }

    pub fn to_list_query(&self) -> ListQuery {
        ListQuery::new(&self.name_filter, self.page_index, self.page_size)
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(10)
    }
}

/// `data` payload of every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_previous: bool,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, page: usize, page_size: usize, total_items: usize) -> Self {
        let pages = total_pages(total_items, page_size);
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages: pages,
            has_next: has_next(page, pages),
            has_previous: has_previous(page),
        }
    }

    /// Recomputes the derived fields from `total_items`, `page_size` and `page`,
    /// dropping whatever the server reported for them.
    pub fn normalized(self) -> Self {
        Self::new(self.items, self.page, self.page_size, self.total_items)
    }
}

/// Query-string shape of a list request: `name`, `page`, `pageSize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    /// A blank filter is sent as "no filter": `name` is omitted entirely.
    pub fn new(name: &str, page: usize, page_size: usize) -> Self {
        let name = if name.trim().is_empty() {
            None
        } else {
            Some(name.to_string())
        };
        Self {
            name,
            page,
            page_size,
        }
    }

    /// `pageSize=0` asks the server for every row.
    pub fn all() -> Self {
        Self {
            name: None,
            page: 0,
            page_size: 0,
        }
    }

    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_else(|_| {
            format!("page={}&pageSize={}", self.page, self.page_size)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }

    #[test]
    fn test_zero_page_size_is_single_page() {
        assert_eq!(total_pages(0, 0), 0);
        assert_eq!(total_pages(37, 0), 1);
    }

    #[test]
    fn test_flags_follow_page_position() {
        for total_items in 0..45usize {
            for page in 0..6usize {
                let pages = total_pages(total_items, 10);
                let r: PageResult<u8> = PageResult::new(vec![], page, 10, total_items);
                assert_eq!(r.total_pages, pages);
                assert_eq!(r.has_next, pages > 0 && page < pages - 1);
                assert_eq!(r.has_previous, page > 0);
            }
        }
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut q = PageQuery::new(10);
        q.set_page(7);
        q.set_filter("bolt");
        assert_eq!(q.page_index, 0);
        assert_eq!(q.name_filter, "bolt");
    }

    #[test]
    fn test_page_size_is_floored_at_one() {
        assert_eq!(PageQuery::new(0).page_size, 1);
    }

    #[test]
    fn test_clamp_only_when_pages_exist() {
        let mut q = PageQuery::new(10);
        q.set_page(5);
        assert!(!q.clamp_to(0));
        assert_eq!(q.page_index, 5);
        assert!(q.clamp_to(3));
        assert_eq!(q.page_index, 2);
        assert!(!q.clamp_to(3));
    }

    #[test]
    fn test_normalized_ignores_server_flags() {
        let r = PageResult {
            items: vec![1, 2],
            page: 0,
            page_size: 10,
            total_items: 2,
            total_pages: 9,
            has_next: true,
            has_previous: true,
        }
        .normalized();
        assert_eq!(r.total_pages, 1);
        assert!(!r.has_next);
        assert!(!r.has_previous);
    }

    #[test]
    fn test_query_string_with_filter() {
        let q = ListQuery::new("bolt", 0, 10);
        assert_eq!(q.to_query_string(), "name=bolt&page=0&pageSize=10");
    }

    #[test]
    fn test_empty_filter_omits_name() {
        assert_eq!(ListQuery::new("", 2, 10).to_query_string(), "page=2&pageSize=10");
        assert_eq!(ListQuery::new("   ", 0, 10).to_query_string(), "page=0&pageSize=10");
    }

    #[test]
    fn test_filter_is_percent_encoded() {
        let qs = ListQuery::new("hex bolt", 0, 10).to_query_string();
        assert!(qs.starts_with("name=hex"));
        assert!(!qs.contains(' '));
    }

    #[test]
    fn test_all_sends_zero_page_size() {
        assert_eq!(ListQuery::all().to_query_string(), "page=0&pageSize=0");
    }

    #[test]
    fn test_page_result_decodes_wire_shape() {
        let json = r#"{"items":[{"id":1}],"page":0,"pageSize":10,"totalItems":1,"totalPages":1,"hasNext":false,"hasPrevious":false}"#;
        let r: PageResult<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(r.items.len(), 1);
        assert_eq!(r.page_size, 10);
        assert_eq!(r.total_items, 1);
    }
}
