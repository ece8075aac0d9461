use serde::Serialize;

/// One page of a collection, plus the navigation facts the UI needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed page number as requested.
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Slice `items` into 1-indexed pages of `page_size`.
///
/// `total_pages` is `ceil(len / page_size)` and 0 for an empty collection.
/// Requesting a page beyond range (or page 0, or a zero page size) returns an
/// empty slice, not an error.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };

    let in_range = page >= 1 && page <= total_pages;
    let page_items = if in_range {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total_items);
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items: page_items,
        page,
        page_size,
        total_items,
        total_pages,
        has_next: in_range && page < total_pages,
        has_prev: in_range && page > 1,
    }
}
