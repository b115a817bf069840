//! Fixed-size pages over a sorted result set.

use serde::Serialize;

/// One page of results plus the numbers the pager widget needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was requested
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }

    /// Transform the items, keeping the paging numbers
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// `ceil(total_items / page_size)`; zero when the page size is zero.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    }
}

/// Slice out page `page` (1-based) of `page_size` items.
///
/// A page past the end, page 0 or a zero page size gives an empty page.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);

    let items = if page == 0 || page_size == 0 {
        Vec::new()
    } else {
        let start = (page - 1).saturating_mul(page_size);
        items.into_iter().skip(start).take(page_size).collect()
    };

    Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_slices() {
        let items: Vec<usize> = (0..53).collect();

        let first = paginate(items.clone(), 1, 25);
        assert_eq!(first.items.len(), 25);
        assert_eq!(first.items[0], 0);
        assert_eq!(first.total_pages, 3);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let third = paginate(items.clone(), 3, 25);
        assert_eq!(third.items, vec![50, 51, 52]);
        assert!(!third.has_next());

        let fourth = paginate(items, 4, 25);
        assert!(fourth.items.is_empty());
        assert_eq!(fourth.total_items, 53);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 25), 0);
        assert_eq!(total_pages(25, 25), 1);
        assert_eq!(total_pages(26, 25), 2);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_degenerate_requests() {
        assert!(paginate(vec![1, 2, 3], 0, 2).items.is_empty());
        assert!(paginate(vec![1, 2, 3], 1, 0).items.is_empty());
        assert!(paginate(vec![1, 2, 3], usize::MAX, 2).items.is_empty());
    }

    #[test]
    fn test_map_keeps_counts() {
        let page = paginate(vec![1, 2, 3], 2, 2).map(|n| n * 10);
        assert_eq!(page.items, vec![30]);
        assert_eq!(page.total_pages, 2);
    }
}
