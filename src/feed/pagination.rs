/// Items shown per page
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `total_items`.
///
/// A `page_size` of zero means pagination is off: everything fits on one page.
pub fn total_pages(total_items: usize, page_size: usize) -> u32 {
    if page_size == 0 {
        return u32::from(total_items > 0);
    }
    total_items.div_ceil(page_size) as u32
}

/// The slice of `items` shown on the 1-based `page`
pub fn page_window<T>(items: &[T], page: u32, page_size: usize) -> &[T] {
    if page_size == 0 {
        return items;
    }
    let start = (page.max(1) as usize - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

pub fn has_previous(page: u32) -> bool {
    page > 1
}

pub fn has_next(page: u32, total_pages: u32) -> bool {
    page < total_pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(10, PAGE_SIZE), 1);
        assert_eq!(total_pages(11, PAGE_SIZE), 2);
        assert_eq!(total_pages(25, PAGE_SIZE), 3);
        assert_eq!(total_pages(20, PAGE_SIZE), 2);
    }

    #[test]
    fn test_total_pages_unpaginated() {
        assert_eq!(total_pages(0, 0), 0);
        assert_eq!(total_pages(25, 0), 1);
    }

    #[test]
    fn test_page_window() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(page_window(&items, 1, PAGE_SIZE), &items[0..10]);
        assert_eq!(page_window(&items, 2, PAGE_SIZE), &items[10..20]);
        assert_eq!(page_window(&items, 3, PAGE_SIZE), &items[20..25]);
        assert!(page_window(&items, 4, PAGE_SIZE).is_empty());
        assert_eq!(page_window(&items, 3, 0).len(), 25);
    }

    #[test]
    fn test_navigation_bounds() {
        assert!(!has_previous(1));
        assert!(has_previous(2));
        assert!(has_next(1, 3));
        assert!(!has_next(3, 3));
        // no results
        assert!(!has_next(1, 0));
    }
}
