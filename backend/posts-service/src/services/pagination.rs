//! Page number normalization and page windows over the post feed.
//!
//! The requested page comes straight from the query string. It never fails:
//! anything that is not a positive integer becomes page 1, and integers past
//! the end are clamped to the last page.

use std::num::IntErrorKind;

/// Fixed number of posts per page
pub const POSTS_PER_PAGE: u64 = 10;

/// Resolved slice of the feed to serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Effective 1-based page number
    pub number: u64,
    pub num_pages: u64,
    pub offset: i64,
    pub limit: i64,
    pub has_next: bool,
}

/// Splits `total_items` into pages of `per_page`
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    total_items: u64,
    per_page: u64,
}

impl Paginator {
    pub fn new(total_items: i64, per_page: u64) -> Self {
        Self {
            total_items: total_items.max(0) as u64,
            per_page: per_page.max(1),
        }
    }

    /// Number of pages; an empty feed still has one (empty) page.
    pub fn num_pages(&self) -> u64 {
        self.total_items.div_ceil(self.per_page).max(1)
    }

    /// Normalize an untrusted page parameter into a valid window.
    pub fn resolve(&self, raw: Option<&str>) -> PageWindow {
        let num_pages = self.num_pages();
        let number = match raw.map(str::trim).map(str::parse::<u64>) {
            Some(Ok(n)) if n >= 1 => n.min(num_pages),
            Some(Err(e)) if *e.kind() == IntErrorKind::PosOverflow => num_pages,
            _ => 1,
        };

        PageWindow {
            number,
            num_pages,
            offset: ((number - 1) * self.per_page) as i64,
            limit: self.per_page as i64,
            has_next: number < num_pages,
        }
    }

    /// Number of items that land on `window`
    pub fn items_on(&self, window: &PageWindow) -> u64 {
        let start = (window.number - 1) * self.per_page;
        self.total_items.saturating_sub(start).min(self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(total: i64) -> Paginator {
        Paginator::new(total, POSTS_PER_PAGE)
    }

    #[test]
    fn num_pages_rounds_up() {
        assert_eq!(feed(0).num_pages(), 1);
        assert_eq!(feed(1).num_pages(), 1);
        assert_eq!(feed(10).num_pages(), 1);
        assert_eq!(feed(11).num_pages(), 2);
        assert_eq!(feed(95).num_pages(), 10);
    }

    #[test]
    fn missing_page_defaults_to_first() {
        let window = feed(25).resolve(None);
        assert_eq!(window.number, 1);
        assert_eq!(window.offset, 0);
        assert_eq!(window.limit, 10);
        assert!(window.has_next);
    }

    #[test]
    fn garbage_page_defaults_to_first() {
        let paginator = feed(25);
        for raw in ["abc", "", "1.5", "2.0", "0", "-3", "NaN", "1e3"] {
            assert_eq!(paginator.resolve(Some(raw)).number, 1, "raw={raw:?}");
        }
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let paginator = feed(25);
        let window = paginator.resolve(Some("99999"));
        assert_eq!(window.number, 3);
        assert_eq!(window.offset, 20);
        assert!(!window.has_next);
        assert_eq!(paginator.items_on(&window), 5);
    }

    #[test]
    fn overflowing_integer_clamps_to_last() {
        let window = feed(25).resolve(Some("99999999999999999999999999"));
        assert_eq!(window.number, 3);
    }

    #[test]
    fn in_range_page_is_used_as_is() {
        let window = feed(25).resolve(Some(" 2 "));
        assert_eq!(window.number, 2);
        assert_eq!(window.offset, 10);
        assert!(window.has_next);
    }

    #[test]
    fn empty_feed_serves_single_empty_page() {
        let paginator = feed(0);
        let window = paginator.resolve(Some("4"));
        assert_eq!(window.number, 1);
        assert_eq!(window.num_pages, 1);
        assert!(!window.has_next);
        assert_eq!(paginator.items_on(&window), 0);
    }

    #[test]
    fn page_sizes_follow_total() {
        for total in [1i64, 9, 10, 11, 20, 37] {
            let paginator = feed(total);
            let num_pages = paginator.num_pages();
            for page in 1..=num_pages {
                let window = paginator.resolve(Some(page.to_string().as_str()));
                let expected = if page < num_pages {
                    10
                } else {
                    match total as u64 % 10 {
                        0 => 10,
                        rem => rem,
                    }
                };
                assert_eq!(paginator.items_on(&window), expected, "total={total} page={page}");
            }
        }
    }
}
