//! Fixed-size pagination over an already filtered and sorted sequence.

/// Page size used when neither configuration nor caller picks one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Number of pages needed for `total_items`, never less than one (pure).
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_items.div_ceil(page_size).max(1)
}

/// Returns page `page` (1-based) of `items` (pure).
///
/// Out-of-range pages, page 0 and a zero page size yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Clamps a page number into `[1, total_pages]` (pure).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Current page, page size and item count for one list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
    total_items: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    /// Start on page 1 of an empty collection. A zero size falls back to the default.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
            total_items: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Record a new item count and pull the current page back into range.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = clamp_page(self.current_page, self.total_pages());
    }

    /// Change the page size and return to page 1. Zero is ignored.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            log::warn!("Ignoring page size of 0");
            return;
        }
        self.page_size = page_size;
        self.current_page = 1;
    }

    /// Jump to `page`, clamped into range.
    pub fn go_to(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.total_pages());
    }

    pub fn next(&mut self) {
        self.go_to(self.current_page.saturating_add(1));
    }

    pub fn previous(&mut self) {
        self.go_to(self.current_page.saturating_sub(1));
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Index range of the current page within the full sequence.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 5), 5);
    }

    #[test]
    fn test_last_page_is_partial() {
        let items: Vec<usize> = (0..23).collect();
        assert_eq!(paginate(&items, 5, 5), &[20, 21, 22]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<usize> = (0..23).collect();
        assert!(paginate(&items, 6, 5).is_empty());
        assert!(paginate(&items, 0, 5).is_empty());
        assert!(paginate(&items, 1, 0).is_empty());
        assert!(paginate(&items, usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<u8> = Vec::new();
        assert!(paginate(&items, 1, 10).is_empty());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(3, 0), 1);
    }

    #[test]
    fn test_set_total_items_clamps_current_page() {
        let mut state = PageState::new(5);
        state.set_total_items(23);
        state.go_to(5);
        assert_eq!(state.current_page(), 5);
        state.set_total_items(7);
        assert_eq!(state.current_page(), 2);
        state.set_total_items(0);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_navigation_stays_in_range() {
        let mut state = PageState::new(5);
        state.set_total_items(12);
        state.previous();
        assert_eq!(state.current_page(), 1);
        state.next();
        state.next();
        state.next();
        assert_eq!(state.current_page(), 3);
        assert!(!state.has_next());
        assert!(state.has_previous());
    }

    #[test]
    fn test_page_size_change_resets() {
        let mut state = PageState::new(5);
        state.set_total_items(30);
        state.go_to(4);
        state.set_page_size(10);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 3);
        state.set_page_size(0);
        assert_eq!(state.page_size(), 10);
    }

    #[test]
    fn test_visible_range() {
        let mut state = PageState::new(5);
        state.set_total_items(23);
        state.go_to(5);
        assert_eq!(state.visible_range(), 20..23);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: concatenating every page rebuilds the sequence exactly.
        #[test]
        fn pages_reconstruct_sequence(len in 0usize..200, page_size in 1usize..30) {
            let items: Vec<usize> = (0..len).collect();
            let pages = total_pages(len, page_size);
            let rebuilt: Vec<usize> = (1..=pages)
                .flat_map(|page| paginate(&items, page, page_size).iter().copied())
                .collect();
            prop_assert_eq!(rebuilt, items);
        }

        /// Property: no page within range is empty when items exist.
        #[test]
        fn in_range_pages_are_non_empty(len in 1usize..200, page_size in 1usize..30) {
            let items: Vec<usize> = (0..len).collect();
            for page in 1..=total_pages(len, page_size) {
                prop_assert!(!paginate(&items, page, page_size).is_empty());
            }
        }

        /// Property: the current page is always within bounds.
        #[test]
        fn current_page_always_valid(
            total in 0usize..500,
            page_size in 1usize..50,
            target in 0usize..100
        ) {
            let mut state = PageState::new(page_size);
            state.set_total_items(total);
            state.go_to(target);
            prop_assert!(state.current_page() >= 1);
            prop_assert!(state.current_page() <= state.total_pages());
        }
    }
}
