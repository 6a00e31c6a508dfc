//! List view model: query, filters, sort and pagination in one value.
//!
//! [`ListView`] owns a collection and keeps the visible sequence cached as
//! indices into it. Every mutation that can change which items are visible or
//! their order returns the view to page 1; only collection replacement clamps
//! the current page instead.

use super::fields::Listable;
use super::filter::{FilterState, FilterValue};
use super::page_range::{compute_range, PageToken};
use super::paginate::PageState;
use super::pipeline::{prepare_indices, ListQuery, PageView};
use super::search::SearchQuery;
use super::sort::SortState;

/// Filter, sort and page state for one list, plus the items it applies to.
#[derive(Debug, Clone)]
pub struct ListView<T: Listable> {
    items: Vec<T>,
    query: ListQuery<T>,
    page: PageState,
    /// Visible item indices (into `items`), filtered and sorted
    visible: Vec<usize>,
}

impl<T: Listable> ListView<T> {
    /// Create a view on page 1 with no query, filters or sort.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self::with_query(items, ListQuery::default(), page_size)
    }

    pub fn with_query(items: Vec<T>, query: ListQuery<T>, page_size: usize) -> Self {
        let mut view = Self {
            items,
            query,
            page: PageState::new(page_size),
            visible: Vec::new(),
        };
        view.refresh();
        view
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn query(&self) -> &ListQuery<T> {
        &self.query
    }

    pub fn search(&self) -> &SearchQuery {
        &self.query.search
    }

    pub fn filters(&self) -> &FilterState<T::Field> {
        &self.query.filters
    }

    pub fn sort(&self) -> Option<&SortState<T::Field>> {
        self.query.sort.as_ref()
    }

    pub fn page_state(&self) -> &PageState {
        &self.page
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages()
    }

    /// Number of items passing the query and filters.
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Every visible item in display order.
    pub fn visible_items(&self) -> impl Iterator<Item = &T> {
        self.visible.iter().filter_map(|&idx| self.items.get(idx))
    }

    // ------------------------------------------------------------------
    // Query changes (all return to page 1)
    // ------------------------------------------------------------------

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query.search = SearchQuery::new(query);
        self.refresh_from_first_page();
    }

    pub fn set_search_fields(&mut self, fields: Vec<T::Field>) {
        if !fields.is_empty() {
            self.query.search_fields = fields;
        }
        self.refresh_from_first_page();
    }

    pub fn set_filter(&mut self, field: T::Field, value: FilterValue) {
        self.query.filters.set(field, value);
        self.refresh_from_first_page();
    }

    pub fn remove_filter(&mut self, field: T::Field) {
        self.query.filters.remove(field);
        self.refresh_from_first_page();
    }

    pub fn clear_filters(&mut self) {
        self.query.filters.clear();
        self.refresh_from_first_page();
    }

    pub fn set_sort(&mut self, sort: SortState<T::Field>) {
        self.query.sort = Some(sort);
        self.refresh_from_first_page();
    }

    /// Sort by `field`, flipping direction if it is already the sort field.
    pub fn toggle_sort(&mut self, field: T::Field) {
        match self.query.sort.as_mut() {
            Some(sort) => sort.toggle(field),
            None => self.query.sort = Some(SortState::new(field)),
        }
        self.refresh_from_first_page();
    }

    pub fn clear_sort(&mut self) {
        self.query.sort = None;
        self.refresh_from_first_page();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page.set_page_size(page_size);
    }

    // ------------------------------------------------------------------
    // Collection changes (page is clamped, not reset)
    // ------------------------------------------------------------------

    /// Swap in a freshly fetched collection, keeping query, sort and page.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.refresh();
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn next_page(&mut self) {
        self.page.next();
    }

    pub fn prev_page(&mut self) {
        self.page.previous();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page.go_to(page);
    }

    /// Pagination strip for the current page.
    pub fn page_range(&self) -> Vec<PageToken> {
        compute_range(self.page.current_page(), self.page.total_pages())
    }

    /// Items and navigation for the current page.
    pub fn current_page_view(&self) -> PageView<'_, T> {
        let items = self.visible[self.page.visible_range()]
            .iter()
            .filter_map(|&idx| self.items.get(idx))
            .collect();

        PageView {
            items,
            current_page: self.page.current_page(),
            total_pages: self.page.total_pages(),
            total_items: self.page.total_items(),
            page_size: self.page.page_size(),
            range: self.page_range(),
        }
    }

    // ------------------------------------------------------------------
    // Recompute
    // ------------------------------------------------------------------

    fn refresh_from_first_page(&mut self) {
        self.page.reset();
        self.refresh();
    }

    /// Recompute visible indices from the current query.
    fn refresh(&mut self) {
        let _span = tracing::debug_span!("list_refresh", items = self.items.len()).entered();

        self.visible = prepare_indices(&self.items, &self.query);
        self.page.set_total_items(self.visible.len());

        log::debug!(
            "List refreshed: {} of {} items visible, page {}/{}",
            self.visible.len(),
            self.items.len(),
            self.page.current_page(),
            self.page.total_pages()
        );
    }
}
